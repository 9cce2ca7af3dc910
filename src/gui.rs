// src/gui.rs
use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints};
use std::sync::mpsc::Receiver;

use crate::config;
use crate::meter::PlotFrame;
use crate::types::MeterMessage;

const VALUE_COLOR: Color32 = Color32::from_rgb(0x90, 0xee, 0x90);
const FIELD_SIZE: f32 = 24.0;

pub struct MeterApp {
    rx: Receiver<MeterMessage>,
    show_plot: bool,

    // Display fields, refreshed every cycle.
    mode: String,
    range: String,
    measurement: String,
    plot: Option<PlotFrame>,
}

impl MeterApp {
    pub fn new(rx: Receiver<MeterMessage>, show_plot: bool) -> Self {
        Self {
            rx,
            show_plot,
            mode: "-".to_owned(),
            range: "-".to_owned(),
            measurement: "-".to_owned(),
            plot: None,
        }
    }

    fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.label(RichText::new(label).size(FIELD_SIZE).strong());
        ui.label(
            RichText::new(value)
                .size(FIELD_SIZE)
                .strong()
                .color(VALUE_COLOR),
        );
        ui.end_row();
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                MeterMessage::Reading {
                    mode,
                    range,
                    measurement,
                } => {
                    self.mode = mode;
                    self.range = range;
                    self.measurement = measurement;
                }
                MeterMessage::Plot(frame) => self.plot = Some(frame),
                MeterMessage::PollError(text) => {
                    self.mode = "Erreur".to_owned();
                    self.range = "--".to_owned();
                    self.measurement = text;
                }
            }
        }
    }
}

impl eframe::App for MeterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();

        ctx.set_visuals(egui::Visuals::dark());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("MULTIMÈTRE").size(FIELD_SIZE).strong());
            });
            ui.separator();

            egui::Grid::new("meter-fields")
                .num_columns(2)
                .spacing([10.0, 2.0])
                .show(ui, |ui| {
                    Self::field_row(ui, "Mode :", &self.mode);
                    Self::field_row(ui, "Plage :", &self.range);
                    Self::field_row(ui, "Mesure :", &self.measurement);
                });

            if self.show_plot {
                ui.separator();
                if let Some(frame) = &self.plot {
                    let caption = if frame.unit.is_empty() {
                        frame.caption.clone()
                    } else {
                        format!("{} ({})", frame.caption, frame.unit)
                    };
                    ui.label(caption);
                    Plot::new("history")
                        .height(220.0)
                        .allow_drag(false)
                        .allow_zoom(false)
                        .allow_scroll(false)
                        .include_x(frame.x_range.0)
                        .include_x(frame.x_range.1)
                        .include_y(frame.y_range.0)
                        .include_y(frame.y_range.1)
                        .show(ui, |plot_ui| {
                            plot_ui.line(
                                Line::new(PlotPoints::new(frame.points.clone()))
                                    .color(VALUE_COLOR),
                            );
                        });
                } else {
                    ui.label("En attente de mesures...");
                }
            }
        });

        // New readings arrive every poll interval; wake up a bit more often.
        ctx.request_repaint_after(config::POLL_INTERVAL / 2);
    }
}
