// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod engine;
mod gui;
mod meter;
mod types;

use std::sync::mpsc::channel;

use anyhow::{anyhow, Context};
use eframe::egui;

use crate::config::Config;
use crate::meter::SerialLink;
use crate::types::GuiCommand;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = Config::load();

    if cfg.list_ports {
        for name in meter::available_ports() {
            println!("{name}");
        }
        return Ok(());
    }

    let link = SerialLink::open(&cfg.port, cfg.baud_rate, cfg.read_timeout)
        .with_context(|| format!("failed to open serial port {}", cfg.port))?;
    log::info!("connected to {} at {} baud", cfg.port, cfg.baud_rate);

    let (tx, rx) = channel();
    let (tx_cmd, rx_cmd) = channel();
    let worker = engine::spawn(link, tx, rx_cmd);

    let height = if cfg.graph { 395.0 } else { 125.0 };
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([400.0, height])
        .with_resizable(false)
        .with_title("XDM1041 - Multimètre");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let show_plot = cfg.graph;
    let result = eframe::run_native(
        "dmmview",
        options,
        Box::new(move |_cc| Box::new(gui::MeterApp::new(rx, show_plot))),
    );

    // The meter goes back to local control whether or not the GUI exited
    // cleanly; the engine ignores failures on the way out.
    tx_cmd.send(GuiCommand::Shutdown).ok();
    worker.join().ok();

    result.map_err(|e| anyhow!("gui error: {e}"))
}
