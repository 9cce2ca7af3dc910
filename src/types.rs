// src/types.rs
use crate::meter::PlotFrame;

/// Messages the engine posts to the GUI thread.
#[derive(Clone, Debug)]
pub enum MeterMessage {
    /// A completed poll cycle.
    Reading {
        mode: String,
        range: String,
        measurement: String,
    },
    /// Rolling-history snapshot for the plot.
    Plot(PlotFrame),
    /// A poll cycle failed; the text goes into the measurement field.
    PollError(String),
}

/// Commands the GUI side sends back to the engine.
#[derive(Clone, Copy, Debug)]
pub enum GuiCommand {
    Shutdown,
}
