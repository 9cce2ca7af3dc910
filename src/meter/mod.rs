// src/meter/mod.rs
pub mod error;
pub mod format;
pub mod sampler;
pub mod transport;
pub mod window;

pub use error::MeterError;
pub use sampler::{PollUpdate, Sampler};
pub use transport::{available_ports, ManualLink, ScpiLink, SerialLink};
pub use window::{PlotFrame, Sample, SampleWindow};
