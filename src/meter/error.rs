use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeterError {
    #[error("serial port unavailable: {0}")]
    Port(#[from] serialport::Error),
    #[error("serial I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("no scripted reply left for {0:?}")]
    ScriptExhausted(String),
}
