use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};
use std::thread;
use std::time::Duration;

use serialport::SerialPort;

use crate::meter::MeterError;

/// Fixed settle delay between writing a query and reading the reply.
/// The XDM1041 has no handshake; it just needs a moment to answer.
const SETTLE_DELAY: Duration = Duration::from_millis(50);
/// Longest reply the meter produces for the queries we issue.
const MAX_REPLY_BYTES: usize = 128;

/// Trait representing something that can answer SCPI queries.
pub trait ScpiLink {
    fn send(&mut self, command: &str) -> Result<String, MeterError>;
}

/// Serial-port backed link to the meter.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
    released: bool,
}

impl SerialLink {
    pub fn open(path: &str, baud_rate: u32, read_timeout: Duration) -> Result<Self, MeterError> {
        let port = serialport::new(path, baud_rate)
            .timeout(read_timeout)
            .open()?;
        Ok(Self {
            port,
            released: false,
        })
    }

    /// Writes a newline-terminated command without reading a reply
    /// (`SYST:REM`, `SYST:LOC` are never acknowledged).
    pub fn write_line(&mut self, command: &str) -> Result<(), MeterError> {
        self.port.write_all(format!("{command}\n").as_bytes())?;
        Ok(())
    }

    /// Hands the meter back to its front panel. Failures are ignored;
    /// the device may already be unplugged.
    pub fn release(&mut self) {
        if !self.released {
            let _ = self.write_line("SYST:LOC");
            self.released = true;
        }
    }
}

impl ScpiLink for SerialLink {
    fn send(&mut self, command: &str) -> Result<String, MeterError> {
        self.write_line(command)?;
        thread::sleep(SETTLE_DELAY);
        let mut buf = [0u8; MAX_REPLY_BYTES];
        let read = match self.port.read(&mut buf) {
            Ok(n) => n,
            // A silent meter is an empty reply, not a failure.
            Err(e) if e.kind() == ErrorKind::TimedOut => 0,
            Err(e) => return Err(e.into()),
        };
        Ok(String::from_utf8_lossy(&buf[..read]).trim().to_string())
    }
}

impl Drop for SerialLink {
    fn drop(&mut self) {
        self.release();
    }
}

/// Names of the serial ports the OS currently reports.
pub fn available_ports() -> Vec<String> {
    serialport::available_ports()
        .unwrap_or_default()
        .into_iter()
        .map(|p| p.port_name)
        .collect()
}

/// In-memory link useful for tests and deterministic playback.
pub struct ManualLink {
    replies: VecDeque<Result<String, MeterError>>,
    sent: Vec<String>,
}

impl ManualLink {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(|s| Ok(s.into())).collect(),
            sent: Vec::new(),
        }
    }

    pub fn push_reply(&mut self, reply: impl Into<String>) {
        self.replies.push_back(Ok(reply.into()));
    }

    pub fn push_failure(&mut self, error: MeterError) {
        self.replies.push_back(Err(error));
    }

    /// Commands issued so far, oldest first.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }
}

impl ScpiLink for ManualLink {
    fn send(&mut self, command: &str) -> Result<String, MeterError> {
        self.sent.push(command.to_string());
        self.replies
            .pop_front()
            .unwrap_or_else(|| Err(MeterError::ScriptExhausted(command.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_link_replays_in_order_and_records_commands() {
        let mut link = ManualLink::new(["VOLT", "AUTO"]);
        assert_eq!(link.send("FUNC1?").unwrap(), "VOLT");
        assert_eq!(link.send("RANGE?").unwrap(), "AUTO");
        assert!(link.send("MEAS1?").is_err());
        let sent: Vec<&str> = link.sent().iter().map(String::as_str).collect();
        assert_eq!(sent, ["FUNC1?", "RANGE?", "MEAS1?"]);
    }
}
