// src/config.rs
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(200);
/// Fixed poll cadence; the meter settles well within this.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Debug)]
pub struct Config {
    pub port: String,
    pub baud_rate: u32,
    pub read_timeout: Duration,
    /// Show the rolling 60-second history plot.
    pub graph: bool,
    /// Print the detected serial ports and exit.
    pub list_ports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: DEFAULT_READ_TIMEOUT,
            graph: false,
            list_ports: false,
        }
    }
}

impl Config {
    /// Defaults, then environment, then command-line flags; flags win.
    pub fn load() -> Self {
        let mut cfg = Self::default();
        if let Ok(port) = env::var("PORT") {
            cfg.port = port;
        }
        if let Ok(baud) = env::var("BAUDRATE") {
            match baud.parse() {
                Ok(baud) => cfg.baud_rate = baud,
                Err(_) => log::warn!("ignoring invalid BAUDRATE {baud:?}"),
            }
        }
        if let Ok(timeout) = env::var("TIMEOUT") {
            match timeout.parse::<f64>() {
                Ok(secs) if secs > 0.0 => cfg.read_timeout = Duration::from_secs_f64(secs),
                _ => log::warn!("ignoring invalid TIMEOUT {timeout:?}"),
            }
        }
        if let Ok(graph) = env::var("GRAPH") {
            cfg.graph = truthy(&graph);
        }
        cfg.apply_args(env::args().skip(1));
        cfg
    }

    fn apply_args(&mut self, args: impl Iterator<Item = String>) {
        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--port" => {
                    if let Some(path) = args.next() {
                        self.port = path;
                    }
                }
                "--graph" => self.graph = true,
                "--list-ports" => self.list_ports = true,
                other => log::warn!("ignoring unknown argument {other:?}"),
            }
        }
    }
}

fn truthy(raw: &str) -> bool {
    matches!(raw.to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let mut cfg = Config::default();
        cfg.apply_args(
            ["--port", "/dev/ttyACM1", "--graph"]
                .map(String::from)
                .into_iter(),
        );
        assert_eq!(cfg.port, "/dev/ttyACM1");
        assert!(cfg.graph);
        assert!(!cfg.list_ports);
    }

    #[test]
    fn unknown_arguments_change_nothing() {
        let mut cfg = Config::default();
        cfg.apply_args(["--frobnicate"].map(String::from).into_iter());
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(!cfg.graph);
    }

    #[test]
    fn truthy_accepts_the_usual_spellings() {
        assert!(truthy("true"));
        assert!(truthy("TRUE"));
        assert!(truthy("1"));
        assert!(truthy("Yes"));
        assert!(!truthy("no"));
        assert!(!truthy("0"));
        assert!(!truthy(""));
    }
}
