use crate::meter::format;
use crate::meter::transport::ScpiLink;
use crate::meter::window::{PlotFrame, Sample, SampleWindow};
use crate::meter::MeterError;

/// Seconds of history the rolling plot keeps.
pub const HISTORY_SECS: f64 = 60.0;

/// Last values seen on the wire, used to detect mode/range switches.
#[derive(Default)]
struct DeviceState {
    mode: String,
    range: String,
    unit: &'static str,
}

/// Everything one poll cycle produces for the presentation layer.
#[derive(Clone, Debug)]
pub struct PollUpdate {
    pub mode_label: String,
    pub range: String,
    pub measurement: String,
    pub plot: Option<PlotFrame>,
}

/// Drives the three-query SCPI cycle and maintains the rolling history.
pub struct Sampler<L: ScpiLink> {
    link: L,
    state: DeviceState,
    window: SampleWindow,
    /// Clock reading (seconds) when the current mode/range was first seen.
    origin: f64,
}

impl<L: ScpiLink> Sampler<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            state: DeviceState::default(),
            window: SampleWindow::new(HISTORY_SECS),
            origin: 0.0,
        }
    }

    /// One poll cycle. `now` is seconds on the caller's monotonic clock.
    pub fn poll(&mut self, now: f64) -> Result<PollUpdate, MeterError> {
        // The mode reply is quoted on some firmware revisions.
        let mode = self.link.send("FUNC1?")?.trim_matches('"').to_string();
        let range = self.link.send("RANGE?")?;
        let raw = self.link.send("MEAS1?")?;

        let mode_label = format::mode_label(&mode);
        let unit = format::mode_unit(&mode);
        let measurement = format::format_measurement(&raw, unit);

        if mode != self.state.mode || range != self.state.range {
            self.window.clear();
            self.origin = now;
            self.state = DeviceState {
                mode,
                range: range.clone(),
                unit,
            };
        }

        if let Some(value) = format::extract_numeric(&raw) {
            self.window.push(Sample {
                elapsed: now - self.origin,
                value,
            });
        }

        let plot = self.plot_frame(now - self.origin, &mode_label);

        Ok(PollUpdate {
            mode_label,
            range,
            measurement,
            plot,
        })
    }

    fn plot_frame(&self, elapsed: f64, caption: &str) -> Option<PlotFrame> {
        let (min, max) = self.window.value_extrema()?;
        // Pad the value span so a flat trace still gets a visible axis.
        let margin = (0.05 * (max - min)).max(0.01);
        let points = self.window.iter().map(|s| [s.elapsed, s.value]).collect();
        Some(PlotFrame {
            points,
            x_range: ((elapsed - HISTORY_SECS).max(0.0), elapsed),
            y_range: (min - margin, max + margin),
            caption: caption.to_string(),
            unit: self.state.unit.to_string(),
        })
    }
}
