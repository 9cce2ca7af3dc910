use std::collections::VecDeque;

/// One measurement, timestamped relative to the last mode/range change.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    /// Seconds since the window's origin.
    pub elapsed: f64,
    pub value: f64,
}

/// Ready-to-draw snapshot of the window with padded axis bounds.
#[derive(Clone, Debug)]
pub struct PlotFrame {
    pub points: Vec<[f64; 2]>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub caption: String,
    pub unit: String,
}

/// Rolling buffer that keeps the most recent stretch of samples.
pub struct SampleWindow {
    data: VecDeque<Sample>,
    window_secs: f64,
}

impl SampleWindow {
    pub fn new(window_secs: f64) -> Self {
        Self {
            data: VecDeque::new(),
            window_secs,
        }
    }

    /// Appends a sample and drops entries that fell out of the window.
    pub fn push(&mut self, sample: Sample) {
        self.data.push_back(sample);
        self.prune(sample.elapsed);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.data.iter()
    }

    /// Smallest and largest value currently held, or None when empty.
    pub fn value_extrema(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter();
        let first = iter.next()?;
        let mut min = first.value;
        let mut max = first.value;
        for sample in iter {
            min = min.min(sample.value);
            max = max.max(sample.value);
        }
        Some((min, max))
    }

    fn prune(&mut self, newest: f64) {
        let threshold = newest - self.window_secs;
        while let Some(front) = self.data.front() {
            if front.elapsed < threshold {
                self.data.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with(times: &[f64]) -> SampleWindow {
        let mut window = SampleWindow::new(60.0);
        for &t in times {
            window.push(Sample {
                elapsed: t,
                value: t,
            });
        }
        window
    }

    #[test]
    fn evicts_samples_older_than_the_window() {
        let window = window_with(&[0.0, 10.0, 30.0, 61.0, 70.0]);
        let kept: Vec<f64> = window.iter().map(|s| s.elapsed).collect();
        assert_eq!(kept, vec![10.0, 30.0, 61.0, 70.0]);
    }

    #[test]
    fn sample_exactly_at_the_window_edge_survives() {
        let window = window_with(&[0.0, 60.0]);
        assert_eq!(window.len(), 2);
        let window = window_with(&[0.0, 60.1]);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn extrema_track_values_not_timestamps() {
        let mut window = SampleWindow::new(60.0);
        for (t, v) in [(0.0, 3.5), (1.0, -1.25), (2.0, 0.0)] {
            window.push(Sample {
                elapsed: t,
                value: v,
            });
        }
        assert_eq!(window.value_extrema(), Some((-1.25, 3.5)));
        window.clear();
        assert!(window.value_extrema().is_none());
        assert!(window.is_empty());
    }
}
