// PINTVIZ: Post-Processing and Plotting of pInt Generation Overhead Measurements
// Copyright (C) 2024-2025 The pintviz developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! The streaming time-bucket averager turning a raw delay trace into one
//! mean data point per window of simulated time.
use std::path::Path;

use crate::{
    records::{self, AveragedPoint, DelaySample},
    NANOS_PER_MSEC, NANOS_PER_SEC, WINDOW_SECS,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Bucketing and scaling parameters of the averager.
pub struct WindowConfig {
    /// Width of one window in nanoseconds of simulated time.
    pub step: u64,
    /// X-axis units per window. The default plots the window start in
    /// simulated seconds.
    pub display_scale: f64,
    /// Divisor applied to the window mean. The default converts the
    /// nanosecond delays of the traces to milliseconds.
    pub unit_divisor: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            step: WINDOW_SECS * NANOS_PER_SEC,
            display_scale: WINDOW_SECS as f64,
            unit_divisor: NANOS_PER_MSEC,
        }
    }
}

#[derive(Debug)]
/// Accumulator for the window starting at `tick`, covering
/// `[tick, tick + step)` in simulated time.
///
/// Windows advance monotonically from `tick = 0` in constant steps. A window
/// is flushed by the first sample lying beyond its end; the check happens
/// once per sample, and the sample is accumulated afterwards either way. A
/// window without any samples flushes as mean `0.0` rather than being
/// skipped, and the partial window still accumulating when the trace ends is
/// dropped. Both quirks are kept to reproduce the previously published
/// charts exactly.
pub struct WindowAverager {
    config: WindowConfig,
    tick: u64,
    count: usize,
    sum: f64,
}

impl WindowAverager {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            tick: 0,
            count: 0,
            sum: 0.0,
        }
    }

    /// Feed one sample, assuming samples arrive sorted ascending by
    /// timestamp. Returns the flushed window if this sample closed one.
    pub fn push(&mut self, sample: DelaySample) -> Option<AveragedPoint> {
        let flushed = (sample.timestamp > self.tick + self.config.step).then(|| self.flush());
        self.sum += sample.value;
        self.count += 1;
        flushed
    }

    fn flush(&mut self) -> AveragedPoint {
        let time = (self.tick / self.config.step) as f64 * self.config.display_scale;
        let delay = if self.count == 0 {
            0.0
        } else {
            (self.sum / self.count as f64) / self.config.unit_divisor
        };
        self.sum = 0.0;
        self.count = 0;
        self.tick += self.config.step;
        AveragedPoint { time, delay }
    }
}

/// Average an in-memory sequence of samples. The trailing partial window is
/// never flushed.
pub fn average_samples(
    samples: impl IntoIterator<Item = DelaySample>,
    config: &WindowConfig,
) -> Vec<AveragedPoint> {
    let mut averager = WindowAverager::new(*config);
    samples
        .into_iter()
        .filter_map(|sample| averager.push(sample))
        .collect()
}

/// Average a trace file in one pass. A missing file or a row that does not
/// decode as `(u64, f64)` aborts the whole series.
pub fn average_file(
    path: impl AsRef<Path>,
    config: &WindowConfig,
) -> Result<Vec<AveragedPoint>, Error> {
    let mut reader = records::trace_reader(path.as_ref())?;
    let mut averager = WindowAverager::new(*config);
    let mut points = Vec::new();
    for sample in reader.deserialize() {
        let sample: DelaySample = sample?;
        if let Some(point) = averager.push(sample) {
            points.push(point);
        }
    }
    Ok(points)
}
