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
//! Library for post-processing pInt simulation traces into comparative delay
//! charts.
//!
//! The simulation writes one tab-separated trace file per scenario, each row
//! holding an event time in nanoseconds of simulated time and a measured
//! delay in nanoseconds. This crate buckets those samples into fixed-width
//! windows of simulated time, averages each window, and renders all scenarios
//! of an experiment suite onto one shared chart.

/// Simulated seconds covered by one averaging window.
pub const WINDOW_SECS: u64 = 20;

/// Nanoseconds per simulated second, the time unit of the trace files.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Nanoseconds per millisecond, used to scale window means for display.
pub const NANOS_PER_MSEC: f64 = 1_000_000.0;

pub mod experiments;
pub mod records;
pub mod series;
pub mod util;

pub mod prelude {
    pub use super::{
        experiments::{SeriesSpec, Suite},
        records::{AveragedPoint, DelaySample},
        series::{average_file, average_samples, Error, WindowAverager, WindowConfig},
    };
}
