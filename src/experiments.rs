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
//! Experiment suites: which simulation traces are compared on one chart, and
//! how each series is named and styled.
//!
//! The simulation runs one scenario per combination of topology, consumer
//! interest rate `Cr`, and consumer mode, and names the trace file after that
//! combination. A suite collects the scenarios of one published figure.
//! Series order is significant: colors, line styles, and legend entries are
//! assigned by position.
use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
/// Topologies the scenarios were simulated on.
pub enum Topology {
    /// The AT&T ISP topology.
    #[strum(serialize = "att")]
    Att,
    /// The Deutsches Forschungsnetz topology.
    #[strum(serialize = "dfn")]
    Dfn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
/// Quantity recorded in the trace files of a suite.
pub enum Metric {
    /// Per-router pInt generation and forwarding delay.
    #[strum(serialize = "delay")]
    Delay,
    /// Round-trip latency observed at the consumers.
    #[strum(serialize = "latency")]
    Latency,
}

impl Metric {
    pub fn y_axis_label(&self) -> &'static str {
        match self {
            Metric::Delay => "Routers Pint Generation and Forwarding Delay (msec)",
            Metric::Latency => "Consumer Round-Trip Latency (msec)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
/// Consumer application variants of the simulation. The serialized form is
/// the token appearing in the trace file names.
pub enum ConsumerMode {
    #[strum(serialize = "NOPINT-CACHE")]
    NoPintCache,
    #[strum(serialize = "PINT-CACHE")]
    PintCache,
    #[strum(serialize = "NOPINT-NOCACHE")]
    NoPintNoCache,
    #[strum(serialize = "NOPINTENCR")]
    NoPintEncrypted,
}

impl ConsumerMode {
    /// Human-readable name used in the chart legend.
    pub fn legend_name(&self) -> &'static str {
        match self {
            ConsumerMode::NoPintCache => "No pInt",
            ConsumerMode::PintCache => "pInt",
            ConsumerMode::NoPintNoCache => "No pInt, no cache",
            ConsumerMode::NoPintEncrypted => "No pInt, encrypted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Red,
    Green,
    Blue,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
/// One line on the chart: the trace file it is computed from, its legend
/// label, and its style.
pub struct SeriesSpec {
    pub file_name: String,
    pub label: String,
    pub color: LineColor,
    pub style: LineStyle,
}

impl SeriesSpec {
    fn new(
        topo: Topology,
        metric: Metric,
        rate: u32,
        mode: ConsumerMode,
        color: LineColor,
        style: LineStyle,
    ) -> Self {
        Self {
            file_name: format!("{topo}-pint-generation-overhead-{metric}-Cr{rate}-{mode}"),
            label: format!("{}, Cr = {rate}", mode.legend_name()),
            color,
            style,
        }
    }
}

/// One color per consumer rate, in rate order.
const RATE_COLORS: [LineColor; 4] = [
    LineColor::Red,
    LineColor::Green,
    LineColor::Blue,
    LineColor::Black,
];

/// Build the series of one suite: both consumer modes per rate, the second
/// mode dashed, colors assigned per rate.
fn suite_series(
    topo: Topology,
    metric: Metric,
    rates: [u32; 4],
    modes: [ConsumerMode; 2],
) -> Vec<SeriesSpec> {
    rates
        .into_iter()
        .zip(RATE_COLORS)
        .flat_map(|(rate, color)| {
            modes
                .into_iter()
                .zip([LineStyle::Solid, LineStyle::Dashed])
                .map(move |(mode, style)| SeriesSpec::new(topo, metric, rate, mode, color, style))
        })
        .collect_vec()
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
/// The comparison charts that can be generated, one per published figure.
pub enum Suite {
    /// Generation/forwarding delay overhead of pInt on the AT&T topology,
    /// with caching, for Cr in {160, 320, 640, 1280}.
    #[default]
    AttDelay,
    /// Generation/forwarding delay overhead of pInt on the DFN topology,
    /// with caching, for Cr in {80, 160, 320, 640}.
    DfnDelay,
    /// Consumer latency on the DFN topology without pInt, comparing uncached
    /// and encrypted consumers, for Cr in {80, 160, 320, 640}.
    DfnLatency,
}

impl Suite {
    pub fn topology(&self) -> Topology {
        match self {
            Suite::AttDelay => Topology::Att,
            Suite::DfnDelay | Suite::DfnLatency => Topology::Dfn,
        }
    }

    pub fn metric(&self) -> Metric {
        match self {
            Suite::AttDelay | Suite::DfnDelay => Metric::Delay,
            Suite::DfnLatency => Metric::Latency,
        }
    }

    /// File stem of the rendered chart and its raw-data CSV export.
    pub fn output_stem(&self) -> String {
        format!("{}-pint-generation-overhead-{}", self.topology(), self.metric())
    }

    /// The series of this suite, in legend order.
    pub fn series(&self) -> Vec<SeriesSpec> {
        match self {
            Suite::AttDelay => suite_series(
                Topology::Att,
                Metric::Delay,
                [160, 320, 640, 1280],
                [ConsumerMode::NoPintCache, ConsumerMode::PintCache],
            ),
            Suite::DfnDelay => suite_series(
                Topology::Dfn,
                Metric::Delay,
                [80, 160, 320, 640],
                [ConsumerMode::NoPintCache, ConsumerMode::PintCache],
            ),
            Suite::DfnLatency => suite_series(
                Topology::Dfn,
                Metric::Latency,
                [80, 160, 320, 640],
                [ConsumerMode::NoPintNoCache, ConsumerMode::NoPintEncrypted],
            ),
        }
    }
}
