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
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use plotly::{
    common::{DashType, Line, Mode},
    layout::{Axis, Layout},
    Plot, Scatter,
};
use serde::Serialize;

use pintviz::{
    experiments::{LineColor, LineStyle, Suite},
    records::AveragedPoint,
    series::{average_file, WindowConfig},
    util::{self, PathBufExt},
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Overwrite the input path for the simulation traces.
    #[arg(short, long, default_value = "./data/")]
    data_path: String,
    /// Overwrite the output path for plots.
    #[arg(short, long, default_value = "./plots/")]
    output_path: String,
    /// Chart to generate.
    #[arg(short, long, value_enum)]
    suite: Suite,
}

#[derive(Clone, Debug, Serialize)]
struct RawDataPoint<'a> {
    series: &'a str,
    time: f64,
    delay: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging();

    let args = Args::parse();
    let plot_dir = PathBuf::from(args.output_path);
    fs::create_dir_all(&plot_dir)?;

    // ensure that the data folder exists
    let data_path = PathBuf::from(args.data_path);
    if !data_path.exists() {
        log::error!("Could not read data in {data_path:?}!");
        process::exit(1)
    }

    render_suite(args.suite, &data_path, &plot_dir)
}

/// Average every trace of the suite and render all of them onto one shared
/// chart, writing the averaged points to a CSV sibling of the HTML output.
///
/// Series are processed one after another in declared order, as the legend
/// and the color/style assignment depend on position. Any missing trace or
/// malformed row aborts the whole suite.
fn render_suite(
    suite: Suite,
    data_path: &Path,
    plot_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = WindowConfig::default();

    let mut plot = Plot::new();
    plot.set_layout(
        Layout::new()
            .x_axis(Axis::new().title("Simulation Time (sec)").show_grid(true))
            .y_axis(
                Axis::new()
                    .title(suite.metric().y_axis_label())
                    .show_grid(true),
            )
            .show_legend(true),
    );

    // raw averaged data next to the chart
    let csv_path = plot_dir.then(format!("{}.csv", suite.output_stem()));
    let mut csv = csv::Writer::from_path(&csv_path)?;

    for spec in suite.series() {
        let trace_path = data_path.then(&spec.file_name);
        log::info!("Processing {trace_path:?}...");
        let points = average_file(&trace_path, &config)?;

        for &AveragedPoint { time, delay } in &points {
            csv.serialize(RawDataPoint {
                series: &spec.label,
                time,
                delay,
            })?;
        }

        let (time, delay): (Vec<f64>, Vec<f64>) =
            points.iter().map(|p| (p.time, p.delay)).unzip();
        let trace = Scatter::new(time, delay)
            .name(&spec.label)
            .mode(Mode::Lines)
            .line(
                Line::new()
                    .color(css_color(spec.color))
                    .dash(dash_type(spec.style)),
            );
        plot.add_trace(trace);
    }
    csv.flush()?;

    let output = plot_dir.then(format!("{}.html", suite.output_stem()));
    log::debug!("Plotting {output:?}");
    plot.write_html(output);

    Ok(())
}

fn css_color(color: LineColor) -> &'static str {
    match color {
        LineColor::Red => "red",
        LineColor::Green => "green",
        LineColor::Blue => "blue",
        LineColor::Black => "black",
    }
}

fn dash_type(style: LineStyle) -> DashType {
    match style {
        LineStyle::Solid => DashType::Solid,
        LineStyle::Dashed => DashType::Dash,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_dfn_latency_suite() {
        let root = std::env::temp_dir().join("pintviz-plot-test");
        let data_path = root.join("data");
        let plot_dir = root.join("plots");
        fs::create_dir_all(&data_path).unwrap();
        fs::create_dir_all(&plot_dir).unwrap();

        // two full windows plus a dropped trailing sample per trace
        for spec in Suite::DfnLatency.series() {
            fs::write(
                data_path.join(&spec.file_name),
                "1000000000\t2000000.0\n\
                 21000000000\t4000000.0\n\
                 41000000000\t1000000.0\n",
            )
            .unwrap();
        }

        render_suite(Suite::DfnLatency, &data_path, &plot_dir)
            .expect("Rendering should pass without errors.");

        assert!(plot_dir
            .join("dfn-pint-generation-overhead-latency.html")
            .exists());

        let csv_path = plot_dir.join("dfn-pint-generation-overhead-latency.csv");
        let mut reader = csv::Reader::from_path(csv_path).unwrap();
        let rows: Vec<(String, f64, f64)> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        // 8 series, 2 flushed windows each
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0], ("No pInt, no cache, Cr = 80".to_string(), 0.0, 2.0));
        assert_eq!(rows[1].1, 20.0);
    }

    #[test]
    fn missing_trace_aborts_suite() {
        let root = std::env::temp_dir().join("pintviz-plot-test-missing");
        let data_path = root.join("data");
        let plot_dir = root.join("plots");
        fs::create_dir_all(&data_path).unwrap();
        fs::create_dir_all(&plot_dir).unwrap();

        assert!(render_suite(Suite::AttDelay, &data_path, &plot_dir).is_err());
    }
}
