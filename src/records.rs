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
//! Module defining record data types to (de-)serialize trace rows and
//! averaged data points to CSV.
use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
/// One row of a simulation trace file: the simulated event time in
/// nanoseconds and the delay measured at that event, also in nanoseconds.
pub struct DelaySample {
    pub timestamp: u64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
/// One averaged window: the window start in simulated seconds and the mean
/// delay of the window in milliseconds.
pub struct AveragedPoint {
    pub time: f64,
    pub delay: f64,
}

/// Open a trace file as written by the simulation: tab-separated, two columns
/// per row, no header row. Fields of [`DelaySample`] match by position.
pub fn trace_reader(path: impl AsRef<Path>) -> std::io::Result<csv::Reader<File>> {
    let file = File::open(path.as_ref())?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(file))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_delay_sample() {
        let mut csv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_reader("21528493\t1.51926e+06\n21529493\t1519260\n".as_bytes());
        let de: Vec<DelaySample> = csv.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(
            de,
            vec![
                DelaySample {
                    timestamp: 21528493,
                    value: 1.51926e+06
                },
                DelaySample {
                    timestamp: 21529493,
                    value: 1519260.0
                },
            ]
        );
    }

    #[test]
    fn malformed_row_fails() {
        let mut csv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_reader("not-a-number\t1.0\n".as_bytes());
        let de: Result<Vec<DelaySample>, _> = csv.deserialize().collect();
        assert!(de.is_err());
    }

    #[test]
    fn serialize_averaged_point() {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(vec![]);
        csv.serialize(AveragedPoint {
            time: 20.0,
            delay: 1.519,
        })
        .unwrap();
        csv.flush().unwrap();
        let ser = String::from_utf8(csv.into_inner().unwrap()).unwrap();
        assert_eq!(ser, "time,delay\n20.0,1.519\n".to_string());
    }
}
