//! CSV export of sweep results.
//!
//! Booleans are written as `True`/`False` and per-worm lists as quoted
//! `"[a, b, c]"` cells, which is what the downstream plotting scripts read.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use wormforage_data::{FrequencyRow, SummaryRow, SweepParameter};

use crate::error::{IoError, Result};

/// Output paths for one named experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentFiles {
    pub summary: PathBuf,
    pub frequencies: PathBuf,
    pub manifest: PathBuf,
}

impl ExperimentFiles {
    /// Resolves `<dir>/<name>.csv`, `<dir>/<name>_frequencies.csv` and
    /// `<dir>/<name>.json`, creating `dir` if needed.
    pub fn prepare<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(IoError::validation("experiment name must not be empty"));
        }
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            IoError::from(e).with_context(format!("creating {}", dir.display()))
        })?;
        Ok(Self {
            summary: dir.join(format!("{name}.csv")),
            frequencies: dir.join(format!("{name}_frequencies.csv")),
            manifest: dir.join(format!("{name}.json")),
        })
    }
}

fn py_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn list_cell<T: Display>(values: &[T]) -> String {
    let inner: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("\"[{}]\"", inner.join(", "))
}

/// Writes one row per condition and parameter value.
pub fn write_summary_csv<P: AsRef<Path>>(
    rows: &[SummaryRow],
    parameter: SweepParameter,
    path: P,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(path.as_ref())?);
    writeln!(
        file,
        "Social,Strain specific,{},Mean time,Standard deviation",
        parameter.label()
    )?;
    for row in rows {
        writeln!(
            file,
            "{},{},{},{},{}",
            py_bool(row.social),
            py_bool(row.strain_specific),
            row.parameter,
            row.mean_steps,
            row.std_dev
        )?;
    }
    file.flush()?;
    tracing::info!(path = %path.as_ref().display(), rows = rows.len(), "Summary written");
    Ok(())
}

/// Writes the per-worm distributions behind each summary row.
pub fn write_frequencies_csv<P: AsRef<Path>>(
    rows: &[FrequencyRow],
    parameter: SweepParameter,
    path: P,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(path.as_ref())?);
    writeln!(
        file,
        "{},Social,Sense Frequency,Food consumption",
        parameter.label()
    )?;
    for row in rows {
        writeln!(
            file,
            "{},{},{},{}",
            row.parameter,
            py_bool(row.social),
            list_cell(&row.sense_frequency),
            list_cell(&row.food_consumption)
        )?;
    }
    file.flush()?;
    tracing::info!(path = %path.as_ref().display(), rows = rows.len(), "Frequencies written");
    Ok(())
}
