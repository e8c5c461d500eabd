//! Writers for finished runs.

use std::io::{self, Write};

use serde::Serialize;

use crate::{Comparison, Trajectory};

/// Writes any serializable result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)
}

/// Writes a trajectory as CSV with a `step,time,magnitude,phase` header.
///
/// Step numbers start at one, matching the trajectory's entries.
///
/// # Errors
///
/// Returns an error if the underlying write fails.
pub fn write_csv<W: Write>(mut writer: W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "step,time,magnitude,phase")?;
    write_rows(&mut writer, None, trajectory)
}

/// Writes both runs of a comparison as a single CSV table.
///
/// The header is `scenario,step,time,magnitude,phase`; baseline rows come
/// first. Scenario names are quoted when they contain a comma, a quote, or a
/// line break.
///
/// # Errors
///
/// Returns an error if the underlying write fails.
pub fn write_comparison_csv<W: Write>(mut writer: W, comparison: &Comparison) -> io::Result<()> {
    writeln!(writer, "scenario,step,time,magnitude,phase")?;
    for run in [&comparison.baseline, &comparison.alternative] {
        let name = csv_field(&run.scenario.name);
        write_rows(&mut writer, Some(&name), &run.trajectory)?;
    }
    Ok(())
}

fn write_rows<W: Write>(
    writer: &mut W,
    scenario: Option<&str>,
    trajectory: &Trajectory,
) -> io::Result<()> {
    for (i, (time, state)) in trajectory.times().zip(trajectory).enumerate() {
        if let Some(name) = scenario {
            write!(writer, "{name},")?;
        }
        writeln!(
            writer,
            "{},{},{},{}",
            i + 1,
            time,
            state.magnitude(),
            state.phase()
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
