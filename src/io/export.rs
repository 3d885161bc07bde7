//! CSV export of the dashboard chart table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::ConsumptionModel;

/// Exports the chart table to a CSV file at the given path.
///
/// Writes a header row (`day`, one column per outlet label, `house_total`)
/// followed by one row per history day carrying each outlet's displayed
/// (state-gated) value and the house daily total. Produces deterministic
/// output for identical model state.
///
/// # Arguments
///
/// * `model` - The consumption model to export
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(model: &ConsumptionModel, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(model, buf)
}

/// Writes the chart table as CSV to any writer.
///
/// # Arguments
///
/// * `model` - The consumption model to export
/// * `writer` - Destination implementing `Write`
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(model: &ConsumptionModel, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header: day, one column per outlet, house total
    let mut header = vec!["day".to_string()];
    header.extend(model.outlets().iter().map(|o| o.label.clone()));
    header.push("house_total".to_string());
    wtr.write_record(&header)?;

    let columns: Vec<Vec<f64>> = (0..model.outlet_count())
        .map(|index| {
            model
                .displayed_series(index)
                .unwrap_or_else(|_| vec![0.0; model.days()])
        })
        .collect();
    let totals = model.daily_totals();

    // One data row per history day
    for (day, label) in model.day_labels().iter().enumerate() {
        let mut row = vec![label.clone()];
        row.extend(columns.iter().map(|series| format!("{:.2}", series[day])));
        row.push(format!("{:.2}", totals[day]));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
