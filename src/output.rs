use crate::error::DashboardError;
use crate::view::DashboardView;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

pub const REPORT_JSON: &str = "scheme_report.json";
pub const SUPPLY_CSV: &str = "water_supply_series.csv";

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), DashboardError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DashboardError> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Write the report as JSON, plus the supply series as CSV when the view has one.
/// Returns the files written.
pub fn export_view(view: &DashboardView, dir: &Path) -> Result<Vec<PathBuf>, DashboardError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let json_path = dir.join(REPORT_JSON);
    write_json(&json_path, view)?;
    written.push(json_path);

    if let Some(series) = &view.supply {
        let csv_path = dir.join(SUPPLY_CSV);
        write_csv(&csv_path, &series.export_rows())?;
        written.push(csv_path);
    }
    Ok(written)
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
