use crate::config::DataPaths;
use crate::error::DashboardError;
use crate::types::{
    Answer, ComplaintRecord, RawComplaintRow, RawSchemeRow, RawSupplyRow, SchemeRecord,
    SupplyDate, SupplyObservation, Tables,
};
use crate::util::{number_or_zero, parse_date_safe, parse_flag, text_or_empty, volume_or_zero};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub parse_errors: usize,
    pub skipped_rows: usize,
}

/// Per-table outcome of [`load_tables`]. `None` means the table could not be read.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub schemes: Option<LoadReport>,
    pub supply: Option<LoadReport>,
    pub complaints: Option<LoadReport>,
}

/// Read every row of `path` as `R` and clean it with `clean`.
///
/// Rows that fail to deserialize count as parse errors; rows that `clean`
/// rejects count as skipped. Neither aborts the load.
fn read_rows<R, T>(
    path: &Path,
    clean: impl Fn(R) -> Option<T>,
) -> Result<(Vec<T>, LoadReport), DashboardError>
where
    R: DeserializeOwned,
{
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)?;
    let mut report = LoadReport::default();
    let mut out = Vec::new();

    for result in rdr.deserialize::<R>() {
        report.total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping malformed row");
                report.parse_errors += 1;
                continue;
            }
        };
        match clean(row) {
            Some(record) => out.push(record),
            None => report.skipped_rows += 1,
        }
    }

    report.loaded_rows = out.len();
    Ok((out, report))
}

pub fn load_schemes(path: &Path) -> Result<(Vec<SchemeRecord>, LoadReport), DashboardError> {
    read_rows(path, |row: RawSchemeRow| {
        let scheme_name = text_or_empty(row.scheme_name);
        if scheme_name.is_empty() {
            return None;
        }
        Some(SchemeRecord {
            district: text_or_empty(row.district),
            division: text_or_empty(row.division),
            sub_division: text_or_empty(row.sub_division),
            scheme_name,
            gets_water_daily_pct: number_or_zero(row.gets_water_daily.as_deref()),
            gets_water_same_time_pct: number_or_zero(row.gets_water_same_time.as_deref()),
            satisfied_quantity_pct: number_or_zero(row.satisfied_quantity.as_deref()),
            satisfied_quality_pct: number_or_zero(row.satisfied_quality.as_deref()),
            overall_happy_pct: number_or_zero(row.overall_happy.as_deref()),
            overall_neutral_pct: number_or_zero(row.overall_neutral.as_deref()),
            overall_sad_pct: number_or_zero(row.overall_sad.as_deref()),
        })
    })
}

pub fn load_supply(path: &Path) -> Result<(Vec<SupplyObservation>, LoadReport), DashboardError> {
    read_rows(path, |row: RawSupplyRow| {
        let scheme_name = text_or_empty(row.scheme_name);
        if scheme_name.is_empty() {
            return None;
        }
        let date = match parse_date_safe(row.date.as_deref()) {
            Some(d) => SupplyDate::Day(d),
            None => SupplyDate::Label(text_or_empty(row.date)),
        };
        Some(SupplyObservation {
            scheme_name,
            date,
            expected_volume_kl: volume_or_zero(row.expected.as_deref()),
            supplied_volume_kl: volume_or_zero(row.supplied.as_deref()),
        })
    })
}

fn answer(cell: Option<&str>) -> Answer {
    match parse_flag(cell) {
        Some(true) => Answer::Yes,
        Some(false) => Answer::No,
        None => Answer::Unknown,
    }
}

pub fn load_complaints(
    path: &Path,
) -> Result<(Vec<ComplaintRecord>, LoadReport), DashboardError> {
    read_rows(path, |row: RawComplaintRow| {
        let scheme_name = text_or_empty(row.scheme_name);
        if scheme_name.is_empty() {
            return None;
        }
        Some(ComplaintRecord {
            scheme_name,
            consumer_name: text_or_empty(row.consumer_name),
            consumer_phone: text_or_empty(row.consumer_phone),
            gets_water_daily: answer(row.gets_water_daily.as_deref()),
            gets_water_same_time: answer(row.gets_water_same_time.as_deref()),
            satisfied_quantity: answer(row.satisfied_quantity.as_deref()),
            satisfied_quality: answer(row.satisfied_quality.as_deref()),
        })
    })
}

/// Load a table or degrade to `None`, logging the failure.
fn load_or_warn<T>(
    name: &str,
    path: &Path,
    load: impl FnOnce(&Path) -> Result<(Vec<T>, LoadReport), DashboardError>,
) -> Option<(Vec<T>, LoadReport)> {
    match load(path) {
        Ok((rows, report)) => {
            info!(
                table = name,
                path = %path.display(),
                rows = report.loaded_rows,
                parse_errors = report.parse_errors,
                skipped = report.skipped_rows,
                "table loaded"
            );
            Some((rows, report))
        }
        Err(e) => {
            warn!(table = name, path = %path.display(), error = %e, "table unavailable, using an empty table");
            None
        }
    }
}

/// Load every configured table. Never fails: an unreadable table becomes empty
/// so option lists resolve to nothing and lookups report no data.
pub fn load_tables(paths: &DataPaths) -> (Tables, LoadSummary) {
    let mut tables = Tables::default();
    let mut summary = LoadSummary::default();

    if let Some((rows, report)) = load_or_warn("schemes", &paths.schemes, load_schemes) {
        tables.schemes = rows;
        summary.schemes = Some(report);
    }
    if let Some((rows, report)) = load_or_warn("supply", &paths.supply, load_supply) {
        tables.supply = rows;
        summary.supply = Some(report);
    }
    if let Some(path) = &paths.complaints {
        if let Some((rows, report)) = load_or_warn("complaints", path, load_complaints) {
            tables.complaints = Some(rows);
            summary.complaints = Some(report);
        }
    }

    (tables, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SCHEMES_CSV: &str = "\
District,Division,Sub Division,Scheme Name,Gets Water Daily %,Gets Water at Same Time %,Satisfied with Quantity %,Satisfied with Quality %,Overall Happy %,Overall Neutral %,Overall Sad %
Kamrup,Guwahati,North,Amingaon PWSS,0.9,0.75,0.8,0.66,0.55,0.3,0.15
Kamrup,Guwahati,North,Sila PWSS,,85%,0.7,0.9,0.4,,0.2
Kamrup,Guwahati,North,,0.1,0.1,0.1,0.1,0.1,0.1,0.1
";

    const SUPPLY_CSV: &str = "\
Scheme Name,Date (Prev 7 days),Expected water delivery,Water Supplied (in kl)
Amingaon PWSS,2025-05-29,50,42.5
Amingaon PWSS,30-05-2025,50,
Amingaon PWSS,Day 3,,12
";

    const COMPLAINTS_CSV: &str = "\
Scheme Name,Consumer Name,Consumer Phone Number,Gets Water Daily,Gets Water at Same Time,Satisfied with Quantity,Satisfied with Quality
Amingaon PWSS,Rina Das,9876500000,Yes,No,no,?
";

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn scheme_cells_are_normalized() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "schemes.csv", SCHEMES_CSV);
        let (rows, report) = load_schemes(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(rows[0].sub_division, "North");
        assert_eq!(rows[1].gets_water_daily_pct, 0.0);
        assert!((rows[1].gets_water_same_time_pct - 0.85).abs() < 1e-9);
        assert_eq!(rows[1].overall_neutral_pct, 0.0);
    }

    #[test]
    fn supply_rows_keep_unparsed_dates_and_zero_volumes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "supply.csv", SUPPLY_CSV);
        let (rows, _) = load_supply(&path).unwrap();

        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0].date, SupplyDate::Day(_)));
        assert_eq!(
            rows[1].date,
            SupplyDate::Day(chrono::NaiveDate::from_ymd_opt(2025, 5, 30).unwrap())
        );
        assert_eq!(rows[1].supplied_volume_kl, 0.0);
        assert_eq!(rows[2].date, SupplyDate::Label("Day 3".to_string()));
        assert_eq!(rows[2].expected_volume_kl, 0.0);
    }

    #[test]
    fn complaint_flags_are_parsed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "complaints.csv", COMPLAINTS_CSV);
        let (rows, _) = load_complaints(&path).unwrap();

        assert_eq!(rows[0].consumer_name, "Rina Das");
        assert_eq!(rows[0].gets_water_daily, Answer::Yes);
        assert_eq!(rows[0].gets_water_same_time, Answer::No);
        assert_eq!(rows[0].satisfied_quantity, Answer::No);
        assert_eq!(rows[0].satisfied_quality, Answer::Unknown);
    }

    #[test]
    fn missing_files_degrade_to_empty_tables() {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths {
            schemes: dir.path().join("absent.csv"),
            supply: write(&dir, "supply.csv", SUPPLY_CSV),
            complaints: Some(dir.path().join("also_absent.csv")),
        };
        let (tables, summary) = load_tables(&paths);

        assert!(tables.schemes.is_empty());
        assert!(summary.schemes.is_none());
        assert_eq!(tables.supply.len(), 3);
        assert!(tables.complaints.is_none());
    }
}
