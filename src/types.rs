use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

#[derive(Debug, Deserialize)]
pub struct RawSchemeRow {
    #[serde(rename = "District")]
    pub district: Option<String>,
    #[serde(rename = "Division")]
    pub division: Option<String>,
    #[serde(rename = "Sub Division")]
    pub sub_division: Option<String>,
    #[serde(rename = "Scheme Name")]
    pub scheme_name: Option<String>,
    #[serde(rename = "Gets Water Daily %")]
    pub gets_water_daily: Option<String>,
    #[serde(rename = "Gets Water at Same Time %")]
    pub gets_water_same_time: Option<String>,
    #[serde(rename = "Satisfied with Quantity %")]
    pub satisfied_quantity: Option<String>,
    #[serde(rename = "Satisfied with Quality %")]
    pub satisfied_quality: Option<String>,
    #[serde(rename = "Overall Happy %")]
    pub overall_happy: Option<String>,
    #[serde(rename = "Overall Neutral %")]
    pub overall_neutral: Option<String>,
    #[serde(rename = "Overall Sad %")]
    pub overall_sad: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSupplyRow {
    #[serde(rename = "Scheme Name")]
    pub scheme_name: Option<String>,
    #[serde(rename = "Date (Prev 7 days)")]
    pub date: Option<String>,
    #[serde(rename = "Expected water delivery")]
    pub expected: Option<String>,
    #[serde(rename = "Water Supplied (in kl)")]
    pub supplied: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawComplaintRow {
    #[serde(rename = "Scheme Name")]
    pub scheme_name: Option<String>,
    #[serde(rename = "Consumer Name")]
    pub consumer_name: Option<String>,
    #[serde(rename = "Consumer Phone Number")]
    pub consumer_phone: Option<String>,
    #[serde(rename = "Gets Water Daily")]
    pub gets_water_daily: Option<String>,
    #[serde(rename = "Gets Water at Same Time")]
    pub gets_water_same_time: Option<String>,
    #[serde(rename = "Satisfied with Quantity")]
    pub satisfied_quantity: Option<String>,
    #[serde(rename = "Satisfied with Quality")]
    pub satisfied_quality: Option<String>,
}

/// One surveyed scheme. Every `*_pct` field is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemeRecord {
    pub district: String,
    pub division: String,
    pub sub_division: String,
    pub scheme_name: String,
    pub gets_water_daily_pct: f64,
    pub gets_water_same_time_pct: f64,
    pub satisfied_quantity_pct: f64,
    pub satisfied_quality_pct: f64,
    pub overall_happy_pct: f64,
    pub overall_neutral_pct: f64,
    pub overall_sad_pct: f64,
}

/// Day label of a supply observation. Cells that are not a recognizable date
/// keep their raw text so the series still lines up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SupplyDate {
    Day(NaiveDate),
    Label(String),
}

impl fmt::Display for SupplyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(d) => write!(f, "{}", d.format("%d %b")),
            Self::Label(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyObservation {
    pub scheme_name: String,
    pub date: SupplyDate,
    pub expected_volume_kl: f64,
    pub supplied_volume_kl: f64,
}

/// A yes/no survey answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Unknown,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "✔",
            Self::No => "✘",
            Self::Unknown => "-",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintRecord {
    pub scheme_name: String,
    pub consumer_name: String,
    pub consumer_phone: String,
    pub gets_water_daily: Answer,
    pub gets_water_same_time: Answer,
    pub satisfied_quantity: Answer,
    pub satisfied_quality: Answer,
}

/// The four cascading choices. Any level may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub district: Option<String>,
    pub division: Option<String>,
    pub sub_division: Option<String>,
    pub scheme_name: Option<String>,
}

impl Selection {
    #[cfg(test)]
    pub fn new(district: &str, division: &str, sub_division: &str, scheme_name: &str) -> Self {
        Self {
            district: Some(district.to_string()),
            division: Some(division.to_string()),
            sub_division: Some(sub_division.to_string()),
            scheme_name: Some(scheme_name.to_string()),
        }
    }

    /// True when district, division and sub-division all equal `other`'s.
    pub fn same_ancestors(&self, other: &Selection) -> bool {
        self.district == other.district
            && self.division == other.division
            && self.sub_division == other.sub_division
    }
}

/// All survey tables, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub schemes: Vec<SchemeRecord>,
    pub supply: Vec<SupplyObservation>,
    /// `None` when the complaint table is not configured or failed to load.
    pub complaints: Option<Vec<ComplaintRecord>>,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct SupplyExportRow {
    #[serde(rename = "Date")]
    #[tabled(rename = "Date")]
    pub date: String,
    #[serde(rename = "ExpectedKl")]
    #[tabled(rename = "ExpectedKl")]
    pub expected_kl: String,
    #[serde(rename = "SuppliedKl")]
    #[tabled(rename = "SuppliedKl")]
    pub supplied_kl: String,
    #[serde(rename = "ShortfallKl")]
    #[tabled(rename = "ShortfallKl")]
    pub shortfall_kl: String,
}
