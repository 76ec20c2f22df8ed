use std::io;

use thiserror::Error;

/// Error type for loading the survey tables, resolving a scheme and exporting reports.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("no data found for scheme '{scheme_name}' under {district} / {division} / {sub_division}")]
    SchemeNotFound {
        district: String,
        division: String,
        sub_division: String,
        scheme_name: String,
    },
    #[error("no scheme selected")]
    NoSelection,
}

impl DashboardError {
    /// True for the "nothing to show" outcomes that the report renders as a no-data state.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::SchemeNotFound { .. } | Self::NoSelection)
    }
}
