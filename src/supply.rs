// Seven-day expected vs supplied volume series for one scheme.
use crate::types::{SupplyExportRow, SupplyObservation};
use crate::util::format_number;
use serde::Serialize;

/// Width, in characters, of the longest bar in the text chart.
pub const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplySeries {
    pub scheme_name: String,
    pub points: Vec<SupplyObservation>,
    pub total_expected_kl: f64,
    pub total_supplied_kl: f64,
    /// Expected minus supplied, never below zero.
    pub shortfall_kl: f64,
    /// Upper bound of the volume axis: 20% headroom over the largest value, or 10 for an all-zero series.
    pub y_axis_max: f64,
    /// Chart top margin, larger when labels sit high above the bars.
    pub top_margin: u32,
}

/// Observations for `scheme_name` in table order, or `None` when there are none.
pub fn supply_series(table: &[SupplyObservation], scheme_name: &str) -> Option<SupplySeries> {
    let points: Vec<SupplyObservation> = table
        .iter()
        .filter(|o| o.scheme_name == scheme_name)
        .cloned()
        .collect();
    if points.is_empty() {
        return None;
    }

    let max_expected = points.iter().map(|p| p.expected_volume_kl).fold(0.0, f64::max);
    let max_supplied = points.iter().map(|p| p.supplied_volume_kl).fold(0.0, f64::max);
    let max_y = max_expected.max(max_supplied);
    let top_margin = if max_y > 80.0 {
        140
    } else if max_y > 60.0 {
        120
    } else {
        110
    };
    let total_expected_kl: f64 = points.iter().map(|p| p.expected_volume_kl).sum();
    let total_supplied_kl: f64 = points.iter().map(|p| p.supplied_volume_kl).sum();

    Some(SupplySeries {
        scheme_name: scheme_name.to_string(),
        total_expected_kl,
        total_supplied_kl,
        shortfall_kl: (total_expected_kl - total_supplied_kl).max(0.0),
        y_axis_max: if max_y > 0.0 { max_y * 1.2 } else { 10.0 },
        top_margin,
        points,
    })
}

impl SupplySeries {
    /// Bar length for `volume` on a [`BAR_WIDTH`]-wide axis.
    pub fn bar_len(&self, volume: f64) -> usize {
        ((volume / self.y_axis_max) * BAR_WIDTH as f64).floor().max(0.0) as usize
    }

    pub fn export_rows(&self) -> Vec<SupplyExportRow> {
        self.points
            .iter()
            .map(|p| SupplyExportRow {
                date: p.date.to_string(),
                expected_kl: format_number(p.expected_volume_kl, 2),
                supplied_kl: format_number(p.supplied_volume_kl, 2),
                shortfall_kl: format_number(
                    (p.expected_volume_kl - p.supplied_volume_kl).max(0.0),
                    2,
                ),
            })
            .collect()
    }
}
