// Everything one report shows, assembled from the tables and a selection.
//
// Desktop and mobile share this single builder; the layout flags only decide
// which optional sections are filled in.
use crate::complaints::{complaints_for, ComplaintEntry};
use crate::error::DashboardError;
use crate::filters::lookup_selection;
use crate::i18n::{text, Language, TextKey};
use crate::metrics::{format_metrics, format_satisfaction, MetricCard, SatisfactionCard};
use crate::suggestions::{suggestions, Advisory, SUGGESTION_THRESHOLDS};
use crate::supply::{supply_series, SupplySeries};
use crate::types::{Selection, Tables};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutOptions {
    /// Compact cards; no supply chart and no complaint table.
    pub mobile: bool,
    /// Show the disgruntled consumer table when the table was loaded.
    pub include_complaints: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mobile: false,
            include_complaints: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryLine {
    pub advisory: Advisory,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub language: Language,
    pub layout: LayoutOptions,
    pub selection: Selection,
    pub scheme_name: String,
    pub sub_division: String,
    pub metrics: Vec<MetricCard>,
    pub satisfaction: Vec<SatisfactionCard>,
    pub advisories: Vec<AdvisoryLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<SupplySeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaints: Option<Vec<ComplaintEntry>>,
}

impl DashboardView {
    pub fn text(&self, key: TextKey) -> &'static str {
        text(self.language, key)
    }
}

/// Build the report for `selection`.
///
/// Fails with [`DashboardError::NoSelection`] or
/// [`DashboardError::SchemeNotFound`] when there is nothing to show.
pub fn build_view(
    tables: &Tables,
    selection: &Selection,
    language: Language,
    layout: LayoutOptions,
) -> Result<DashboardView, DashboardError> {
    let row = lookup_selection(&tables.schemes, selection)?;

    let advisories = suggestions(row, &SUGGESTION_THRESHOLDS)
        .into_iter()
        .map(|advisory| AdvisoryLine {
            advisory,
            text: advisory.text(language),
        })
        .collect();

    let supply = if layout.mobile {
        None
    } else {
        supply_series(&tables.supply, &row.scheme_name)
    };

    let complaints = match (&tables.complaints, layout) {
        (
            Some(table),
            LayoutOptions {
                mobile: false,
                include_complaints: true,
            },
        ) => Some(complaints_for(table, &row.scheme_name)),
        _ => None,
    };

    Ok(DashboardView {
        language,
        layout,
        selection: selection.clone(),
        scheme_name: row.scheme_name.clone(),
        sub_division: row.sub_division.clone(),
        metrics: format_metrics(row, language),
        satisfaction: format_satisfaction(row, language),
        advisories,
        supply,
        complaints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Answer, ComplaintRecord, SchemeRecord, SupplyDate, SupplyObservation};

    fn tables() -> Tables {
        Tables {
            schemes: vec![SchemeRecord {
                district: "Kamrup".into(),
                division: "Guwahati".into(),
                sub_division: "North".into(),
                scheme_name: "Sila PWSS".into(),
                gets_water_daily_pct: 0.9,
                gets_water_same_time_pct: 0.8,
                satisfied_quantity_pct: 0.7,
                satisfied_quality_pct: 0.6,
                overall_happy_pct: 0.4,
                overall_neutral_pct: 0.4,
                overall_sad_pct: 0.2,
            }],
            supply: vec![SupplyObservation {
                scheme_name: "Sila PWSS".into(),
                date: SupplyDate::Label("d1".into()),
                expected_volume_kl: 40.0,
                supplied_volume_kl: 30.0,
            }],
            complaints: Some(vec![ComplaintRecord {
                scheme_name: "Sila PWSS".into(),
                consumer_name: "Rina Das".into(),
                consumer_phone: "9876500000".into(),
                gets_water_daily: Answer::No,
                gets_water_same_time: Answer::No,
                satisfied_quantity: Answer::Yes,
                satisfied_quality: Answer::No,
            }]),
        }
    }

    fn selection() -> Selection {
        Selection::new("Kamrup", "Guwahati", "North", "Sila PWSS")
    }

    #[test]
    fn desktop_view_has_every_section() {
        let view =
            build_view(&tables(), &selection(), Language::English, LayoutOptions::default()).unwrap();

        assert_eq!(view.scheme_name, "Sila PWSS");
        assert_eq!(view.metrics.len(), 4);
        assert_eq!(view.satisfaction[0].value, 40);
        let kinds: Vec<Advisory> = view.advisories.iter().map(|a| a.advisory).collect();
        assert_eq!(
            kinds,
            vec![Advisory::LowSatisfaction, Advisory::QualityIssues, Advisory::General]
        );
        assert_eq!(view.supply.as_ref().map(|s| s.points.len()), Some(1));
        assert_eq!(view.complaints.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn mobile_view_drops_chart_and_complaints() {
        let layout = LayoutOptions {
            mobile: true,
            include_complaints: true,
        };
        let view = build_view(&tables(), &selection(), Language::Assamese, layout).unwrap();

        assert!(view.supply.is_none());
        assert!(view.complaints.is_none());
        assert_eq!(view.advisories.len(), 3);
    }

    #[test]
    fn complaints_can_be_switched_off() {
        let layout = LayoutOptions {
            mobile: false,
            include_complaints: false,
        };
        let view = build_view(&tables(), &selection(), Language::English, layout).unwrap();
        assert!(view.complaints.is_none());
        assert!(view.supply.is_some());
    }

    #[test]
    fn unknown_scheme_is_no_data() {
        let mut sel = selection();
        sel.scheme_name = Some("Raha PWSS".into());
        let err = build_view(&tables(), &sel, Language::English, LayoutOptions::default())
            .unwrap_err();
        assert!(err.is_no_data());

        let empty = build_view(
            &Tables::default(),
            &Selection::default(),
            Language::English,
            LayoutOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(empty, DashboardError::NoSelection));
    }

    #[test]
    fn view_serializes_to_json() {
        let view =
            build_view(&tables(), &selection(), Language::English, LayoutOptions::default()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["language"], "en");
        assert_eq!(json["metrics"][3]["value"], 60);
        assert_eq!(json["advisories"][0]["advisory"], "low_satisfaction");
        assert_eq!(json["complaints"][0]["gets_water_daily"], "no");
    }
}
