// Threshold rules that pick the "next steps" advisories for a scheme.
use crate::i18n::{text, Language, TextKey};
use crate::types::SchemeRecord;
use serde::Serialize;

/// Rule thresholds in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionThresholds {
    /// Overall Happy % below this suggests community outreach.
    pub low_satisfaction: u32,
    /// Gets Water at Same Time % below this suggests a fixed schedule.
    pub timing_issues: u32,
    /// Satisfied with Quality % below this suggests water testing.
    pub quality_issues: u32,
}

pub const SUGGESTION_THRESHOLDS: SuggestionThresholds = SuggestionThresholds {
    low_satisfaction: 50,
    timing_issues: 70,
    quality_issues: 70,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    LowSatisfaction,
    TimingIssues,
    QualityIssues,
    General,
}

impl Advisory {
    pub fn text_key(self) -> TextKey {
        match self {
            Self::LowSatisfaction => TextKey::LowSatisfaction,
            Self::TimingIssues => TextKey::TimingIssues,
            Self::QualityIssues => TextKey::QualityIssues,
            Self::General => TextKey::General,
        }
    }

    pub fn text(self, language: Language) -> &'static str {
        text(language, self.text_key())
    }
}

fn below(fraction: f64, threshold: u32) -> bool {
    fraction * 100.0 < f64::from(threshold)
}

/// Advisories for `row`, in rule order. The general advisory is always last.
pub fn suggestions(row: &SchemeRecord, thresholds: &SuggestionThresholds) -> Vec<Advisory> {
    let mut out = Vec::with_capacity(4);
    if below(row.overall_happy_pct, thresholds.low_satisfaction) {
        out.push(Advisory::LowSatisfaction);
    }
    if below(row.gets_water_same_time_pct, thresholds.timing_issues) {
        out.push(Advisory::TimingIssues);
    }
    if below(row.satisfied_quality_pct, thresholds.quality_issues) {
        out.push(Advisory::QualityIssues);
    }
    out.push(Advisory::General);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(happy: f64, same_time: f64, quality: f64) -> SchemeRecord {
        SchemeRecord {
            overall_happy_pct: happy,
            gets_water_same_time_pct: same_time,
            satisfied_quality_pct: quality,
            ..SchemeRecord::default()
        }
    }

    #[test]
    fn low_happiness_and_quality() {
        let got = suggestions(&scheme(0.40, 0.80, 0.60), &SUGGESTION_THRESHOLDS);
        assert_eq!(
            got,
            vec![Advisory::LowSatisfaction, Advisory::QualityIssues, Advisory::General]
        );
    }

    #[test]
    fn healthy_scheme_gets_only_general_advice() {
        let got = suggestions(&scheme(0.90, 0.95, 0.95), &SUGGESTION_THRESHOLDS);
        assert_eq!(got, vec![Advisory::General]);
    }

    #[test]
    fn all_rules_fire_in_order() {
        let got = suggestions(&scheme(0.0, 0.0, 0.0), &SUGGESTION_THRESHOLDS);
        assert_eq!(
            got,
            vec![
                Advisory::LowSatisfaction,
                Advisory::TimingIssues,
                Advisory::QualityIssues,
                Advisory::General
            ]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let got = suggestions(&scheme(0.5, 0.75, 0.75), &SUGGESTION_THRESHOLDS);
        assert_eq!(got, vec![Advisory::General]);

        let lenient = SuggestionThresholds {
            low_satisfaction: 40,
            ..SUGGESTION_THRESHOLDS
        };
        let got = suggestions(&scheme(0.45, 0.0, 1.0), &lenient);
        assert_eq!(got, vec![Advisory::TimingIssues, Advisory::General]);
    }

    #[test]
    fn general_advice_is_always_last() {
        for happy in [0.0, 0.3, 0.6, 1.0] {
            for same_time in [0.0, 0.69, 0.71, 1.0] {
                let got = suggestions(&scheme(happy, same_time, 0.5), &SUGGESTION_THRESHOLDS);
                assert_eq!(got.last(), Some(&Advisory::General));
                assert_eq!(got.iter().filter(|a| **a == Advisory::General).count(), 1);
            }
        }
    }

    #[test]
    fn advisories_are_translated() {
        assert_eq!(
            Advisory::QualityIssues.text(Language::English),
            "Test water quality and take necessary remedial measures"
        );
        assert!(Advisory::General.text(Language::Assamese).contains("SO"));
    }
}
