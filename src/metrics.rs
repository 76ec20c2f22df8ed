// Percentage cards for the performance metrics and the satisfaction split.
use crate::i18n::{text, Language, TextKey};
use crate::types::SchemeRecord;
use serde::Serialize;

/// Whole percentage for a `[0, 1]` fraction, truncated toward zero.
///
/// 0.699 shows as 69, not 70.
pub fn format_metric(fraction: f64) -> i64 {
    (fraction * 100.0) as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    GetsWaterDaily,
    SameTime,
    SatisfiedQuantity,
    SatisfiedQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub label: &'static str,
    pub value: i64,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatisfactionCard {
    pub mood: Mood,
    pub label: &'static str,
    pub value: i64,
    pub emoji: &'static str,
    pub class: &'static str,
}

pub fn format_metrics(row: &SchemeRecord, language: Language) -> Vec<MetricCard> {
    [
        (MetricKind::GetsWaterDaily, TextKey::GetsWaterDaily, row.gets_water_daily_pct, "💧"),
        (MetricKind::SameTime, TextKey::SameTime, row.gets_water_same_time_pct, "⏰"),
        (MetricKind::SatisfiedQuantity, TextKey::SatisfiedQuantity, row.satisfied_quantity_pct, "🚰"),
        (MetricKind::SatisfiedQuality, TextKey::SatisfiedQuality, row.satisfied_quality_pct, "✅"),
    ]
    .into_iter()
    .map(|(kind, key, fraction, icon)| MetricCard {
        kind,
        label: text(language, key),
        value: format_metric(fraction),
        icon,
    })
    .collect()
}

pub fn format_satisfaction(row: &SchemeRecord, language: Language) -> Vec<SatisfactionCard> {
    [
        (Mood::Happy, TextKey::Happy, row.overall_happy_pct, "😊", "satisfaction-happy"),
        (Mood::Neutral, TextKey::Neutral, row.overall_neutral_pct, "😐", "satisfaction-neutral"),
        (Mood::Sad, TextKey::Sad, row.overall_sad_pct, "😔", "satisfaction-sad"),
    ]
    .into_iter()
    .map(|(mood, key, fraction, emoji, class)| SatisfactionCard {
        mood,
        label: text(language, key),
        value: format_metric(fraction),
        emoji,
        class,
    })
    .collect()
}
