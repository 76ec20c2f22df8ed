// Bilingual (English / Assamese) string table.
//
// The table is built once on first use and never changes afterwards.
use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Language {
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[serde(rename = "as")]
    #[value(name = "as")]
    Assamese,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Assamese => "as",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Assamese,
            Self::Assamese => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::English => "English",
            Self::Assamese => "Assamese",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    FilterQuestion,
    District,
    Division,
    SubDivision,
    SelectVillage,
    PerformanceSummary,
    PerformanceDescription,
    GetsWaterDaily,
    SameTime,
    SatisfiedQuantity,
    SatisfiedQuality,
    OverallSatisfaction,
    Happy,
    Neutral,
    Sad,
    DisgruntledConsumers,
    SerialNumber,
    ConsumerName,
    ConsumerPhone,
    WaterSupplyChart,
    Date,
    VolumeKl,
    ExpectedWater,
    SuppliedWater,
    NextSteps,
    LowSatisfaction,
    TimingIssues,
    QualityIssues,
    General,
    NoData,
    ReportDate,
    Footer,
}

#[cfg(test)]
impl TextKey {
    pub const ALL: [TextKey; 33] = [
        Self::Title,
        Self::FilterQuestion,
        Self::District,
        Self::Division,
        Self::SubDivision,
        Self::SelectVillage,
        Self::PerformanceSummary,
        Self::PerformanceDescription,
        Self::GetsWaterDaily,
        Self::SameTime,
        Self::SatisfiedQuantity,
        Self::SatisfiedQuality,
        Self::OverallSatisfaction,
        Self::Happy,
        Self::Neutral,
        Self::Sad,
        Self::DisgruntledConsumers,
        Self::SerialNumber,
        Self::ConsumerName,
        Self::ConsumerPhone,
        Self::WaterSupplyChart,
        Self::Date,
        Self::VolumeKl,
        Self::ExpectedWater,
        Self::SuppliedWater,
        Self::NextSteps,
        Self::LowSatisfaction,
        Self::TimingIssues,
        Self::QualityIssues,
        Self::General,
        Self::NoData,
        Self::ReportDate,
        Self::Footer,
    ];
}

const ENGLISH: &[(TextKey, &str)] = &[
    (TextKey::Title, "Jal Jeevan Mission Assam"),
    (TextKey::FilterQuestion, "Which village's performance do you want to see?"),
    (TextKey::District, "District"),
    (TextKey::Division, "Division"),
    (TextKey::SubDivision, "Sub Division"),
    (TextKey::SelectVillage, "Village"),
    (TextKey::PerformanceSummary, "Scheme Performance Summary"),
    (TextKey::PerformanceDescription, "Review your metrics below and follow the next steps"),
    (TextKey::GetsWaterDaily, "Gets Water Daily"),
    (TextKey::SameTime, "Gets Water at Same Time"),
    (TextKey::SatisfiedQuantity, "Satisfied with Quantity"),
    (TextKey::SatisfiedQuality, "Satisfied with Quality"),
    (TextKey::OverallSatisfaction, "Overall Satisfaction"),
    (TextKey::Happy, "Happy"),
    (TextKey::Neutral, "Neutral"),
    (TextKey::Sad, "Sad"),
    (TextKey::DisgruntledConsumers, "Disgruntled Consumers"),
    (TextKey::SerialNumber, "Serial No"),
    (TextKey::ConsumerName, "Consumer Name"),
    (TextKey::ConsumerPhone, "Consumer Phone Number"),
    (TextKey::WaterSupplyChart, "Expected vs Received Water Supply"),
    (TextKey::Date, "Date"),
    (TextKey::VolumeKl, "Volume (kl)"),
    (TextKey::ExpectedWater, "Expected Water Supply"),
    (TextKey::SuppliedWater, "Supplied Water (kl)"),
    (TextKey::NextSteps, "Next Steps"),
    (TextKey::LowSatisfaction, "Contact WUC and community members to see if improvements can be made"),
    (TextKey::TimingIssues, "Work with operators to establish a regular water supply schedule"),
    (TextKey::QualityIssues, "Test water quality and take necessary remedial measures"),
    (TextKey::General, "Contact your SO to identify and resolve your scheme issues in time"),
    (TextKey::NoData, "No data found for the selected filters."),
    (TextKey::ReportDate, "Report date: 04 Jun 2025"),
    (TextKey::Footer, "June 2025 | PHED"),
];

const ASSAMESE: &[(TextKey, &str)] = &[
    (TextKey::Title, "জল জীৱন মিছন অসম"),
    (TextKey::FilterQuestion, "কোন গাঁৱৰ কাৰ্যক্ষমতা আপুনি চাব বিচাৰে?"),
    (TextKey::District, "জিলা"),
    (TextKey::Division, "বিভাগ"),
    (TextKey::SubDivision, "উপ-বিভাগ"),
    (TextKey::SelectVillage, "গাঁও"),
    (TextKey::PerformanceSummary, "আঁচনিৰ কাৰ্যক্ষমতাৰ সংক্ষিপ্তসাৰ"),
    (TextKey::PerformanceDescription, "তলত আপোনাৰ মেট্ৰিকসমূহ পৰ্যালোচনা কৰক আৰু পৰৱৰ্তী পদক্ষেপসমূহ অনুসৰণ কৰক"),
    (TextKey::GetsWaterDaily, "দৈনিক পানী পায়"),
    (TextKey::SameTime, "একে সময়ত দৈনিক পানী পায়"),
    (TextKey::SatisfiedQuantity, "পৰিমাণত সন্তুষ্ট"),
    (TextKey::SatisfiedQuality, "গুণগত মানত সন্তুষ্ট"),
    (TextKey::OverallSatisfaction, "মুঠ সন্তুষ্টি"),
    (TextKey::Happy, "সুখী"),
    (TextKey::Neutral, "নিৰপেক্ষ"),
    (TextKey::Sad, "দুঃখী"),
    (TextKey::DisgruntledConsumers, "অসন্তুষ্ট গ্ৰাহকসকল"),
    (TextKey::SerialNumber, "ক্ৰমিক নম্বৰ"),
    (TextKey::ConsumerName, "গ্ৰাহকৰ নাম"),
    (TextKey::ConsumerPhone, "গ্ৰাহকৰ ফোন নম্বৰ"),
    (TextKey::WaterSupplyChart, "প্ৰত্যাশিত বনাম প্ৰাপ্ত পানী যোগান"),
    (TextKey::Date, "তাৰিখ"),
    (TextKey::VolumeKl, "আয়তন (kl)"),
    (TextKey::ExpectedWater, "প্ৰত্যাশিত পানী যোগান"),
    (TextKey::SuppliedWater, "যোগান দিয়া পানী (kl)"),
    (TextKey::NextSteps, "পৰৱৰ্তী পদক্ষেপসমূহ"),
    (TextKey::LowSatisfaction, "WUC আৰু সম্প্ৰদায়ৰ সদস্যসকলৰ সৈতে যোগাযোগ কৰক, উন্নতি কৰিব পৰা যায় নেকি চাওক"),
    (TextKey::TimingIssues, "অপাৰেটৰসকলৰ সৈতে কাম কৰক যাতে এটা নিয়মীয়া পানী যোগান সময়সূচী স্থাপন কৰিব পৰা যায়"),
    (TextKey::QualityIssues, "পানীৰ গুণগত মান পৰীক্ষা কৰক আৰু প্ৰয়োজনীয় চিকিৎসা ব্যৱস্থা গ্ৰহণ কৰক"),
    (TextKey::General, "আপোনাৰ আঁচনিৰ সমস্যাসমূহ সময়মতে চিনাক্ত আৰু সমাধান কৰিবলৈ আপোনাৰ SO-ৰ সৈতে যোগাযোগ কৰক"),
    (TextKey::NoData, "নিৰ্বাচিত ফিল্টাৰৰ বাবে কোনো তথ্য পোৱা নগ'ল।"),
    (TextKey::ReportDate, "Report date: 04 Jun 2025"),
    (TextKey::Footer, "June 2025 | PHED"),
];

static TRANSLATIONS: Lazy<HashMap<Language, HashMap<TextKey, &'static str>>> = Lazy::new(|| {
    HashMap::from([
        (Language::English, ENGLISH.iter().copied().collect()),
        (Language::Assamese, ASSAMESE.iter().copied().collect()),
    ])
});

/// Translated text for `key`, falling back to English when a language lacks it.
pub fn text(language: Language, key: TextKey) -> &'static str {
    TRANSLATIONS
        .get(&language)
        .and_then(|table| table.get(&key))
        .or_else(|| TRANSLATIONS.get(&Language::English).and_then(|t| t.get(&key)))
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated_in_both_languages() {
        for language in [Language::English, Language::Assamese] {
            let table = &TRANSLATIONS[&language];
            for key in TextKey::ALL {
                assert!(
                    table.get(&key).is_some_and(|s| !s.is_empty()),
                    "{language} is missing {key:?}"
                );
            }
            assert_eq!(table.len(), TextKey::ALL.len());
        }
    }

    #[test]
    fn looks_up_by_language() {
        assert_eq!(text(Language::English, TextKey::District), "District");
        assert_eq!(text(Language::Assamese, TextKey::District), "জিলা");
    }

    #[test]
    fn toggle_flips_between_languages() {
        assert_eq!(Language::Assamese.toggled(), Language::English);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
        assert_eq!(Language::Assamese.code(), "as");
    }
}
