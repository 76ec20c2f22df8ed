// Plain-text rendering of a `DashboardView` for the desktop and mobile layouts.
use crate::i18n::{text, Language, TextKey};
use crate::supply::SupplySeries;
use crate::util::format_number;
use crate::view::DashboardView;
use std::fmt;
use tabled::{builder::Builder, settings::Style};

fn cells<const N: usize>(values: [String; N]) -> Vec<String> {
    values.into_iter().collect()
}

fn grid(rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::rounded()).to_string()
}

fn markdown(header: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::markdown()).to_string()
}

/// A report laid out for the view's layout, written through `fmt::Display`.
struct Report<'a>(&'a DashboardView);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.layout.mobile {
            write_mobile(f, self.0)
        } else {
            write_desktop(f, self.0)
        }
    }
}

pub fn render_view(view: &DashboardView) -> String {
    Report(view).to_string()
}

fn write_header(out: &mut fmt::Formatter<'_>, view: &DashboardView) -> fmt::Result {
    writeln!(out, "{:>60}", view.text(TextKey::ReportDate))?;
    writeln!(out, "{}", view.text(TextKey::Title))?;
    writeln!(out, "{}\n", view.text(TextKey::FilterQuestion))?;
    let sel = &view.selection;
    writeln!(
        out,
        "{}: {} | {}: {} | {}: {} | {}: {}\n",
        view.text(TextKey::District),
        sel.district.as_deref().unwrap_or("-"),
        view.text(TextKey::Division),
        sel.division.as_deref().unwrap_or("-"),
        view.text(TextKey::SubDivision),
        sel.sub_division.as_deref().unwrap_or("-"),
        view.text(TextKey::SelectVillage),
        sel.scheme_name.as_deref().unwrap_or("-"),
    )
}

fn write_desktop(out: &mut fmt::Formatter<'_>, view: &DashboardView) -> fmt::Result {
    write_header(out, view)?;

    writeln!(out, "{}, {}\n", view.scheme_name, view.sub_division)?;
    writeln!(out, "📈 {}", view.text(TextKey::PerformanceSummary))?;
    writeln!(out, "{}\n", view.text(TextKey::PerformanceDescription))?;

    let metric_row: Vec<String> = view
        .metrics
        .iter()
        .map(|m| format!("{}\n{}\n{}%", m.icon, m.label, m.value))
        .collect();
    writeln!(out, "{}\n", grid(vec![metric_row]))?;

    writeln!(out, "{}", view.text(TextKey::OverallSatisfaction))?;
    let mood_row: Vec<String> = view
        .satisfaction
        .iter()
        .map(|s| format!("{}\n{}\n{}%", s.emoji, s.label, s.value))
        .collect();
    writeln!(out, "{}\n", grid(vec![mood_row]))?;

    if let Some(series) = &view.supply {
        writeln!(out, "{}", view.text(TextKey::WaterSupplyChart))?;
        writeln!(out, "{}\n", render_supply(series, view.language))?;
    }

    if let Some(complaints) = &view.complaints {
        if !complaints.is_empty() {
            writeln!(out, "{}", view.text(TextKey::DisgruntledConsumers))?;
            let header = cells([
                view.text(TextKey::SerialNumber).to_string(),
                view.text(TextKey::ConsumerName).to_string(),
                view.text(TextKey::ConsumerPhone).to_string(),
                "💧".to_string(),
                "⏰".to_string(),
                "🚰".to_string(),
                "✅".to_string(),
            ]);
            let rows: Vec<Vec<String>> = complaints
                .iter()
                .map(|c| {
                    cells([
                        c.serial.to_string(),
                        c.consumer_name.clone(),
                        c.consumer_phone.clone(),
                        c.gets_water_daily.to_string(),
                        c.gets_water_same_time.to_string(),
                        c.satisfied_quantity.to_string(),
                        c.satisfied_quality.to_string(),
                    ])
                })
                .collect();
            writeln!(out, "{}\n", markdown(header, rows))?;
        }
    }

    writeln!(out, "{}", view.text(TextKey::NextSteps))?;
    for line in &view.advisories {
        writeln!(out, "  • {}", line.text)?;
    }
    writeln!(out, "\n{}", "-".repeat(60))?;
    writeln!(out, "{:>60}", view.text(TextKey::Footer))
}

fn write_mobile(out: &mut fmt::Formatter<'_>, view: &DashboardView) -> fmt::Result {
    writeln!(
        out,
        "{} · {}",
        view.text(TextKey::ReportDate),
        view.text(TextKey::Title)
    )?;
    writeln!(out, "\n{}", view.scheme_name)?;
    writeln!(out, "[{}]\n", view.sub_division)?;
    writeln!(
        out,
        "📊 {}: {}\n",
        view.text(TextKey::PerformanceSummary),
        view.text(TextKey::PerformanceDescription)
    )?;

    let cards: Vec<String> = view
        .metrics
        .iter()
        .map(|m| format!("{} {}\n{}%", m.icon, m.label, m.value))
        .collect();
    let rows: Vec<Vec<String>> = cards.chunks(2).map(|pair| pair.to_vec()).collect();
    writeln!(out, "{}\n", grid(rows))?;

    writeln!(out, "{}", view.text(TextKey::OverallSatisfaction))?;
    let moods = view
        .satisfaction
        .iter()
        .map(|s| format!("{} {} {}%", s.emoji, s.label, s.value))
        .collect::<Vec<_>>()
        .join("   ");
    writeln!(out, "{}\n", moods)?;

    writeln!(out, "{}", view.text(TextKey::NextSteps))?;
    for line in &view.advisories {
        writeln!(out, "- {}", line.text)?;
    }
    writeln!(out, "\n{}", view.text(TextKey::Footer))
}

/// Daily expected vs supplied volumes with a proportional bar for each.
pub fn render_supply(series: &SupplySeries, language: Language) -> String {
    let header = cells([
        text(language, TextKey::Date).to_string(),
        text(language, TextKey::ExpectedWater).to_string(),
        text(language, TextKey::SuppliedWater).to_string(),
        text(language, TextKey::VolumeKl).to_string(),
    ]);
    let rows: Vec<Vec<String>> = series
        .points
        .iter()
        .map(|p| {
            let bars = format!(
                "{}\n{}",
                "▒".repeat(series.bar_len(p.expected_volume_kl)),
                "█".repeat(series.bar_len(p.supplied_volume_kl)),
            );
            cells([
                p.date.to_string(),
                format_number(p.expected_volume_kl, 2),
                format_number(p.supplied_volume_kl, 2),
                bars,
            ])
        })
        .collect();
    format!(
        "{}\nΣ {} / {} kl (−{} kl)",
        markdown(header, rows),
        format_number(series.total_expected_kl, 2),
        format_number(series.total_supplied_kl, 2),
        format_number(series.shortfall_kl, 2),
    )
}

pub fn render_no_data(language: Language) -> String {
    format!(
        "{}\n\n⚠ {}\n",
        text(language, TextKey::Title),
        text(language, TextKey::NoData)
    )
}

/// Numbered option list for a selector; `*` marks the current choice.
pub fn render_options(label: &str, options: &[String], current: Option<&str>) -> String {
    let mut out = format!("{}:\n", label);
    if options.is_empty() {
        out.push_str("  (no options)\n");
        return out;
    }
    for (idx, option) in options.iter().enumerate() {
        let marker = if Some(option.as_str()) == current { '*' } else { ' ' };
        out.push_str(&format!(" {}[{}] {}\n", marker, idx + 1, option));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SchemeRecord, Selection, SupplyDate, SupplyObservation, Tables};
    use crate::view::{build_view, LayoutOptions};

    fn tables() -> Tables {
        Tables {
            schemes: vec![SchemeRecord {
                district: "Kamrup".into(),
                division: "Guwahati".into(),
                sub_division: "North".into(),
                scheme_name: "Sila PWSS".into(),
                gets_water_daily_pct: 0.91,
                gets_water_same_time_pct: 0.65,
                satisfied_quantity_pct: 0.8,
                satisfied_quality_pct: 0.9,
                overall_happy_pct: 0.7,
                overall_neutral_pct: 0.2,
                overall_sad_pct: 0.1,
            }],
            supply: vec![SupplyObservation {
                scheme_name: "Sila PWSS".into(),
                date: SupplyDate::Label("Mon".into()),
                expected_volume_kl: 50.0,
                supplied_volume_kl: 25.0,
            }],
            complaints: None,
        }
    }

    fn view(language: Language, mobile: bool) -> DashboardView {
        build_view(
            &tables(),
            &Selection::new("Kamrup", "Guwahati", "North", "Sila PWSS"),
            language,
            LayoutOptions {
                mobile,
                include_complaints: true,
            },
        )
        .unwrap()
    }

    #[test]
    fn desktop_report_lists_sections_in_order() {
        let out = render_view(&view(Language::English, false));
        let metrics = out.find("Gets Water Daily").unwrap();
        let chart = out.find("Expected vs Received Water Supply").unwrap();
        let steps = out.find("Next Steps").unwrap();

        assert!(metrics < chart && chart < steps);
        assert!(out.contains("Sila PWSS, North"));
        assert!(out.contains("91%"));
        assert!(out.contains("Work with operators"));
        assert!(out.trim_end().ends_with("June 2025 | PHED"));
    }

    #[test]
    fn mobile_report_has_no_chart() {
        let out = render_view(&view(Language::Assamese, true));
        assert!(out.contains("[North]"));
        assert!(out.contains("সুখী"));
        assert!(!out.contains(text(Language::Assamese, TextKey::WaterSupplyChart)));
    }

    #[test]
    fn both_layouts_write_through_to_the_footer() {
        for mobile in [false, true] {
            let v = view(Language::English, mobile);
            let out = render_view(&v);
            assert_eq!(out, Report(&v).to_string());
            assert!(out.contains("Sila PWSS"));
            assert!(out.trim_end().ends_with(v.text(TextKey::Footer)));
        }
    }

    #[test]
    fn supply_table_shows_totals() {
        let v = view(Language::English, false);
        let out = render_supply(v.supply.as_ref().unwrap(), Language::English);
        assert!(out.contains("Mon"));
        assert!(out.contains("50.00"));
        assert!(out.contains("(−25.00 kl)"));
    }

    #[test]
    fn options_mark_the_current_choice() {
        let opts = vec!["Kamrup".to_string(), "Nagaon".to_string()];
        let out = render_options("District", &opts, Some("Nagaon"));
        assert!(out.contains(" [1] Kamrup"));
        assert!(out.contains("*[2] Nagaon"));
        assert!(render_options("District", &[], None).contains("no options"));
    }

    #[test]
    fn no_data_message_is_translated() {
        assert!(render_no_data(Language::English).contains("No data found"));
    }
}
