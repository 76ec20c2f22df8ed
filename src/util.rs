// Utility helpers for parsing survey cells and formatting numbers.
//
// Spreadsheet exports are messy: percentages arrive as fractions or as
// "85%", dates come in several layouts, and yes/no answers are spelled many
// ways. Everything here turns a cell into a clean value or a neutral default.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use tracing::debug;

/// Parse a numeric cell into `f64`.
///
/// - Trims whitespace and strips thousands separators.
/// - A trailing `%` means percentage points, so the value is divided by 100.
/// - Accepts scientific notation (`5e-1`) but rejects any other alphabetic
///   characters.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    let (s, percent) = match s.strip_suffix('%') {
        Some(rest) => (rest.trim_end(), true),
        None => (s, false),
    };
    if s.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    let v = s.replace(',', "").parse::<f64>().ok()?;
    if !v.is_finite() {
        return None;
    }
    Some(if percent { v / 100.0 } else { v })
}

/// Numeric cell with missing or broken values normalized to 0.
pub fn number_or_zero(s: Option<&str>) -> f64 {
    parse_f64_safe(s).unwrap_or_else(|| {
        if let Some(cell) = s.filter(|c| !c.trim().is_empty()) {
            debug!(cell, "unparseable number, using 0");
        }
        0.0
    })
}

/// Volume cell: like [`number_or_zero`] but never negative.
pub fn volume_or_zero(s: Option<&str>) -> f64 {
    number_or_zero(s).max(0.0)
}

/// Trimmed text cell, empty when missing.
pub fn text_or_empty(s: Option<String>) -> String {
    s.map(|v| v.trim().to_string()).unwrap_or_default()
}

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d %b %Y", "%Y-%m-%d %H:%M:%S"];

pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS.iter().find_map(|fmt| {
        if fmt.contains("%H") {
            chrono::NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|dt| dt.date())
        } else {
            NaiveDate::parse_from_str(s, fmt).ok()
        }
    })
}

/// `Some(true)` / `Some(false)` for the usual yes/no spellings, `None` otherwise.
pub fn parse_flag(s: Option<&str>) -> Option<bool> {
    match s?.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "1.0" => Some(true),
        "no" | "n" | "false" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus locale-aware thousands separators (`1,234.50`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractions_and_percent_cells() {
        assert_eq!(parse_f64_safe(Some(" 0.85 ")), Some(0.85));
        assert_eq!(parse_f64_safe(Some("85%")), Some(0.85));
        assert_eq!(parse_f64_safe(Some("1,250.5")), Some(1250.5));
        assert_eq!(parse_f64_safe(Some("n/a")), None);
        assert_eq!(parse_f64_safe(Some("5e-1")), Some(0.5));
        assert_eq!(parse_f64_safe(Some("2.5E1%")), Some(0.25));
        assert_eq!(parse_f64_safe(Some("inf")), None);
        assert_eq!(parse_f64_safe(Some("NaN")), None);
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn missing_numbers_become_zero() {
        assert_eq!(number_or_zero(None), 0.0);
        assert_eq!(number_or_zero(Some("   ")), 0.0);
        assert_eq!(number_or_zero(Some("unknown")), 0.0);
        assert_eq!(number_or_zero(Some("7.5e1")), 75.0);
        assert_eq!(volume_or_zero(Some("-4")), 0.0);
    }

    #[test]
    fn accepts_common_date_layouts() {
        let want = NaiveDate::from_ymd_opt(2025, 5, 29);
        assert_eq!(parse_date_safe(Some("2025-05-29")), want);
        assert_eq!(parse_date_safe(Some("29-05-2025")), want);
        assert_eq!(parse_date_safe(Some("29/05/2025")), want);
        assert_eq!(parse_date_safe(Some("29 May 2025")), want);
        assert_eq!(parse_date_safe(Some("2025-05-29 00:00:00")), want);
        assert_eq!(parse_date_safe(Some("Day 1")), None);
    }

    #[test]
    fn flags_understand_yes_no_spellings() {
        assert_eq!(parse_flag(Some("Yes")), Some(true));
        assert_eq!(parse_flag(Some(" n ")), Some(false));
        assert_eq!(parse_flag(Some("1")), Some(true));
        assert_eq!(parse_flag(Some("maybe")), None);
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-12.5, 1), "-12.5");
        assert_eq!(format_number(42.0, 0), "42");
        assert_eq!(format_int(9855), "9,855");
    }
}
