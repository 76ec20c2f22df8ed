// Cascading District -> Division -> Sub Division -> Scheme filters.
//
// Option lists keep the first-seen order of the source table; they are never
// sorted, so the selectors stay visually stable between renders.
use crate::error::DashboardError;
use crate::types::{SchemeRecord, Selection};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub districts: Vec<String>,
    pub divisions: Vec<String>,
    pub sub_divisions: Vec<String>,
    pub schemes: Vec<String>,
}

/// Empty strings count as "nothing chosen".
fn provided(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Valid options at every level given the upstream choices.
///
/// Districts are always the whole table. Each lower level is only populated
/// once all of its ancestors are chosen; a choice that matches no row leaves
/// every level below it empty.
pub fn options(
    table: &[SchemeRecord],
    district: Option<&str>,
    division: Option<&str>,
    sub_division: Option<&str>,
) -> FilterOptions {
    let mut out = FilterOptions {
        districts: distinct(table.iter().map(|r| r.district.as_str())),
        ..FilterOptions::default()
    };

    let Some(district) = provided(district) else {
        return out;
    };
    let in_district: Vec<&SchemeRecord> = table.iter().filter(|r| r.district == district).collect();
    out.divisions = distinct(in_district.iter().map(|r| r.division.as_str()));

    let Some(division) = provided(division) else {
        return out;
    };
    let in_division: Vec<&SchemeRecord> = in_district
        .into_iter()
        .filter(|r| r.division == division)
        .collect();
    out.sub_divisions = distinct(in_division.iter().map(|r| r.sub_division.as_str()));

    let Some(sub_division) = provided(sub_division) else {
        return out;
    };
    out.schemes = distinct(
        in_division
            .iter()
            .filter(|r| r.sub_division == sub_division)
            .map(|r| r.scheme_name.as_str()),
    );
    out
}

/// First row matching all four keys, in table order.
///
/// Duplicate scheme names under the same ancestry are not told apart; the
/// earliest row wins every time.
pub fn lookup<'a>(
    table: &'a [SchemeRecord],
    district: &str,
    division: &str,
    sub_division: &str,
    scheme_name: &str,
) -> Result<&'a SchemeRecord, DashboardError> {
    table
        .iter()
        .find(|r| {
            r.district == district
                && r.division == division
                && r.sub_division == sub_division
                && r.scheme_name == scheme_name
        })
        .ok_or_else(|| DashboardError::SchemeNotFound {
            district: district.to_string(),
            division: division.to_string(),
            sub_division: sub_division.to_string(),
            scheme_name: scheme_name.to_string(),
        })
}

pub fn lookup_selection<'a>(
    table: &'a [SchemeRecord],
    selection: &Selection,
) -> Result<&'a SchemeRecord, DashboardError> {
    match selection {
        Selection {
            district: Some(district),
            division: Some(division),
            sub_division: Some(sub_division),
            scheme_name: Some(scheme_name),
        } => lookup(table, district, division, sub_division, scheme_name),
        _ => Err(DashboardError::NoSelection),
    }
}

/// Keep `current` if it is still offered, otherwise fall back to the first option.
pub fn keep_or_first(current: Option<&str>, options: &[String]) -> Option<String> {
    match current {
        Some(c) if options.iter().any(|o| o == c) => Some(c.to_string()),
        _ => options.first().cloned(),
    }
}

/// Apply the scheme reset rule.
///
/// When any ancestor differs from `previous`, the scheme becomes the first of
/// `schemes` (or unset when there are none). Without a previous render, or
/// when only the scheme moved, `current` is returned unchanged.
pub fn next_selection(
    previous: Option<&Selection>,
    current: &Selection,
    schemes: &[String],
) -> Selection {
    match previous {
        Some(prev) if !prev.same_ancestors(current) => Selection {
            scheme_name: schemes.first().cloned(),
            ..current.clone()
        },
        _ => current.clone(),
    }
}
