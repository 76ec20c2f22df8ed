// Per-session state: language and the cascading selection.
//
// A session owns its selection; nothing here is global. Every change goes
// through `resolve`, which is one full render pass over the filters.
use crate::filters::{keep_or_first, next_selection, options, FilterOptions};
use crate::i18n::Language;
use crate::types::{SchemeRecord, Selection};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    pub language: Language,
    selection: Selection,
    /// Selection recorded by the last render; `None` before the first one.
    previous: Option<Selection>,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            selection: Selection::default(),
            previous: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_first_render(&self) -> bool {
        self.previous.is_none()
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Resolve `requested` against the table and make it the current selection.
    ///
    /// Each level below a changed ancestor resets to its first option. A level
    /// whose ancestors are unchanged (or the first render) keeps its requested
    /// value while it is still offered and otherwise falls back to the first
    /// option. If any ancestor differs from the previous render the scheme
    /// resets to the first scheme on offer.
    pub fn resolve(&mut self, table: &[SchemeRecord], requested: &Selection) -> FilterOptions {
        let prev = self.previous.as_ref();

        let top = options(table, None, None, None);
        let district = keep_or_first(requested.district.as_deref(), &top.districts);
        let district_changed = prev.is_some_and(|p| p.district != district);

        let by_district = options(table, district.as_deref(), None, None);
        let division = if district_changed {
            by_district.divisions.first().cloned()
        } else {
            keep_or_first(requested.division.as_deref(), &by_district.divisions)
        };
        let division_changed = district_changed || prev.is_some_and(|p| p.division != division);

        let by_division = options(table, district.as_deref(), division.as_deref(), None);
        let sub_division = if division_changed {
            by_division.sub_divisions.first().cloned()
        } else {
            keep_or_first(requested.sub_division.as_deref(), &by_division.sub_divisions)
        };

        let resolved = options(
            table,
            district.as_deref(),
            division.as_deref(),
            sub_division.as_deref(),
        );

        let candidate = Selection {
            district,
            division,
            sub_division,
            scheme_name: requested.scheme_name.clone(),
        };
        let mut next = next_selection(self.previous.as_ref(), &candidate, &resolved.schemes);
        next.scheme_name = keep_or_first(next.scheme_name.as_deref(), &resolved.schemes);

        debug!(
            district = ?next.district,
            division = ?next.division,
            sub_division = ?next.sub_division,
            scheme = ?next.scheme_name,
            first_render = self.is_first_render(),
            "selection resolved"
        );

        self.previous = Some(next.clone());
        self.selection = next;
        resolved
    }

    /// Re-render with the current selection but a different scheme.
    pub fn choose_scheme(&mut self, table: &[SchemeRecord], scheme_name: &str) -> FilterOptions {
        let requested = Selection {
            scheme_name: Some(scheme_name.to_string()),
            ..self.selection.clone()
        };
        self.resolve(table, &requested)
    }
}
