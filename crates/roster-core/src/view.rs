//! Roster View
//!
//! Startup and event handling for a roster page: restore the saved sort,
//! sort, filter, and react to control changes. Rows are only reordered and
//! hidden, never created or removed.

use crate::filter::NameFilter;
use crate::order::{sort_by_order, SortOrder};
use crate::page::RosterPage;
use crate::preference::{PreferenceStore, SortPreference};

/// Outcome of a sort pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPass {
    pub order: SortOrder,
    pub rows: usize,
}

/// Outcome of a filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPass {
    pub query: String,
    pub visible: usize,
    pub rows: usize,
}

/// What happened on page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub restored: Option<String>,
    pub sort: SortPass,
    pub filter: Option<FilterPass>,
}

/// Outcome of a sort-control change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChange {
    pub saved: Result<(), String>,
    pub sort: SortPass,
}

pub struct RosterView<P, S> {
    page: P,
    preference: SortPreference<S>,
}

impl<P: RosterPage, S: PreferenceStore> RosterView<P, S> {
    /// `None` when the page lacks its sort control or member container;
    /// nothing is then bound and no pass runs.
    pub fn attach(page: Option<P>, preference: SortPreference<S>) -> Option<Self> {
        Some(Self {
            page: page?,
            preference,
        })
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Restore the saved sort into the control, then sort, then filter.
    pub fn start(&self) -> Startup {
        let restored = self.preference.restore();
        if let Some(saved) = &restored {
            self.page.set_sort_value(saved);
        }
        let sort = self.apply_sort();
        let filter = self.apply_filter();
        Startup {
            restored,
            sort,
            filter,
        }
    }

    /// Save the control value, then sort. A failed save still sorts.
    pub fn sort_changed(&self) -> SortChange {
        let saved = self.preference.save(&self.page.sort_value());
        let sort = self.apply_sort();
        SortChange { saved, sort }
    }

    pub fn filter_changed(&self) -> Option<FilterPass> {
        self.apply_filter()
    }

    pub fn apply_sort(&self) -> SortPass {
        let order = SortOrder::parse(&self.page.sort_value());
        let mut rows = self.page.rows();
        sort_by_order(&mut rows, &order, |row| &row.member);
        self.page.reorder(&rows);
        SortPass {
            order,
            rows: rows.len(),
        }
    }

    /// `None` without a filter input; visibility is then left alone.
    pub fn apply_filter(&self) -> Option<FilterPass> {
        let filter = NameFilter::new(&self.page.filter_value()?);
        let rows = self.page.rows();
        let mut visible = 0;
        for row in &rows {
            let shown = filter.matches(&row.member.name);
            self.page.set_visible(&row.handle, shown);
            if shown {
                visible += 1;
            }
        }
        Some(FilterPass {
            query: filter.query().to_string(),
            visible,
            rows: rows.len(),
        })
    }
}
