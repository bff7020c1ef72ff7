//! Roster Page
//!
//! What the view needs from the page hosting the roster. The browser build
//! implements it over the DOM.

use crate::member::Member;

/// A row handle paired with the record read from it
#[derive(Debug, Clone)]
pub struct PageRow<R> {
    pub handle: R,
    pub member: Member,
}

pub trait RosterPage {
    type Row;

    /// Current sort-control value
    fn sort_value(&self) -> String;
    /// The page may normalize values that match no option.
    fn set_sort_value(&self, value: &str);
    /// `None` when the page has no filter input.
    fn filter_value(&self) -> Option<String>;
    /// Member rows in current page order
    fn rows(&self) -> Vec<PageRow<Self::Row>>;
    /// Put the rows in the given order. Never adds or removes rows.
    fn reorder(&self, rows: &[PageRow<Self::Row>]);
    fn set_visible(&self, row: &Self::Row, visible: bool);
}
