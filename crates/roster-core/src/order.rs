//! Sort Order
//!
//! Parsing of `"<field>-<direction>"` preferences and the stable ordering
//! they describe.

use std::cmp::Ordering;

use crate::member::Member;

/// Column a roster can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// `crocette_prese`
    Presented,
    /// `crocette_pay`
    Paid,
    /// `crocette_due`
    Due,
    /// `name`
    Name,
    /// `last`
    LastActivity,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Presented => "crocette_prese",
            SortField::Paid => "crocette_pay",
            SortField::Due => "crocette_due",
            SortField::Name => "name",
            SortField::LastActivity => "last",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "crocette_prese" => Some(SortField::Presented),
            "crocette_pay" => Some(SortField::Paid),
            "crocette_due" => Some(SortField::Due),
            "name" => Some(SortField::Name),
            "last" => Some(SortField::LastActivity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Only `"asc"` is ascending.
    pub fn parse(s: &str) -> Self {
        if s == "asc" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A parsed sort preference.
///
/// `field` is `None` when the preference names no known column; every pair of
/// members then compares equal and the current order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Parse a control value such as `"crocette_pay-desc"`.
    ///
    /// Only the first two `-` separated segments are looked at. Never fails.
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split('-');
        let field = parts.next().and_then(SortField::parse);
        let direction = parts.next().map(SortDirection::parse).unwrap_or_default();
        Self { field, direction }
    }

    pub fn compare(&self, a: &Member, b: &Member) -> Ordering {
        let ord = match self.field {
            Some(SortField::Presented) => a.presented.cmp(&b.presented),
            Some(SortField::Paid) => a.paid.cmp(&b.paid),
            Some(SortField::Due) => a.due.cmp(&b.due),
            // Browser string order: UTF-16 code units, case-sensitive
            Some(SortField::Name) => a.name.encode_utf16().cmp(b.name.encode_utf16()),
            Some(SortField::LastActivity) => a.last_activity_ms.cmp(&b.last_activity_ms),
            None => Ordering::Equal,
        };

        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Stable in-place sort of anything that carries a [`Member`].
///
/// Equal keys keep their relative order in both directions.
pub fn sort_by_order<T, F>(entries: &mut [T], order: &SortOrder, member: F)
where
    F: Fn(&T) -> &Member,
{
    entries.sort_by(|a, b| order.compare(member(a), member(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Member {
        Member {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn paying(name: &str, paid: i64) -> Member {
        Member {
            name: name.to_string(),
            paid,
            ..Default::default()
        }
    }

    fn names(members: &[Member]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    fn sorted(mut members: Vec<Member>, value: &str) -> Vec<Member> {
        sort_by_order(&mut members, &SortOrder::parse(value), |m| m);
        members
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!(
            SortOrder::parse("crocette_pay-desc"),
            SortOrder::new(SortField::Paid, SortDirection::Descending)
        );
        assert_eq!(
            SortOrder::parse("name-asc"),
            SortOrder::new(SortField::Name, SortDirection::Ascending)
        );
        assert_eq!(
            SortOrder::parse("last-asc-extra"),
            SortOrder::new(SortField::LastActivity, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_parse_sort_order_lenient() {
        // Missing or odd direction means descending
        assert_eq!(SortOrder::parse("crocette_due").direction, SortDirection::Descending);
        assert_eq!(SortOrder::parse("name-ASC").direction, SortDirection::Descending);
        assert_eq!(SortOrder::parse("bogus-asc").field, None);
        assert_eq!(SortOrder::parse(""), SortOrder::default());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in [
            SortField::Presented,
            SortField::Paid,
            SortField::Due,
            SortField::Name,
            SortField::LastActivity,
        ] {
            assert_eq!(SortField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_sort_by_name_is_case_sensitive() {
        let members = vec![named("Bob"), named("alice"), named("Carol")];
        assert_eq!(names(&sorted(members, "name-asc")), ["Bob", "Carol", "alice"]);
    }

    #[test]
    fn test_sort_by_name_uses_utf16_order() {
        // By code point U+FF21 comes first; by UTF-16 unit the surrogate pair does
        let members = vec![named("\u{1F600}"), named("\u{FF21}")];
        assert_eq!(names(&sorted(members, "name-asc")), ["\u{1F600}", "\u{FF21}"]);
    }

    #[test]
    fn test_sort_by_paid_desc() {
        let members = vec![paying("a", 3), paying("b", 1), paying("c", 2)];
        let result = sorted(members, "crocette_pay-desc");
        let paid: Vec<i64> = result.iter().map(|m| m.paid).collect();
        assert_eq!(paid, [3, 2, 1]);
    }

    #[test]
    fn test_sort_by_counters_and_last() {
        let mut a = named("a");
        a.presented = 2;
        a.due = 9;
        a.last_activity_ms = 500;
        let mut b = named("b");
        b.presented = 1;
        b.due = 4;
        b.last_activity_ms = 1_000;

        let members = vec![a, b];
        assert_eq!(names(&sorted(members.clone(), "crocette_prese-asc")), ["b", "a"]);
        assert_eq!(names(&sorted(members.clone(), "crocette_due-asc")), ["b", "a"]);
        assert_eq!(names(&sorted(members, "last-desc")), ["b", "a"]);
    }

    #[test]
    fn test_missing_date_sorts_as_epoch() {
        let mut dated = named("dated");
        dated.last_activity_ms = 1;
        let members = vec![dated, named("undated")];
        assert_eq!(names(&sorted(members, "last-asc")), ["undated", "dated"]);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let members = vec![paying("c", 1), paying("a", 3), paying("b", 2)];
        assert_eq!(names(&sorted(members.clone(), "bogus-asc")), ["c", "a", "b"]);
        assert_eq!(names(&sorted(members, "")), ["c", "a", "b"]);
    }

    #[test]
    fn test_ties_are_stable_in_both_directions() {
        let members = vec![paying("x", 1), paying("y", 2), paying("z", 1)];
        assert_eq!(names(&sorted(members.clone(), "crocette_pay-asc")), ["x", "z", "y"]);
        assert_eq!(names(&sorted(members, "crocette_pay-desc")), ["y", "x", "z"]);
    }
}
