//! Name Filter

/// Case-insensitive substring match on member names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    query: String,
}

impl NameFilter {
    /// Build from raw input text; surrounding whitespace is ignored.
    pub fn new(raw: &str) -> Self {
        Self {
            query: raw.trim().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// An empty filter matches everything.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_substring() {
        let filter = NameFilter::new("an");
        let shown: Vec<&str> = ["Anna", "Marco", "Ann"]
            .into_iter()
            .filter(|name| filter.matches(name))
            .collect();
        assert_eq!(shown, ["Anna", "Ann"]);
    }

    #[test]
    fn test_filter_trims_and_lowercases() {
        let filter = NameFilter::new("  MAR \t");
        assert_eq!(filter.query(), "mar");
        assert!(filter.matches("Marco"));
        assert!(!filter.matches("Anna"));
    }

    #[test]
    fn test_empty_filter_shows_everything() {
        for raw in ["", "   "] {
            let filter = NameFilter::new(raw);
            assert!(filter.is_empty());
            assert!(filter.matches("Anna"));
            assert!(filter.matches(""));
        }
    }

    #[test]
    fn test_filter_non_empty_hides_nameless() {
        assert!(!NameFilter::new("a").matches(""));
    }
}
