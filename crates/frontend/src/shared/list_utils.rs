//! Search box filtering shared by the list pages

/// Rows that can be matched against the search box
pub trait Searchable {
    /// Texts the search box looks into
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keeps the order of `items`; a blank filter returns everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        code: &'static str,
        name: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.code, self.name]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: "CLI-0001", name: "María González" },
            Row { code: "CLI-0002", name: "Juan Pérez" },
        ]
    }

    #[test]
    fn test_blank_filter_keeps_all() {
        assert_eq!(filter_list(&rows(), "  ").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive_over_all_fields() {
        assert_eq!(filter_list(&rows(), "maría")[0].code, "CLI-0001");
        assert_eq!(filter_list(&rows(), "cli-0002")[0].name, "Juan Pérez");
        assert!(filter_list(&rows(), "zzz").is_empty());
    }
}
