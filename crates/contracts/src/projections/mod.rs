pub mod p900_sales_report;
pub mod p901_expense_report;

/// Inclusive `YYYY-MM-DD` range check. ISO dates compare correctly as text;
/// an empty bound is open.
pub fn date_in_range(date: &str, from: Option<&str>, to: Option<&str>) -> bool {
    let from = from.map(str::trim).filter(|s| !s.is_empty());
    let to = to.map(str::trim).filter(|s| !s.is_empty());
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

/// Case-insensitive substring match; an empty needle matches everything
pub fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim).filter(|s| !s.is_empty()) {
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_is_inclusive() {
        assert!(date_in_range("2024-03-01", Some("2024-03-01"), Some("2024-03-31")));
        assert!(date_in_range("2024-03-31", Some("2024-03-01"), Some("2024-03-31")));
        assert!(!date_in_range("2024-04-01", Some("2024-03-01"), Some("2024-03-31")));
        assert!(!date_in_range("2024-02-29", Some("2024-03-01"), None));
        assert!(date_in_range("1999-01-01", None, Some("")));
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("María González", Some("gonzález")));
        assert!(contains_ci("María González", Some("  MARÍA ")));
        assert!(!contains_ci("María González", Some("pérez")));
        assert!(contains_ci("cualquiera", None));
        assert!(contains_ci("cualquiera", Some("")));
    }
}
