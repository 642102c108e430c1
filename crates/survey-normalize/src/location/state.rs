/// Whether a stored state matches the state given in an answer.
///
/// An empty query matches any state. Otherwise the lowercased strings must be
/// equal, or, when the query is spelled out (longer than two letters), a
/// two-letter stored code matches if the first letters agree and the code's
/// second letter appears anywhere in the query. The abbreviation check is
/// loose: `"co"` matches `"california"`.
///
/// ```
/// use survey_normalize::match_states;
///
/// assert!(match_states("ca", "california"));
/// assert!(match_states("ca", ""));
/// assert!(!match_states("ca", "co"));
/// ```
pub fn match_states(stored: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let stored = stored.to_lowercase();
    let query = query.to_lowercase();
    if stored == query {
        return true;
    }
    if query.chars().count() <= 2 {
        return false;
    }
    let mut code = stored.chars();
    match (code.next(), code.next(), code.next()) {
        (Some(first), Some(second), None) => query.starts_with(first) && query.contains(second),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case() {
        assert!(match_states("ny", "NY"));
        assert!(match_states("new york", "New York"));
    }

    #[test]
    fn spelled_out_names_match_codes() {
        assert!(match_states("wa", "washington"));
        assert!(match_states("tx", "texas"));
        assert!(match_states("nc", "north carolina"));
    }

    #[test]
    fn abbreviation_needs_first_letter() {
        assert!(!match_states("ca", "arizona"));
        assert!(!match_states("az", "california"));
    }

    #[test]
    fn two_letter_queries_must_be_exact() {
        assert!(!match_states("ca", "co"));
        assert!(!match_states("ca", "c"));
    }

    #[test]
    fn full_stored_names_only_match_exactly() {
        assert!(!match_states("california", "calif"));
    }

    #[test]
    fn abbreviation_check_is_loose() {
        assert!(match_states("co", "california"));
    }
}
