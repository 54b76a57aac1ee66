// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Case- and accent-insensitive matching for dropdown search.

/// Fold text to lowercase ASCII so "Café" and "cafe" compare equal.
pub fn fold(text: &str) -> String {
    deunicode::deunicode(text).to_ascii_lowercase()
}

/// Whether `label` matches the user's search `query`.
///
/// Every whitespace-separated term of the query must appear somewhere in the
/// folded label. An empty query matches everything.
pub fn matches_query(label: &str, query: &str) -> bool {
    let haystack = fold(label);
    fold(query)
        .split_whitespace()
        .all(|term| haystack.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("Slack", ""));
        assert!(matches_query("Slack", "   "));
    }

    #[test]
    fn matching_ignores_case_and_accents() {
        assert!(matches_query("Café Notifications", "cafe"));
        assert!(matches_query("PagerDuty", "duty"));
        assert!(!matches_query("PagerDuty", "slack"));
    }

    #[test]
    fn all_terms_must_match() {
        assert!(matches_query("GitHub Enterprise", "git ent"));
        assert!(!matches_query("GitHub Enterprise", "git lab"));
    }
}
