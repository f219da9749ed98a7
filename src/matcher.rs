/// Title matching for the search view.
use crate::tab_data::TabRecord;

/// Select the tabs whose title contains `query` as a contiguous substring.
///
/// With `case_sensitive` unset, both the query and each title are
/// Unicode-lowercased before the comparison, so "AB" finds "abc". With it
/// set, titles are compared verbatim. The empty query matches every tab.
///
/// The output is a stable filter of the input: matching tabs in their
/// original order, without ranking.
pub fn filter_tabs(query: &str, tabs: &[TabRecord], case_sensitive: bool) -> Vec<TabRecord> {
    if case_sensitive {
        return tabs
            .iter()
            .filter(|tab| tab.title.contains(query))
            .cloned()
            .collect();
    }

    let needle = query.to_lowercase();
    tabs.iter()
        .filter(|tab| tab.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tabs() -> Vec<TabRecord> {
        vec![
            TabRecord::new(1, "foo"),
            TabRecord::new(2, "bar"),
            TabRecord::new(3, "foobar"),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let tabs = sample_tabs();

        assert_eq!(filter_tabs("", &tabs, false), tabs);
        assert_eq!(filter_tabs("", &tabs, true), tabs);
    }

    #[test]
    fn test_case_insensitive_match() {
        let tabs = vec![TabRecord::new(1, "abc")];

        assert_eq!(filter_tabs("AB", &tabs, false), tabs);
    }

    #[test]
    fn test_case_sensitive_match() {
        let tabs = vec![TabRecord::new(1, "abc")];

        assert_eq!(filter_tabs("AB", &tabs, true), Vec::<TabRecord>::new());
        assert_eq!(filter_tabs("ab", &tabs, true), tabs);
    }

    #[test]
    fn test_preserves_input_order() {
        let matched = filter_tabs("foo", &sample_tabs(), true);

        assert_eq!(
            matched,
            vec![TabRecord::new(1, "foo"), TabRecord::new(3, "foobar")]
        );
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_tabs("zzz", &sample_tabs(), false).is_empty());
    }

    #[test]
    fn test_substring_anywhere_in_title() {
        let tabs = vec![TabRecord::new(4, "The Rust Programming Language")];

        assert_eq!(filter_tabs("Programming", &tabs, true), tabs);
        assert_eq!(filter_tabs("language", &tabs, false), tabs);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let tabs = vec![TabRecord::new(5, "Überblick"), TabRecord::new(6, "посты")];

        assert_eq!(filter_tabs("über", &tabs, false), vec![tabs[0].clone()]);
        assert_eq!(filter_tabs("ПОСТЫ", &tabs, false), vec![tabs[1].clone()]);
        assert!(filter_tabs("über", &tabs, true).is_empty());
    }

    #[test]
    fn test_empty_tab_list() {
        assert!(filter_tabs("anything", &[], false).is_empty());
        assert!(filter_tabs("", &[], true).is_empty());
    }
}
