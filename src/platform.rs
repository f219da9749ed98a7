/// Host platform boundaries, injected into the views so tests can stand in
/// doubles for the browser.
use std::future::Future;
use std::pin::Pin;

use crate::tab_data::TabRecord;

/// A pending tab query. Resolves exactly once with the full snapshot; there
/// is no streaming and no cancellation, so callers that can be superseded
/// must discard stale completions themselves.
pub type TabQuery = Pin<Box<dyn Future<Output = Result<Vec<TabRecord>, String>>>>;

/// The browser's view of open tabs.
pub trait TabProvider {
    /// Fetch the open tabs whose title matches `title_filter`; the empty
    /// filter means all tabs.
    fn query_tabs(&self, title_filter: &str) -> TabQuery;

    /// Bring the given tab to foreground focus. Fire-and-forget: failures
    /// are swallowed, no result is reported.
    fn activate_tab(&self, tab_id: i32);
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Locale string table lookup.
pub trait Localization {
    fn message(&self, key: &str) -> String;
}

#[cfg(test)]
pub(crate) mod doubles {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{Localization, PreferenceStore};

    /// In-memory preference store.
    #[derive(Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> MemoryStore {
            let store = MemoryStore::default();
            store.set(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
        }
    }

    /// Localization double that answers `[key]` and counts how often each
    /// key was fetched.
    #[derive(Default)]
    pub struct RecordingI18n {
        fetches: RefCell<HashMap<String, usize>>,
    }

    impl RecordingI18n {
        pub fn fetch_count(&self, key: &str) -> usize {
            self.fetches.borrow().get(key).copied().unwrap_or(0)
        }
    }

    impl Localization for RecordingI18n {
        fn message(&self, key: &str) -> String {
            *self.fetches.borrow_mut().entry(key.to_owned()).or_insert(0) += 1;
            format!("[{}]", key)
        }
    }
}
