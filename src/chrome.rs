/// Platform boundary implementations backed by the extension APIs.
use wasm_bindgen::prelude::*;

use crate::platform::{Localization, PreferenceStore, TabProvider, TabQuery};

// Import JS bridge functions
#[wasm_bindgen(module = "/chrome.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = queryTabs)]
    async fn query_tabs_js(title_filter: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = activateTab)]
    fn activate_tab_js(tab_id: i32);

    #[wasm_bindgen(js_name = localizedMessage)]
    fn localized_message_js(key: &str) -> String;
}

/// Tab enumeration and activation via `chrome.tabs`.
pub struct ChromeTabs;

impl TabProvider for ChromeTabs {
    fn query_tabs(&self, title_filter: &str) -> TabQuery {
        let filter = title_filter.to_owned();
        Box::pin(async move {
            let tabs_js = query_tabs_js(&filter)
                .await
                .map_err(|e| format!("Failed to query tabs: {:?}", e))?;
            serde_wasm_bindgen::from_value(tabs_js)
                .map_err(|e| format!("Failed to parse tabs: {:?}", e))
        })
    }

    fn activate_tab(&self, tab_id: i32) {
        activate_tab_js(tab_id);
    }
}

/// Locale strings via `chrome.i18n`.
pub struct ChromeI18n;

impl Localization for ChromeI18n {
    fn message(&self, key: &str) -> String {
        localized_message_js(key)
    }
}

/// Preference persistence via the page's `window.localStorage`.
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable; {} not saved", key),
        }
    }
}
