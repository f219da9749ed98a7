/// The one persisted setting: whether title matching honors case.
use crate::platform::PreferenceStore;

/// Store key for the case-sensitivity flag.
pub const CASE_PREF_KEY: &str = "case_sensing";

/// Decode a stored flag value. `"true"` is canonical; `"yes"` is the legacy
/// encoding older installs wrote and is accepted forever. Anything else,
/// including an absent value, means case-insensitive.
pub fn parse_case_flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("true" | "yes"))
}

/// Encode a flag for storage. Writes are always canonical, so a legacy
/// value disappears on the first save.
pub fn encode_case_flag(case_sensitive: bool) -> &'static str {
    if case_sensitive { "true" } else { "false" }
}

pub fn load_case_flag(store: &dyn PreferenceStore) -> bool {
    parse_case_flag(store.get(CASE_PREF_KEY).as_deref())
}

pub fn save_case_flag(store: &dyn PreferenceStore, case_sensitive: bool) {
    store.set(CASE_PREF_KEY, encode_case_flag(case_sensitive));
}
