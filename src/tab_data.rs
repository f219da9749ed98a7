/// Data structures for Tab Finder
use serde::{Deserialize, Serialize};

/// A browser tab as reported by the query bridge: the opaque id the browser
/// assigned to it plus its display title. A fresh snapshot is fetched for
/// every search; records are never cached across queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabRecord {
    pub id: i32,
    pub title: String,
}

impl TabRecord {
    pub fn new(id: i32, title: impl Into<String>) -> TabRecord {
        TabRecord {
            id,
            title: title.into(),
        }
    }
}
