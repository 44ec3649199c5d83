use serde::{Deserialize, Serialize};

use super::Module;

/// Status value that makes a record eligible for display.
pub const PUBLISHED: &str = "published";

/// A published page and its ordered modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub key: String,
    pub status: String,
    pub module_list: Vec<Module>,
}
