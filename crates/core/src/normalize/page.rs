use serde::Deserialize;
use serde_json::Value;

use super::error::{require, MalformedResponse, Result};
use super::{format_module_list, is_published, list_field, parse};
use crate::document::Page;
use crate::serde::deserialize_lenient_string;

const ENTITY: &str = "page";

#[derive(Deserialize)]
struct RawPage {
    key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    status: Option<String>,
}

fn key_matches(record: &Value, wanted: &str) -> bool {
    record
        .get("key")
        .and_then(Value::as_str)
        .is_some_and(|key| key.to_lowercase() == wanted)
}

/// Looks up a page by key in the full page list.
///
/// The first record that is published and whose key case-insensitively
/// equals `key` is normalized and returned. `Ok(None)` means no such page
/// exists, which is an expected outcome for unknown routes.
///
/// # Examples
///
/// ```
/// use sitecms_core::normalize::find_page;
/// use serde_json::json;
///
/// let pages = json!([
///     { "key": "home", "status": "draft" },
///     { "key": "HOME", "status": "published", "moduleList": [] },
/// ]);
/// let page = find_page(&pages, "home").unwrap().unwrap();
/// assert_eq!(page.key, "HOME");
/// assert!(find_page(&pages, "about").unwrap().is_none());
/// ```
pub fn find_page(pages: &Value, key: &str) -> Result<Option<Page>> {
    let pages = pages
        .as_array()
        .ok_or_else(|| MalformedResponse::shape("page list", "expected a list of pages"))?;
    let wanted = key.to_lowercase();

    pages
        .iter()
        .find(|record| is_published(record) && key_matches(record, &wanted))
        .map(format_page)
        .transpose()
}

/// Formats a single page record and its module tree.
pub fn format_page(record: &Value) -> Result<Page> {
    let raw: RawPage = parse(record, ENTITY)?;

    Ok(Page {
        key: require(raw.key, ENTITY, "key")?,
        status: raw.status.unwrap_or_default(),
        module_list: format_module_list(list_field(record, "moduleList", ENTITY)?)?,
    })
}
