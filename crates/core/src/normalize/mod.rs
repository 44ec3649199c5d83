//! Normalizers turning raw CMS payloads into the document model.
//!
//! Every function here is pure: it reads only its arguments (and, for asset
//! URLs, a shared read-only [`AssetHost`](crate::AssetHost)). Irregular
//! content inside a payload is absorbed by omission; only records missing a
//! required field, or of the wrong JSON kind, fail with [`MalformedResponse`].

mod button;
mod description;
mod error;
mod global;
mod module;
mod navigation;
mod ordering;
mod page;
mod partner;

pub use button::{format_button, format_button_list};
pub use description::{format_description, format_description_list};
pub use error::{MalformedResponse, Result};
pub use global::normalize_global_config;
pub use module::{format_module, format_module_list};
pub use navigation::{normalize_footer, normalize_header};
pub use ordering::sort_by_index;
pub use page::{find_page, format_page};
pub use partner::{format_partner, format_partner_list};

use serde::Deserialize;
use serde_json::Value;

use crate::document::PUBLISHED;

const NO_ITEMS: &[Value] = &[];

/// Returns true if the record's `status` is `published`.
fn is_published(record: &Value) -> bool {
    record.get("status").and_then(Value::as_str) == Some(PUBLISHED)
}

/// Deserializes a record into its raw field set.
fn parse<'a, T: Deserialize<'a>>(record: &'a Value, entity: &'static str) -> Result<T> {
    T::deserialize(record).map_err(|e| MalformedResponse::shape(entity, e))
}

/// Reads the `key` tag a record is classified by.
fn required_key<'a>(record: &'a Value, entity: &'static str) -> Result<&'a str> {
    match record.get("key") {
        None | Some(Value::Null) => Err(MalformedResponse::missing(entity, "key")),
        Some(Value::String(key)) => Ok(key.as_str()),
        Some(other) => Err(MalformedResponse::shape(
            entity,
            format!("expected `key` to be a string, got {other}"),
        )),
    }
}

/// Reads a nested list field. Absent and `null` lists are empty.
fn list_field<'a>(record: &'a Value, field: &str, entity: &'static str) -> Result<&'a [Value]> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(NO_ITEMS),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(MalformedResponse::shape(
            entity,
            format!("expected `{field}` to be a list"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_published() {
        assert!(is_published(&json!({ "status": "published" })));
        assert!(!is_published(&json!({ "status": "draft" })));
        assert!(!is_published(&json!({ "status": "Published" })));
        assert!(!is_published(&json!({})));
    }

    #[test]
    fn test_required_key() {
        assert_eq!(required_key(&json!({ "key": "BrandModule" }), "module"), Ok("BrandModule"));
        assert_eq!(
            required_key(&json!({}), "module"),
            Err(MalformedResponse::missing("module", "key"))
        );
        assert!(matches!(
            required_key(&json!({ "key": 4 }), "module"),
            Err(MalformedResponse::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_list_field() {
        let record = json!({ "a": [1, 2], "b": null, "c": "nope" });
        assert_eq!(list_field(&record, "a", "module").unwrap().len(), 2);
        assert!(list_field(&record, "b", "module").unwrap().is_empty());
        assert!(list_field(&record, "missing", "module").unwrap().is_empty());
        assert!(list_field(&record, "c", "module").is_err());
    }
}
