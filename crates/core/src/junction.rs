//! Junction wrapper adapters.
//!
//! Many-to-many relations come back from the CMS wrapped in an intermediate
//! object whose only meaningful field holds the related record, e.g.
//! `{ "description_id": { "index": 1, ... } }`. Each adapter returns the inner
//! record when the wrapper is present and the record itself otherwise, so the
//! wrapped and unwrapped shapes normalize identically.

use serde_json::Value;

/// Wrapper field used by page modules and module buttons.
pub const ITEM_FIELD: &str = "item";
pub const DESCRIPTION_FIELD: &str = "description_id";
pub const PARTNER_FIELD: &str = "partner_id";
pub const TOP_MENU_FIELD: &str = "topMenu_id";
pub const BOTTOM_MENU_FIELD: &str = "bottomMenu_id";
pub const SOCIAL_MEDIA_FIELD: &str = "socialMedia_id";

fn unwrap_or_passthrough<'a>(record: &'a Value, field: &str) -> &'a Value {
    match record.get(field) {
        Some(inner) if inner.is_object() => inner,
        _ => record,
    }
}

/// Unwraps a page module record (`item`).
pub fn unwrap_module(record: &Value) -> &Value {
    unwrap_or_passthrough(record, ITEM_FIELD)
}

/// Unwraps a module button record (`item`).
pub fn unwrap_button(record: &Value) -> &Value {
    unwrap_or_passthrough(record, ITEM_FIELD)
}

/// Unwraps a description record (`description_id`).
pub fn unwrap_description(record: &Value) -> &Value {
    unwrap_or_passthrough(record, DESCRIPTION_FIELD)
}

/// Unwraps a partner record (`partner_id`).
pub fn unwrap_partner(record: &Value) -> &Value {
    unwrap_or_passthrough(record, PARTNER_FIELD)
}

/// Unwraps a header menu record (`topMenu_id`).
pub fn unwrap_top_menu(record: &Value) -> &Value {
    unwrap_or_passthrough(record, TOP_MENU_FIELD)
}

/// Unwraps a footer menu record (`bottomMenu_id`).
pub fn unwrap_bottom_menu(record: &Value) -> &Value {
    unwrap_or_passthrough(record, BOTTOM_MENU_FIELD)
}

/// Unwraps a footer social media record (`socialMedia_id`).
pub fn unwrap_social_media(record: &Value) -> &Value {
    unwrap_or_passthrough(record, SOCIAL_MEDIA_FIELD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwraps_wrapped_record() {
        let record = json!({ "description_id": { "index": 2, "text": "Fast" } });
        assert_eq!(
            unwrap_description(&record),
            &json!({ "index": 2, "text": "Fast" })
        );
    }

    #[test]
    fn test_passes_through_direct_record() {
        let record = json!({ "index": 2, "text": "Fast" });
        assert_eq!(unwrap_description(&record), &record);
    }

    #[test]
    fn test_wrapped_and_direct_are_identical() {
        let inner = json!({ "index": 1, "status": "published", "key": "BrandModule" });
        let wrapped = json!({ "id": 12, "item": inner.clone() });
        assert_eq!(unwrap_module(&wrapped), unwrap_module(&inner));
    }

    #[test]
    fn test_null_wrapper_passes_through() {
        let record = json!({ "partner_id": null });
        assert_eq!(unwrap_partner(&record), &record);
    }

    #[test]
    fn test_each_family_uses_its_own_field() {
        let inner = json!({ "title": "Docs" });
        assert_eq!(unwrap_top_menu(&json!({ "topMenu_id": inner.clone() })), &inner);
        assert_eq!(unwrap_bottom_menu(&json!({ "bottomMenu_id": inner.clone() })), &inner);
        assert_eq!(unwrap_social_media(&json!({ "socialMedia_id": inner.clone() })), &inner);
        assert_eq!(unwrap_button(&json!({ "item": inner.clone() })), &inner);

        // A header wrapper is not a footer wrapper.
        let header_wrapped = json!({ "topMenu_id": inner.clone() });
        assert_eq!(unwrap_bottom_menu(&header_wrapped), &header_wrapped);
    }
}
