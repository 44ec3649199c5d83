use serde::Deserialize;
use serde_json::Value;

use super::error::{require, Result};
use super::{parse, required_key, sort_by_index};
use crate::document::{
    Button, ButtonKey, ButtonLink, ButtonStateStyle, ButtonStyles, CommonButton,
    DownloadAppButton, PUBLISHED,
};
use crate::junction;
use crate::serde::{deserialize_lenient_string, deserialize_optional_string};

const ENTITY: &str = "button";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawButton {
    index: Option<i64>,
    #[serde(default, rename = "type", deserialize_with = "deserialize_lenient_string")]
    button_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    link_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    link_target: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_background_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_font_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_border_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    android_url: Option<String>,
    #[serde(default, rename = "iOSUrl", deserialize_with = "deserialize_optional_string")]
    ios_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    extension_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    other_url: Option<String>,
}

/// Buttons carry no status in most schemas; one that does must be published.
fn is_withdrawn(record: &Value) -> bool {
    match record.get("status").and_then(Value::as_str) {
        Some(status) => status != PUBLISHED,
        None => false,
    }
}

/// Formats a button record, unwrapping its `item` junction object.
///
/// Returns `Ok(None)` for buttons with an unrecognized `key` or a
/// non-published `status`.
pub fn format_button(record: &Value) -> Result<Option<Button>> {
    let data = junction::unwrap_button(record);
    if is_withdrawn(data) {
        return Ok(None);
    }
    let Some(key) = ButtonKey::classify(required_key(data, ENTITY)?).matched() else {
        return Ok(None);
    };

    let raw: RawButton = parse(data, ENTITY)?;
    let index = require(raw.index, ENTITY, "index")?;

    let button = match key {
        ButtonKey::Common => Button::Common(CommonButton {
            index,
            button_type: raw.button_type,
            link: ButtonLink {
                url: raw.link_url,
                target: raw.link_target,
            },
            text: raw.text,
            styles: ButtonStyles {
                default: ButtonStateStyle {
                    background_color: raw.default_background_color,
                    font_color: raw.default_font_color,
                    border_color: raw.default_border_color,
                },
            },
        }),
        ButtonKey::DownloadApp => Button::DownloadApp(DownloadAppButton {
            index,
            button_type: raw.button_type,
            android_url: raw.android_url,
            ios_url: raw.ios_url,
            extension_url: raw.extension_url,
            other_url: raw.other_url,
        }),
    };

    Ok(Some(button))
}

/// Formats a button list, dropping unrecognized buttons and sorting by index.
pub fn format_button_list(list: &[Value]) -> Result<Vec<Button>> {
    let mut buttons = list
        .iter()
        .map(format_button)
        .filter_map(|button| button.transpose())
        .collect::<Result<Vec<_>>>()?;
    sort_by_index(&mut buttons);
    Ok(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Indexed;
    use serde_json::json;

    #[test]
    fn test_common_button() {
        let record = json!({ "item": {
            "key": "CommonButton",
            "index": 1,
            "type": "primary",
            "text": "Get started",
            "linkUrl": "https://app.example.com",
            "linkTarget": "_blank",
            "defaultBackgroundColor": "#5B8EF4",
            "defaultFontColor": "",
            "defaultBorderColor": null
        } });

        let Some(Button::Common(button)) = format_button(&record).unwrap() else {
            panic!("expected a common button");
        };
        assert_eq!(button.index, 1);
        assert_eq!(button.button_type.as_deref(), Some("primary"));
        assert_eq!(button.text.as_deref(), Some("Get started"));
        assert_eq!(button.link.url.as_deref(), Some("https://app.example.com"));
        assert_eq!(button.link.target.as_deref(), Some("_blank"));
        assert_eq!(
            button.styles.default.background_color.as_deref(),
            Some("#5B8EF4")
        );
        assert_eq!(button.styles.default.font_color, None);
        assert_eq!(button.styles.default.border_color, None);
    }

    #[test]
    fn test_download_app_button() {
        let record = json!({ "item": {
            "key": "DownloadAppButton",
            "index": 2,
            "androidUrl": "https://play.example.com/app",
            "iOSUrl": "https://apps.example.com/app",
            "extensionUrl": ""
        } });

        let Some(Button::DownloadApp(button)) = format_button(&record).unwrap() else {
            panic!("expected a download button");
        };
        assert_eq!(button.android_url.as_deref(), Some("https://play.example.com/app"));
        assert_eq!(button.ios_url.as_deref(), Some("https://apps.example.com/app"));
        assert_eq!(button.extension_url, None);
        assert_eq!(button.other_url, None);
    }

    #[test]
    fn test_unknown_key_is_dropped() {
        let record = json!({ "item": { "key": "ShareButton", "index": 1 } });
        assert_eq!(format_button(&record), Ok(None));
    }

    #[test]
    fn test_unpublished_button_is_dropped() {
        let record = json!({ "item": { "key": "CommonButton", "index": 1, "status": "archived" } });
        assert_eq!(format_button(&record), Ok(None));
    }

    #[test]
    fn test_missing_key_is_malformed() {
        assert!(format_button(&json!({ "item": { "index": 1 } })).is_err());
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let list = json!([
            { "item": { "key": "DownloadAppButton", "index": 3 } },
            { "item": { "key": "Unknown", "index": 0 } },
            { "item": { "key": "CommonButton", "index": 1, "text": "A" } },
            { "item": { "key": "CommonButton", "index": 1, "text": "B" } }
        ]);

        let buttons = format_button_list(list.as_array().unwrap()).unwrap();
        let indices: Vec<_> = buttons.iter().map(Indexed::index).collect();
        assert_eq!(indices, vec![1, 1, 3]);
        assert_eq!(buttons[2].key(), ButtonKey::DownloadApp);

        let texts: Vec<_> = buttons
            .iter()
            .filter_map(|button| match button {
                Button::Common(common) => common.text.as_deref(),
                Button::DownloadApp(_) => None,
            })
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_wrongly_typed_optional_fields_are_unset() {
        let record = json!({ "item": {
            "key": "CommonButton",
            "index": 3,
            "type": 2,
            "linkUrl": "/download",
            "linkTarget": 1,
            "text": 7,
            "defaultFontColor": 16777215
        } });

        let Some(Button::Common(button)) = format_button(&record).unwrap() else {
            panic!("expected a common button");
        };
        assert_eq!(button.button_type, None);
        assert_eq!(button.link.url.as_deref(), Some("/download"));
        assert_eq!(button.link.target, None);
        assert_eq!(button.text, None);
        assert_eq!(button.styles.default.font_color, None);
    }
}
