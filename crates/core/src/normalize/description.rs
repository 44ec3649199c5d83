use serde::Deserialize;
use serde_json::Value;

use super::error::{require, Result};
use super::{list_field, parse, sort_by_index};
use crate::asset::ImageRef;
use crate::document::DescriptionItem;
use crate::junction;
use crate::serde::{deserialize_lenient_string, deserialize_optional_image};

const ENTITY: &str = "description";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescription {
    index: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    sub_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    icon: Option<ImageRef>,
}

/// Formats a description record, given directly or wrapped in its
/// `description_id` junction object, together with all of its children.
pub fn format_description(record: &Value) -> Result<DescriptionItem> {
    let item = junction::unwrap_description(record);
    let raw: RawDescription = parse(item, ENTITY)?;

    Ok(DescriptionItem {
        index: require(raw.index, ENTITY, "index")?,
        text: raw.text.unwrap_or_default(),
        sub_text: raw.sub_text,
        icon: raw.icon,
        children: format_description_list(list_field(item, "children", ENTITY)?)?,
    })
}

/// Formats a description list, sorting every nesting level by index.
pub fn format_description_list(list: &[Value]) -> Result<Vec<DescriptionItem>> {
    let mut items = list
        .iter()
        .map(format_description)
        .collect::<Result<Vec<_>>>()?;
    sort_by_index(&mut items);
    Ok(items)
}
