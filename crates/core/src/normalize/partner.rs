use serde::Deserialize;
use serde_json::Value;

use super::error::{require, Result};
use super::{parse, sort_by_index};
use crate::asset::ImageRef;
use crate::document::PartnerItem;
use crate::junction;
use crate::serde::{deserialize_optional_image, deserialize_optional_string};

const ENTITY: &str = "partner";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPartner {
    index: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    logo_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    url: Option<String>,
}

/// Formats a partner record, unwrapping its `partner_id` junction object.
pub fn format_partner(record: &Value) -> Result<PartnerItem> {
    let raw: RawPartner = parse(junction::unwrap_partner(record), ENTITY)?;

    Ok(PartnerItem {
        index: require(raw.index, ENTITY, "index")?,
        logo_image: raw.logo_image,
        url: raw.url,
    })
}

/// Formats a partner list sorted by index.
pub fn format_partner_list(list: &[Value]) -> Result<Vec<PartnerItem>> {
    let mut partners = list
        .iter()
        .map(format_partner)
        .collect::<Result<Vec<_>>>()?;
    sort_by_index(&mut partners);
    Ok(partners)
}
