use serde::Deserialize;
use serde_json::Value;

use super::error::{require, Result};
use super::{
    format_button_list, format_description_list, format_partner_list, is_published, list_field,
    parse, required_key, sort_by_index,
};
use crate::asset::ImageRef;
use crate::document::{
    BrandModule, CardListModule, GraphicTextModule, Module, ModuleKey, ModuleStyles,
    PartnersModule,
};
use crate::junction;
use crate::serde::{
    deserialize_lenient_string, deserialize_optional_image, deserialize_optional_nonzero, deserialize_optional_string,
};

const ENTITY: &str = "module";

/// Scalar fields of every module variant; lists are read from the record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModule {
    index: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    sub_title: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "deserialize_lenient_string")]
    layout: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    image: Option<ImageRef>,
    #[serde(default, deserialize_with = "deserialize_optional_nonzero")]
    padding_vertical: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_background_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_card_background_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_img_container_background_color: Option<String>,
}

impl RawModule {
    fn section_styles(&self) -> ModuleStyles {
        ModuleStyles {
            padding_vertical: self.padding_vertical,
            default_background_color: self.default_background_color.clone(),
            ..ModuleStyles::default()
        }
    }

    fn card_styles(&self) -> ModuleStyles {
        ModuleStyles {
            default_card_background_color: self.default_card_background_color.clone(),
            ..self.section_styles()
        }
    }
}

/// Formats a page module record, unwrapping its `item` junction object.
///
/// Returns `Ok(None)` for modules that are not published or whose `key`
/// is not one of the known variants.
pub fn format_module(record: &Value) -> Result<Option<Module>> {
    let item = junction::unwrap_module(record);
    if !is_published(item) {
        return Ok(None);
    }
    let Some(key) = ModuleKey::classify(required_key(item, ENTITY)?).matched() else {
        return Ok(None);
    };

    let raw: RawModule = parse(item, ENTITY)?;
    let index = require(raw.index, ENTITY, "index")?;

    let module = match key {
        ModuleKey::Brand => Module::Brand(BrandModule {
            index,
            styles: raw.section_styles(),
            title: raw.title,
            image: raw.image,
            layout: raw.layout,
            button_list: format_button_list(list_field(item, "buttonList", ENTITY)?)?,
            description_list: format_description_list(list_field(
                item,
                "descriptionList",
                ENTITY,
            )?)?,
        }),
        ModuleKey::GraphicText => Module::GraphicText(GraphicTextModule {
            index,
            styles: raw.section_styles(),
            title: raw.title,
            sub_title: raw.sub_title,
            image: raw.image,
            layout: raw.layout,
            description_list: format_description_list(list_field(
                item,
                "descriptionList",
                ENTITY,
            )?)?,
        }),
        ModuleKey::CardList => Module::CardList(CardListModule {
            index,
            styles: ModuleStyles {
                default_img_container_background_color: raw
                    .default_img_container_background_color
                    .clone(),
                ..raw.card_styles()
            },
            title: raw.title,
            sub_title: raw.sub_title,
            data_array: format_description_list(list_field(item, "dataArray", ENTITY)?)?,
        }),
        ModuleKey::Partners => Module::Partners(PartnersModule {
            index,
            styles: raw.card_styles(),
            title: raw.title,
            list: format_partner_list(list_field(item, "list", ENTITY)?)?,
        }),
    };

    Ok(Some(module))
}

/// Formats a page's module list.
///
/// Unpublished and unrecognized modules are dropped; the rest are sorted by
/// index.
pub fn format_module_list(list: &[Value]) -> Result<Vec<Module>> {
    let mut modules = list
        .iter()
        .map(format_module)
        .filter_map(|module| module.transpose())
        .collect::<Result<Vec<_>>>()?;
    sort_by_index(&mut modules);
    Ok(modules)
}
