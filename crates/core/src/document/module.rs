use serde::{Deserialize, Serialize};

use super::{Button, DescriptionItem, Indexed, PartnerItem};
use crate::asset::ImageRef;
use crate::classify::Classification;

/// Closed set of page module variants, identified by the record's `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKey {
    Brand,
    GraphicText,
    CardList,
    Partners,
}

impl ModuleKey {
    /// Returns the CMS tag for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKey::Brand => "BrandModule",
            ModuleKey::GraphicText => "GraphicTextModule",
            ModuleKey::CardList => "CardListModule",
            ModuleKey::Partners => "PartnersModule",
        }
    }

    /// Classifies a CMS tag. Matching is exact and case-sensitive.
    pub fn classify(key: &str) -> Classification<Self> {
        match key {
            "BrandModule" => Classification::Matched(ModuleKey::Brand),
            "GraphicTextModule" => Classification::Matched(ModuleKey::GraphicText),
            "CardListModule" => Classification::Matched(ModuleKey::CardList),
            "PartnersModule" => Classification::Matched(ModuleKey::Partners),
            other => Classification::Unmatched(other.to_string()),
        }
    }
}

/// Layout attributes shared by every module variant.
///
/// Each variant fills only the attributes it supports; unset attributes
/// leave the renderer's defaults in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStyles {
    /// Top and bottom padding in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_img_container_background_color: Option<String>,
}

/// A self-contained, orderable content block on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key")]
pub enum Module {
    #[serde(rename = "BrandModule")]
    Brand(BrandModule),
    #[serde(rename = "GraphicTextModule")]
    GraphicText(GraphicTextModule),
    #[serde(rename = "CardListModule")]
    CardList(CardListModule),
    #[serde(rename = "PartnersModule")]
    Partners(PartnersModule),
}

impl Module {
    pub fn key(&self) -> ModuleKey {
        match self {
            Module::Brand(_) => ModuleKey::Brand,
            Module::GraphicText(_) => ModuleKey::GraphicText,
            Module::CardList(_) => ModuleKey::CardList,
            Module::Partners(_) => ModuleKey::Partners,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Module::Brand(module) => module.title.as_deref(),
            Module::GraphicText(module) => module.title.as_deref(),
            Module::CardList(module) => module.title.as_deref(),
            Module::Partners(module) => module.title.as_deref(),
        }
    }

    pub fn styles(&self) -> &ModuleStyles {
        match self {
            Module::Brand(module) => &module.styles,
            Module::GraphicText(module) => &module.styles,
            Module::CardList(module) => &module.styles,
            Module::Partners(module) => &module.styles,
        }
    }
}

impl Indexed for Module {
    fn index(&self) -> i64 {
        match self {
            Module::Brand(module) => module.index,
            Module::GraphicText(module) => module.index,
            Module::CardList(module) => module.index,
            Module::Partners(module) => module.index,
        }
    }
}

/// Hero block: title, description lines, call-to-action buttons and an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandModule {
    pub index: i64,
    pub title: Option<String>,
    pub image: Option<ImageRef>,
    /// Color scheme (`type` in the CMS), e.g. `white` or `brand`.
    pub layout: Option<String>,
    pub button_list: Vec<Button>,
    pub description_list: Vec<DescriptionItem>,
    pub styles: ModuleStyles,
}

/// Image beside a titled block of description lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicTextModule {
    pub index: i64,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub image: Option<ImageRef>,
    /// Image placement (`type` in the CMS).
    pub layout: Option<String>,
    pub description_list: Vec<DescriptionItem>,
    pub styles: ModuleStyles,
}

/// Grid of cards, each card a description tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardListModule {
    pub index: i64,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub data_array: Vec<DescriptionItem>,
    pub styles: ModuleStyles,
}

/// Wall of partner logos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnersModule {
    pub index: i64,
    pub title: Option<String>,
    pub list: Vec<PartnerItem>,
    pub styles: ModuleStyles,
}
