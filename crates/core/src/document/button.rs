use serde::{Deserialize, Serialize};

use super::Indexed;
use crate::classify::Classification;

/// Closed set of button variants, identified by the record's `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKey {
    Common,
    DownloadApp,
}

impl ButtonKey {
    /// Returns the CMS tag for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKey::Common => "CommonButton",
            ButtonKey::DownloadApp => "DownloadAppButton",
        }
    }

    /// Classifies a CMS tag. Matching is exact and case-sensitive.
    pub fn classify(key: &str) -> Classification<Self> {
        match key {
            "CommonButton" => Classification::Matched(ButtonKey::Common),
            "DownloadAppButton" => Classification::Matched(ButtonKey::DownloadApp),
            other => Classification::Unmatched(other.to_string()),
        }
    }
}

/// A button attached to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key")]
pub enum Button {
    #[serde(rename = "CommonButton")]
    Common(CommonButton),
    #[serde(rename = "DownloadAppButton")]
    DownloadApp(DownloadAppButton),
}

impl Button {
    pub fn key(&self) -> ButtonKey {
        match self {
            Button::Common(_) => ButtonKey::Common,
            Button::DownloadApp(_) => ButtonKey::DownloadApp,
        }
    }
}

impl Indexed for Button {
    fn index(&self) -> i64 {
        match self {
            Button::Common(button) => button.index,
            Button::DownloadApp(button) => button.index,
        }
    }
}

/// A plain link button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonButton {
    pub index: i64,
    #[serde(rename = "type")]
    pub button_type: Option<String>,
    pub link: ButtonLink,
    pub text: Option<String>,
    pub styles: ButtonStyles,
}

/// Link target of a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLink {
    pub url: Option<String>,
    /// Browsing context, e.g. `_blank`.
    pub target: Option<String>,
}

/// Per-state button colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyles {
    pub default: ButtonStateStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStateStyle {
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub border_color: Option<String>,
}

/// A group of app store links; the renderer picks one per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAppButton {
    pub index: i64,
    #[serde(rename = "type")]
    pub button_type: Option<String>,
    pub android_url: Option<String>,
    #[serde(rename = "iOSUrl")]
    pub ios_url: Option<String>,
    pub extension_url: Option<String>,
    pub other_url: Option<String>,
}
