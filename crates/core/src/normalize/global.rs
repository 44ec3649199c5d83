use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::Result;
use super::parse;
use crate::asset::{AssetHost, ImageRef};
use crate::document::{GlobalConfig, Palette, SiteMeta};
use crate::serde::{deserialize_lenient_string, deserialize_optional_image};

const ENTITY: &str = "global config";

/// `(role, CMS field)` pairs for each palette.
const THEME_COLOR_FIELDS: &[(&str, &str)] = &[
    ("brand", "themeColorBrand"),
    ("hover", "themeColorHover"),
    ("normal", "themeColorNormal"),
    ("click", "themeColorClick"),
    ("disable", "themeColorDisable"),
];

const FUNCTIONAL_COLOR_FIELDS: &[(&str, &str)] = &[
    ("link", "functionalColorLink"),
    ("linkBg", "functionalColorLinkBg"),
    ("success", "functionalColorSuccess"),
    ("successBg", "functionalColorSuccessBg"),
    ("warning", "functionalColorWarning"),
    ("warningBg", "functionalColorWarningBg"),
    ("error", "functionalColorError"),
    ("errorBg", "functionalColorErrorBg"),
];

const NEUTRAL_COLOR_FIELDS: &[(&str, &str)] = &[
    ("primaryText", "neutralColorPrimaryText"),
    ("secondaryText", "neutralColorSecondaryText"),
    ("disableText", "neutralColorDisableText"),
    ("whiteText", "neutralColorWhiteText"),
    ("border", "neutralColorBorder"),
    ("dash", "neutralColorDash"),
    ("dividers", "neutralColorDividers"),
    ("normalBg", "neutralColorNormalBg"),
    ("hoverBg", "neutralColorHoverBg"),
    ("clickBg", "neutralColorClickBg"),
    ("pageBg", "neutralColorPageBg"),
    ("maskBg", "neutralColorMaskBg"),
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGlobalConfig {
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    meta_favicon: Option<ImageRef>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    meta_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    meta_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    meta_keywords: Option<String>,
    /// Everything else: the flat color fields.
    #[serde(flatten)]
    fields: Map<String, Value>,
}

fn palette(fields: &Map<String, Value>, roles: &[(&str, &str)]) -> Palette {
    roles
        .iter()
        .filter_map(|(role, field)| {
            let color = fields.get(*field)?.as_str()?;
            Some((role.to_string(), color.to_string()))
        })
        .collect()
}

/// Regroups the flat global config record into metadata and palettes.
///
/// Color values are passed through without validation.
pub fn normalize_global_config(raw: &Value, assets: &AssetHost) -> Result<GlobalConfig> {
    let config: RawGlobalConfig = parse(raw, ENTITY)?;

    Ok(GlobalConfig {
        meta: SiteMeta {
            favicon: assets.resolve_image(config.meta_favicon.as_ref()),
            title: config.meta_title,
            description: config.meta_description,
            keywords: config.meta_keywords,
        },
        theme_color: palette(&config.fields, THEME_COLOR_FIELDS),
        functional_color: palette(&config.fields, FUNCTIONAL_COLOR_FIELDS),
        neutral_color: palette(&config.fields, NEUTRAL_COLOR_FIELDS),
    })
}
