//! Header and footer normalization.
//!
//! The two endpoints encode a menu entry's navigation type differently: a
//! header entry nests it one level deeper (`topMenu_id.type.value`) than a
//! footer entry (`bottomMenu_id.type`). Both shapes are read exactly as the
//! live schema delivers them.

use serde::Deserialize;
use serde_json::Value;

use super::error::Result;
use super::{list_field, parse};
use crate::asset::{AssetHost, ImageRef};
use crate::document::{ActionButton, Footer, Header, NavEntry, NavigationType, SocialMedia, TopMenu};
use crate::junction;
use crate::serde::{
    deserialize_lenient_i64, deserialize_lenient_string, deserialize_optional_image,
    deserialize_optional_string,
};

const MENU: &str = "menu entry";
const SOCIAL_MEDIA: &str = "social media";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuSource {
    Header,
    Footer,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHeader {
    #[serde(default, rename = "type", deserialize_with = "deserialize_lenient_string")]
    layout: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    default_logo: Option<ImageRef>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    action_button_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    action_button_link_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_background_color: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFooter {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    power_name_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    default_logo: Option<ImageRef>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    default_background_color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    dividing_line_color: Option<String>,
}

#[derive(Deserialize)]
struct RawMenuEntry {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    index: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    path: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSocialMedia {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    svg: Option<ImageRef>,
    #[serde(default, deserialize_with = "deserialize_optional_image")]
    active_svg: Option<ImageRef>,
}

/// Numeric navigation code; select fields may store it as a string.
fn nav_code(value: &Value) -> Option<NavigationType> {
    let code = value
        .as_i64()
        .or_else(|| value.as_str()?.trim().parse().ok())?;
    NavigationType::from_code(code)
}

fn header_nav_type(entry: &Value) -> Option<NavigationType> {
    nav_code(entry.get("type")?.get("value")?)
}

fn footer_nav_type(entry: &Value) -> Option<NavigationType> {
    nav_code(entry.get("type")?)
}

/// Second-level entries are passed through from either endpoint, so both
/// encodings are accepted.
fn child_nav_type(entry: &Value) -> Option<NavigationType> {
    let value = entry.get("type")?;
    nav_code(value.get("value").unwrap_or(value))
}

fn format_nav_entry(entry: &Value, nav_type: NavigationType) -> Result<(Option<i64>, NavEntry)> {
    let raw: RawMenuEntry = parse(entry, MENU)?;
    Ok((
        raw.index,
        NavEntry {
            nav_type,
            title: raw.title.unwrap_or_default(),
            path: raw.path,
        },
    ))
}

/// Formats one top-level menu record. Entries without a recognized
/// navigation type are dropped.
fn format_top_menu(record: &Value, source: MenuSource) -> Result<Option<TopMenu>> {
    let (entry, nav_type) = match source {
        MenuSource::Header => {
            let entry = junction::unwrap_top_menu(record);
            (entry, header_nav_type(entry))
        }
        MenuSource::Footer => {
            let entry = junction::unwrap_bottom_menu(record);
            (entry, footer_nav_type(entry))
        }
    };
    let Some(nav_type) = nav_type else {
        return Ok(None);
    };

    let (index, nav_entry) = format_nav_entry(entry, nav_type)?;
    let mut children = Vec::new();
    for child in list_field(entry, "children", MENU)? {
        if let Some(nav_type) = child_nav_type(child) {
            children.push(format_nav_entry(child, nav_type)?.1);
        }
    }

    Ok(Some(TopMenu {
        index,
        entry: nav_entry,
        children,
    }))
}

/// Formats a menu list.
///
/// Menus are not sorted by default: the order the CMS returns is the display
/// order. Menu records have no required `index`, but when every entry carries
/// one the list is stable-sorted by it, like every other indexed list in the
/// document. A single unindexed entry keeps the whole list in authored order.
fn format_menu_list(list: &[Value], source: MenuSource) -> Result<Vec<TopMenu>> {
    let mut menus = list
        .iter()
        .map(|record| format_top_menu(record, source))
        .filter_map(|menu| menu.transpose())
        .collect::<Result<Vec<_>>>()?;
    if menus.iter().all(|menu| menu.index.is_some()) {
        menus.sort_by_key(|menu| menu.index);
    }
    Ok(menus)
}

fn format_social_media(record: &Value, assets: &AssetHost) -> Result<SocialMedia> {
    let raw: RawSocialMedia = parse(junction::unwrap_social_media(record), SOCIAL_MEDIA)?;
    Ok(SocialMedia {
        name: raw.name.unwrap_or_default(),
        link: raw.link,
        default_icon: assets.resolve_image(raw.svg.as_ref()),
        active_icon: assets.resolve_image(raw.active_svg.as_ref()),
    })
}

/// Normalizes the header record.
pub fn normalize_header(raw: &Value, assets: &AssetHost) -> Result<Header> {
    let header: RawHeader = parse(raw, "header")?;
    let menu_list = format_menu_list(list_field(raw, "menuList", "header")?, MenuSource::Header)?;

    let action_button = match (header.action_button_text, header.action_button_link_url) {
        (None, None) => None,
        (text, link_url) => Some(ActionButton { text, link_url }),
    };

    Ok(Header {
        layout: header.layout,
        logo_url: assets.resolve_image(header.default_logo.as_ref()),
        menu_list,
        action_button,
        background_color: header.default_background_color,
    })
}

/// Normalizes the footer record.
pub fn normalize_footer(raw: &Value, assets: &AssetHost) -> Result<Footer> {
    let footer: RawFooter = parse(raw, "footer")?;
    let menu_list = format_menu_list(list_field(raw, "menuList", "footer")?, MenuSource::Footer)?;
    let social_media_list = list_field(raw, "socialMediaList", "footer")?
        .iter()
        .map(|record| format_social_media(record, assets))
        .collect::<Result<Vec<_>>>()?;

    Ok(Footer {
        power_name: footer.power_name_text.unwrap_or_default(),
        logo_url: assets.resolve_image(footer.default_logo.as_ref()),
        menu_list,
        social_media_list,
        background_color: footer.default_background_color,
        dividing_line_color: footer.dividing_line_color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assets() -> AssetHost {
        AssetHost::new("https://cdn.example.com/")
    }

    fn titles(menus: &[TopMenu]) -> Vec<&str> {
        menus.iter().map(|menu| menu.entry.title.as_str()).collect()
    }

    #[test]
    fn test_header() {
        let raw = json!({
            "type": "default",
            "defaultLogo": { "filename_disk": "logo.svg" },
            "actionButtonText": "Download",
            "actionButtonLinkUrl": "/download",
            "defaultBackgroundColor": "",
            "menuList": [
                { "topMenu_id": {
                    "title": "Products",
                    "type": { "value": 1 },
                    "children": [
                        { "title": "Wallet", "type": 2, "path": "/wallet" },
                        { "title": "Docs", "type": { "value": "3" }, "path": "https://docs.example.com" }
                    ]
                } },
                { "topMenu_id": { "title": "Blog", "type": { "value": 3 }, "path": "https://blog.example.com" } }
            ]
        });

        let header = normalize_header(&raw, &assets()).unwrap();
        assert_eq!(header.layout.as_deref(), Some("default"));
        assert_eq!(header.logo_url, "https://cdn.example.com/logo.svg");
        assert_eq!(header.background_color, None);
        assert_eq!(
            header.action_button,
            Some(ActionButton {
                text: Some("Download".to_string()),
                link_url: Some("/download".to_string()),
            })
        );

        assert_eq!(titles(&header.menu_list), vec!["Products", "Blog"]);
        let products = &header.menu_list[0];
        assert_eq!(products.entry.nav_type, NavigationType::NoJump);
        assert_eq!(products.children.len(), 2);
        assert_eq!(products.children[0].nav_type, NavigationType::Route);
        assert_eq!(products.children[1].nav_type, NavigationType::OpenNewTab);
        assert_eq!(header.menu_list[1].entry.nav_type, NavigationType::OpenNewTab);
        assert!(!header.menu_list[1].has_children());
    }

    #[test]
    fn test_header_reads_nested_type_only() {
        // A footer-shaped type on a header entry is not recognized.
        let raw = json!({ "menuList": [{ "topMenu_id": { "title": "Flat", "type": 2 } }] });
        let header = normalize_header(&raw, &assets()).unwrap();
        assert!(header.menu_list.is_empty());
    }

    #[test]
    fn test_header_without_lists_or_button() {
        let header = normalize_header(&json!({ "menuList": null }), &assets()).unwrap();
        assert!(header.menu_list.is_empty());
        assert_eq!(header.action_button, None);
        assert_eq!(header.logo_url, "");
    }

    #[test]
    fn test_menu_keeps_authored_order() {
        let raw = json!({ "menuList": [
            { "topMenu_id": { "title": "B", "type": { "value": 2 } } },
            { "topMenu_id": { "title": "A", "type": { "value": 2 }, "index": 0 } }
        ] });
        let header = normalize_header(&raw, &assets()).unwrap();
        assert_eq!(titles(&header.menu_list), vec!["B", "A"]);
    }

    #[test]
    fn test_menu_sorted_when_fully_indexed() {
        let raw = json!({ "menuList": [
            { "bottomMenu_id": { "title": "C", "type": 1, "index": 3 } },
            { "bottomMenu_id": { "title": "A", "type": 1, "index": 1 } },
            { "bottomMenu_id": { "title": "B", "type": 1, "index": 1 } }
        ] });
        let footer = normalize_footer(&raw, &assets()).unwrap();
        assert_eq!(titles(&footer.menu_list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_footer() {
        let raw = json!({
            "powerNameText": "Example Labs",
            "defaultLogo": { "filename_disk": "footer-logo.svg" },
            "dividingLineColor": "#E0E0E0",
            "menuList": [
                { "bottomMenu_id": {
                    "title": "Company",
                    "type": 1,
                    "children": [{ "title": "About", "type": 2, "path": "/about" }]
                } },
                { "bottomMenu_id": { "title": "Nested", "type": { "value": 1 } } }
            ],
            "socialMediaList": [
                { "socialMedia_id": {
                    "name": "X",
                    "link": "https://x.com/example",
                    "svg": { "filename_disk": "x.svg" },
                    "activeSvg": { "filename_disk": "x-active.svg" }
                } },
                { "socialMedia_id": { "name": "Discord", "svg": null } }
            ]
        });

        let footer = normalize_footer(&raw, &assets()).unwrap();
        assert_eq!(footer.power_name, "Example Labs");
        assert_eq!(footer.logo_url, "https://cdn.example.com/footer-logo.svg");
        assert_eq!(footer.background_color, None);
        assert_eq!(footer.dividing_line_color.as_deref(), Some("#E0E0E0"));

        // The header-shaped type on a footer entry is not recognized.
        assert_eq!(titles(&footer.menu_list), vec!["Company"]);
        assert_eq!(footer.menu_list[0].children[0].path.as_deref(), Some("/about"));

        assert_eq!(footer.social_media_list.len(), 2);
        let x = &footer.social_media_list[0];
        assert_eq!(x.default_icon, "https://cdn.example.com/x.svg");
        assert_eq!(x.active_icon, "https://cdn.example.com/x-active.svg");
        let discord = &footer.social_media_list[1];
        assert_eq!(discord.default_icon, "");
        assert_eq!(discord.link, None);
    }

    #[test]
    fn test_footer_without_lists() {
        let footer = normalize_footer(&json!({}), &assets()).unwrap();
        assert!(footer.menu_list.is_empty());
        assert!(footer.social_media_list.is_empty());
        assert_eq!(footer.power_name, "");
    }

    #[test]
    fn test_unknown_navigation_code_is_dropped() {
        let raw = json!({ "menuList": [
            { "bottomMenu_id": { "title": "Gone", "type": 9 } },
            { "bottomMenu_id": { "title": "Kept", "type": "2" } }
        ] });
        let footer = normalize_footer(&raw, &assets()).unwrap();
        assert_eq!(titles(&footer.menu_list), vec!["Kept"]);
        assert_eq!(footer.menu_list[0].entry.nav_type, NavigationType::Route);
    }

    #[test]
    fn test_wrongly_typed_menu_fields() {
        let raw = json!({
            "powerNameText": 2024,
            "menuList": [
                { "bottomMenu_id": { "title": "B", "type": 2, "index": "2" } },
                { "bottomMenu_id": { "title": 5, "type": 2, "index": 1 } }
            ],
            "socialMediaList": [{ "socialMedia_id": { "name": false, "link": 3 } }]
        });
        let footer = normalize_footer(&raw, &assets()).unwrap();
        assert_eq!(footer.power_name, "");
        assert_eq!(titles(&footer.menu_list), vec!["", "B"]);
        assert_eq!(footer.social_media_list[0].name, "");
        assert_eq!(footer.social_media_list[0].link, None);
    }
}
