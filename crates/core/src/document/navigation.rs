use serde::{Deserialize, Serialize};

/// What happens when a navigation entry is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationType {
    /// A label only; clicking does nothing.
    NoJump,
    /// Client-side route change to `path`.
    Route,
    /// Opens `path` in a new tab.
    OpenNewTab,
}

impl NavigationType {
    /// Maps the CMS numeric code to a navigation type.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(NavigationType::NoJump),
            2 => Some(NavigationType::Route),
            3 => Some(NavigationType::OpenNewTab),
            _ => None,
        }
    }

    /// Returns the CMS numeric code.
    pub fn code(&self) -> u8 {
        match self {
            NavigationType::NoJump => 1,
            NavigationType::Route => 2,
            NavigationType::OpenNewTab => 3,
        }
    }
}

/// A single navigation link (second-level menus use this shape directly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    #[serde(rename = "type")]
    pub nav_type: NavigationType,
    pub title: String,
    /// Route path or external link.
    pub path: Option<String>,
}

impl NavEntry {
    /// Returns true if clicking the entry navigates somewhere.
    pub fn is_link(&self) -> bool {
        self.nav_type != NavigationType::NoJump && self.path.is_some()
    }

    /// Returns true if the entry opens in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        self.nav_type == NavigationType::OpenNewTab
    }
}

/// A top-level menu entry with its second-level entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMenu {
    /// Position within the menu, when the CMS provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(flatten)]
    pub entry: NavEntry,
    pub children: Vec<NavEntry>,
}

impl TopMenu {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Call-to-action button shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub text: Option<String>,
    pub link_url: Option<String>,
}

/// Site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Header layout (`type` in the CMS), e.g. `default`.
    pub layout: Option<String>,
    /// Absolute logo URL, empty when none is configured.
    pub logo_url: String,
    pub menu_list: Vec<TopMenu>,
    pub action_button: Option<ActionButton>,
    pub background_color: Option<String>,
}

/// A social media link shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub name: String,
    pub link: Option<String>,
    /// Absolute URL of the idle icon.
    pub default_icon: String,
    /// Absolute URL of the hover icon.
    pub active_icon: String,
}

/// Site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub power_name: String,
    pub logo_url: String,
    pub menu_list: Vec<TopMenu>,
    pub social_media_list: Vec<SocialMedia>,
    pub background_color: Option<String>,
    pub dividing_line_color: Option<String>,
}
