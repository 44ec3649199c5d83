use std::fmt;

use serde::{Deserialize, Serialize};

/// A content API endpoint the site reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    GlobalConfig,
    Header,
    Footer,
    Page,
}

impl Endpoint {
    /// Every endpoint, in fetch order.
    pub const ALL: [Endpoint; 4] = [
        Endpoint::GlobalConfig,
        Endpoint::Header,
        Endpoint::Footer,
        Endpoint::Page,
    ];

    /// Request path relative to the content API base URL.
    ///
    /// Relations are expanded deep enough to reach every nested record the
    /// normalizers read (modules -> buttons/descriptions -> children).
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GlobalConfig => "/items/globalConfig?fields=*.*",
            Endpoint::Header => "/items/header?fields=*.*.*.*",
            Endpoint::Footer => "/items/footer?fields=*.*.*.*",
            Endpoint::Page => "/items/page?fields=*.*.*.*.*.*.*",
        }
    }

    /// Human-readable name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::GlobalConfig => "global config",
            Endpoint::Header => "header",
            Endpoint::Footer => "footer",
            Endpoint::Page => "page",
        }
    }

    /// File name holding this endpoint's payload in a fixture directory.
    pub fn fixture_file(&self) -> &'static str {
        match self {
            Endpoint::GlobalConfig => "global_config.json",
            Endpoint::Header => "header.json",
            Endpoint::Footer => "footer.json",
            Endpoint::Page => "page.json",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
