use std::env;

use sitecms_core::AssetHost;

const DEFAULT_API_URL: &str = "http://localhost:8055";
const DEFAULT_ASSET_HOST: &str = "http://localhost:8055/assets/";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CMS API base URL (default: "http://localhost:8055")
    pub api_url: String,
    /// Base URL prepended to asset file names (default: "http://localhost:8055/assets/")
    pub asset_host: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CMS_API_URL` - CMS API base URL
    /// - `CMS_ASSET_HOST` - Asset host base URL, including the trailing slash
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("CMS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            asset_host: env::var("CMS_ASSET_HOST")
                .unwrap_or_else(|_| DEFAULT_ASSET_HOST.to_string()),
        }
    }

    /// Replace the URLs that were given explicitly, e.g. on the command line.
    pub fn with_overrides(mut self, api_url: Option<String>, asset_host: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(asset_host) = asset_host {
            self.asset_host = asset_host;
        }
        self
    }

    /// Get the asset host shared by every normalizer.
    pub fn asset_host(&self) -> AssetHost {
        AssetHost::new(self.asset_host.clone())
    }
}
