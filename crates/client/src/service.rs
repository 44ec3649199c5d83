//! Content service: fetch a raw payload, then normalize it.

use sitecms_core::document::{Footer, GlobalConfig, Header, Page};
use sitecms_core::normalize;
use sitecms_core::source::Result;
use sitecms_core::{AssetHost, ContentSource, Endpoint};

/// Reads site content from a [`ContentSource`] and returns it normalized.
///
/// Every call fetches fresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SiteService<S> {
    source: S,
    assets: AssetHost,
}

impl<S: ContentSource> SiteService<S> {
    pub fn new(source: S, assets: AssetHost) -> Self {
        Self { source, assets }
    }

    pub fn assets(&self) -> &AssetHost {
        &self.assets
    }

    /// Fetch and normalize the global site configuration.
    #[tracing::instrument(skip(self))]
    pub async fn global_config(&self) -> Result<GlobalConfig> {
        let raw = self.source.fetch(Endpoint::GlobalConfig).await?;
        Ok(normalize::normalize_global_config(&raw, &self.assets)?)
    }

    /// Fetch and normalize the site header.
    #[tracing::instrument(skip(self))]
    pub async fn header(&self) -> Result<Header> {
        let raw = self.source.fetch(Endpoint::Header).await?;
        Ok(normalize::normalize_header(&raw, &self.assets)?)
    }

    /// Fetch and normalize the site footer.
    #[tracing::instrument(skip(self))]
    pub async fn footer(&self) -> Result<Footer> {
        let raw = self.source.fetch(Endpoint::Footer).await?;
        Ok(normalize::normalize_footer(&raw, &self.assets)?)
    }

    /// Look up the published page whose key matches `key`.
    ///
    /// Returns `Ok(None)` when no published page matches; fetch failures are
    /// errors.
    #[tracing::instrument(skip(self))]
    pub async fn page(&self, key: &str) -> Result<Option<Page>> {
        let pages = self.source.fetch(Endpoint::Page).await?;
        let page = normalize::find_page(&pages, key)?;
        match &page {
            Some(page) => tracing::debug!(modules = page.module_list.len(), "page normalized"),
            None => tracing::info!("no published page matches"),
        }
        Ok(page)
    }
}
