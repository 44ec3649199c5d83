//! The normalized, render-ready document model.
//!
//! Every type here is built fresh from a CMS payload and never mutated
//! afterwards. Ordered lists are sorted ascending by their `index`.

mod button;
mod description;
mod global;
mod module;
mod navigation;
mod page;
mod partner;

pub use button::{
    Button, ButtonKey, ButtonLink, ButtonStateStyle, ButtonStyles, CommonButton,
    DownloadAppButton,
};
pub use description::DescriptionItem;
pub use global::{GlobalConfig, Palette, SiteMeta};
pub use module::{
    BrandModule, CardListModule, GraphicTextModule, Module, ModuleKey, ModuleStyles,
    PartnersModule,
};
pub use navigation::{ActionButton, Footer, Header, NavEntry, NavigationType, SocialMedia, TopMenu};
pub use page::{Page, PUBLISHED};
pub use partner::PartnerItem;

/// An entity positioned within an ordered list by its `index` field.
pub trait Indexed {
    fn index(&self) -> i64;
}
