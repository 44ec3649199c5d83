//! sitecms_core - pure normalization of headless CMS content.
//!
//! Raw CMS payloads arrive as loosely-typed JSON. This crate turns them into a
//! strictly-typed, ordered document model without performing any I/O; fetching
//! is left to implementors of [`source::ContentSource`].

pub mod asset;
pub mod classify;
pub mod document;
pub mod junction;
pub mod normalize;
pub mod serde;
pub mod source;
pub mod theme;

pub use asset::{AssetHost, ImageRef};
pub use classify::Classification;
pub use normalize::MalformedResponse;
pub use source::{ContentError, ContentSource, Endpoint, FetchError};
