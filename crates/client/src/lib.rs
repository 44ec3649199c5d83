//! sitecms_client - fetch adapter, content service and CLI for sitecms.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod service;
pub mod source;

pub use client::CmsClient;
pub use config::Config;
pub use error::{error_message, ClientError, Result};
pub use service::SiteService;
pub use source::InMemorySource;
