mod endpoint;
mod error;
mod traits;

pub use endpoint::Endpoint;
pub use error::{ContentError, FetchError, Result};
pub use traits::ContentSource;
