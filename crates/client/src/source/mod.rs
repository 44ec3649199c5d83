//! Content sources beyond the HTTP client.

mod inmemory;

pub use inmemory::InMemorySource;
