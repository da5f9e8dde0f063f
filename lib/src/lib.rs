pub mod action;
pub mod analyze;
pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod receiver;
pub mod report;
pub mod store;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export error types for convenience
pub use error::MarkpostError;
pub use tree::{collect_urls, BookmarkNode};
