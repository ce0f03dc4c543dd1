//! HTTP request handlers
//!
//! - `page` - the streaming page served on every method and path

pub mod page;

pub use page::serve_page;
