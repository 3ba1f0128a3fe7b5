//! Typed clients over the order store and the order service.

pub mod http_client;
pub mod store_client;
pub mod tracking_client;

pub use http_client::*;
pub use store_client::*;
pub use tracking_client::*;
