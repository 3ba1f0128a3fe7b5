//! Data structures for the order panel: orders, list filters and viewers.

pub mod filter;
pub mod order;
pub mod viewer;

pub use filter::*;
pub use order::*;
pub use viewer::*;
