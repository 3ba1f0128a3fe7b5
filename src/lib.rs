//! # JosniShop Order Tracking
//!
//! > **Order status progression for the JosniShop order panel.**
//!
//! The status rules live in the `tracking_core` crate. This crate runs them
//! against real orders: an in-memory order store actor, the clients the panel
//! talks to, an HTTP updater for the JosniShop order service, and the startup
//! and shutdown wiring.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`store`])
//! An actor that owns the order table and processes one request at a time.
//! Status writes can be conditional on the status the caller last read.
//!
//! ### 2. The Interface ([`clients`])
//! - [`OrderStoreClient`](clients::OrderStoreClient) wraps the store's channel.
//! - [`OrderTrackingClient`](clients::OrderTrackingClient) resolves the viewer's
//!   permission, runs `advance` / `jump_to` and builds the tracking view.
//! - [`HttpOrderUpdater`](clients::HttpOrderUpdater) sends updates to the order service.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`TrackingSystem`](lifecycle::TrackingSystem) spawns the store, wires the
//! clients and shuts everything down.
//!
//! ### 4. Data ([`model`], [`config`])
//! Orders, list filters, viewers and environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test --workspace
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod store;

pub use tracking_core;
