//! Shared types and models for the Fabric Inventory Tracker
//!
//! This crate contains types shared between the inventory core, the browser
//! bindings (via WASM), and other consumers of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
