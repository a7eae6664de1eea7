//! Shared test fixtures for Good Number crates.
//!
//! This crate provides plain data and reference implementations for testing.
//! It does NOT depend on `goodnumber-core` so the core can use it as a
//! dev-dependency.
//!
//! - [`oracle`] - brute-force reference for minimal part counts
//! - [`sets`] - synthetic increment values
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! goodnumber-test = { workspace = true }
//! ```

pub mod oracle;
pub mod sets;

pub use oracle::{brute_force_min_parts, is_reachable};
pub use sets::{INGRESS_VALUES, SYNTHETIC_SETS};
