//! Good Number HTTP shell and command line.
//!
//! - [`api`] - axum router: HTML page, JSON planning endpoint, health check
//! - [`dto`] - wire types for the JSON endpoint
//! - [`error`] - API errors and their HTTP mapping
//! - [`cli`] - `goodnumber` command line definition
//! - [`report`] - plain text rendering for the command line

pub mod api;
pub mod cli;
pub mod dto;
pub mod error;
pub mod page;
pub mod report;

pub use api::{app, router, AppState, DEFAULT_PLAN_LIMIT};
pub use dto::{ActionResponse, StatusRequest};
pub use error::ApiError;
