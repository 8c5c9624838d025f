//! # Ad Limit Checker
//!
//! A stateless ad copy validation service built with Axum.
//!
//! Given an advertising platform and a batch of text items tagged with an
//! ad-field type, the service reports whether each item's character length
//! stays within the platform's fixed limit and summarizes the batch. The
//! limit table is compiled in; there is no storage and no shared state.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The limit table and the batch
//!   validator/aggregator
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: bind address and log format
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="text"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. The limit table itself reads no environment; it
//! changes only by editing [`domain::limits`].

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod server;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::limits;
    pub use crate::domain::validation::{ItemCheck, ValidationSummary, Violation};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
}
