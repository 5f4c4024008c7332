//! # userbase-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/users`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes and JSON bodies
//! - Permit cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `userbase-app` (for port traits and services) and
//! `userbase-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
