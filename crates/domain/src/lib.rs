//! # userbase-domain
//!
//! Pure domain model for the userbase service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **User** record and the payloads used to create and
//!   overwrite it
//! - Enforce the creation-time presence checks on `name` and `email`
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod user;
