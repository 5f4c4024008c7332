//! # userbase-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port `UserRepository` that storage adapters implement
//! - Provide `UserService`, the driving use-case layer the HTTP adapter calls
//! - Turn "no row matched" answers from storage into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `userbase-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
