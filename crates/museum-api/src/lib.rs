//! Museum API Library
//!
//! This crate provides the HTTP API for skin review and upload status lookups:
//! authentication, the per-request context, review operations, handlers and setup.

mod api_doc;
pub mod constants;
mod handlers;
pub mod setup;

// Public modules
pub mod auth;
pub mod context;
pub mod error;
pub mod services;
pub mod state;
pub mod test_helpers;

// Re-exports
pub use context::RequestContext;
pub use error::{ErrorResponse, HttpAppError};
pub use state::{AppState, AuthState};
