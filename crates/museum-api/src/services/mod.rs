//! Operations behind the HTTP handlers.
//!
//! Each operation takes its arguments plus a [`RequestContext`](crate::context::RequestContext)
//! and never touches axum types, so it can be exercised directly in tests.

pub mod auth_gate;
pub mod review;
pub mod upload_status;

pub use auth_gate::{require_authenticated, Operation, RequireAuthenticated};
