//! Data models for the application
//!
//! This module contains the data structures shared by the store, notifier and API
//! layers, organized by domain.

mod event;
mod skin;
mod upload;

pub use event::*;
pub use skin::*;
pub use upload::*;
