//! # IO Module
//!
//! Interface layer exposing the domain services over HTTP.
//!
//! - **rest**: axum handlers and DTO mappers
//! - **session**: in-memory login sessions and the `CurrentUser` extractor

pub mod rest;
pub mod session;

pub use rest::*;
pub use session::{CurrentUser, SessionStore, SessionUser};
