//! # REST API Interface Layer
//!
//! JSON endpoints for the donor registry. Handlers translate between the `shared` DTOs
//! and domain commands, and map domain errors to HTTP status codes:
//!
//! - validation failures → 422 with every message and the submitted form
//! - unknown donor index → 404 pointing back at the donor listing
//! - bad credentials / missing session → 401
//! - storage failures → 500

pub mod dashboard_apis;
pub mod donor_apis;
pub mod error;
pub mod mappers;
pub mod user_apis;

pub use dashboard_apis::*;
pub use donor_apis::*;
pub use user_apis::*;
