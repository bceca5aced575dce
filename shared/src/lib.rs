//! Shared types and models for the AgroSmart platform
//!
//! This crate contains the request/response records exchanged with the
//! prediction service, shared between the API client and the browser
//! bindings (via WASM).

pub mod figures;
pub mod models;
pub mod types;
pub mod validation;

pub use figures::*;
pub use models::*;
pub use types::*;
pub use validation::*;
