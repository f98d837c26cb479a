//! Core types for the Traceix client.
//!
//! This module provides the building blocks used by the client:
//!
//! - [`config`] - Client configuration and environment resolution
//! - [`endpoint`] - The fixed service endpoint table
//! - [`error`] - Structured error types
//! - [`types`] - `SearchType` and the composite `UploadResult`

pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

// Re-export commonly used types at the core level
pub use config::{ClientConfig, DEFAULT_BASE_URL, SDK_VERSION};
pub use endpoint::Endpoint;
pub use error::{ClientError, ClientResult};
pub use types::{SearchType, UploadResult};
