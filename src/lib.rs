//! # Traceix
//!
//! An async client for the Traceix malware-analysis service.
//!
//! ## Overview
//!
//! Traceix analyzes submitted files three ways: AI-based classification,
//! CAPA capability extraction, and EXIF metadata extraction. Analysis
//! results are searchable by SHA-256 hash, and public result datasets are
//! published to a content-addressed IPFS store. This crate wraps those
//! endpoints:
//!
//! - Upload files for classification and extraction, individually or as one
//!   [`full_upload`](client::TraceixClient::full_upload)
//! - Poll job status by UUID
//! - Search CAPA/EXIF results by file hash
//! - List and look up public IPFS datasets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use traceix::{SearchType, TraceixClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads TRACEIX_API_KEY (and TRACEIX_DISABLE_TELEMETRY) from the
//!     // environment; use ClientConfig for explicit configuration.
//!     let client = TraceixClient::from_env()?;
//!
//!     let result = client.full_upload("suspicious.exe").await?;
//!     println!("AI verdict: {}", result.ai_prediction);
//!
//!     let status = client.check_status("7f61…").await?;
//!     println!("job: {status}");
//!
//!     let hits = client.hash_search("d2c1…", SearchType::Capa).await?;
//!     println!("known capabilities: {hits}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every operation returns [`ClientResult`]. Argument validation
//! (`NoUuidProvided`, `InvalidSearchType`) fails before any request is
//! issued; transport failures and non-success statuses surface as a single
//! [`ClientError::Http`] after exactly one attempt. Operations are
//! fail-closed: an error means no result, never a partial one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod client;
pub mod core;

// Re-export commonly used types at the crate root
pub use crate::client::TraceixClient;
pub use crate::core::{
    ClientConfig, ClientError, ClientResult, Endpoint, SearchType, UploadResult, DEFAULT_BASE_URL,
    SDK_VERSION,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use traceix::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::TraceixClient;
    pub use crate::core::{
        ClientConfig, ClientError, ClientResult, SearchType, UploadResult,
    };
}
