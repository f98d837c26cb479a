//! Common types used throughout the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::core::endpoint::Endpoint;
use crate::core::error::ClientError;

/// Selects which result store a hash search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Search CAPA capability-extraction results.
    Capa,
    /// Search EXIF metadata results.
    Exif,
}

impl SearchType {
    /// Returns the search endpoint for this type.
    pub(crate) const fn endpoint(self) -> Endpoint {
        match self {
            Self::Capa => Endpoint::CapaSearch,
            Self::Exif => Endpoint::ExifSearch,
        }
    }

    /// Returns the wire name of this search type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Capa => "capa",
            Self::Exif => "exif",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ClientError;

    /// Parses `"capa"` or `"exif"` (exact, lowercase). Anything else fails
    /// with [`ClientError::InvalidSearchType`] before any request is made.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capa" => Ok(Self::Capa),
            "exif" => Ok(Self::Exif),
            other => Err(ClientError::invalid_search_type(other)),
        }
    }
}

/// The result of a full upload: the three analysis responses in the order
/// they were requested.
///
/// Produced only by [`TraceixClient::full_upload`]. The triple is all-or-
/// nothing; a failed sub-request yields an error, never a partial result.
///
/// [`TraceixClient::full_upload`]: crate::client::TraceixClient::full_upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Response from the AI classification endpoint.
    pub ai_prediction: Value,
    /// Response from the CAPA extraction endpoint.
    pub capa_status: Value,
    /// Response from the EXIF extraction endpoint.
    pub exif_status: Value,
}

impl UploadResult {
    /// Consumes the result, returning the three responses in request order.
    pub fn into_parts(self) -> (Value, Value, Value) {
        (self.ai_prediction, self.capa_status, self.exif_status)
    }
}
