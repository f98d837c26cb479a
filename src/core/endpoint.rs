//! The fixed endpoint table of the Traceix service.
//!
//! Every operation maps to exactly one path below; there are no query
//! parameters and all requests are `POST`.

/// A service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// File upload for AI classification.
    Upload,
    /// CAPA capability extraction upload.
    Capa,
    /// EXIF metadata extraction upload.
    Exif,
    /// Job-status polling by UUID.
    Status,
    /// Hash search over CAPA results.
    CapaSearch,
    /// Hash search over EXIF results.
    ExifSearch,
    /// Public IPFS dataset listing.
    IpfsListAll,
    /// Public IPFS dataset lookup by CID.
    IpfsSearch,
    /// Public IPFS dataset search by file hash.
    IpfsFind,
}

impl Endpoint {
    /// Returns the URL path for this endpoint.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Upload => "/api/traceix/v1/upload",
            Self::Capa => "/api/traceix/v1/capa",
            Self::Exif => "/api/traceix/v1/exif",
            Self::Status => "/api/v1/traceix/status",
            Self::CapaSearch => "/api/traceix/v1/capa/search",
            Self::ExifSearch => "/api/traceix/v1/exif/search",
            Self::IpfsListAll => "/api/traceix/v1/ipfs/listall",
            Self::IpfsSearch => "/api/traceix/v1/ipfs/search",
            Self::IpfsFind => "/api/traceix/v1/ipfs/find",
        }
    }
}
