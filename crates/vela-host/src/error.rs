//! Error types for the host reflection boundary

use crate::reflect::HostFeature;

/// Result type for host reflection calls
pub type HostResult<T> = Result<T, HostFault>;

/// Host-side reflection fault.
///
/// `Unsupported` is the dedicated "feature absent" signal consumed by
/// bridge probes. Every other variant is an unexpected host problem and
/// must be propagated unchanged, never treated as a missing feature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostFault {
    /// The queried feature does not exist on this host generation.
    #[error("host feature `{0}` is not available on this runtime")]
    Unsupported(HostFeature),

    /// The host denied reflective access to a member.
    #[error("host denied reflective access: {0}")]
    AccessDenied(String),

    /// Any other host runtime failure.
    #[error("host runtime fault: {0}")]
    Runtime(String),
}
