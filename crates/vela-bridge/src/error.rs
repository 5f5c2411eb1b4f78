//! Bridge selection error types
//!
//! The one recoverable condition — a probe finding an assumed host feature
//! absent — is split off from every other failure at the type level, so
//! selection can only ever fall through to a lower candidate on the former.

use vela_host::{HostFault, HostFeature};

use crate::capability::CapabilityLevel;

/// Outcome of a failed bridge candidate probe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The assumed host feature is absent; selection moves to the next
    /// candidate.
    #[error("unsupported on this host: missing feature `{0}`")]
    Unsupported(HostFeature),

    /// The host faulted for a reason other than a missing feature; fatal,
    /// propagated unchanged.
    #[error(transparent)]
    Fault(HostFault),
}

impl From<HostFault> for ProbeError {
    fn from(fault: HostFault) -> Self {
        match fault {
            HostFault::Unsupported(feature) => ProbeError::Unsupported(feature),
            other => ProbeError::Fault(other),
        }
    }
}

/// Errors surfaced by bridge selection and installation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// Every candidate probe reported an absent host feature. Fatal to
    /// engine startup: there is no valid bridge to install.
    #[error("no viable host reflection bridge: {}", summarize_probes(.probed))]
    NoViableBridge {
        /// Capability levels probed, with the feature each found missing.
        probed: Vec<(CapabilityLevel, HostFeature)>,
    },

    /// The host faulted while probing; a real host problem, not a
    /// capability gap.
    #[error("host fault during bridge selection: {0}")]
    Host(#[from] HostFault),
}

fn summarize_probes(probed: &[(CapabilityLevel, HostFeature)]) -> String {
    if probed.is_empty() {
        return "no bridge candidates were supplied".to_string();
    }
    let parts: Vec<String> = probed
        .iter()
        .map(|(level, feature)| format!("{} requires host feature `{}`", level, feature))
        .collect();
    parts.join("; ")
}
