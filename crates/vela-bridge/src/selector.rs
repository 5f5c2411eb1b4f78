//! Versioned bridge selection and installation
//!
//! At engine bootstrap, bridge candidates are tried in descending
//! capability order. A candidate whose probe reports an absent host
//! feature hands over to the next; any other host fault aborts startup.
//! The first candidate to construct becomes the process-wide bridge for
//! the rest of the process lifetime.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use vela_host::HostReflect;

use crate::bridge::{BaselineBridge, ExtendedBridge, ReflectBridge};
use crate::capability::CapabilityLevel;
use crate::error::{BridgeError, ProbeError};

// ============================================================================
// Candidates
// ============================================================================

/// Probing constructor for one bridge implementation.
pub type BridgeConstructor =
    fn(Arc<dyn HostReflect>) -> Result<Box<dyn ReflectBridge>, ProbeError>;

/// One entry in the ordered candidate table.
#[derive(Clone, Copy)]
pub struct BridgeCandidate {
    /// Capability level this candidate assumes.
    pub level: CapabilityLevel,
    /// Constructor that probes the host before committing.
    pub construct: BridgeConstructor,
}

/// The standard candidate table, highest capability first.
pub fn default_candidates() -> [BridgeCandidate; 2] {
    [
        BridgeCandidate {
            level: CapabilityLevel::Extended,
            construct: ExtendedBridge::probe,
        },
        BridgeCandidate {
            level: CapabilityLevel::Baseline,
            construct: BaselineBridge::probe,
        },
    ]
}

// ============================================================================
// Selection
// ============================================================================

/// Try candidates in order and construct the first that probes clean.
///
/// `candidates` must be sorted from highest to lowest capability level.
/// A probe failing with `Unsupported` recovers locally by moving on; any
/// other host fault aborts selection and propagates unchanged. When every
/// candidate is unsupported there is no valid bridge, and the caller must
/// not continue engine startup.
pub fn select_bridge(
    host: &Arc<dyn HostReflect>,
    candidates: &[BridgeCandidate],
) -> Result<Box<dyn ReflectBridge>, BridgeError> {
    debug_assert!(
        candidates.windows(2).all(|pair| pair[0].level > pair[1].level),
        "bridge candidates must be ordered from highest to lowest capability"
    );

    let mut probed = Vec::new();
    for candidate in candidates {
        match (candidate.construct)(Arc::clone(host)) {
            Ok(bridge) => return Ok(bridge),
            Err(ProbeError::Unsupported(feature)) => probed.push((candidate.level, feature)),
            Err(ProbeError::Fault(fault)) => return Err(BridgeError::Host(fault)),
        }
    }
    Err(BridgeError::NoViableBridge { probed })
}

// ============================================================================
// Installation
// ============================================================================

/// Single-assignment cell holding a selected bridge.
///
/// Set exactly once, read-only thereafter; the process-wide instance
/// behind [`active_bridge`] is one of these. Tests hold their own cells to
/// exercise installation without touching process state.
pub struct BridgeCell {
    slot: OnceCell<Box<dyn ReflectBridge>>,
}

impl BridgeCell {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Select from `candidates` and install, once.
    ///
    /// A later call returns the already-installed bridge without probing
    /// again — installation is idempotent, never a reassignment.
    pub fn install_with(
        &self,
        host: &Arc<dyn HostReflect>,
        candidates: &[BridgeCandidate],
    ) -> Result<&dyn ReflectBridge, BridgeError> {
        self.slot
            .get_or_try_init(|| select_bridge(host, candidates))
            .map(|bridge| bridge.as_ref())
    }

    /// The installed bridge, if installation has happened.
    pub fn get(&self) -> Option<&dyn ReflectBridge> {
        self.slot.get().map(|bridge| bridge.as_ref())
    }
}

impl Default for BridgeCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide bridge slot, filled during engine bootstrap.
static ACTIVE_BRIDGE: BridgeCell = BridgeCell::new();

/// Select and install the process-wide bridge from the standard
/// candidates.
///
/// Called once from engine bootstrap, before any reflective operation. An
/// error here is fatal to startup — the engine must not run without a
/// bridge.
pub fn bootstrap(host: Arc<dyn HostReflect>) -> Result<&'static dyn ReflectBridge, BridgeError> {
    ACTIVE_BRIDGE.install_with(&host, &default_candidates())
}

/// Like [`bootstrap`], with an explicit candidate table.
pub fn bootstrap_with(
    host: &Arc<dyn HostReflect>,
    candidates: &[BridgeCandidate],
) -> Result<&'static dyn ReflectBridge, BridgeError> {
    ACTIVE_BRIDGE.install_with(host, candidates)
}

/// The process-wide bridge installed at bootstrap, if any.
pub fn active_bridge() -> Option<&'static dyn ReflectBridge> {
    ACTIVE_BRIDGE.get()
}
