//! Bridge implementations per host generation
//!
//! One object-safe trait, [`ReflectBridge`], with a closed set of
//! implementations — one per host generation the engine knows how to
//! exploit. Each implementation's `probe` constructor performs a live
//! check of the host features it assumes, so construction never succeeds
//! on a host that cannot back it.

use std::fmt;
use std::sync::Arc;

use vela_host::{CallableDescriptor, HostFeature, HostReflect, HostResult, HostValue};

use crate::capability::CapabilityLevel;
use crate::error::ProbeError;
use crate::iter::{adapt_iterable, IterableProbe};

/// Engine-facing host reflection operations.
///
/// Exactly one implementation is installed per process at bootstrap and
/// serves every later reflective operation. Queries are pure metadata
/// reads — no side effects, safe for unsynchronized concurrent use, and
/// identical results for identical descriptors within one process.
pub trait ReflectBridge: Send + Sync + fmt::Debug {
    /// Capability level this bridge was selected at.
    fn level(&self) -> CapabilityLevel;

    /// Whether `descriptor` names a callable accepting variable trailing
    /// arguments.
    ///
    /// Non-callable member kinds are non-variadic by definition — never an
    /// error, and never a host query.
    fn is_variadic(&self, descriptor: &CallableDescriptor) -> HostResult<bool>;

    /// Declared parameter names for `descriptor`, when the host publishes
    /// them.
    ///
    /// `None` when the metadata is unavailable at this capability level or
    /// the member is not callable.
    fn parameter_names(&self, descriptor: &CallableDescriptor) -> HostResult<Option<Vec<String>>>;

    /// Probe `value` for host iteration support.
    ///
    /// Adaptation is structural and identical at every capability level;
    /// see [`adapt_iterable`].
    fn try_adapt_iterable(&self, value: HostValue) -> HostResult<IterableProbe> {
        adapt_iterable(value)
    }
}

// ============================================================================
// Extended bridge
// ============================================================================

/// Bridge for hosts that publish the extended reflection metadata.
pub struct ExtendedBridge {
    host: Arc<dyn HostReflect>,
}

impl fmt::Debug for ExtendedBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedBridge").finish_non_exhaustive()
    }
}

impl ExtendedBridge {
    /// Probe the host for the extended metadata and construct.
    ///
    /// Fails with [`ProbeError::Unsupported`] when the host lacks an
    /// assumed feature; any other host fault aborts selection.
    pub fn probe(host: Arc<dyn HostReflect>) -> Result<Box<dyn ReflectBridge>, ProbeError> {
        host.probe_feature(HostFeature::VariadicQuery)?;
        host.probe_feature(HostFeature::ParameterNames)?;
        Ok(Box::new(Self { host }))
    }
}

impl ReflectBridge for ExtendedBridge {
    fn level(&self) -> CapabilityLevel {
        CapabilityLevel::Extended
    }

    fn is_variadic(&self, descriptor: &CallableDescriptor) -> HostResult<bool> {
        if !descriptor.is_callable() {
            return Ok(false);
        }
        self.host.callable_is_variadic(descriptor)
    }

    fn parameter_names(&self, descriptor: &CallableDescriptor) -> HostResult<Option<Vec<String>>> {
        if !descriptor.is_callable() {
            return Ok(None);
        }
        self.host.callable_parameter_names(descriptor).map(Some)
    }
}

// ============================================================================
// Baseline bridge
// ============================================================================

/// Bridge for hosts that predate the extended reflection metadata.
///
/// Degrades rather than fails: every callable reports as non-variadic and
/// parameter names are never available. This is the documented capability
/// gap of older hosts, not an error condition.
#[derive(Debug)]
pub struct BaselineBridge;

impl BaselineBridge {
    /// Construct without probing — the baseline assumes nothing optional.
    pub fn probe(_host: Arc<dyn HostReflect>) -> Result<Box<dyn ReflectBridge>, ProbeError> {
        Ok(Box::new(Self))
    }
}

impl ReflectBridge for BaselineBridge {
    fn level(&self) -> CapabilityLevel {
        CapabilityLevel::Baseline
    }

    fn is_variadic(&self, _descriptor: &CallableDescriptor) -> HostResult<bool> {
        Ok(false)
    }

    fn parameter_names(&self, _descriptor: &CallableDescriptor) -> HostResult<Option<Vec<String>>> {
        Ok(None)
    }
}
