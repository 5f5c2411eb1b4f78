//! Host reflection surface
//!
//! Defines the interface through which the engine queries host metadata:
//! [`HostReflect`] is implemented by the embedding runtime, and
//! [`CallableDescriptor`] is the opaque handle a query operates on.
//!
//! Host runtimes grow their reflection surface across generations. The
//! optional parts are named by [`HostFeature`] and must be probed via
//! [`HostReflect::probe_feature`] before use; a query against an absent
//! feature faults with `Unsupported` rather than failing unpredictably.

use std::fmt;

use crate::error::HostResult;

// ============================================================================
// Host Features
// ============================================================================

/// Optional host reflection features, by name.
///
/// Each feature names metadata that the host may or may not publish,
/// depending on its generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostFeature {
    /// Native "accepts variable trailing arguments" metadata on callables.
    VariadicQuery,
    /// Declared parameter names on callables.
    ParameterNames,
}

impl HostFeature {
    /// Stable feature name used in probe and fault messages.
    pub fn name(self) -> &'static str {
        match self {
            HostFeature::VariadicQuery => "variadic-query",
            HostFeature::ParameterNames => "parameter-names",
        }
    }
}

impl fmt::Display for HostFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Callable Descriptors
// ============================================================================

/// Kind of host member a [`CallableDescriptor`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallableKind {
    /// Instance or static method
    Method,
    /// Constructor
    Constructor,
    /// Data field (not invocable)
    Field,
}

/// Opaque handle to a host-introspectable member.
///
/// The token is meaningful only to the host runtime that issued it; the
/// name is carried for diagnostics. Descriptors are immutable and owned by
/// the caller — the bridge never keeps one beyond a single query.
#[derive(Clone, Debug)]
pub struct CallableDescriptor {
    kind: CallableKind,
    token: u64,
    name: String,
}

impl CallableDescriptor {
    fn new(kind: CallableKind, token: u64, name: impl Into<String>) -> Self {
        Self {
            kind,
            token,
            name: name.into(),
        }
    }

    /// Describe a method member.
    pub fn method(token: u64, name: impl Into<String>) -> Self {
        Self::new(CallableKind::Method, token, name)
    }

    /// Describe a constructor member.
    pub fn constructor(token: u64, name: impl Into<String>) -> Self {
        Self::new(CallableKind::Constructor, token, name)
    }

    /// Describe a data field member.
    pub fn field(token: u64, name: impl Into<String>) -> Self {
        Self::new(CallableKind::Field, token, name)
    }

    /// Member kind.
    pub fn kind(&self) -> CallableKind {
        self.kind
    }

    /// Host-issued member token.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Member name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this descriptor names something invocable.
    pub fn is_callable(&self) -> bool {
        matches!(self.kind, CallableKind::Method | CallableKind::Constructor)
    }
}

// ============================================================================
// HostReflect
// ============================================================================

/// Host reflection API, implemented by the embedding runtime.
///
/// This trait is the single entry point for reflective metadata queries.
/// Engine code programs against `Arc<dyn HostReflect>` and never depends on
/// a concrete host generation; anything generation-specific is gated behind
/// a [`HostFeature`] probe.
///
/// All methods are pure metadata reads: no side effects, safe to call
/// concurrently, identical results for identical inputs within one process.
pub trait HostReflect: Send + Sync {
    /// Live check that `feature` exists on this host generation.
    ///
    /// Absence is reported as an `Unsupported` fault; any other fault
    /// indicates a genuine host problem.
    fn probe_feature(&self, feature: HostFeature) -> HostResult<()>;

    /// Native variadic-arguments metadata query for a callable member.
    ///
    /// Hosts that do not publish [`HostFeature::VariadicQuery`] fault with
    /// `Unsupported`.
    fn callable_is_variadic(&self, descriptor: &CallableDescriptor) -> HostResult<bool>;

    /// Declared parameter names for a callable member.
    ///
    /// Hosts that do not publish [`HostFeature::ParameterNames`] fault with
    /// `Unsupported`.
    fn callable_parameter_names(
        &self,
        descriptor: &CallableDescriptor,
    ) -> HostResult<Vec<String>>;
}
