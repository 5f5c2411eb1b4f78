//! HostValue — tagged handle for host values at the bridge boundary
//!
//! Scalars are stored inline. Live host objects sit behind the
//! [`HostObject`] capability trait and are probed dynamically. `Wrapped` is
//! the shape produced by the engine's object-wrapping layer: a value that
//! carries a deeper value inside it. Wrapping never nests more than the
//! bridge is willing to peel — adapters unwrap one level only.

use std::fmt;

use crate::iter::{HostCursor, HostIterable};

/// A host value handed to the engine for reflective probing.
pub enum HostValue {
    /// Host null / absent value
    Null,
    /// Host boolean
    Bool(bool),
    /// Host integer
    Int(i64),
    /// Host float
    Float(f64),
    /// Host string
    Str(String),
    /// Live host object with dynamic capabilities
    Object(Box<dyn HostObject>),
    /// Engine wrapper around a deeper value
    Wrapped(Box<HostValue>),
}

impl HostValue {
    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Get as boolean if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            HostValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string slice if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Type name of this value, for diagnostics.
    ///
    /// Objects report their host-side type name; wrappers report the
    /// wrapper shape itself, not the wrapped value's.
    pub fn type_name(&self) -> &str {
        match self {
            HostValue::Null => "null",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "string",
            HostValue::Object(object) => object.type_name(),
            HostValue::Wrapped(_) => "wrapper",
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Null => write!(f, "HostValue::Null"),
            HostValue::Bool(b) => write!(f, "HostValue::Bool({})", b),
            HostValue::Int(i) => write!(f, "HostValue::Int({})", i),
            HostValue::Float(x) => write!(f, "HostValue::Float({})", x),
            HostValue::Str(s) => write!(f, "HostValue::Str({:?})", s),
            HostValue::Object(object) => write!(f, "HostValue::Object({})", object.type_name()),
            HostValue::Wrapped(inner) => write!(f, "HostValue::Wrapped({:?})", inner),
        }
    }
}

/// Capability surface of a live host object, as seen by the bridge.
///
/// Capability casts are explicit rather than downcast-based: an object that
/// is itself an active iteration cursor reclaims itself through
/// [`HostObject::into_cursor`], and an object that can open fresh cursors
/// exposes [`HostObject::as_iterable`]. A single object may support both
/// shapes; precedence between them is the caller's decision.
pub trait HostObject: Send {
    /// Host-side type name, for diagnostics.
    fn type_name(&self) -> &str;

    /// Reclaim this object as an active iteration cursor.
    ///
    /// Ownership transfers to the returned cursor on success; otherwise the
    /// object is handed back unchanged.
    fn into_cursor(self: Box<Self>) -> Result<Box<dyn HostCursor>, Box<dyn HostObject>>;

    /// Borrow this object's iterable capability, if it can open cursors.
    fn as_iterable(&self) -> Option<&dyn HostIterable>;
}
