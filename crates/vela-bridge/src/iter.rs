//! Host iterator adaptation
//!
//! Bridges host-native iteration into the engine's iterator contract. The
//! probe inspects shape only: it unwraps at most one engine-wrapper level,
//! then prefers a value that already *is* a cursor over one that can
//! *open* cursors, and pulls no elements itself. Consumption is lazy and
//! entirely engine-driven — a single forward pass with no restart.

use std::fmt;

use vela_host::{HostCursor, HostResult, HostValue};

// ============================================================================
// Probe result
// ============================================================================

/// Outcome of probing a host value for iteration support.
pub enum IterableProbe {
    /// The value does not expose host iteration.
    ///
    /// Not an error: ownership of the probed value returns to the caller
    /// exactly as it arrived.
    NotIterable(HostValue),

    /// The value yielded a native cursor, now owned by the iterator.
    Native(NativeIterator),
}

impl IterableProbe {
    /// Whether the probe found native iteration support.
    pub fn is_iterable(&self) -> bool {
        matches!(self, IterableProbe::Native(_))
    }
}

impl fmt::Debug for IterableProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterableProbe::NotIterable(value) => {
                write!(f, "IterableProbe::NotIterable({:?})", value)
            }
            IterableProbe::Native(iterator) => {
                write!(f, "IterableProbe::Native({:?})", iterator)
            }
        }
    }
}

// ============================================================================
// NativeIterator
// ============================================================================

/// Engine-side iterator over a host cursor.
///
/// Owns the cursor exclusively and pulls one element per request, with no
/// bound assumed on the sequence. Once the cursor reports exhaustion or
/// faults, the iterator stays exhausted — a cursor cannot be rewound.
pub struct NativeIterator {
    cursor: Box<dyn HostCursor>,
    done: bool,
}

impl fmt::Debug for NativeIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeIterator")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl NativeIterator {
    fn new(cursor: Box<dyn HostCursor>) -> Self {
        Self {
            cursor,
            done: false,
        }
    }

    /// Pull the next element from the host cursor.
    pub fn pull(&mut self) -> HostResult<Option<HostValue>> {
        if self.done {
            return Ok(None);
        }
        match self.cursor.pull() {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => {
                self.done = true;
                Ok(None)
            }
            Err(fault) => {
                // No post-fault guarantees from the host; fuse.
                self.done = true;
                Err(fault)
            }
        }
    }
}

impl Iterator for NativeIterator {
    type Item = HostResult<HostValue>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.pull() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => None,
            Err(fault) => Some(Err(fault)),
        }
    }
}

// ============================================================================
// Adaptation
// ============================================================================

/// Probe `value` for host iteration support and adapt on success.
///
/// Unwraps one engine-wrapper level (never recursively), then tests the
/// two recognized host shapes in order: an active cursor wins over an
/// iterable source. The probe obtains a cursor handle at most; it never
/// pulls an element.
pub fn adapt_iterable(value: HostValue) -> HostResult<IterableProbe> {
    // One level of unwrapping only.
    let (inner, was_wrapped) = match value {
        HostValue::Wrapped(inner) => (*inner, true),
        other => (other, false),
    };

    let rewrap = |value: HostValue| {
        if was_wrapped {
            HostValue::Wrapped(Box::new(value))
        } else {
            value
        }
    };

    let object = match inner {
        HostValue::Object(object) => object,
        other => return Ok(IterableProbe::NotIterable(rewrap(other))),
    };

    // An object that already is a cursor beats one that can open cursors.
    let object = match object.into_cursor() {
        Ok(cursor) => return Ok(IterableProbe::Native(NativeIterator::new(cursor))),
        Err(object) => object,
    };

    if let Some(iterable) = object.as_iterable() {
        let cursor = iterable.open()?;
        return Ok(IterableProbe::Native(NativeIterator::new(cursor)));
    }

    Ok(IterableProbe::NotIterable(rewrap(HostValue::Object(object))))
}
