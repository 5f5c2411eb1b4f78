//! Vela Bridge - versioned host-reflection bridge
//!
//! The Vela engine embeds into a managed host runtime and reaches that
//! host's reflection facilities through this crate, without being coupled
//! to one fixed generation of the host's reflection API:
//!
//! - **Selection** (`selector` module): at engine bootstrap, bridge
//!   candidates are probed in descending capability order and the first
//!   one whose live probe succeeds is installed process-wide.
//! - **Capability queries** (`bridge` module): variadic-arguments and
//!   parameter-name metadata, degrading gracefully on hosts that predate
//!   the extended reflection surface.
//! - **Iterator adaptation** (`iter` module): host-native cursors and
//!   iterable sources become engine iterators — lazy, single-pass,
//!   unbounded if the host sequence is.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vela_bridge::bootstrap;
//!
//! let bridge = bootstrap(Arc::new(MyHostRuntime))?;
//! if bridge.is_variadic(&descriptor)? {
//!     // spread trailing arguments
//! }
//! ```

#![warn(missing_docs)]

mod bridge;
mod capability;
mod error;
mod iter;
mod selector;

pub use bridge::{BaselineBridge, ExtendedBridge, ReflectBridge};
pub use capability::CapabilityLevel;
pub use error::{BridgeError, ProbeError};
pub use iter::{adapt_iterable, IterableProbe, NativeIterator};
pub use selector::{
    active_bridge, bootstrap, bootstrap_with, default_candidates, select_bridge, BridgeCandidate,
    BridgeCell, BridgeConstructor,
};
