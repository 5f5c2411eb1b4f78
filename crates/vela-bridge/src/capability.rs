//! Bridge capability levels

use std::fmt;

/// Ordered rank of the host reflection generations a bridge assumes.
///
/// Declaration order gives `Baseline < Extended`. Selection walks the
/// candidate table from the highest rank downward and installs the first
/// implementation whose probe succeeds; exactly one level is active per
/// process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityLevel {
    /// Assumes nothing beyond the always-present host reflection core.
    Baseline,
    /// Assumes variadic-arguments and parameter-name metadata.
    Extended,
}

impl CapabilityLevel {
    /// Stable lowercase name used in selection messages.
    pub fn name(self) -> &'static str {
        match self {
            CapabilityLevel::Baseline => "baseline",
            CapabilityLevel::Extended => "extended",
        }
    }
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
