/// Wires: named binary signal cells with subscriber lists.
///
/// A wire is the only mutable state in a circuit. Writing a wire stores
/// the new signal unconditionally and notifies every subscriber in
/// subscription order — even when the value did not change. Change
/// detection is deliberately left to subscribers; suppressing redundant
/// notifications would alter the timing of cascaded recomputation.

use crate::action::Action;
use crate::signal::Signal;

// ── WireId ────────────────────────────────────────────────────────────

/// Index of a wire within its owning [`Circuit`](crate::circuit::Circuit).
///
/// Only meaningful for the circuit that minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct WireId(u32);

impl WireId {
    #[inline]
    pub fn new(raw: u32) -> Self {
        WireId(raw)
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for WireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W{}", self.0)
    }
}

// ── Wire ──────────────────────────────────────────────────────────────

/// A named binary cell plus its ordered subscriber list.
///
/// Wires live in the circuit arena; all mutation goes through
/// [`Circuit::set_signal`](crate::circuit::Circuit::set_signal), the sole
/// side-effecting entry point.
#[derive(Debug, Clone)]
pub struct Wire {
    /// Display label. Not required to be unique.
    pub(crate) name: String,
    /// Current level; every wire starts `Low`.
    pub(crate) signal: Signal,
    /// Insertion-ordered actions dispatched on every write.
    /// Subscribers are never removed.
    pub(crate) subscribers: Vec<Action>,
}

impl Wire {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Wire {
            name: name.into(),
            signal: Signal::Low,
            subscribers: Vec::new(),
        }
    }

    /// The wire's display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current signal level.
    pub fn signal(&self) -> Signal {
        self.signal
    }
}

impl std::fmt::Display for Wire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.signal)
    }
}
