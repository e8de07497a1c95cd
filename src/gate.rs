/// Gate primitives: AND, OR, XOR, INVERT.
///
/// A gate binds one or two input wires to an output wire. It holds no
/// state of its own — just the wiring plus a kind that fixes the
/// propagation delay and the boolean transfer function. When an input
/// changes, the gate schedules a recomputation that runs after the delay
/// and reads the inputs' *live* values at that future time.

use crate::signal::Signal;
use crate::wire::WireId;

/// Canonical propagation delays, in simulated ticks.
///
/// Arbitrary units reflecting relative real-gate speed.
pub const INVERT_DELAY: u64 = 2;
pub const AND_GATE_DELAY: u64 = 3;
pub const OR_GATE_DELAY: u64 = 5;
pub const XOR_GATE_DELAY: u64 = 8;

// ── GateId ────────────────────────────────────────────────────────────

/// Index of a gate within its owning [`Circuit`](crate::circuit::Circuit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GateId(u32);

impl GateId {
    #[inline]
    pub fn new(raw: u32) -> Self {
        GateId(raw)
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

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "G{}", self.0)
    }
}

// ── GateKind ──────────────────────────────────────────────────────────

/// The four gate kinds, each with a fixed delay and transfer function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum GateKind {
    And,
    Or,
    Xor,
    Invert,
}

impl GateKind {
    /// The gate's fixed propagation delay in ticks.
    #[inline]
    pub fn delay(self) -> u64 {
        match self {
            GateKind::And => AND_GATE_DELAY,
            GateKind::Or => OR_GATE_DELAY,
            GateKind::Xor => XOR_GATE_DELAY,
            GateKind::Invert => INVERT_DELAY,
        }
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Invert => "INVERT",
        };
        f.write_str(label)
    }
}

// ── Transfer functions ────────────────────────────────────────────────

/// 1 iff both inputs are 1.
#[inline]
pub fn logical_and(a: Signal, b: Signal) -> Signal {
    Signal::from(a.is_high() && b.is_high())
}

/// 0 iff both inputs are 0.
#[inline]
pub fn logical_or(a: Signal, b: Signal) -> Signal {
    Signal::from(a.is_high() || b.is_high())
}

/// 1 iff the inputs differ.
#[inline]
pub fn logical_xor(a: Signal, b: Signal) -> Signal {
    Signal::from(a != b)
}

/// 1 − input.
#[inline]
pub fn logical_not(a: Signal) -> Signal {
    Signal::from(!a.is_high())
}

// ── Gate ──────────────────────────────────────────────────────────────

/// The input wiring of a gate, with arity fixed by construction.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum GateOp {
    And(WireId, WireId),
    Or(WireId, WireId),
    Xor(WireId, WireId),
    Invert(WireId),
}

/// A wired gate: inputs, output, nothing else.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Gate {
    pub(crate) op: GateOp,
    pub(crate) output: WireId,
}

impl Gate {
    pub(crate) fn new(op: GateOp, output: WireId) -> Self {
        Gate { op, output }
    }

    /// The gate's kind.
    pub fn kind(&self) -> GateKind {
        match self.op {
            GateOp::And(..) => GateKind::And,
            GateOp::Or(..) => GateKind::Or,
            GateOp::Xor(..) => GateKind::Xor,
            GateOp::Invert(..) => GateKind::Invert,
        }
    }

    /// The gate's output wire.
    pub fn output(&self) -> WireId {
        self.output
    }

    /// The input wires: always at least one, a second for binary kinds.
    pub fn inputs(&self) -> (WireId, Option<WireId>) {
        match self.op {
            GateOp::And(a, b) | GateOp::Or(a, b) | GateOp::Xor(a, b) => (a, Some(b)),
            GateOp::Invert(a) => (a, None),
        }
    }

    /// Apply the transfer function to the inputs' current signals,
    /// as read through `signal_of`.
    pub(crate) fn evaluate(&self, signal_of: impl Fn(WireId) -> Signal) -> Signal {
        match self.op {
            GateOp::And(a, b) => logical_and(signal_of(a), signal_of(b)),
            GateOp::Or(a, b) => logical_or(signal_of(a), signal_of(b)),
            GateOp::Xor(a, b) => logical_xor(signal_of(a), signal_of(b)),
            GateOp::Invert(a) => logical_not(signal_of(a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal::{High, Low};

    #[test]
    fn test_and_truth_table() {
        assert_eq!(logical_and(Low, Low), Low);
        assert_eq!(logical_and(Low, High), Low);
        assert_eq!(logical_and(High, Low), Low);
        assert_eq!(logical_and(High, High), High);
    }

    #[test]
    fn test_or_truth_table() {
        assert_eq!(logical_or(Low, Low), Low);
        assert_eq!(logical_or(Low, High), High);
        assert_eq!(logical_or(High, Low), High);
        assert_eq!(logical_or(High, High), High);
    }

    #[test]
    fn test_xor_truth_table() {
        assert_eq!(logical_xor(Low, Low), Low);
        assert_eq!(logical_xor(Low, High), High);
        assert_eq!(logical_xor(High, Low), High);
        assert_eq!(logical_xor(High, High), Low);
    }

    #[test]
    fn test_not_truth_table() {
        assert_eq!(logical_not(Low), High);
        assert_eq!(logical_not(High), Low);
    }

    #[test]
    fn test_delays() {
        assert_eq!(GateKind::Invert.delay(), 2);
        assert_eq!(GateKind::And.delay(), 3);
        assert_eq!(GateKind::Or.delay(), 5);
        assert_eq!(GateKind::Xor.delay(), 8);
    }

    #[test]
    fn test_gate_inputs_and_kind() {
        let g = Gate::new(GateOp::Xor(WireId::new(0), WireId::new(1)), WireId::new(2));
        assert_eq!(g.kind(), GateKind::Xor);
        assert_eq!(g.inputs(), (WireId::new(0), Some(WireId::new(1))));
        assert_eq!(g.output(), WireId::new(2));

        let inv = Gate::new(GateOp::Invert(WireId::new(4)), WireId::new(5));
        assert_eq!(inv.kind(), GateKind::Invert);
        assert_eq!(inv.inputs(), (WireId::new(4), None));
    }

    #[test]
    fn test_evaluate_reads_through_lookup() {
        let g = Gate::new(GateOp::And(WireId::new(0), WireId::new(1)), WireId::new(2));
        let signals = [High, High, Low];
        let v = g.evaluate(|w| signals[w.index()]);
        assert_eq!(v, High);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(GateKind::Invert.to_string(), "INVERT");
        assert_eq!(GateKind::And.to_string(), "AND");
    }
}
