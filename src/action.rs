/// The actions a circuit schedules and dispatches.
///
/// Where the original callback model stores closures on wires and on the
/// agenda, Vulcan stores a small `Copy` tag carrying only the identifier
/// it needs; the circuit driver interprets it. This keeps the agenda free
/// of borrows into the circuit and makes dispatch order inspectable.

use crate::gate::GateId;
use crate::wire::WireId;

/// A single schedulable unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Immediate action: an input of the gate changed (or the gate was
    /// just wired); schedule a [`Action::Settle`] after the gate's delay.
    Trigger(GateId),

    /// Delayed action: the gate's delay has elapsed; read the inputs' live
    /// signals, apply the transfer function, write the output wire.
    Settle(GateId),

    /// Immediate action: the monitor's logging hook for a watched wire.
    Trace(WireId),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Trigger(g) => write!(f, "Trigger({})", g),
            Action::Settle(g) => write!(f, "Settle({})", g),
            Action::Trace(w) => write!(f, "Trace({})", w),
        }
    }
}
