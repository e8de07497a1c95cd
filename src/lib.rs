//! # Vulcan — Discrete-Event Digital Logic Simulator
//!
//! A simulator for combinational digital logic: binary signals propagate
//! through gates with fixed, gate-specific delays, driven by a global
//! time-ordered event queue (the agenda). No wall-clock time, no threads
//! — execution is synchronous and fully deterministic.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │               Circuit                 │ ← arena + driver loop
//! │  ┌────────────────┐ ┌─────────────┐  │
//! │  │ Wires / Gates   │ │   Monitor   │  │ ← signal cells, wiring, trace
//! │  └────────────────┘ └─────────────┘  │
//! │  ┌────────────────────────────────┐  │
//! │  │        Agenda<Action>          │  │ ← (time, FIFO) segments
//! │  └────────────────────────────────┘  │
//! │  ┌────────────────────────────────┐  │
//! │  │            SimTime             │  │ ← logical clock
//! │  └────────────────────────────────┘  │
//! └──────────────────────────────────────┘
//! ```
//!
//! Writing a wire notifies its subscribers synchronously; gate triggers
//! schedule delayed recomputations on the agenda; the driver drains the
//! agenda in (time, FIFO) order until the circuit is quiescent.

pub mod action;
pub mod adders;
pub mod agenda;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod monitor;
pub mod signal;
pub mod time;
pub mod wire;

// Re-exports for convenience.
pub use action::Action;
pub use adders::{full_adder, half_adder};
pub use agenda::Agenda;
pub use circuit::{Circuit, PropagationReport};
pub use error::{CircuitError, CircuitResult};
pub use gate::{
    Gate, GateId, GateKind, AND_GATE_DELAY, INVERT_DELAY, OR_GATE_DELAY, XOR_GATE_DELAY,
};
pub use monitor::{Monitor, TraceEntry, TRACE_VERBOSITY};
pub use signal::Signal;
pub use time::SimTime;
pub use wire::{Wire, WireId};
