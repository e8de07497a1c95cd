//! Structured error types for Vulcan.
//!
//! All fallible public APIs return `Result<T, CircuitError>`. This lets
//! callers distinguish precondition violations (e.g. querying an empty
//! agenda) from data errors (e.g. a non-binary stimulus) without relying
//! on panics or stringly-typed errors.

use thiserror::Error;

/// The top-level error type for the circuit simulator.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CircuitError {
    /// A raw stimulus value was outside the binary domain {0, 1}.
    #[error("signal value {0} is out of range (expected 0 or 1)")]
    SignalOutOfRange(u8),

    /// The first agenda item was requested while no actions are pending.
    ///
    /// The driver checks `is_empty` before asking, so reaching this error
    /// means the agenda was queried directly out of contract.
    #[error("the agenda is empty")]
    AgendaEmpty,

    /// Bounded propagation dispatched `max_events` actions without the
    /// circuit settling. Expected only for cyclic wiring, which the
    /// simulator does not support.
    #[error("circuit did not settle within {max_events} events")]
    NonTerminating { max_events: u64 },
}

/// Convenience alias for `Result<T, CircuitError>`.
pub type CircuitResult<T> = Result<T, CircuitError>;
