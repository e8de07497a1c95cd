/// Signal tracing for watched wires.
///
/// The monitor is a passive subscriber: probing a wire registers a trace
/// action on it, and every subsequent write (plus the initial dispatch at
/// subscription) lands here. Entries are recorded in memory and emitted
/// as `tracing` events, gated by a verbosity threshold; below the
/// threshold the subscription still fires — so timing is unaffected —
/// but nothing is recorded.

use crate::signal::Signal;
use crate::time::SimTime;
use crate::wire::WireId;

/// Verbosity at or above which per-write trace entries are recorded.
pub const TRACE_VERBOSITY: u8 = 2;

// ── TraceEntry ────────────────────────────────────────────────────────

/// One observed write to a watched wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEntry {
    /// Simulated time of the write.
    pub time: SimTime,
    /// The watched wire.
    pub wire: WireId,
    /// The wire's display label at the time of the write.
    pub name: String,
    /// The value that was written.
    pub signal: Signal,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} new-value = {}", self.time, self.name, self.signal)
    }
}

// ── Monitor ───────────────────────────────────────────────────────────

/// Records writes to watched wires, subject to a verbosity threshold.
///
/// One monitor exists per [`Circuit`](crate::circuit::Circuit); the
/// original's process-wide singleton became a circuit field so that
/// independent simulations (and tests) do not share a trace.
#[derive(Debug, Clone)]
pub struct Monitor {
    watched: Vec<WireId>,
    verbosity: u8,
    trace: Vec<TraceEntry>,
}

impl Monitor {
    /// Create a monitor with the default verbosity (1: summary only).
    pub fn new() -> Self {
        Monitor {
            watched: Vec::new(),
            verbosity: 1,
            trace: Vec::new(),
        }
    }

    /// Set the verbosity threshold. Per-write entries are recorded at
    /// [`TRACE_VERBOSITY`] and above; the final summary is unaffected.
    pub fn set_verbosity(&mut self, verbosity: u8) {
        self.verbosity = verbosity;
    }

    /// Current verbosity.
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Add a wire to the watched list.
    pub(crate) fn watch(&mut self, wire: WireId) {
        self.watched.push(wire);
    }

    /// The watched wires, in probe order.
    pub fn watched(&self) -> &[WireId] {
        &self.watched
    }

    /// Record a write to a watched wire.
    ///
    /// Below the verbosity threshold this is a no-op; the caller still
    /// dispatches the trace action so that timing never depends on
    /// verbosity.
    pub(crate) fn record(&mut self, time: SimTime, wire: WireId, name: &str, signal: Signal) {
        if self.verbosity < TRACE_VERBOSITY {
            return;
        }
        tracing::info!(%time, %wire, name, %signal, "wire changed");
        self.trace.push(TraceEntry {
            time,
            wire,
            name: name.to_owned(),
            signal,
        });
    }

    /// The recorded trace, in dispatch order.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}
