/// The circuit: wire/gate arena, subscriber dispatch, and the driver loop.
///
/// A `Circuit` is an explicit simulation context — the original design's
/// process-wide agenda and monitor singletons live here as fields, so
/// any number of independent circuits can coexist in one process.
///
/// Execution is single-threaded, cooperative and synchronous: every
/// subscriber dispatched by a write runs to completion before the write
/// returns. Immediate actions ([`Action::Trigger`], [`Action::Trace`])
/// run inline; delayed actions ([`Action::Settle`]) go through the agenda
/// and only ever run inside the driver loop, which is the one place
/// simulated time advances.

use crate::action::Action;
use crate::agenda::Agenda;
use crate::error::{CircuitError, CircuitResult};
use crate::gate::{Gate, GateId, GateOp};
use crate::monitor::Monitor;
use crate::signal::Signal;
use crate::time::SimTime;
use crate::wire::{Wire, WireId};

// ── Circuit ───────────────────────────────────────────────────────────

/// A combinational logic circuit plus everything needed to simulate it.
#[derive(Debug, Clone)]
pub struct Circuit {
    wires: Vec<Wire>,
    gates: Vec<Gate>,
    agenda: Agenda<Action>,
    monitor: Monitor,
    events_processed: u64,
}

impl Circuit {
    /// Create an empty circuit with the clock at time zero.
    pub fn new() -> Self {
        Circuit {
            wires: Vec::new(),
            gates: Vec::new(),
            agenda: Agenda::new(),
            monitor: Monitor::new(),
            events_processed: 0,
        }
    }

    // ── Wires ─────────────────────────────────────────────────

    /// Create a wire with the given display label. Starts `Low`.
    pub fn add_wire(&mut self, name: impl Into<String>) -> WireId {
        let id = WireId::new(self.wires.len() as u32);
        self.wires.push(Wire::new(name));
        id
    }

    /// Change a wire's display label (e.g. to name a gate-built output).
    pub fn rename_wire(&mut self, wire: WireId, name: impl Into<String>) {
        self.wires[wire.index()].name = name.into();
    }

    /// Borrow a wire.
    pub fn wire(&self, wire: WireId) -> &Wire {
        &self.wires[wire.index()]
    }

    /// Read a wire's current signal. No side effect.
    pub fn signal(&self, wire: WireId) -> Signal {
        self.wires[wire.index()].signal
    }

    /// Write a wire's signal.
    ///
    /// Stores `signal` unconditionally, then dispatches every subscriber
    /// in subscription order, synchronously. This happens even when the
    /// new value equals the old one — subscribers wanting change
    /// detection must implement it themselves.
    pub fn set_signal(&mut self, wire: WireId, signal: Signal) {
        self.wires[wire.index()].signal = signal;
        // Snapshot the list: subscribers added during dispatch are only
        // notified from the next write onward.
        let subscribers = self.wires[wire.index()].subscribers.clone();
        for action in subscribers {
            self.dispatch(action);
        }
    }

    /// Append `action` to the wire's subscriber list and dispatch it once
    /// immediately, so the subscriber picks up the wire's current value
    /// without waiting for the next write.
    pub fn subscribe(&mut self, wire: WireId, action: Action) {
        self.wires[wire.index()].subscribers.push(action);
        self.dispatch(action);
    }

    // ── Gates ─────────────────────────────────────────────────

    fn add_gate(&mut self, op: GateOp, output: WireId) -> GateId {
        let id = GateId::new(self.gates.len() as u32);
        let gate = Gate::new(op, output);
        let (a, b) = gate.inputs();
        self.gates.push(gate);
        // Both inputs carry the same trigger, so either one changing
        // causes one recomputation cycle. Subscribing also schedules the
        // first settle, computing the output from current input values.
        self.subscribe(a, Action::Trigger(id));
        if let Some(b) = b {
            self.subscribe(b, Action::Trigger(id));
        }
        id
    }

    /// Wire an AND gate into an existing output wire.
    pub fn and_gate_into(&mut self, a: WireId, b: WireId, output: WireId) -> GateId {
        self.add_gate(GateOp::And(a, b), output)
    }

    /// Wire an OR gate into an existing output wire.
    pub fn or_gate_into(&mut self, a: WireId, b: WireId, output: WireId) -> GateId {
        self.add_gate(GateOp::Or(a, b), output)
    }

    /// Wire an XOR gate into an existing output wire.
    pub fn xor_gate_into(&mut self, a: WireId, b: WireId, output: WireId) -> GateId {
        self.add_gate(GateOp::Xor(a, b), output)
    }

    /// Wire an inverter into an existing output wire.
    pub fn invert_into(&mut self, input: WireId, output: WireId) -> GateId {
        self.add_gate(GateOp::Invert(input), output)
    }

    /// AND two wires, returning a freshly created output wire.
    pub fn and_gate(&mut self, a: WireId, b: WireId) -> WireId {
        let out = self.add_wire(format!("and{}", self.gates.len()));
        self.and_gate_into(a, b, out);
        out
    }

    /// OR two wires, returning a freshly created output wire.
    pub fn or_gate(&mut self, a: WireId, b: WireId) -> WireId {
        let out = self.add_wire(format!("or{}", self.gates.len()));
        self.or_gate_into(a, b, out);
        out
    }

    /// XOR two wires, returning a freshly created output wire.
    pub fn xor_gate(&mut self, a: WireId, b: WireId) -> WireId {
        let out = self.add_wire(format!("xor{}", self.gates.len()));
        self.xor_gate_into(a, b, out);
        out
    }

    /// Invert a wire, returning a freshly created output wire.
    pub fn invert(&mut self, input: WireId) -> WireId {
        let out = self.add_wire(format!("not{}", self.gates.len()));
        self.invert_into(input, out);
        out
    }

    /// Borrow a gate.
    pub fn gate(&self, gate: GateId) -> &Gate {
        &self.gates[gate.index()]
    }

    // ── Monitor ───────────────────────────────────────────────

    /// Watch a wire: every write to it (and its current value, right now)
    /// is handed to the monitor.
    pub fn probe(&mut self, wire: WireId) {
        self.monitor.watch(wire);
        self.subscribe(wire, Action::Trace(wire));
    }

    /// The circuit's monitor.
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Set the monitor's verbosity threshold.
    pub fn set_verbosity(&mut self, verbosity: u8) {
        self.monitor.set_verbosity(verbosity);
    }

    // ── Dispatch ──────────────────────────────────────────────

    /// Execute one action against the circuit.
    ///
    /// Immediate actions arrive here from `subscribe` and `set_signal`;
    /// delayed actions arrive from the driver loop.
    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Trigger(g) => {
                let delay = self.gates[g.index()].kind().delay();
                self.agenda.schedule(delay, Action::Settle(g));
            }
            Action::Settle(g) => {
                let gate = self.gates[g.index()].clone();
                // Inputs are read now, at settle time — not at the moment
                // the delay was scheduled.
                let value = gate.evaluate(|w| self.wires[w.index()].signal);
                tracing::debug!(
                    gate = %g,
                    kind = %gate.kind(),
                    output = %gate.output(),
                    %value,
                    "gate settled"
                );
                self.set_signal(gate.output(), value);
            }
            Action::Trace(w) => {
                let time = self.agenda.current_time();
                let signal = self.wires[w.index()].signal;
                let name = self.wires[w.index()].name.clone();
                self.monitor.record(time, w, &name, signal);
            }
        }
    }

    // ── Driver ────────────────────────────────────────────────

    /// Current simulated time.
    pub fn now(&self) -> SimTime {
        self.agenda.current_time()
    }

    /// Number of actions pending on the agenda.
    pub fn pending_actions(&self) -> usize {
        self.agenda.len()
    }

    /// Total actions dispatched by the driver since construction.
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Execute a single driver step: examine the first agenda item
    /// (advancing time to it), dispatch it, remove it.
    ///
    /// Returns the dispatched action, or `None` if the agenda was empty.
    pub fn step(&mut self) -> Option<Action> {
        if self.agenda.is_empty() {
            return None;
        }
        let action = *self.agenda.first_item().ok()?;
        self.dispatch(action);
        self.agenda.remove_first_item();
        self.events_processed += 1;
        Some(action)
    }

    /// Drain the agenda, executing actions in (time, FIFO) order until
    /// the circuit is quiescent. Returns the final-state report.
    pub fn propagate(&mut self) -> PropagationReport {
        let start = self.events_processed;
        while self.step().is_some() {}
        self.report(start)
    }

    /// Like [`Circuit::propagate`], but dispatching at most `max_events`
    /// actions. Fails with [`CircuitError::NonTerminating`] if actions
    /// remain pending afterwards — the guard for (unsupported) cyclic
    /// wiring.
    pub fn propagate_bounded(&mut self, max_events: u64) -> CircuitResult<PropagationReport> {
        let start = self.events_processed;
        let mut steps = 0u64;
        while steps < max_events {
            if self.step().is_none() {
                break;
            }
            steps += 1;
        }
        if self.agenda.is_empty() {
            Ok(self.report(start))
        } else {
            Err(CircuitError::NonTerminating { max_events })
        }
    }

    fn report(&self, start: u64) -> PropagationReport {
        let finals: Vec<(String, Signal)> = self
            .monitor
            .watched()
            .iter()
            .map(|&w| {
                let wire = &self.wires[w.index()];
                (wire.name.clone(), wire.signal)
            })
            .collect();
        for (name, signal) in &finals {
            tracing::info!(%name, %signal, "final wire state");
        }
        PropagationReport {
            events_processed: self.events_processed - start,
            finished_at: self.agenda.current_time(),
            finals,
        }
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

// ── PropagationReport ─────────────────────────────────────────────────

/// The outcome of a propagation run: how much work was done, when the
/// circuit settled, and the final value of every watched wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PropagationReport {
    /// Actions dispatched during this run.
    pub events_processed: u64,
    /// Simulated time when the agenda drained.
    pub finished_at: SimTime,
    /// `(name, signal)` of each watched wire, in probe order.
    pub finals: Vec<(String, Signal)>,
}

impl std::fmt::Display for PropagationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "propagation settled at {} after {} events",
            self.finished_at, self.events_processed
        )?;
        for (name, signal) in &self.finals {
            writeln!(f, "  {} = {}", name, signal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal::{High, Low};

    #[test]
    fn test_subscribe_invokes_immediately() {
        let mut c = Circuit::new();
        c.set_verbosity(2);
        let a = c.add_wire("a");
        c.probe(a);

        // The trace action ran once at subscription, reflecting the
        // wire's current value, before any write.
        assert_eq!(c.monitor().trace().len(), 1);
        assert_eq!(c.monitor().trace()[0].signal, Low);
        assert_eq!(c.monitor().trace()[0].time, SimTime::ZERO);
    }

    #[test]
    fn test_unchanged_write_still_notifies() {
        let mut c = Circuit::new();
        c.set_verbosity(2);
        let a = c.add_wire("a");
        c.probe(a);

        c.set_signal(a, Low);
        c.set_signal(a, Low);

        // Initial dispatch plus two redundant writes: three entries.
        assert_eq!(c.monitor().trace().len(), 3);
        assert!(c.monitor().trace().iter().all(|e| e.signal == Low));
    }

    #[test]
    fn test_wiring_a_gate_schedules_its_first_settle() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let o = c.invert(a);

        // One trigger fired at construction: one settle pending.
        assert_eq!(c.pending_actions(), 1);
        let report = c.propagate();
        assert_eq!(report.events_processed, 1);
        assert_eq!(c.signal(o), High); // invert(0) = 1
        assert_eq!(c.now(), SimTime::new(2));
    }

    #[test]
    fn test_invert_delay_fidelity() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let o = c.invert(a);
        c.propagate();
        assert_eq!(c.signal(o), High);
        let settled_at = c.now(); // T=2

        // Stimulus at T=2: the output must not move before T=4.
        c.set_signal(a, High);
        assert_eq!(c.signal(o), High);
        assert_eq!(c.pending_actions(), 1);

        let action = c.step().unwrap();
        assert!(matches!(action, Action::Settle(_)));
        assert_eq!(c.now(), settled_at.plus(2).unwrap());
        assert_eq!(c.signal(o), Low);
        assert!(c.step().is_none());
    }

    #[test]
    fn test_settle_reads_live_values_not_scheduling_time_values() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let o = c.invert(a);
        c.propagate();

        // Two writes before the driver runs: both pending settles must
        // compute from the final live value (0), not the value at their
        // scheduling instant.
        c.set_signal(a, High);
        c.set_signal(a, Low);
        assert_eq!(c.pending_actions(), 2);

        c.propagate();
        assert_eq!(c.signal(o), High);
    }

    #[test]
    fn test_fanout_one_write_triggers_both_gates() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let b = c.add_wire("b");
        let inverted = c.invert(a);
        let anded = c.and_gate(a, b);
        c.propagate();

        // One write, two subscribers, two independent delayed settles.
        c.set_signal(a, High);
        assert_eq!(c.pending_actions(), 2);

        c.propagate();
        assert_eq!(c.signal(inverted), Low);
        assert_eq!(c.signal(anded), Low); // b is still low
    }

    #[test]
    fn test_cascade_through_gate_chain() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let x = c.invert(a);
        let y = c.invert(x);
        c.propagate();
        assert_eq!(c.signal(y), Low); // not(not(0))

        let stimulus_at = c.now();
        c.set_signal(a, High);
        let report = c.propagate();
        assert_eq!(c.signal(x), Low);
        assert_eq!(c.signal(y), High);
        // The second stage settles two inverter delays after the write.
        assert_eq!(report.finished_at, stimulus_at.plus(2 + 2).unwrap());
    }

    #[test]
    fn test_driver_time_is_monotonic() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let b = c.add_wire("b");
        c.xor_gate(a, b);
        c.invert(a);
        c.or_gate(a, b);
        c.set_signal(a, High);

        let mut times = Vec::new();
        while c.step().is_some() {
            times.push(c.now());
        }
        for pair in times.windows(2) {
            assert!(pair[0] <= pair[1], "time went backward: {:?}", times);
        }
    }

    #[test]
    fn test_empty_propagate_reports_zero() {
        let mut c = Circuit::new();
        let report = c.propagate();
        assert_eq!(report.events_processed, 0);
        assert_eq!(report.finished_at, SimTime::ZERO);
        assert!(report.finals.is_empty());
    }

    #[test]
    fn test_propagate_bounded_detects_cycle() {
        let mut c = Circuit::new();
        // An inverter feeding its own input never settles.
        let a = c.add_wire("a");
        c.invert_into(a, a);

        let err = c.propagate_bounded(64).unwrap_err();
        assert_eq!(err, CircuitError::NonTerminating { max_events: 64 });
    }

    #[test]
    fn test_propagate_bounded_ok_for_acyclic() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let o = c.invert(a);
        let report = c.propagate_bounded(10).unwrap();
        assert_eq!(report.events_processed, 1);
        assert_eq!(c.signal(o), High);
    }

    #[test]
    fn test_verbosity_does_not_affect_timing() {
        fn run(verbosity: u8) -> (u64, Signal) {
            let mut c = Circuit::new();
            c.set_verbosity(verbosity);
            let a = c.add_wire("a");
            let b = c.add_wire("b");
            let o = c.xor_gate(a, b);
            c.probe(o);
            c.set_signal(a, High);
            let report = c.propagate();
            (report.events_processed, c.signal(o))
        }

        assert_eq!(run(1), run(2));
    }

    #[test]
    fn test_report_display() {
        let report = PropagationReport {
            events_processed: 4,
            finished_at: SimTime::new(8),
            finals: vec![("sum".into(), High), ("carry".into(), Low)],
        };
        let text = report.to_string();
        assert!(text.contains("settled at T=8 after 4 events"));
        assert!(text.contains("  sum = 1"));
        assert!(text.contains("  carry = 0"));
    }

    #[test]
    fn test_rename_wire_flows_into_report() {
        let mut c = Circuit::new();
        let a = c.add_wire("a");
        let o = c.or_gate(a, a);
        c.rename_wire(o, "Y0");
        c.probe(o);
        let report = c.propagate();
        assert_eq!(report.finals, vec![("Y0".to_string(), Low)]);
    }
}
