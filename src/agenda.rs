/// Time-ordered event queue (the "agenda").
///
/// Pending actions are grouped into segments, one per distinct scheduled
/// time, kept sorted ascending. Within a segment, actions dequeue in the
/// order they were scheduled (strict FIFO), so two runs with the same
/// schedule calls always produce the same dispatch order.
///
/// The agenda is generic over the action type and knows nothing about
/// wires or gates; the circuit driver decides what an action means.

use std::collections::VecDeque;

use crate::error::{CircuitError, CircuitResult};
use crate::time::SimTime;

/// All actions pending at one point in simulated time.
#[derive(Debug, Clone)]
struct Segment<T> {
    time: SimTime,
    actions: VecDeque<T>,
}

/// The time-ordered action queue driving a simulation.
///
/// One agenda exists per [`Circuit`](crate::circuit::Circuit); it owns the
/// simulation clock. Time advances only in [`Agenda::first_item`] — when
/// the next action is examined, not when it was scheduled.
#[derive(Debug, Clone)]
pub struct Agenda<T> {
    current_time: SimTime,
    /// Invariant: strictly increasing by time; no segment has an empty queue.
    segments: Vec<Segment<T>>,
}

impl<T> Agenda<T> {
    /// Create an empty agenda with the clock at time zero.
    pub fn new() -> Self {
        Agenda {
            current_time: SimTime::ZERO,
            segments: Vec::new(),
        }
    }

    /// The current simulated time.
    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    /// Returns `true` if no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total number of pending actions across all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.actions.len()).sum()
    }

    /// Schedule `action` to run `delay` ticks from the current time.
    ///
    /// Locates the segment for the target time by binary search; appends
    /// to it if it exists (preserving FIFO), otherwise inserts a fresh
    /// one-element segment at the sorted position.
    ///
    /// # Panics
    /// Panics if the target time overflows `u64` (astronomically unlikely).
    pub fn schedule(&mut self, delay: u64, action: T) {
        let at = self
            .current_time
            .plus(delay)
            .expect("simulated time overflow while scheduling");
        match self.segments.binary_search_by_key(&at, |s| s.time) {
            Ok(i) => self.segments[i].actions.push_back(action),
            Err(i) => self.segments.insert(
                i,
                Segment {
                    time: at,
                    actions: VecDeque::from([action]),
                },
            ),
        }
    }

    /// The action at the front of the earliest segment.
    ///
    /// As a side effect, advances the clock to that segment's time. The
    /// action stays queued until [`Agenda::remove_first_item`] is called.
    ///
    /// Querying an empty agenda is a caller precondition violation and
    /// returns [`CircuitError::AgendaEmpty`]; callers are expected to
    /// check [`Agenda::is_empty`] first, as the driver does.
    pub fn first_item(&mut self) -> CircuitResult<&T> {
        let seg = self.segments.first().ok_or(CircuitError::AgendaEmpty)?;
        self.current_time = seg.time;
        Ok(seg
            .actions
            .front()
            .expect("agenda never retains an empty segment"))
    }

    /// Remove the action last returned by [`Agenda::first_item`].
    ///
    /// Drops the segment once its queue is empty. A no-op on an empty
    /// agenda.
    pub fn remove_first_item(&mut self) {
        if let Some(seg) = self.segments.first_mut() {
            seg.actions.pop_front();
            if seg.actions.is_empty() {
                self.segments.remove(0);
            }
        }
    }
}

impl<T> Default for Agenda<T> {
    fn default() -> Self {
        Self::new()
    }
}
