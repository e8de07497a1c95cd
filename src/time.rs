/// Simulated time for the circuit simulator.
///
/// Represents a logical timestamp with no dependency on `std::time`.
/// Time advances only when the agenda hands the driver its next action —
/// never from wall-clock observation.

/// A point in simulated time, measured in abstract ticks.
///
/// Gate delays are expressed in these ticks; they reflect relative gate
/// speed, not physical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(u64);

impl SimTime {
    /// The zero-point of simulated time.
    pub const ZERO: SimTime = SimTime(0);

    /// Create a new `SimTime` from a raw tick value.
    #[inline]
    pub fn new(ticks: u64) -> Self {
        SimTime(ticks)
    }

    /// Return the raw tick value.
    #[inline]
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Compute the absolute time that is `delay` ticks after `self`.
    /// Returns `None` on overflow (should never happen in practice).
    #[inline]
    pub fn plus(self, delay: u64) -> Option<SimTime> {
        self.0.checked_add(delay).map(SimTime)
    }

    /// Returns `true` if `self` is strictly before `other`.
    #[inline]
    pub fn is_before(self, other: SimTime) -> bool {
        self.0 < other.0
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T={}", self.0)
    }
}
