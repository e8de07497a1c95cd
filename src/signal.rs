/// The two-valued logic level carried by a wire.
///
/// The simulator is strictly binary: a wire is either `Low` (0) or `High`
/// (1). Out-of-domain values cannot be represented in the core; untyped
/// input from the outside world goes through `Signal::try_from(u8)`, which
/// rejects anything but 0 and 1.

use crate::error::CircuitError;

/// A binary signal level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// Logic 0. Every wire starts here.
    #[default]
    Low,
    /// Logic 1.
    High,
}

impl Signal {
    /// Returns `true` for `High`.
    #[inline]
    pub fn is_high(self) -> bool {
        matches!(self, Signal::High)
    }

    /// The raw bit value: 0 for `Low`, 1 for `High`.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Signal::Low => 0,
            Signal::High => 1,
        }
    }
}

impl From<bool> for Signal {
    #[inline]
    fn from(b: bool) -> Self {
        if b {
            Signal::High
        } else {
            Signal::Low
        }
    }
}

impl TryFrom<u8> for Signal {
    type Error = CircuitError;

    /// Convert an untyped bit into a `Signal`.
    ///
    /// This is the boundary where the binary-domain contract is enforced:
    /// anything but 0 or 1 is `CircuitError::SignalOutOfRange`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Signal::Low),
            1 => Ok(Signal::High),
            other => Err(CircuitError::SignalOutOfRange(other)),
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bit())
    }
}
