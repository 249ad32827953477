//! State vectors and the table of valid starting observations.

use serde::Serialize;
use std::fmt;

/// Number of condition flags in a state vector.
pub const FLAG_COUNT: usize = 5;

/// One environmental condition tracked by the state vector.
///
/// The discriminant is the flag's index in the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Flag {
    /// The device has its own job waiting.
    OwnTask = 0,
    /// A peer asked the device to collaborate.
    Collaboration = 1,
    /// The device needs to consume a service.
    ServiceRequest = 2,
    /// A requested service is waiting for feedback.
    ServiceFeedback = 3,
    /// Malicious behaviour is present in the neighbourhood.
    Malicious = 4,
}

impl Flag {
    pub const ALL: [Flag; FLAG_COUNT] = [
        Flag::OwnTask,
        Flag::Collaboration,
        Flag::ServiceRequest,
        Flag::ServiceFeedback,
        Flag::Malicious,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Five binary condition flags describing what currently needs attention.
///
/// The type is `Copy`, so every value handed out by the environment is a
/// snapshot that cannot alias the environment's own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StateVector([u8; FLAG_COUNT]);

impl StateVector {
    /// Builds a state vector from raw flags. Any nonzero value counts as set
    /// and is stored as `1`.
    #[must_use]
    pub fn new(flags: [u8; FLAG_COUNT]) -> Self {
        Self(flags.map(|b| u8::from(b != 0)))
    }

    #[must_use]
    pub const fn flags(&self) -> [u8; FLAG_COUNT] {
        self.0
    }

    #[must_use]
    pub fn is_set(&self, flag: Flag) -> bool {
        self.0[flag.index()] != 0
    }

    pub fn set(&mut self, flag: Flag) {
        self.0[flag.index()] = 1;
    }

    pub fn clear(&mut self, flag: Flag) {
        self.0[flag.index()] = 0;
    }

    /// `true` for the all-zero vector that ends an episode.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        *self == TERMINAL_STATE
    }

    /// Flags that are currently set, in index order.
    pub fn active_flags(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(|f| self.is_set(*f))
    }

    /// Action number that handles the first set flag, if any.
    ///
    /// Handy for scripted policies: it always picks an applicable action.
    #[must_use]
    pub fn pending_action(&self) -> Option<usize> {
        self.active_flags().next().map(|f| f.index() + 1)
    }

    /// Observation as a float vector, the form neural-network policies take.
    #[must_use]
    pub fn to_observation(&self) -> Vec<f32> {
        self.0.iter().map(|&b| f32::from(b)).collect()
    }
}

impl From<[u8; FLAG_COUNT]> for StateVector {
    fn from(flags: [u8; FLAG_COUNT]) -> Self {
        Self::new(flags)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "({a},{b},{c},{d},{e})")
    }
}

/// The all-zero vector: nothing left to handle.
pub const TERMINAL_STATE: StateVector = StateVector([0; FLAG_COUNT]);

/// Every state an episode can start from.
///
/// The service-feedback flag is never set here; it only appears after the
/// device requests a service during an episode.
pub const OBSERVATION_TABLE: [StateVector; 14] = [
    StateVector([0, 0, 0, 0, 1]),
    StateVector([0, 1, 0, 0, 0]),
    StateVector([0, 1, 0, 0, 1]),
    StateVector([1, 0, 0, 0, 0]),
    StateVector([1, 0, 0, 0, 1]),
    StateVector([1, 1, 0, 0, 0]),
    StateVector([1, 1, 0, 0, 1]),
    StateVector([0, 0, 1, 0, 1]),
    StateVector([0, 1, 1, 0, 0]),
    StateVector([0, 1, 1, 0, 1]),
    StateVector([1, 0, 1, 0, 0]),
    StateVector([1, 0, 1, 0, 1]),
    StateVector([1, 1, 1, 0, 0]),
    StateVector([1, 1, 1, 0, 1]),
];

/// Row of `state` in [`OBSERVATION_TABLE`], or `None` for vectors that only
/// arise mid-episode (or the terminal vector).
#[must_use]
pub fn observation_index(state: &StateVector) -> Option<usize> {
    OBSERVATION_TABLE.iter().position(|row| row == state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_are_distinct_and_non_terminal() {
        for (i, row) in OBSERVATION_TABLE.iter().enumerate() {
            assert!(!row.is_terminal());
            assert_eq!(observation_index(row), Some(i));
        }
    }

    #[test]
    fn feedback_flag_never_starts_set() {
        assert!(OBSERVATION_TABLE
            .iter()
            .all(|row| !row.is_set(Flag::ServiceFeedback)));
    }

    #[test]
    fn new_normalizes_nonzero_flags() {
        let s = StateVector::new([2, 0, 9, 0, 0]);
        assert_eq!(s.flags(), [1, 0, 1, 0, 0]);
    }

    #[test]
    fn pending_action_follows_first_set_flag() {
        assert_eq!(StateVector::new([0, 1, 1, 0, 1]).pending_action(), Some(2));
        assert_eq!(StateVector::new([0, 0, 0, 1, 0]).pending_action(), Some(4));
        assert_eq!(TERMINAL_STATE.pending_action(), None);
    }

    #[test]
    fn display_matches_tuple_notation() {
        assert_eq!(OBSERVATION_TABLE[8].to_string(), "(0,1,1,0,0)");
    }
}
