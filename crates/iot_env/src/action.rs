//! The device's action space and what each action costs.

use crate::error::EnvError;
use crate::state::Flag;
use serde::Serialize;

/// Clock ticks and energy an action consumes when it is affordable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionCost {
    pub clock: u64,
    /// Change applied to the energy budget; never positive.
    pub energy_delta: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    /// Do nothing and refill the energy budget.
    Recharge = 0,
    /// Perform the device's own job.
    OwnTask = 1,
    /// Collaborate with a peer.
    Collaborate = 2,
    /// Request a service from another device.
    RequestService = 3,
    /// Accept the service and report feedback on it.
    AcceptService = 4,
    /// Detect and report malicious activity.
    ReportMalicious = 5,
}

impl Action {
    pub const COUNT: usize = 6;

    pub const ALL: [Action; Action::COUNT] = [
        Action::Recharge,
        Action::OwnTask,
        Action::Collaborate,
        Action::RequestService,
        Action::AcceptService,
        Action::ReportMalicious,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn cost(self) -> ActionCost {
        let (clock, energy_delta) = match self {
            Action::Recharge => (0, 0),
            Action::OwnTask | Action::Collaborate | Action::AcceptService => (1, -1),
            Action::RequestService => (1, -3),
            Action::ReportMalicious => (3, -3),
        };
        ActionCost {
            clock,
            energy_delta,
        }
    }

    /// The condition this action handles. Recharging handles none.
    #[must_use]
    pub const fn flag(self) -> Option<Flag> {
        match self {
            Action::Recharge => None,
            Action::OwnTask => Some(Flag::OwnTask),
            Action::Collaborate => Some(Flag::Collaboration),
            Action::RequestService => Some(Flag::ServiceRequest),
            Action::AcceptService => Some(Flag::ServiceFeedback),
            Action::ReportMalicious => Some(Flag::Malicious),
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = EnvError;

    fn try_from(action: usize) -> Result<Self, Self::Error> {
        Action::ALL
            .get(action)
            .copied()
            .ok_or(EnvError::InvalidAction {
                action,
                action_size: Action::COUNT,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_table() {
        let costs: Vec<(u64, i64)> = Action::ALL
            .iter()
            .map(|a| (a.cost().clock, a.cost().energy_delta))
            .collect();
        assert_eq!(
            costs,
            vec![(0, 0), (1, -1), (1, -1), (1, -3), (1, -1), (3, -3)]
        );
    }

    #[test]
    fn action_n_handles_flag_n_minus_one() {
        for action in &Action::ALL[1..] {
            let flag = action.flag().unwrap();
            assert_eq!(flag.index() + 1, action.index());
        }
        assert_eq!(Action::Recharge.flag(), None);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(Action::try_from(5), Ok(Action::ReportMalicious));
        assert_eq!(
            Action::try_from(6),
            Err(EnvError::InvalidAction {
                action: 6,
                action_size: 6
            })
        );
    }
}
