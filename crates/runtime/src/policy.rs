use iot_env::StateVector;

/// Chooses the next action from the current observation.
pub trait Policy {
    fn act(&mut self, obs: &StateVector) -> usize;
}

/// Ignores the observation and picks any action uniformly.
pub struct RandomPolicy {
    rng: fastrand::Rng,
    action_size: usize,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64, action_size: usize) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            action_size,
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _obs: &StateVector) -> usize {
        self.rng.usize(..self.action_size)
    }
}

/// Handles the lowest-index pending condition, recharging when nothing is
/// pending. Useful as a baseline for learned policies.
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn act(&mut self, obs: &StateVector) -> usize {
        obs.pending_action().unwrap_or(0)
    }
}
