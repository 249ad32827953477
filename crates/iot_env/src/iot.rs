use crate::action::Action;
use crate::config::EnvConfig;
use crate::env::Env;
use crate::error::EnvError;
use crate::random::RandomSource;
use crate::reward::{delay_reward, malicious_confirm_reward};
use crate::state::{Flag, StateVector, FLAG_COUNT, OBSERVATION_TABLE};
use std::fmt;
use tracing::{debug, trace};

/// Environment modelling one IoT device handling the demands of its context.
///
/// Holds the current state vector, the elapsed clock and the remaining energy.
/// A freshly built environment starts in the terminal state rather than on a
/// sampled table row, so construction consumes no randomness. Stepping it
/// reports `done` until [`Env::reset`] (or [`IotEnv::reset_to_row`]) starts an
/// episode.
pub struct IotEnv<R = fastrand::Rng> {
    state: StateVector,
    clock: u64,
    energy: i64,
    config: EnvConfig,
    rng: R,
}

impl IotEnv {
    /// Creates an environment whose randomness is seeded with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> IotEnv<R> {
    /// Creates an environment drawing its randomness from `rng`.
    #[must_use]
    pub fn new(rng: R) -> Self {
        let config = EnvConfig::default();
        Self {
            state: StateVector::default(),
            clock: 0,
            energy: config.initial_energy,
            config,
            rng,
        }
    }

    /// Resets to a specific row of [`OBSERVATION_TABLE`] instead of a random one.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnknownRow`] if `row` is past the end of the table.
    pub fn reset_to_row(&mut self, row: usize) -> Result<StateVector, EnvError> {
        let state = OBSERVATION_TABLE
            .get(row)
            .copied()
            .ok_or(EnvError::UnknownRow {
                row,
                rows: OBSERVATION_TABLE.len(),
            })?;
        self.start_episode(row, state);
        Ok(state)
    }

    #[must_use]
    pub fn state(&self) -> StateVector {
        self.state
    }

    #[must_use]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    #[must_use]
    pub fn energy(&self) -> i64 {
        self.energy
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    fn start_episode(&mut self, row: usize, state: StateVector) {
        self.state = state;
        self.clock = 0;
        self.energy = self.config.initial_energy;
        debug!(row, state = %self.state, "episode reset");
    }

    fn recharge(&mut self) {
        self.clock += 1;
        self.energy = self.config.initial_energy;
    }

    /// Applies `action` to the condition it handles and returns the reward.
    /// Only called once the action is known to apply.
    fn resolve(&mut self, action: Action) -> f32 {
        match action {
            Action::Recharge => 0.0,
            Action::OwnTask => {
                self.state.clear(Flag::OwnTask);
                delay_reward(self.clock, self.config.job_delta, self.config.job_threshold)
            }
            Action::Collaborate => {
                self.state.clear(Flag::Collaboration);
                1.0
            }
            Action::RequestService => {
                self.state.clear(Flag::ServiceRequest);
                self.state.set(Flag::ServiceFeedback);
                1.0
            }
            Action::AcceptService => {
                self.state.clear(Flag::ServiceFeedback);
                // Feedback delays share the job period.
                delay_reward(self.clock, self.config.job_delta, self.config.service_threshold)
            }
            Action::ReportMalicious => {
                self.state.clear(Flag::Malicious);
                malicious_confirm_reward(&mut self.rng)
            }
        }
    }
}

impl<R: RandomSource> Env for IotEnv<R> {
    type Observation = StateVector;

    fn step(&mut self, action: usize) -> Result<(StateVector, f32, bool), EnvError> {
        let action = Action::try_from(action)?;

        // Termination is only reported on the call after the state empties.
        if self.state.is_terminal() {
            debug!(clock = self.clock, "step on terminated episode");
            return Ok((self.state, 0.0, true));
        }

        let cost = action.cost();
        if action == Action::Recharge || self.energy < -cost.energy_delta {
            self.recharge();
            trace!(?action, clock = self.clock, "recharged");
            return Ok((self.state, 0.0, false));
        }

        self.clock += cost.clock;
        self.energy += cost.energy_delta;

        let applicable = action.flag().is_some_and(|flag| self.state.is_set(flag));
        let reward = if applicable { self.resolve(action) } else { 0.0 };
        trace!(
            ?action,
            applicable,
            reward,
            clock = self.clock,
            energy = self.energy,
            state = %self.state,
            "step"
        );
        Ok((self.state, reward, false))
    }

    fn reset(&mut self) -> StateVector {
        let row = self.rng.index(OBSERVATION_TABLE.len());
        let state = OBSERVATION_TABLE[row];
        self.start_episode(row, state);
        state
    }

    fn obs_size(&self) -> usize {
        FLAG_COUNT
    }

    fn action_size(&self) -> usize {
        Action::COUNT
    }
}

impl<R> fmt::Debug for IotEnv<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IotEnv")
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("energy", &self.energy)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
