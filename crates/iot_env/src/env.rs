use crate::error::EnvError;

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one discrete action and returns the new observation, a reward
/// signal, and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// What the agent sees after each reset and step.
    type Observation;

    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)` where `obs` is the new observation,
    /// `reward` is the scalar reward, and `done` indicates episode termination.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] when `action` is not below
    /// [`action_size`](Env::action_size). The environment is left untouched.
    fn step(&mut self, action: usize) -> Result<(Self::Observation, f32, bool), EnvError>;

    /// Reset the environment to a starting state and return the initial
    /// observation.
    fn reset(&mut self) -> Self::Observation;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;
}
