//! # IoT Context Environment
//!
//! A small discrete environment modelling an IoT device reacting to its
//! operating context, intended as a training target for reinforcement-learning
//! agents.
//!
//! The device observes five binary conditions (see [`Flag`]) and chooses one of
//! six actions (see [`Action`]). Every action costs simulated time and energy;
//! when the energy budget cannot cover an action the device is forced to
//! recharge instead. An episode ends once every condition has been handled and
//! the state vector is all zeros.
//!
//! ```
//! use iot_env::{Env, IotEnv};
//!
//! let mut env = IotEnv::with_seed(7);
//! let mut state = env.reset();
//! loop {
//!     let action = state.pending_action().unwrap_or(0);
//!     let (next, _reward, done) = env.step(action).unwrap();
//!     if done {
//!         break;
//!     }
//!     state = next;
//! }
//! ```

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod iot;
pub mod random;
pub mod reward;
pub mod state;

pub use action::{Action, ActionCost};
pub use config::EnvConfig;
pub use env::Env;
pub use error::EnvError;
pub use iot::IotEnv;
pub use random::RandomSource;
pub use state::{observation_index, Flag, StateVector, OBSERVATION_TABLE, TERMINAL_STATE};
