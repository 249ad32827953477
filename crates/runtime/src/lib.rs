//! # IoT Environment Runtime
//!
//! Headless driver for [`iot_env`]: parses the command line, installs the
//! tracing subscriber and rolls out episodes with a fixed policy.

#![deny(clippy::all, clippy::pedantic)]

pub mod app;
pub mod config;
pub mod policy;

pub use app::{run, run_episode, EpisodeSummary};
pub use config::{PolicyKind, RunConfig};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
