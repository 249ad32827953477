//! # Rollout Loop
//!
//! Drives batches of episodes through [`IotEnv`] with a fixed policy and
//! reports one summary per episode. Nothing here learns; the loop exists to
//! exercise the environment end to end and to give learned agents a baseline
//! to compare against.

use crate::config::{PolicyKind, RunConfig};
use crate::policy::{GreedyPolicy, Policy, RandomPolicy};
use anyhow::{Context, Result};
use iot_env::{Env, IotEnv, RandomSource};
use serde::Serialize;
use std::io::Write;

/// Outcome of one episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episode: usize,
    /// Step calls made, including the one that reported termination.
    pub steps: usize,
    pub total_reward: f32,
    pub clock: u64,
    pub energy: i64,
    pub terminated: bool,
    pub truncated: bool,
}

/// Plays a single episode from a fresh reset.
///
/// # Errors
///
/// Returns an error if the policy picks an action the environment rejects.
pub fn run_episode<R: RandomSource>(
    env: &mut IotEnv<R>,
    policy: &mut dyn Policy,
    episode: usize,
    max_steps: usize,
) -> Result<EpisodeSummary> {
    let mut obs = env.reset();
    let mut total_reward = 0.0;
    let mut steps = 0;
    let mut terminated = false;

    while steps < max_steps {
        let action = policy.act(&obs);
        let (next, reward, done) = env
            .step(action)
            .with_context(|| format!("episode {episode}, step {steps}"))?;
        steps += 1;
        total_reward += reward;
        if done {
            terminated = true;
            break;
        }
        obs = next;
    }

    Ok(EpisodeSummary {
        episode,
        steps,
        total_reward,
        clock: env.clock(),
        energy: env.energy(),
        terminated,
        truncated: !terminated,
    })
}

/// Runs every episode requested by `config`, writing JSON lines to `out` when
/// `config.json` is set.
///
/// # Errors
///
/// Returns any error from the environment or from writing to `out`.
pub fn run(config: &RunConfig, out: &mut dyn Write) -> Result<Vec<EpisodeSummary>> {
    let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut seeds = fastrand::Rng::with_seed(seed);
    let mut env = IotEnv::with_seed(seeds.u64(..));
    let mut policy: Box<dyn Policy> = match config.policy {
        PolicyKind::Random => Box::new(RandomPolicy::new(seeds.u64(..), env.action_size())),
        PolicyKind::Greedy => Box::new(GreedyPolicy),
    };

    tracing::info!(
        seed,
        episodes = config.episodes,
        max_steps = config.max_steps,
        policy = ?config.policy,
        "Starting rollouts..."
    );
    tracing::debug!("Environment config: {}", serde_json::to_string(env.config())?);

    let mut summaries = Vec::with_capacity(config.episodes);
    for episode in 0..config.episodes {
        let summary = run_episode(&mut env, policy.as_mut(), episode, config.max_steps)?;
        if config.json {
            serde_json::to_writer(&mut *out, &summary)?;
            writeln!(out)?;
        } else {
            tracing::info!(
                "Episode {} finished after {} steps. Reward: {:.2}, clock: {}, terminated: {}",
                episode,
                summary.steps,
                summary.total_reward,
                summary.clock,
                summary.terminated
            );
        }
        summaries.push(summary);
    }

    if !summaries.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let mean = summaries.iter().map(|s| s.total_reward).sum::<f32>() / summaries.len() as f32;
        let truncated = summaries.iter().filter(|s| s.truncated).count();
        tracing::info!("Rollouts finished. Mean reward: {mean:.3}, truncated episodes: {truncated}");
    }

    Ok(summaries)
}
