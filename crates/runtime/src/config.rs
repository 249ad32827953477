use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

/// Which policy drives the rollouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniformly random actions over the whole action space.
    Random,
    /// Always handle the first pending condition; recharge when idle.
    Greedy,
}

/// Command line configuration for a batch of rollouts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iot_runtime",
    version,
    about = "Roll out episodes in the IoT context environment"
)]
pub struct RunConfig {
    /// Number of episodes to run.
    #[arg(long, default_value_t = 10)]
    pub episodes: usize,

    /// Step limit per episode; episodes that hit it are reported as truncated.
    #[arg(long, default_value_t = 500)]
    pub max_steps: usize,

    /// Seed for the environment and the policy. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    pub policy: PolicyKind,

    /// Print one JSON summary per episode on stdout.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl RunConfig {
    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            episodes: 10,
            max_steps: 500,
            seed: None,
            policy: PolicyKind::Random,
            json: false,
            verbose: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let config = RunConfig::try_parse_from([
            "iot_runtime",
            "--episodes",
            "3",
            "--seed",
            "11",
            "--policy",
            "greedy",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(config.episodes, 3);
        assert_eq!(config.max_steps, 500);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.policy, PolicyKind::Greedy);
        assert!(config.json);
        assert_eq!(config.log_level(), Level::TRACE);
    }

    #[test]
    fn defaults_match_parser() {
        let parsed = RunConfig::try_parse_from(["iot_runtime"]).unwrap();
        let default = RunConfig::default();
        assert_eq!(parsed.episodes, default.episodes);
        assert_eq!(parsed.max_steps, default.max_steps);
        assert_eq!(parsed.policy, default.policy);
        assert_eq!(parsed.log_level(), Level::INFO);
    }
}
