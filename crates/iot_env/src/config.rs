use serde::Serialize;

/// Fixed timing and energy constants of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvConfig {
    /// Period of the job schedule; delays wrap around at this many ticks.
    pub job_delta: u64,
    /// Largest own-task delay still rewarded positively.
    pub job_threshold: u64,
    /// Service schedule period. Not read by any reward rule.
    pub service_delta: u64,
    /// Largest service-feedback delay still rewarded positively.
    pub service_threshold: u64,
    /// Energy budget after a reset or a recharge.
    pub initial_energy: i64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            job_delta: 15,
            job_threshold: 5,
            service_delta: 20,
            service_threshold: 10,
            initial_energy: 50,
        }
    }
}
