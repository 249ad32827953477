//! Reward rules for actions taken in a state where they apply.

use crate::random::RandomSource;

/// Outcomes of a malicious-activity report, sampled uniformly by position.
/// Repeated entries weight the distribution toward small rewards.
pub const MALICIOUS_REWARDS: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 3.0];

/// Ticks of lateness for a job completed at `clock`, wrapped to the schedule
/// period `delta`. A clock of zero wraps to `delta - 1`.
///
/// # Panics
///
/// Panics if `delta` is zero.
#[must_use]
pub fn delay(clock: u64, delta: u64) -> u64 {
    assert!(delta > 0, "schedule period must be positive");
    clock.checked_sub(1).map_or(delta - 1, |c| c % delta)
}

/// Reward for finishing a scheduled job at `clock`.
///
/// On-time delays (up to `threshold`) earn `1 - 0.2 * delay`; later ones are
/// penalized linearly by how far past `threshold` they are.
///
/// # Panics
///
/// Panics if `delta` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn delay_reward(clock: u64, delta: u64, threshold: u64) -> f32 {
    let delay = delay(clock, delta);
    if delay <= threshold {
        1.0 - 0.2 * delay as f32
    } else {
        threshold as f32 - delay as f32
    }
}

/// Samples the reward for confirming malicious activity.
pub fn malicious_confirm_reward<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    MALICIOUS_REWARDS[rng.index(MALICIOUS_REWARDS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn delay_wraps_on_period() {
        assert_eq!(delay(1, 15), 0);
        assert_eq!(delay(15, 15), 14);
        assert_eq!(delay(16, 15), 0);
        assert_eq!(delay(0, 15), 14);
    }

    #[test]
    #[should_panic(expected = "schedule period must be positive")]
    fn zero_period_is_rejected() {
        let _ = delay(3, 0);
    }

    #[test]
    fn on_time_rewards_decrease_from_one() {
        let rewards: Vec<f32> = (1..=6).map(|c| delay_reward(c, 15, 5)).collect();
        assert!(close(rewards[0], 1.0));
        assert!(close(rewards[5], 0.0));
        assert!(rewards.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn late_rewards_are_negative_and_decreasing() {
        // delays 6..=14
        let rewards: Vec<f32> = (7..=15).map(|c| delay_reward(c, 15, 5)).collect();
        assert!(close(rewards[0], -1.0));
        assert!(close(rewards[8], -9.0));
        assert!(rewards.iter().all(|r| *r < 0.0));
        assert!(rewards.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn service_threshold_extends_on_time_window() {
        assert!(close(delay_reward(11, 15, 10), -1.0));
        assert!(close(delay_reward(12, 15, 10), -1.0));
        assert!(close(delay_reward(15, 15, 10), -4.0));
    }

    struct Script(Vec<usize>);

    impl RandomSource for Script {
        fn index(&mut self, _len: usize) -> usize {
            self.0.remove(0)
        }
    }

    #[test]
    fn malicious_reward_maps_index_to_table() {
        let mut script = Script((0..9).collect());
        let drawn: Vec<f32> = (0..9).map(|_| malicious_confirm_reward(&mut script)).collect();
        assert_eq!(drawn, MALICIOUS_REWARDS.to_vec());
    }
}
