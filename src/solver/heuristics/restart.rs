use crate::solver::stats::SearchStats;

/// A trait for strategies that decide whether a stalled attempt should be
/// followed by a fresh random restart.
pub trait RestartPolicy {
    /// Given the statistics accumulated so far, decides whether to restart.
    ///
    /// Returns `true` to reinitialize and try again, `false` to give up.
    fn should_restart(&self, stats: &SearchStats) -> bool;
}

/// Restarts unconditionally: the solver runs until it finds a solution.
///
/// This matches min-conflicts as usually stated. It makes termination a
/// property of the heuristic rather than of the control loop, so a
/// pathological instance (or an unsolvable one, such as n = 2 or n = 3)
/// will spin forever. Use [`MaxAttempts`] where that is unacceptable.
pub struct AlwaysRestart;

impl RestartPolicy for AlwaysRestart {
    fn should_restart(&self, _stats: &SearchStats) -> bool {
        true
    }
}

/// Restarts until a fixed number of attempts has been spent.
pub struct MaxAttempts {
    pub max_attempts: u64,
}

impl RestartPolicy for MaxAttempts {
    fn should_restart(&self, stats: &SearchStats) -> bool {
        stats.attempts < self.max_attempts
    }
}
