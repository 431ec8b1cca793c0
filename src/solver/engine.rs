//! The min-conflicts repair loop.

use std::time::Instant;

use rand_core::RngCore;
use serde::Serialize;
use tracing::debug;

use crate::{
    error::{Error, Result},
    solver::{
        heuristics::{
            restart::{AlwaysRestart, RestartPolicy},
            value::{LeastConflictedPositionHeuristic, ValueSelectionHeuristic},
            variable::{MostConflictedHeuristic, VariableSelectionHeuristic},
        },
        model::Model,
        stats::{AttemptStats, SearchStats},
    },
};

/// How a solve call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveOutcome {
    /// The model holds a conflict-free assignment.
    Solved,
    /// The restart policy declined another attempt before a solution was
    /// found. The model holds the last stalled assignment.
    AttemptsExhausted,
}

/// Solver phases. An attempt moves `Initializing → Repairing`, then either
/// reaches `Solved` or stalls; a stall consults the restart policy to loop
/// back to `Initializing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolverState {
    Initializing,
    Repairing,
    Stalled,
    Solved,
}

/// A local-search solver that repairs a random assignment by repeatedly
/// moving the worst-placed queen to its best available column.
///
/// The solver owns its randomness: every selection decision and every
/// restart draws from the one injected [`RngCore`], so a seeded generator
/// makes whole runs reproducible.
pub struct MinConflictsSolver {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueSelectionHeuristic>,
    restart_policy: Box<dyn RestartPolicy>,
    rng: Box<dyn RngCore>,
}

impl MinConflictsSolver {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueSelectionHeuristic>,
        restart_policy: Box<dyn RestartPolicy>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            restart_policy,
            rng,
        }
    }

    /// The standard configuration: most-conflicted variable selection,
    /// diagonal-probe value selection, and unbounded restarts.
    pub fn with_defaults(rng: Box<dyn RngCore>) -> Self {
        Self::new(
            Box::new(MostConflictedHeuristic),
            Box::new(LeastConflictedPositionHeuristic),
            Box::new(AlwaysRestart),
            rng,
        )
    }

    /// Runs the solver against `model`, mutating it in place.
    ///
    /// Each attempt assigns every variable a uniform random column, then
    /// repairs for at most `n * n` steps. An attempt that reaches zero
    /// conflicts ends the solve; one that exhausts its step budget stalls
    /// and asks the restart policy whether to begin another. With the
    /// default [`AlwaysRestart`] policy this call blocks until a solution
    /// is found, which for unsolvable sizes (n = 2, n = 3) means forever.
    ///
    /// On return the model holds the final assignment — conflict-free when
    /// the outcome is [`SolveOutcome::Solved`].
    pub fn solve(&mut self, model: &mut Model) -> Result<(SolveOutcome, SearchStats)> {
        if model.is_empty() {
            return Err(Error::EmptyModel);
        }

        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut state = SolverState::Initializing;

        loop {
            state = match state {
                SolverState::Initializing => {
                    model.randomize(self.rng.as_mut());
                    stats.attempts += 1;
                    debug!(attempt = stats.attempts, "starting attempt");
                    SolverState::Repairing
                }
                SolverState::Repairing => self.repair(model, &mut stats)?,
                SolverState::Stalled => {
                    if self.restart_policy.should_restart(&stats) {
                        SolverState::Initializing
                    } else {
                        stats.elapsed = started.elapsed();
                        debug!(attempts = stats.attempts, "giving up");
                        return Ok((SolveOutcome::AttemptsExhausted, stats));
                    }
                }
                SolverState::Solved => {
                    stats.elapsed = started.elapsed();
                    debug!(
                        steps = stats.steps,
                        attempts = stats.attempts,
                        "found a conflict-free assignment"
                    );
                    return Ok((SolveOutcome::Solved, stats));
                }
            };
        }
    }

    /// One repair phase: up to `n * n` single-variable reassignments.
    fn repair(&mut self, model: &mut Model, stats: &mut SearchStats) -> Result<SolverState> {
        let n = model.len();
        let max_steps = n * n;
        let mut steps = 0u64;
        let mut solved = false;

        for _ in 0..max_steps {
            let Some(variable) = self
                .variable_heuristic
                .select_variable(model, self.rng.as_mut())
            else {
                solved = true;
                break;
            };

            let column = self
                .value_heuristic
                .select_value(model, variable, self.rng.as_mut());
            if column >= n {
                return Err(Error::ColumnOutOfRange {
                    column,
                    board_size: n,
                });
            }

            model.assign(variable, column);
            steps += 1;
        }

        stats.steps = steps;
        stats.total_steps += steps;
        stats.per_attempt.push(AttemptStats { steps, solved });

        if solved {
            Ok(SolverState::Solved)
        } else {
            debug!(steps, "attempt stalled");
            Ok(SolverState::Stalled)
        }
    }
}
