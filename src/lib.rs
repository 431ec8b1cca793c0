//! Regina solves the N-Queens problem with the min-conflicts local-search
//! heuristic.
//!
//! Rather than exploring a search tree, the solver starts from a random
//! assignment of one queen per row and repairs it in place: each step picks
//! a queen with the most conflicts and moves it to a column scoring the
//! fewest, restarting from a fresh random assignment when an attempt stalls.
//!
//! # Core Concepts
//!
//! - **[`Model`]**: the mutable assignment — one variable per row, each
//!   holding its current column.
//! - **Heuristics**: pluggable [`VariableSelectionHeuristic`],
//!   [`ValueSelectionHeuristic`], and [`RestartPolicy`] implementations
//!   control which queen moves, where it moves, and when to give up.
//! - **[`MinConflictsSolver`]**: the engine driving the
//!   initialize/repair/restart loop and collecting [`SearchStats`].
//!
//! Randomness is injected, so a seeded generator reproduces a run exactly.
//!
//! # Example: Eight Queens
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use regina::board;
//! use regina::solver::engine::{MinConflictsSolver, SolveOutcome};
//! use regina::solver::model::Model;
//!
//! let mut model = Model::new(8);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut solver = MinConflictsSolver::with_defaults(Box::new(rng));
//!
//! let (outcome, stats) = solver.solve(&mut model).unwrap();
//!
//! assert_eq!(outcome, SolveOutcome::Solved);
//! assert!(model.is_conflict_free());
//! assert!(stats.attempts >= 1);
//! println!("{}", board::render(&model));
//! ```
//!
//! [`Model`]: solver::model::Model
//! [`MinConflictsSolver`]: solver::engine::MinConflictsSolver
//! [`SearchStats`]: solver::stats::SearchStats
//! [`VariableSelectionHeuristic`]: solver::heuristics::variable::VariableSelectionHeuristic
//! [`ValueSelectionHeuristic`]: solver::heuristics::value::ValueSelectionHeuristic
//! [`RestartPolicy`]: solver::heuristics::restart::RestartPolicy

pub mod board;
pub mod error;
pub mod solver;
