pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by the solver's public API.
///
/// The min-conflicts loop itself has no recoverable failure modes: a stalled
/// attempt is handled by restarting, not by returning an error. These
/// variants cover misuse of the API surface instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model was constructed with zero variables, so there is nothing
    /// to solve.
    #[error("the model has no variables")]
    EmptyModel,

    /// A value-selection heuristic produced a column outside the board.
    ///
    /// The built-in heuristics only ever draw candidates from `0..n`; this
    /// can only be triggered by a custom [`ValueSelectionHeuristic`]
    /// implementation.
    ///
    /// [`ValueSelectionHeuristic`]: crate::solver::heuristics::value::ValueSelectionHeuristic
    #[error("value heuristic chose column {column} for a board of size {board_size}")]
    ColumnOutOfRange { column: usize, board_size: usize },
}
