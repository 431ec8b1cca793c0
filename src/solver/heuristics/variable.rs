//! Strategies for picking which queen to move next.

use rand::Rng;
use rand_core::RngCore;

use crate::solver::model::Model;

/// A trait for variable-selection strategies.
///
/// Implementors choose which variable the repair loop should reassign next.
/// Returning `None` signals that no variable is in conflict, i.e. the
/// current assignment is already a solution.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to repair, or `None` when the assignment
    /// is conflict-free.
    fn select_variable(&self, model: &Model, rng: &mut dyn RngCore) -> Option<usize>;
}

/// Picks a variable with the highest current conflict count, breaking ties
/// uniformly at random.
///
/// The scan keeps a running maximum and the set of variables tied at it; a
/// strictly higher count discards the accumulated ties. Randomized
/// tie-breaking matters here: a deterministic pick can cycle between the
/// same two variables indefinitely.
pub struct MostConflictedHeuristic;

impl VariableSelectionHeuristic for MostConflictedHeuristic {
    fn select_variable(&self, model: &Model, rng: &mut dyn RngCore) -> Option<usize> {
        let mut most_conflicts = 0;
        let mut candidates: Vec<usize> = Vec::new();

        for variable in model.variables() {
            let conflicts = model.count_conflicts(variable.index());
            match conflicts.cmp(&most_conflicts) {
                std::cmp::Ordering::Greater => {
                    most_conflicts = conflicts;
                    candidates.clear();
                    candidates.push(variable.index());
                }
                std::cmp::Ordering::Equal => candidates.push(variable.index()),
                std::cmp::Ordering::Less => {}
            }
        }

        if most_conflicts == 0 {
            return None;
        }

        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Picks uniformly at random among all variables with a nonzero conflict
/// count.
///
/// A flatter alternative to [`MostConflictedHeuristic`] that trades
/// targeting for cheaper cycles out of local plateaus.
pub struct RandomConflictedHeuristic;

impl VariableSelectionHeuristic for RandomConflictedHeuristic {
    fn select_variable(&self, model: &Model, rng: &mut dyn RngCore) -> Option<usize> {
        let conflicted: Vec<usize> = model
            .variables()
            .iter()
            .map(|variable| variable.index())
            .filter(|&index| model.count_conflicts(index) > 0)
            .collect();

        if conflicted.is_empty() {
            return None;
        }

        Some(conflicted[rng.gen_range(0..conflicted.len())])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn board(columns: &[usize]) -> Model {
        let mut model = Model::new(columns.len());
        for (row, &col) in columns.iter().enumerate() {
            model.assign(row, col);
        }
        model
    }

    #[test]
    fn most_conflicted_returns_none_iff_conflict_free() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let solved = board(&[1, 3, 0, 2]);
        assert!(MostConflictedHeuristic
            .select_variable(&solved, &mut rng)
            .is_none());

        let clashing = board(&[0, 0, 0, 0]);
        assert!(MostConflictedHeuristic
            .select_variable(&clashing, &mut rng)
            .is_some());
    }

    #[test]
    fn most_conflicted_picks_the_unique_worst_variable() {
        // Row 2 shares a column with row 0 and a diagonal with row 3; no
        // other variable holds more than one conflict.
        let model = board(&[1, 3, 1, 2]);
        assert_eq!(model.count_conflicts(2), 2);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..16 {
            assert_eq!(
                MostConflictedHeuristic.select_variable(&model, &mut rng),
                Some(2)
            );
        }
    }

    #[test]
    fn most_conflicted_spreads_across_ties() {
        // Every queen on the same column: all four are tied at three
        // conflicts, so repeated draws should reach each of them.
        let model = board(&[2, 2, 2, 2]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(
                MostConflictedHeuristic
                    .select_variable(&model, &mut rng)
                    .unwrap(),
            );
        }
        assert_eq!(seen, [0, 1, 2, 3].into_iter().collect());
    }

    #[test]
    fn random_conflicted_only_picks_conflicted_variables() {
        // Rows 0 and 1 share column 0; rows 2 and 3 are safe from everyone.
        let model = board(&[0, 0, 3, 1]);
        assert_eq!(model.count_conflicts(2), 0);
        assert_eq!(model.count_conflicts(3), 0);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..32 {
            let picked = RandomConflictedHeuristic
                .select_variable(&model, &mut rng)
                .unwrap();
            assert!(picked == 0 || picked == 1);
        }
    }

    #[test]
    fn random_conflicted_returns_none_when_solved() {
        let model = board(&[1, 3, 0, 2]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(RandomConflictedHeuristic
            .select_variable(&model, &mut rng)
            .is_none());
    }
}
