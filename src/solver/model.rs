//! The mutable assignment model the solver repairs in place.

use rand::Rng;
use rand_core::RngCore;
use serde::Serialize;

use crate::solver::constraint;

/// One queen: a fixed row plus a mutable column assignment.
///
/// The `index` is the variable's identity — the row it was created for — and
/// never changes. The column is reassigned freely during repair.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    index: usize,
    value: usize,
    is_set: bool,
}

impl Variable {
    fn new(index: usize) -> Self {
        Self {
            index,
            value: 0,
            is_set: false,
        }
    }

    /// The row this variable owns. Fixed at construction.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The currently assigned column. Meaningful only when [`is_set`] is
    /// true; defaults to 0 before the first assignment.
    ///
    /// [`is_set`]: Variable::is_set
    pub fn value(&self) -> usize {
        self.value
    }

    /// Whether a column has ever been assigned.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Assigns a column and marks the variable as set.
    pub fn assign(&mut self, value: usize) {
        self.value = value;
        self.is_set = true;
    }

    /// Clears the assignment, resetting the column to 0.
    pub fn unassign(&mut self) {
        self.value = 0;
        self.is_set = false;
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Q{} = {} ({})",
            self.index,
            self.value,
            if self.is_set { "set" } else { "unset" }
        )
    }
}

/// The ordered collection of all variables, one per row.
///
/// Invariant: `variables[i].index() == i` for every `i`, established once by
/// [`Model::new`] and never altered. The model owns its variables for its
/// entire lifetime; the solver mutates them in place through [`assign`] and
/// [`randomize`], and a stalled attempt reuses the same variables rather
/// than rebuilding the model.
///
/// [`assign`]: Model::assign
/// [`randomize`]: Model::randomize
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    variables: Vec<Variable>,
}

impl Model {
    /// Creates a model of `n` unset variables, one per row `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            variables: (0..n).map(Variable::new).collect(),
        }
    }

    /// The number of variables (and therefore rows and columns).
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, index: usize) -> &Variable {
        &self.variables[index]
    }

    /// Commits a column to the variable at `index`.
    pub fn assign(&mut self, index: usize, value: usize) {
        debug_assert!(value < self.len());
        self.variables[index].assign(value);
    }

    /// Assigns every variable an independent uniform draw from `0..n`.
    ///
    /// Draws are independent, so duplicate columns are expected; repair is
    /// what removes them.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) {
        let n = self.len();
        for variable in &mut self.variables {
            variable.assign(rng.gen_range(0..n));
        }
    }

    /// Counts how many other rows currently attack the variable at `index`.
    ///
    /// A full O(n) rescan against the current assignment; nothing is cached
    /// between calls. Result is in `0..n`.
    pub fn count_conflicts(&self, index: usize) -> usize {
        let variable = &self.variables[index];
        self.variables
            .iter()
            .filter(|other| {
                other.index != index
                    && !constraint::satisfied(index, other.index, variable.value, other.value)
            })
            .count()
    }

    /// Total conflict count over all variables. Each conflicting pair is
    /// counted twice, once from each end.
    pub fn total_conflicts(&self) -> usize {
        (0..self.len()).map(|i| self.count_conflicts(i)).sum()
    }

    /// Whether the current assignment solves the puzzle.
    pub fn is_conflict_free(&self) -> bool {
        (0..self.len()).all(|i| self.count_conflicts(i) == 0)
    }
}
