//! The queen-attack rule.
//!
//! This is the only constraint in the problem. Two queens are mutually safe
//! when they occupy different columns and different diagonals; rows are
//! distinct by construction, since each variable owns exactly one row.

/// Returns `true` when queens at `(row_a, col_a)` and `(row_b, col_b)` do
/// NOT attack each other.
///
/// The rule is `col_a != col_b && |row_a - row_b| != |col_a - col_b|`: a
/// shared column or a shared diagonal each count as an attack. Total over
/// all inputs, with no side effects.
pub fn satisfied(row_a: usize, row_b: usize, col_a: usize, col_b: usize) -> bool {
    col_a != col_b && row_a.abs_diff(row_b) != col_a.abs_diff(col_b)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn same_column_is_an_attack() {
        assert_eq!(satisfied(0, 3, 2, 2), false);
    }

    #[test]
    fn same_diagonal_is_an_attack() {
        // (0, 0) and (3, 3) share the main diagonal.
        assert_eq!(satisfied(0, 3, 0, 3), false);
        // Anti-diagonal: (1, 4) and (3, 2).
        assert_eq!(satisfied(1, 3, 4, 2), false);
    }

    #[test]
    fn knight_move_apart_is_safe() {
        assert_eq!(satisfied(0, 1, 0, 2), true);
        assert_eq!(satisfied(0, 2, 0, 1), true);
    }

    #[test]
    fn either_violation_alone_suffices() {
        // Same column but different diagonal.
        assert_eq!(satisfied(0, 2, 5, 5), false);
        // Different column but same diagonal.
        assert_eq!(satisfied(0, 2, 5, 7), false);
    }

    proptest! {
        #[test]
        fn predicate_is_symmetric(
            i in 0usize..256,
            j in 0usize..256,
            qi in 0usize..256,
            qj in 0usize..256,
        ) {
            prop_assert_eq!(satisfied(i, j, qi, qj), satisfied(j, i, qj, qi));
        }

        #[test]
        fn shared_column_never_satisfied(
            i in 0usize..256,
            j in 0usize..256,
            q in 0usize..256,
        ) {
            prop_assert!(!satisfied(i, j, q, q));
        }
    }
}
