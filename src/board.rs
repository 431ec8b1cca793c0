//! Text rendering of a finished board.
//!
//! A read-only consumer of the model: the solver never depends on this
//! module. Each row renders its n squares followed by that row's current
//! conflict count, so a rendered solution shows `(0 conflicts)` on every
//! line.

use std::fmt::Write;

use crate::solver::model::Model;

/// Renders the board, one line per row: `Q` at the assigned column, `.`
/// elsewhere, squares separated by spaces, then the row's conflict count.
pub fn render(model: &Model) -> String {
    render_with_highlight(model, None)
}

/// Like [`render`], but marks the queen at `highlight` with `X` instead of
/// `Q`. Purely a presentation aid for watching a particular variable.
pub fn render_with_highlight(model: &Model, highlight: Option<usize>) -> String {
    let n = model.len();
    let mut out = String::new();

    for variable in model.variables() {
        for column in 0..n {
            if variable.value() == column {
                if highlight == Some(variable.index()) {
                    out.push('X');
                } else {
                    out.push('Q');
                }
            } else {
                out.push('.');
            }
            out.push(' ');
        }

        let conflicts = model.count_conflicts(variable.index());
        let _ = writeln!(out, "  ({conflicts} conflicts)");
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn board(columns: &[usize]) -> Model {
        let mut model = Model::new(columns.len());
        for (row, &col) in columns.iter().enumerate() {
            model.assign(row, col);
        }
        model
    }

    #[test]
    fn renders_a_solved_board() {
        let model = board(&[1, 3, 0, 2]);
        let expected = "\
. Q . .   (0 conflicts)
. . . Q   (0 conflicts)
Q . . .   (0 conflicts)
. . Q .   (0 conflicts)
";
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn renders_conflict_counts_per_row() {
        let model = board(&[0, 0, 1]);
        let expected = "\
Q . .   (1 conflicts)
Q . .   (2 conflicts)
. Q .   (1 conflicts)
";
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn highlight_marks_one_queen() {
        let model = board(&[1, 3, 0, 2]);
        let rendered = render_with_highlight(&model, Some(2));
        assert!(rendered.contains("X . . ."));
        assert_eq!(rendered.matches('X').count(), 1);
        assert_eq!(rendered.matches('Q').count(), 3);
    }
}
