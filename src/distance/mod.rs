use crate::alignment::types::Grid;


/// Computes the normalized Levenshtein distance between two sequences.
///
/// Unit costs over symbol equality, normalized by the length of the longer
/// sequence, so the result lies in `[0, 1]`: `0` for equal sequences, `1`
/// when no position can be matched. Two empty sequences are at distance `0`.
/// No scorer, weights, or restrictions apply.
///
/// ## Example
///
/// ```
/// # use glossa::distance::edit_dist;
/// let dist = edit_dist(&["a", "b", "c"], &["a", "x", "c"]);
///
/// assert!((dist - 1.0 / 3.0).abs() < f64::EPSILON);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn edit_dist<T: PartialEq>(seq_a: &[T], seq_b: &[T]) -> f64 {
    let len_a = seq_a.len();
    let len_b = seq_b.len();

    if len_a.max(len_b) == 0 {
        return 0.0;
    }

    let mut matrix: Grid<usize> = Grid::new(len_b + 1, len_a + 1);

    for j in 1..=len_a {
        matrix[(0, j)] = j;
    }
    for i in 1..=len_b {
        matrix[(i, 0)] = i;
    }

    for i in 1..=len_b {
        for j in 1..=len_a {
            let penalty = usize::from(seq_a[j - 1] != seq_b[i - 1]);

            let gap_a = matrix[(i - 1, j)] + 1;
            let matched = matrix[(i - 1, j - 1)] + penalty;
            let gap_b = matrix[(i, j - 1)] + 1;

            matrix[(i, j)] = if gap_a <= matched && gap_a <= gap_b {
                gap_a
            } else if matched < gap_b {
                matched
            } else {
                gap_b
            };
        }
    }

    matrix[(len_b, len_a)] as f64 / len_a.max(len_b) as f64
}
