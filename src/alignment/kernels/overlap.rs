use super::*;

/// Semi-global alignment: leading and trailing gaps in either sequence are
/// free. The boundary rows stay at zero, and a gap taken in the final row or
/// column costs nothing.
pub(crate) fn overlap(restrictions_a: &[i32], restrictions_b: &[i32], scorer: &Scorer, scale: f64) -> KernelOutput {
    let len_a = scorer.len_a();
    let len_b = scorer.len_b();

    let mut matrix: Grid<f64> = Grid::new(len_b + 1, len_a + 1);
    let mut traceback: Grid<Trace> = Grid::new(len_b + 1, len_a + 1);

    traceback[(0, 0)] = Trace::Diagonal;
    for j in 1..=len_a {
        traceback[(0, j)] = Trace::Horizontal;
    }
    for i in 1..=len_b {
        traceback[(i, 0)] = Trace::Vertical;
    }

    for i in 1..=len_b {
        for j in 1..=len_a {
            let gap_a = if forbids_gap_a(restrictions_a, restrictions_b, i, j) {
                matrix[(i - 1, j)] - RESTRICTION_PENALTY
            } else if j == len_a {
                // trailing gaps in the first sequence are free
                matrix[(i - 1, j)]
            } else if traceback[(i - 1, j)] == Trace::Vertical {
                matrix[(i - 1, j)] + scorer.weight_b(i) * scale
            } else {
                matrix[(i - 1, j)] + scorer.weight_b(i)
            };

            let gap_b = if forbids_gap_b(restrictions_a, restrictions_b, i, j) {
                matrix[(i, j - 1)] - RESTRICTION_PENALTY
            } else if i == len_b {
                matrix[(i, j - 1)]
            } else if traceback[(i, j - 1)] == Trace::Horizontal {
                matrix[(i, j - 1)] + scorer.weight_a(j) * scale
            } else {
                matrix[(i, j - 1)] + scorer.weight_a(j)
            };

            let matched = matrix[(i - 1, j - 1)] + scorer.sim(i, j);

            if gap_a > matched && gap_a >= gap_b {
                matrix[(i, j)] = gap_a;
                traceback[(i, j)] = Trace::Vertical;
            } else if matched >= gap_b {
                matrix[(i, j)] = matched;
                traceback[(i, j)] = Trace::Diagonal;
            } else {
                matrix[(i, j)] = gap_b;
                traceback[(i, j)] = Trace::Horizontal;
            }
        }
    }

    let (gaps_a, gaps_b) = walk_full(&traceback, len_a, len_b);

    KernelOutput {
        similarity: matrix[(len_b, len_a)],
        gaps_a,
        gaps_b,
    }
}
