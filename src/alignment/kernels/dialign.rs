use super::*;

/// DIALIGN-style alignment: whole gap-free diagonals are chosen as units.
///
/// For each cell, every diagonal ending there is scored as the sum of its
/// cell similarities on top of the score where the diagonal starts; the best
/// diagonal competes against ungapped skips of a row or column, which cost
/// nothing (no gap weights in this mode). A winning diagonal writes its
/// whole run of cells into the traceback at once.
pub(crate) fn dialign(restrictions_a: &[i32], restrictions_b: &[i32], scorer: &Scorer) -> KernelOutput {
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
            let mut best_score = 0.0;
            let mut best_len = 1;

            for k in 0..i.min(j) {
                let mut score = matrix[(i - k - 1, j - k - 1)];
                for l in 0..=k {
                    score += scorer.sim(i - l, j - l);
                }

                if score > best_score {
                    best_score = score;
                    best_len = k + 1;
                }
            }

            let score_a = if forbids_gap_a(restrictions_a, restrictions_b, i, j) {
                matrix[(i - 1, j)] - RESTRICTION_PENALTY
            } else {
                matrix[(i - 1, j)]
            };

            let score_b = if forbids_gap_b(restrictions_a, restrictions_b, i, j) {
                matrix[(i, j - 1)] - RESTRICTION_PENALTY
            } else {
                matrix[(i, j - 1)]
            };

            matrix[(i, j)] = if score_a >= best_score && score_a > score_b {
                traceback[(i, j)] = Trace::Vertical;
                score_a
            } else if best_score > score_b {
                for k in 0..best_len {
                    traceback[(i - k, j - k)] = Trace::Diagonal;
                }
                best_score
            } else {
                traceback[(i, j)] = Trace::Horizontal;
                score_b
            };
        }
    }

    let (gaps_a, gaps_b) = walk_full(&traceback, len_a, len_b);

    KernelOutput {
        similarity: matrix[(len_b, len_a)],
        gaps_a,
        gaps_b,
    }
}
