use super::*;

/// Global traceback over locally floored cells, chaining several local
/// alignments in one pass.
///
/// The fill is local-style (cells floor at zero, match wins ties only
/// strictly), but the traceback starts at the bottom-right corner as in
/// global mode. When the walk lands on a [`Trace::Stop`] cell it recovers:
/// the nearest diagonal cell below and to the left is located, the skipped
/// block is bridged with explicit gaps on both sides, and the landing cell's
/// score is added to the similarity. Repeated substrings of one sequence can
/// thereby align against a single stretch of the other.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn repeats(restrictions_a: &[i32], restrictions_b: &[i32], scorer: &Scorer, scale: f64) -> KernelOutput {
    let len_a = scorer.len_a();
    let len_b = scorer.len_b();

    let mut matrix: Grid<f64> = Grid::new(len_b + 1, len_a + 1);
    let mut traceback: Grid<Trace> = Grid::new(len_b + 1, len_a + 1);

    // The frame guides the homeward walk, and the diagonal at the origin
    // anchors the recovery scan.
    traceback[(0, 0)] = Trace::Diagonal;
    for j in 1..=len_a {
        traceback[(0, j)] = Trace::Horizontal;
    }
    for i in 1..=len_b {
        traceback[(i, 0)] = Trace::Vertical;
    }

    for i in 1..=len_b {
        for j in 1..=len_a {
            let mut null = 0.0;

            let gap_a = if forbids_gap_a(restrictions_a, restrictions_b, i, j) {
                null = -RESTRICTION_PENALTY;
                matrix[(i - 1, j)] - RESTRICTION_PENALTY
            } else if traceback[(i - 1, j)] == Trace::Vertical {
                matrix[(i - 1, j)] + scorer.weight_b(i) * scale
            } else {
                matrix[(i - 1, j)] + scorer.weight_b(i)
            };

            let gap_b = if forbids_gap_b(restrictions_a, restrictions_b, i, j) {
                null = -RESTRICTION_PENALTY;
                matrix[(i, j - 1)] - RESTRICTION_PENALTY
            } else if traceback[(i, j - 1)] == Trace::Horizontal {
                matrix[(i, j - 1)] + scorer.weight_a(j) * scale
            } else {
                matrix[(i, j - 1)] + scorer.weight_a(j)
            };

            let matched = matrix[(i - 1, j - 1)] + scorer.sim(i, j);

            if gap_a >= matched && gap_a >= gap_b && gap_a >= null {
                matrix[(i, j)] = gap_a;
                traceback[(i, j)] = Trace::Vertical;
            } else if matched > gap_b && matched > null {
                matrix[(i, j)] = matched;
                traceback[(i, j)] = Trace::Diagonal;
            } else if gap_b > null {
                matrix[(i, j)] = gap_b;
                traceback[(i, j)] = Trace::Horizontal;
            } else {
                matrix[(i, j)] = null;
                traceback[(i, j)] = Trace::Stop;
            }
        }
    }

    let mut similarity = matrix[(len_b, len_a)];

    let mut gaps_a = vec![0; len_a + 1];
    let mut gaps_b = vec![0; len_b + 1];
    let (mut i, mut j) = (len_b, len_a);

    while i > 0 || j > 0 {
        match traceback[(i, j)] {
            Trace::Vertical => {
                gaps_a[j] += 1;
                i -= 1;
            }
            Trace::Diagonal => {
                i -= 1;
                j -= 1;
            }
            Trace::Horizontal => {
                gaps_b[i] += 1;
                j -= 1;
            }
            Trace::Stop => {
                let (l, k) = nearest_diagonal(&traceback, i, j);

                // Bridge the skipped block: each side receives the other
                // side's skipped length in gaps, keeping the two aligned
                // regions equally long.
                gaps_a[k] += (i - l) as i32;
                gaps_b[i] += (j - k) as i32;

                i = l;
                j = k;
                similarity += matrix[(i, j)];
            }
        }
    }

    KernelOutput {
        similarity,
        gaps_a,
        gaps_b,
    }
}

/// Locates the nearest diagonal cell below and to the left of `(i, j)`,
/// scanning columns outward and rows within each column. The origin cell is
/// marked diagonal during initialization, so the scan always succeeds.
fn nearest_diagonal(traceback: &Grid<Trace>, i: usize, j: usize) -> (usize, usize) {
    for k in (0..j).rev() {
        for l in (0..i).rev() {
            if traceback[(l, k)] == Trace::Diagonal {
                return (l, k);
            }
        }
    }

    (0, 0)
}
