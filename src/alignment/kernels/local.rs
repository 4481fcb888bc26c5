use super::*;

/// Local alignment of the best-scoring region.
///
/// Cells floor at zero (or at the restriction penalty when a forbidden gap
/// taints the cell), the optimum is the best cell anywhere in the table with
/// later cells winning ties, and the traceback stops at the first
/// [`Trace::Stop`] cell. Positions outside the traced region are marked
/// excluded in the gap counts.
pub(crate) fn local(restrictions_a: &[i32], restrictions_b: &[i32], scorer: &Scorer, scale: f64) -> KernelOutput {
    let len_a = scorer.len_a();
    let len_b = scorer.len_b();

    let mut matrix: Grid<f64> = Grid::new(len_b + 1, len_a + 1);
    let mut traceback: Grid<Trace> = Grid::new(len_b + 1, len_a + 1);

    let mut max_score = 0.0;
    let (mut imax, mut jmax) = (0, 0);

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
            } else if matched >= gap_b && matched >= null {
                matrix[(i, j)] = matched;
                traceback[(i, j)] = Trace::Diagonal;
            } else if gap_b > null {
                matrix[(i, j)] = gap_b;
                traceback[(i, j)] = Trace::Horizontal;
            } else {
                matrix[(i, j)] = null;
                traceback[(i, j)] = Trace::Stop;
            }

            if matrix[(i, j)] >= max_score {
                max_score = matrix[(i, j)];
                imax = i;
                jmax = j;
            }
        }
    }

    let similarity = matrix[(imax, jmax)];

    let mut gaps_a = vec![0; len_a + 1];
    let mut gaps_b = vec![0; len_b + 1];
    let (mut i, mut j) = (imax, jmax);

    // positions past the optimum fall outside the local region
    for k in jmax..len_a {
        gaps_a[k] = -1;
    }
    for k in imax..len_b {
        gaps_b[k] = -1;
    }

    while traceback[(i, j)] != Trace::Stop {
        match traceback[(i, j)] {
            Trace::Vertical => {
                gaps_a[j] += 1;
                i -= 1;
            }
            Trace::Diagonal => {
                i -= 1;
                j -= 1;
            }
            _ => {
                gaps_b[i] += 1;
                j -= 1;
            }
        }
    }

    // so does the prefix the traceback never reached
    for k in 0..j {
        gaps_a[k] = -1;
    }
    for k in 0..i {
        gaps_b[k] = -1;
    }

    KernelOutput {
        similarity,
        gaps_a,
        gaps_b,
    }
}
