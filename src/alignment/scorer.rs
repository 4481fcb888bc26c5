use crate::alignment::{errors::AlignmentError, types::Grid};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// A similarity mapping over symbol pairs.
///
/// The mapping must contain an entry for every pair `(a, b)` with `a` drawn
/// from the first sequence and `b` from the second; a missing entry is a
/// fatal [`MissingScore`] error.
///
/// [`MissingScore`]: crate::alignment::AlignmentError::MissingScore
pub type ScoreMap<T> = HashMap<(T, T), f64>;

/// The per-pair scoring table consulted by the alignment kernels.
///
/// Laid out as a `(lB + 1) x (lA + 1)` grid: row 0 holds the gap weights of
/// the first sequence, column 0 the gap weights of the second, and cell
/// `(i, j)` the similarity of `A[j-1]` and `B[i-1]`, scaled by
/// `1 + sonority_factor` when the prosodic annotations of the two positions
/// agree.
pub(crate) struct Scorer {
    cells: Grid<f64>,
    len_a: usize,
    len_b: usize,
}

impl Scorer {
    /// Builds the scoring table for one pair of sequences.
    ///
    /// Sequence/weight/prosodic lengths must already agree; only the
    /// similarity lookups can fail here.
    pub(crate) fn build<T: Clone + Eq + Hash + Debug>(
        seq_a: &[T], seq_b: &[T], weights_a: &[f64], weights_b: &[f64], prosodics_a: &[char], prosodics_b: &[char],
        scores: &ScoreMap<T>, sonority_factor: f64,
    ) -> Result<Self, AlignmentError> {
        let len_a = seq_a.len();
        let len_b = seq_b.len();
        let mut cells = Grid::new(len_b + 1, len_a + 1);

        for i in 1..=len_b {
            cells[(i, 0)] = weights_b[i - 1];
        }
        for j in 1..=len_a {
            cells[(0, j)] = weights_a[j - 1];
        }

        for i in 1..=len_b {
            for j in 1..=len_a {
                let key = (seq_a[j - 1].clone(), seq_b[i - 1].clone());
                let Some(&score) = scores.get(&key) else {
                    return Err(AlignmentError::MissingScore {
                        pair: format!("({:?}, {:?})", key.0, key.1),
                    });
                };

                cells[(i, j)] = if prosodics_a[j - 1] == prosodics_b[i - 1] {
                    score * (1.0 + sonority_factor)
                } else {
                    score
                };
            }
        }

        Ok(Scorer { cells, len_a, len_b })
    }

    /// Length of the first sequence.
    #[inline]
    pub(crate) fn len_a(&self) -> usize {
        self.len_a
    }

    /// Length of the second sequence.
    #[inline]
    pub(crate) fn len_b(&self) -> usize {
        self.len_b
    }

    /// Gap weight for dropping position `j` (1-based) of the first sequence.
    #[inline]
    pub(crate) fn weight_a(&self, j: usize) -> f64 {
        self.cells[(0, j)]
    }

    /// Gap weight for dropping position `i` (1-based) of the second sequence.
    #[inline]
    pub(crate) fn weight_b(&self, i: usize) -> f64 {
        self.cells[(i, 0)]
    }

    /// Similarity of `A[j-1]` and `B[i-1]`, prosodic bonus included.
    #[inline]
    pub(crate) fn sim(&self, i: usize, j: usize) -> f64 {
        self.cells[(i, j)]
    }
}
