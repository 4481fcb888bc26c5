//! ## Alignment kernels
//!
//! One kernel per [`Mode`], all sharing the same table layout and traceback
//! alphabet. Each kernel fills a `(lB + 1) x (lA + 1)` score matrix and a
//! parallel [`Trace`] matrix, then walks the traceback into per-position gap
//! counts: `gaps_a[k] = n` inserts `n` gaps before position `k` of the first
//! sequence, and `-1` marks position `k` as outside a local alignment
//! region. The kernels differ only in initialization, gap-cost treatment,
//! optimum selection, and traceback policy.
//!
//! Site restrictions and the gap-extension scale enter through the shared
//! candidate computation: a forbidden gap contributes its source score minus
//! [`RESTRICTION_PENALTY`], and a gap continuing a gap of the same kind has
//! its cost multiplied by `scale`.

mod dialign;
mod global;
mod local;
mod overlap;
mod repeats;

use crate::alignment::{
    scorer::Scorer,
    types::{Grid, Mode, Trace},
};


/// Soft penalty subtracted from a candidate to mark a forbidden move while
/// keeping score comparisons total-ordered. Large enough to lose against any
/// realistic score, small enough to stay far from `f64` precision limits.
pub(crate) const RESTRICTION_PENALTY: f64 = 1_000_000.0;

/// What a kernel hands back: the similarity score and the gap counts per
/// insertion point of each sequence.
pub(crate) struct KernelOutput {
    pub similarity: f64,
    pub gaps_a:     Vec<i32>,
    pub gaps_b:     Vec<i32>,
}

/// Runs the kernel selected by `mode`.
///
/// The restriction slices must match the sequence lengths of `scorer`.
pub(crate) fn run(
    mode: Mode, restrictions_a: &[i32], restrictions_b: &[i32], scorer: &Scorer, scale: f64,
) -> KernelOutput {
    match mode {
        Mode::Global => global::global(restrictions_a, restrictions_b, scorer, scale),
        Mode::Local => local::local(restrictions_a, restrictions_b, scorer, scale),
        Mode::Overlap => overlap::overlap(restrictions_a, restrictions_b, scorer, scale),
        Mode::Repeats => repeats::repeats(restrictions_a, restrictions_b, scorer, scale),
        Mode::Dialign => dialign::dialign(restrictions_a, restrictions_b, scorer),
    }
}

/// Checks whether a gap in the first sequence is forbidden at cell `(i, j)`:
/// a negative restriction at `B[i-1]` blocks gaps opposite positive
/// restrictions of the other sequence, except at its final position.
#[inline]
fn forbids_gap_a(restrictions_a: &[i32], restrictions_b: &[i32], i: usize, j: usize) -> bool {
    restrictions_b[i - 1] < 0 && restrictions_a[j - 1] > 0 && j != restrictions_a.len()
}

/// Mirror of [`forbids_gap_a`] for gaps in the second sequence.
#[inline]
fn forbids_gap_b(restrictions_a: &[i32], restrictions_b: &[i32], i: usize, j: usize) -> bool {
    restrictions_a[j - 1] < 0 && restrictions_b[i - 1] > 0 && i != restrictions_b.len()
}

/// Walks a traceback from the bottom-right corner all the way home,
/// accumulating gap counts. Shared by the modes whose traceback never
/// terminates early (global, overlap, dialign).
fn walk_full(traceback: &Grid<Trace>, len_a: usize, len_b: usize) -> (Vec<i32>, Vec<i32>) {
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
            _ => {
                gaps_b[i] += 1;
                j -= 1;
            }
        }
    }

    (gaps_a, gaps_b)
}
