use crate::alignment::{
    errors::AlignmentError,
    pairwise::align_one,
    scorer::ScoreMap,
    types::{AlignedSymbol, Mode},
};
use rand::seq::SliceRandom;
use rand_xoshiro::Xoshiro256StarStar;
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Correspondence frequencies accumulated over shuffled pairings: how often
/// each pair of aligned positions (tokens or gaps) co-occurred, averaged
/// over the number of runs.
pub type CorrespondenceCounts<T> = HashMap<(AlignedSymbol<T>, AlignedSymbol<T>), f64>;

/// Counts symbol correspondences over randomly re-paired sequences.
///
/// Per run, a uniformly random permutation `v` re-pairs the batch: the
/// first sequence of pair `v[i]` is aligned against the second sequence of
/// pair `i` (with the matching weights, restrictions, and prosodics), and
/// every aligned column contributes `1 / runs` to its symbol pair's
/// accumulator. Alignments are memoized by `(v[i], i)` for the duration of
/// the call, so a pairing drawn twice is aligned once.
///
/// In local mode, excluded positions are first filtered out of each output
/// independently and the remainders paired positionally over the first
/// side's length.
///
/// The caller owns the generator, so a fixed seed yields a deterministic
/// result for a given input.
///
/// ## Errors
///
/// Returns an [`AlignmentError`] when `runs` is zero, when a parallel
/// argument covers a different number of pairs than the pair list, or when
/// any single alignment fails as in [`align_pairwise`].
///
/// ## Panics
///
/// In local mode, panics if an alignment excludes more positions from the
/// first sequence than from the second (the filtered sides are paired over
/// the first side's length).
///
/// ## Example
///
/// ```
/// # use glossa::alignment::{Mode, ScoreMap, random_align_sequence_pairs};
/// # use rand::SeedableRng;
/// # use rand_xoshiro::Xoshiro256StarStar;
/// # use std::collections::HashMap;
/// let mut scores: ScoreMap<&str> = HashMap::new();
/// scores.insert(("a", "a"), 1.0);
///
/// let pairs = vec![(vec!["a"], vec!["a"])];
/// let weights = vec![(vec![-1.0], vec![-1.0])];
/// let restrictions = vec![(vec![0], vec![0])];
/// let prosodics = vec![("V".to_string(), "V".to_string())];
///
/// let mut rng = Xoshiro256StarStar::seed_from_u64(7);
/// let corrs = random_align_sequence_pairs(
///     &pairs, &weights, &restrictions, &prosodics, &scores, 0.5, 0.0, Mode::Global, 4, &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(corrs.len(), 1);
/// ```
///
/// [`align_pairwise`]: crate::alignment::align_pairwise
#[allow(clippy::too_many_arguments, clippy::cast_precision_loss)]
pub fn random_align_sequence_pairs<T: Clone + Eq + Hash + Debug>(
    pairs: &[(Vec<T>, Vec<T>)], weights: &[(Vec<f64>, Vec<f64>)], restrictions: &[(Vec<i32>, Vec<i32>)],
    prosodics: &[(String, String)], scores: &ScoreMap<T>, scale: f64, sonority_factor: f64, mode: Mode, runs: usize,
    rng: &mut Xoshiro256StarStar,
) -> Result<CorrespondenceCounts<T>, AlignmentError> {
    if runs == 0 {
        return Err(AlignmentError::ZeroRuns);
    }

    for found in [weights.len(), restrictions.len(), prosodics.len()] {
        if found != pairs.len() {
            return Err(AlignmentError::SequenceCountMismatch {
                seq_count: pairs.len(),
                found,
            });
        }
    }

    let count = pairs.len();
    let share = 1.0 / runs as f64;

    let mut order: Vec<usize> = (0..count).collect();
    let mut memo: HashMap<(usize, usize), (Vec<AlignedSymbol<T>>, Vec<AlignedSymbol<T>>)> = HashMap::new();
    let mut corrs: CorrespondenceCounts<T> = HashMap::new();

    for _ in 0..runs {
        order.shuffle(rng);

        for i in 0..count {
            let a = order[i];

            if !memo.contains_key(&(a, i)) {
                let aligned = align_one(
                    &pairs[a].0,
                    &pairs[i].1,
                    &weights[a].0,
                    &weights[i].1,
                    &restrictions[a].0,
                    &restrictions[i].1,
                    &prosodics[a].0,
                    &prosodics[i].1,
                    scores,
                    scale,
                    sonority_factor,
                    mode,
                )?;
                memo.insert((a, i), (aligned.seq_a, aligned.seq_b));
            }

            let (out_a, out_b) = &memo[&(a, i)];

            if mode == Mode::Local {
                let kept_a: Vec<&AlignedSymbol<T>> = out_a.iter().filter(|s| !s.is_excluded()).collect();
                let kept_b: Vec<&AlignedSymbol<T>> = out_b.iter().filter(|s| !s.is_excluded()).collect();

                for n in 0..kept_a.len() {
                    *corrs.entry((kept_a[n].clone(), kept_b[n].clone())).or_insert(0.0) += share;
                }
            } else {
                for (sym_a, sym_b) in out_a.iter().zip(out_b) {
                    *corrs.entry((sym_a.clone(), sym_b.clone())).or_insert(0.0) += share;
                }
            }
        }
    }

    Ok(corrs)
}
