use crate::alignment::{
    errors::AlignmentError,
    kernels,
    scorer::{ScoreMap, Scorer},
    types::{Mode, PairAlignment, expand_with_gaps},
};
use std::{fmt::Debug, hash::Hash};

/// Validates one side's per-position arguments against its sequence,
/// yielding the prosodic annotation as one character per position.
pub(crate) fn validate_sequence_args<T>(
    seq: &[T], weights: &[f64], restrictions: &[i32], prosodics: &str,
) -> Result<Vec<char>, AlignmentError> {
    if seq.is_empty() {
        return Err(AlignmentError::EmptySequence);
    }

    if weights.len() != seq.len() {
        return Err(AlignmentError::WeightCountMismatch {
            seq_len:    seq.len(),
            weight_len: weights.len(),
        });
    }

    if restrictions.len() != seq.len() {
        return Err(AlignmentError::RestrictionCountMismatch {
            seq_len:         seq.len(),
            restriction_len: restrictions.len(),
        });
    }

    let chars: Vec<char> = prosodics.chars().collect();
    if chars.len() != seq.len() {
        return Err(AlignmentError::ProsodicCountMismatch {
            seq_len:      seq.len(),
            prosodic_len: chars.len(),
        });
    }

    Ok(chars)
}

/// The shared align-one-pair flow: validate, build the scorer, run the
/// kernel, expand the gap counts. All drivers funnel through here.
#[allow(clippy::too_many_arguments)]
pub(crate) fn align_one<T: Clone + Eq + Hash + Debug>(
    seq_a: &[T], seq_b: &[T], weights_a: &[f64], weights_b: &[f64], restrictions_a: &[i32], restrictions_b: &[i32],
    prosodics_a: &str, prosodics_b: &str, scores: &ScoreMap<T>, scale: f64, sonority_factor: f64, mode: Mode,
) -> Result<PairAlignment<T>, AlignmentError> {
    let prs_a = validate_sequence_args(seq_a, weights_a, restrictions_a, prosodics_a)?;
    let prs_b = validate_sequence_args(seq_b, weights_b, restrictions_b, prosodics_b)?;

    let scorer = Scorer::build(seq_a, seq_b, weights_a, weights_b, &prs_a, &prs_b, scores, sonority_factor)?;
    let out = kernels::run(mode, restrictions_a, restrictions_b, &scorer, scale);

    Ok(PairAlignment::new(
        expand_with_gaps(seq_a, &out.gaps_a),
        expand_with_gaps(seq_b, &out.gaps_b),
        out.similarity,
    ))
}

/// Checks that a parallel batch argument covers as many sequences as the
/// batch itself.
fn validate_batch_len(seq_count: usize, found: usize) -> Result<(), AlignmentError> {
    if seq_count == found {
        Ok(())
    } else {
        Err(AlignmentError::SequenceCountMismatch { seq_count, found })
    }
}

/// Aligns a single pair of sequences.
///
/// Each sequence comes with a gap weight per position, a restriction value
/// per position (a negative value forbids gaps opposite positive-restriction
/// positions of the other sequence, except at its last position), and a
/// prosodic annotation character per position (matching annotations scale
/// the similarity by `1 + sonority_factor`). Runs of gaps have their cost
/// multiplied by `scale`.
///
/// ## Errors
///
/// Returns an [`AlignmentError`] when a sequence is empty, a per-position
/// argument disagrees with its sequence length, or the similarity mapping
/// misses an encountered symbol pair.
///
/// ## Example
///
/// ```
/// # use glossa::alignment::{Mode, ScoreMap, align_pairwise};
/// # use std::collections::HashMap;
/// let mut scores: ScoreMap<&str> = HashMap::new();
/// scores.insert(("a", "a"), 1.0);
///
/// let aligned = align_pairwise(
///     &["a"], &["a"], &[-1.0], &[-1.0], &[0], &[0], "V", "V", &scores, 0.5, 0.0, Mode::Global,
/// )
/// .unwrap();
///
/// assert_eq!(aligned.similarity, 1.0);
/// assert_eq!(aligned.seq_a, aligned.seq_b);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn align_pairwise<T: Clone + Eq + Hash + Debug>(
    seq_a: &[T], seq_b: &[T], weights_a: &[f64], weights_b: &[f64], restrictions_a: &[i32], restrictions_b: &[i32],
    prosodics_a: &str, prosodics_b: &str, scores: &ScoreMap<T>, scale: f64, sonority_factor: f64, mode: Mode,
) -> Result<PairAlignment<T>, AlignmentError> {
    align_one(
        seq_a,
        seq_b,
        weights_a,
        weights_b,
        restrictions_a,
        restrictions_b,
        prosodics_a,
        prosodics_b,
        scores,
        scale,
        sonority_factor,
        mode,
    )
}

/// Aligns every unordered pair of a sequence list, enumerated in
/// lexicographic `(i, j)` order with `i < j`.
///
/// The parallel arguments hold one entry per sequence. The similarity
/// mapping is always consulted with the `(first, second)` key order, the
/// first sequence of each pair being the lower-indexed one.
///
/// ## Errors
///
/// Returns an [`AlignmentError`] when a parallel argument covers a different
/// number of sequences than the list itself, or when any single pair fails
/// as in [`align_pairwise`].
#[allow(clippy::too_many_arguments)]
pub fn align_sequences_pairwise<T: Clone + Eq + Hash + Debug>(
    seqs: &[Vec<T>], weights: &[Vec<f64>], restrictions: &[Vec<i32>], prosodics: &[String], scores: &ScoreMap<T>,
    scale: f64, sonority_factor: f64, mode: Mode,
) -> Result<Vec<PairAlignment<T>>, AlignmentError> {
    validate_batch_len(seqs.len(), weights.len())?;
    validate_batch_len(seqs.len(), restrictions.len())?;
    validate_batch_len(seqs.len(), prosodics.len())?;

    let mut alignments = Vec::with_capacity(seqs.len() * seqs.len().saturating_sub(1) / 2);

    for i in 0..seqs.len() {
        for j in (i + 1)..seqs.len() {
            alignments.push(align_one(
                &seqs[i],
                &seqs[j],
                &weights[i],
                &weights[j],
                &restrictions[i],
                &restrictions[j],
                &prosodics[i],
                &prosodics[j],
                scores,
                scale,
                sonority_factor,
                mode,
            )?);
        }
    }

    Ok(alignments)
}

/// Aligns an explicit list of sequence pairs, one result per input pair.
///
/// ## Errors
///
/// Returns an [`AlignmentError`] when a parallel argument covers a different
/// number of pairs than the pair list itself, or when any single pair fails
/// as in [`align_pairwise`].
#[allow(clippy::too_many_arguments)]
pub fn align_sequence_pairs<T: Clone + Eq + Hash + Debug>(
    pairs: &[(Vec<T>, Vec<T>)], weights: &[(Vec<f64>, Vec<f64>)], restrictions: &[(Vec<i32>, Vec<i32>)],
    prosodics: &[(String, String)], scores: &ScoreMap<T>, scale: f64, sonority_factor: f64, mode: Mode,
) -> Result<Vec<PairAlignment<T>>, AlignmentError> {
    validate_batch_len(pairs.len(), weights.len())?;
    validate_batch_len(pairs.len(), restrictions.len())?;
    validate_batch_len(pairs.len(), prosodics.len())?;

    let mut alignments = Vec::with_capacity(pairs.len());

    for (i, (seq_a, seq_b)) in pairs.iter().enumerate() {
        alignments.push(align_one(
            seq_a,
            seq_b,
            &weights[i].0,
            &weights[i].1,
            &restrictions[i].0,
            &restrictions[i].1,
            &prosodics[i].0,
            &prosodics[i].1,
            scores,
            scale,
            sonority_factor,
            mode,
        )?);
    }

    Ok(alignments)
}
