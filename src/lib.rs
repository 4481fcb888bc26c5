#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::many_single_char_names,
    clippy::comparison_chain
)]

/// ## Pairwise alignment of phonetic sequences.
///
/// The [`align_pairwise`] function aligns a single pair of sequences under a
/// similarity mapping, per-position gap weights, site restrictions, and
/// prosodic annotations, in one of five [`Mode`]s. The batch drivers
/// [`align_sequences_pairwise`] (all unordered pairs of a list) and
/// [`align_sequence_pairs`] (an explicit list of pairs) run the same flow
/// over many pairs, and [`random_align_sequence_pairs`] repeats it over
/// shuffled pairings to count sound correspondences.
///
/// [`align_pairwise`]: alignment::align_pairwise
/// [`align_sequences_pairwise`]: alignment::align_sequences_pairwise
/// [`align_sequence_pairs`]: alignment::align_sequence_pairs
/// [`random_align_sequence_pairs`]: alignment::random_align_sequence_pairs
/// [`Mode`]: alignment::Mode
pub mod alignment;

/// ## Sequence distances.
///
/// Currently the normalized Levenshtein distance, [`edit_dist`].
///
/// [`edit_dist`]: distance::edit_dist
pub mod distance;

/// Commonly used items, re-exported for convenience.
pub mod prelude {
    pub use crate::{
        alignment::{
            AlignedSymbol, AlignmentError, Mode, PairAlignment, ScoreMap, align_pairwise, align_sequence_pairs,
            align_sequences_pairwise, random_align_sequence_pairs,
        },
        distance::edit_dist,
    };
}
