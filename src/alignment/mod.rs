mod errors;
mod pairwise;
mod random;
mod scorer;

pub(crate) mod kernels;
pub(crate) mod types;

pub use errors::AlignmentError;
pub use pairwise::{align_pairwise, align_sequence_pairs, align_sequences_pairwise};
pub use random::{CorrespondenceCounts, random_align_sequence_pairs};
pub use scorer::ScoreMap;
pub use types::{AlignedSymbol, Mode, PairAlignment};

#[cfg(test)]
mod test;
