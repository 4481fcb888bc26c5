use crate::alignment::errors::AlignmentError;
use std::{fmt, str::FromStr};

/// The alignment mode, selecting the kernel's boundary conditions,
/// gap-penalty treatment, optimum selection, and traceback policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Needleman-Wunsch style alignment over the full length of both
    /// sequences.
    Global,
    /// Smith-Waterman style alignment of the best-scoring region; positions
    /// outside the region are marked excluded.
    Local,
    /// Semi-global alignment: gaps trailing either sequence are free.
    Overlap,
    /// Global traceback that recovers across zero cells, chaining several
    /// local alignments.
    Repeats,
    /// DIALIGN-style alignment choosing whole gap-free diagonals as units.
    Dialign,
}

impl FromStr for Mode {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Mode::Global),
            "local" => Ok(Mode::Local),
            "overlap" => Ok(Mode::Overlap),
            "repeats" => Ok(Mode::Repeats),
            "dialign" => Ok(Mode::Dialign),
            other => Err(AlignmentError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Mode::Global => "global",
            Mode::Local => "local",
            Mode::Overlap => "overlap",
            Mode::Repeats => "repeats",
            Mode::Dialign => "dialign",
        };
        f.write_str(name)
    }
}
