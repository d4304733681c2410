//! Core types for sequence alignment results.

use core::fmt;

/// The alignment strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentMode {
    /// Needleman-Wunsch: aligns both sequences end-to-end.
    Global,
    /// Smith-Waterman: finds the best-scoring pair of substrings.
    Local,
}

/// A run of identical alignment columns.
///
/// `seq1` plays the query role: an [`Insertion`](CigarOp::Insertion) is a gap
/// in `seq1` and a [`Deletion`](CigarOp::Deletion) is a gap in `seq2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CigarOp {
    /// Identical residues. SAM op `=`.
    Match(usize),
    /// Different residues. SAM op `X`.
    Mismatch(usize),
    /// Residue of `seq2` against a gap in `seq1`. SAM op `I`.
    Insertion(usize),
    /// Residue of `seq1` against a gap in `seq2`. SAM op `D`.
    Deletion(usize),
}

impl CigarOp {
    /// Single-character SAM CIGAR code.
    pub fn code(&self) -> char {
        match self {
            CigarOp::Match(_) => '=',
            CigarOp::Mismatch(_) => 'X',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
        }
    }

    /// Number of columns in this run.
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Match(n) | CigarOp::Mismatch(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// Extend the last run if `op` has the same kind, otherwise start a new run.
pub(crate) fn push_cigar(ops: &mut Vec<CigarOp>, op: CigarOp) {
    if let Some(last) = ops.last_mut() {
        match (last, op) {
            (CigarOp::Match(n), CigarOp::Match(k))
            | (CigarOp::Mismatch(n), CigarOp::Mismatch(k))
            | (CigarOp::Insertion(n), CigarOp::Insertion(k))
            | (CigarOp::Deletion(n), CigarOp::Deletion(k)) => {
                *n += k;
                return;
            }
            _ => {}
        }
    }
    ops.push(op);
}

/// The result of a pairwise sequence alignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    /// Alignment score.
    pub score: i32,
    /// Aligned `seq1` with `-` for gaps.
    pub aligned_seq1: Vec<u8>,
    /// Aligned `seq2` with `-` for gaps. Same length as `aligned_seq1`.
    pub aligned_seq2: Vec<u8>,
    /// `matches / max(len(aligned_seq1), len(aligned_seq2))`, 0.0 when empty.
    ///
    /// A column counts as a match under [`Symbol::matches`](genoscan_core::Symbol::matches),
    /// the same test the scoring uses, so byte inputs ignore ASCII case.
    pub identity: f64,
    /// Start of the aligned region in `seq1` (0-based, inclusive).
    pub seq1_start: usize,
    /// End of the aligned region in `seq1` (0-based, exclusive).
    pub seq1_end: usize,
    /// Start of the aligned region in `seq2` (0-based, inclusive).
    pub seq2_start: usize,
    /// End of the aligned region in `seq2` (0-based, exclusive).
    pub seq2_end: usize,
    /// Run-length encoded columns.
    pub cigar: Vec<CigarOp>,
}

impl AlignmentResult {
    /// Format the CIGAR vector as a compact string, e.g. `"4=1I3="`.
    pub fn cigar_string(&self) -> String {
        self.cigar.iter().map(ToString::to_string).collect()
    }

    /// Number of matching columns.
    pub fn matches(&self) -> usize {
        self.cigar
            .iter()
            .filter_map(|op| match op {
                CigarOp::Match(n) => Some(n),
                _ => None,
            })
            .sum()
    }

    /// Number of mismatching columns.
    pub fn mismatches(&self) -> usize {
        self.cigar
            .iter()
            .filter_map(|op| match op {
                CigarOp::Mismatch(n) => Some(n),
                _ => None,
            })
            .sum()
    }

    /// Number of gap columns (insertions + deletions).
    pub fn gaps(&self) -> usize {
        self.cigar
            .iter()
            .filter_map(|op| match op {
                CigarOp::Insertion(n) | CigarOp::Deletion(n) => Some(n),
                _ => None,
            })
            .sum()
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }
}

impl genoscan_core::Scored for AlignmentResult {
    fn score(&self) -> f64 {
        self.score as f64
    }
}

/// Fraction of matching columns over the longer aligned string.
///
/// `matches` is counted during traceback with `Symbol::matches`, not by
/// comparing the rendered bytes.
///
/// Both strings are equal-length by construction, so the `max` only guards
/// against a caller-built result.
pub(crate) fn identity(matches: usize, aligned_seq1: &[u8], aligned_seq2: &[u8]) -> f64 {
    debug_assert_eq!(aligned_seq1.len(), aligned_seq2.len());
    let columns = aligned_seq1.len().max(aligned_seq2.len());
    if columns == 0 {
        return 0.0;
    }
    matches as f64 / columns as f64
}
