//! Pairwise sequence alignment for genoscan.
//!
//! Needleman-Wunsch (global) and Smith-Waterman (local) with linear gap
//! penalties and a fixed traceback priority (diagonal, then gap in `seq2`,
//! then gap in `seq1`), so equal inputs always produce identical alignments.
//!
//! Any slice of [`Symbol`](genoscan_core::Symbol)s can be aligned: raw bytes,
//! or the typed bases and residues from `genoscan-seq`.
//!
//! # Quick start
//!
//! ```
//! use genoscan_align::{Aligner, ScoringParams};
//!
//! let aligner = Aligner::new(ScoringParams::default());
//! let result = aligner.global_align(b"GATTACA", b"GCATGC");
//! assert_eq!(result.score, -2);
//! assert_eq!(result.aligned_seq1, b"GATTACA");
//! assert_eq!(result.aligned_seq2, b"GCATGC-");
//! ```

pub mod batch;
pub mod matrix;
pub mod needleman_wunsch;
pub mod scoring;
pub mod smith_waterman;
mod traceback;
pub mod types;

pub use batch::{align, align_batch};
pub use matrix::ScoreMatrix;
pub use needleman_wunsch::needleman_wunsch;
pub use scoring::ScoringParams;
pub use smith_waterman::smith_waterman;
pub use types::{AlignmentMode, AlignmentResult, CigarOp};

use genoscan_core::Symbol;

/// A pairwise aligner bound to one set of scoring parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aligner {
    params: ScoringParams,
}

impl Aligner {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// End-to-end alignment of `seq1` against `seq2`.
    pub fn global_align<S: Symbol>(&self, seq1: &[S], seq2: &[S]) -> AlignmentResult {
        needleman_wunsch(seq1, seq2, &self.params)
    }

    /// Best-scoring local alignment of `seq1` against `seq2`.
    pub fn local_align<S: Symbol>(&self, seq1: &[S], seq2: &[S]) -> AlignmentResult {
        smith_waterman(seq1, seq2, &self.params)
    }

    /// Dispatch on `mode`.
    pub fn align<S: Symbol>(&self, mode: AlignmentMode, seq1: &[S], seq2: &[S]) -> AlignmentResult {
        align(seq1, seq2, mode, &self.params)
    }

    /// Align independent pairs, in parallel when the `parallel` feature is on.
    pub fn align_batch<S: Symbol + Sync>(&self, pairs: &[(&[S], &[S])], mode: AlignmentMode) -> Vec<AlignmentResult> {
        align_batch(pairs, mode, &self.params)
    }
}
