//! Batch pairwise alignment over multiple sequence pairs.
//!
//! Pairs are independent and each call allocates its own matrix, so with the
//! `parallel` feature they are spread over the rayon thread pool. Results
//! always come back in input order.

use genoscan_core::Symbol;

use crate::needleman_wunsch::needleman_wunsch;
use crate::scoring::ScoringParams;
use crate::smith_waterman::smith_waterman;
use crate::types::{AlignmentMode, AlignmentResult};

/// Align one pair with the algorithm selected by `mode`.
pub fn align<S: Symbol>(
    seq1: &[S],
    seq2: &[S],
    mode: AlignmentMode,
    params: &ScoringParams,
) -> AlignmentResult {
    match mode {
        AlignmentMode::Global => needleman_wunsch(seq1, seq2, params),
        AlignmentMode::Local => smith_waterman(seq1, seq2, params),
    }
}

/// Align a batch of sequence pairs using the specified mode.
///
/// The output has one result per input pair, in the same order.
pub fn align_batch<S: Symbol + Sync>(
    pairs: &[(&[S], &[S])],
    mode: AlignmentMode,
    params: &ScoringParams,
) -> Vec<AlignmentResult> {
    log::debug!("aligning batch of {} pair(s) in {mode:?} mode", pairs.len());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(seq1, seq2)| align(*seq1, *seq2, mode, params))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    pairs
        .iter()
        .map(|(seq1, seq2)| align(*seq1, *seq2, mode, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_multiple_pairs() {
        let pairs: Vec<(&[u8], &[u8])> = vec![
            (b"ACGT", b"ACGT"),
            (b"AAAA", b"TTTT"),
            (b"GATTACA", b"GCATGC"),
        ];
        let results = align_batch(&pairs, AlignmentMode::Global, &ScoringParams::default());
        let scores: Vec<i32> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![4, -4, -2]);
    }

    #[test]
    fn batch_local_mode() {
        let pairs: Vec<(&[u8], &[u8])> = vec![(b"TTTACGTTT", b"GGACGTGG"), (b"AAAA", b"TTTT")];
        let results = align_batch(&pairs, AlignmentMode::Local, &ScoringParams::default());
        assert_eq!(results[0].score, 4);
        assert_eq!(results[1].score, 0);
    }

    #[test]
    fn batch_matches_single_calls_in_order() {
        let seqs: Vec<Vec<u8>> = (0..32)
            .map(|k| (0..k + 1).map(|x| b"ACGT"[(x * 7 + k) % 4]).collect())
            .collect();
        let pairs: Vec<(&[u8], &[u8])> = seqs
            .windows(2)
            .map(|w| (w[0].as_slice(), w[1].as_slice()))
            .collect();
        let params = ScoringParams::default();
        let batch = align_batch(&pairs, AlignmentMode::Global, &params);
        for (pair, result) in pairs.iter().zip(&batch) {
            assert_eq!(*result, needleman_wunsch(pair.0, pair.1, &params));
        }
    }

    #[test]
    fn empty_batch() {
        let pairs: Vec<(&[u8], &[u8])> = vec![];
        assert!(align_batch(&pairs, AlignmentMode::Global, &ScoringParams::default()).is_empty());
    }
}
