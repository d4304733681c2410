//! Smith-Waterman local alignment with linear gap penalties.
//!
//! Same recurrence as the global variant with every cell floored at 0. The
//! traceback starts at the first maximal cell in row-major order and stops at
//! the first 0 cell.

use genoscan_core::Symbol;

use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringParams;
use crate::traceback::traceback;
use crate::types::AlignmentResult;

/// Perform local (Smith-Waterman) alignment.
///
/// When no pair of residues scores above 0 (including empty inputs) the
/// result is an empty alignment with score 0.
pub fn smith_waterman<S: Symbol>(seq1: &[S], seq2: &[S], params: &ScoringParams) -> AlignmentResult {
    let (m, n) = (seq1.len(), seq2.len());
    let gap = params.gap_penalty;
    let mut score = ScoreMatrix::new(m + 1, n + 1);

    for i in 1..=m {
        for j in 1..=n {
            let diag = score[(i - 1, j - 1)].saturating_add(params.substitution(seq1[i - 1], seq2[j - 1]));
            let up = score[(i - 1, j)].saturating_add(gap);
            let left = score[(i, j - 1)].saturating_add(gap);
            score[(i, j)] = diag.max(up).max(left).max(0);
        }
    }

    let (end_i, end_j, _) = score.argmax();
    traceback(&score, seq1, seq2, params, (end_i, end_j), true)
}
