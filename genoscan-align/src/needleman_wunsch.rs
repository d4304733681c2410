//! Needleman-Wunsch global alignment with linear gap penalties.
//!
//! `score[i][j]` is the best score for aligning `seq1[..i]` with `seq2[..j]`.
//! The first row and column hold pure-gap prefixes, so the traceback from
//! `(m, n)` always reaches `(0, 0)` and both sequences are consumed in full.

use genoscan_core::Symbol;

use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringParams;
use crate::traceback::traceback;
use crate::types::AlignmentResult;

/// Perform global (Needleman-Wunsch) alignment.
///
/// Empty inputs are allowed: aligning against an empty sequence yields an
/// all-gap alignment.
pub fn needleman_wunsch<S: Symbol>(seq1: &[S], seq2: &[S], params: &ScoringParams) -> AlignmentResult {
    let score = fill(seq1, seq2, params);
    traceback(&score, seq1, seq2, params, (seq1.len(), seq2.len()), false)
}

fn fill<S: Symbol>(seq1: &[S], seq2: &[S], params: &ScoringParams) -> ScoreMatrix {
    let (m, n) = (seq1.len(), seq2.len());
    let gap = params.gap_penalty;
    let mut score = ScoreMatrix::new(m + 1, n + 1);

    for i in 1..=m {
        score[(i, 0)] = params.gap_run(i);
    }
    for j in 1..=n {
        score[(0, j)] = params.gap_run(j);
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = score[(i - 1, j - 1)].saturating_add(params.substitution(seq1[i - 1], seq2[j - 1]));
            let up = score[(i - 1, j)].saturating_add(gap);
            let left = score[(i, j - 1)].saturating_add(gap);
            score[(i, j)] = diag.max(up).max(left);
        }
    }
    score
}
