//! Shared traceback for the linear-gap DP matrices.
//!
//! From a given end cell the walk prefers, in order: the diagonal move if it
//! reproduces the cell's score, then the up move (gap in `seq2`), then the
//! left move (gap in `seq1`). Once an index reaches 0 the remaining moves
//! are forced gaps. Local walks also stop on a 0 cell or at either boundary.

use genoscan_core::Symbol;

use crate::matrix::ScoreMatrix;
use crate::scoring::ScoringParams;
use crate::types::{identity, push_cigar, AlignmentResult, CigarOp};

pub(crate) const GAP: u8 = b'-';

pub(crate) fn traceback<S: Symbol>(
    score: &ScoreMatrix,
    seq1: &[S],
    seq2: &[S],
    params: &ScoringParams,
    (end_i, end_j): (usize, usize),
    local: bool,
) -> AlignmentResult {
    let mut aligned_seq1 = Vec::with_capacity(end_i + end_j);
    let mut aligned_seq2 = Vec::with_capacity(end_i + end_j);
    let mut cigar = Vec::new();
    let mut matches = 0;

    let (mut i, mut j) = (end_i, end_j);
    while i > 0 || j > 0 {
        if local && (i == 0 || j == 0 || score[(i, j)] == 0) {
            break;
        }
        let current = score[(i, j)];

        if i > 0
            && j > 0
            && current == score[(i - 1, j - 1)].saturating_add(params.substitution(seq1[i - 1], seq2[j - 1]))
        {
            let (a, b) = (seq1[i - 1], seq2[j - 1]);
            aligned_seq1.push(a.to_byte());
            aligned_seq2.push(b.to_byte());
            if a.matches(b) {
                matches += 1;
                push_cigar(&mut cigar, CigarOp::Match(1));
            } else {
                push_cigar(&mut cigar, CigarOp::Mismatch(1));
            }
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || current == score[(i - 1, j)].saturating_add(params.gap_penalty)) {
            aligned_seq1.push(seq1[i - 1].to_byte());
            aligned_seq2.push(GAP);
            push_cigar(&mut cigar, CigarOp::Deletion(1));
            i -= 1;
        } else {
            aligned_seq1.push(GAP);
            aligned_seq2.push(seq2[j - 1].to_byte());
            push_cigar(&mut cigar, CigarOp::Insertion(1));
            j -= 1;
        }
    }

    aligned_seq1.reverse();
    aligned_seq2.reverse();
    cigar.reverse();

    AlignmentResult {
        score: score[(end_i, end_j)],
        identity: identity(matches, &aligned_seq1, &aligned_seq2),
        aligned_seq1,
        aligned_seq2,
        seq1_start: i,
        seq1_end: end_i,
        seq2_start: j,
        seq2_end: end_j,
        cigar,
    }
}
