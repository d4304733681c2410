//! Direct repeat detection.
//!
//! For every pair of start positions `i < j` with `j >= i + min_repeat_length`,
//! the repeat length is the longest common extension of the suffixes at `i`
//! and `j` (how far `seq[i + k] == seq[j + k]` holds). Pairs whose extension
//! reaches `min_repeat_length` are reported. The extension may run past `j`,
//! so periodic sequences report overlapping copies.
//!
//! Extensions are computed one diagonal `d = j - i` at a time: walking the
//! diagonal right to left, the extension at `i` is one more than the extension
//! at `i + 1` when the bases agree, zero otherwise. That gives every pair in
//! O(n²) total time and O(1) extra space.

use crate::alphabet::{Alphabet, Base};
use crate::seq::NucleotideSeq;

/// A pair of matching substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repeat {
    /// Start of the first copy.
    pub first: usize,
    /// Start of the second copy.
    pub second: usize,
    /// Number of matching bases from each start.
    pub length: usize,
}

impl From<Repeat> for (usize, usize, usize) {
    fn from(r: Repeat) -> Self {
        (r.first, r.second, r.length)
    }
}

/// Find all direct repeats of at least `min_repeat_length` bases.
///
/// Results are sorted by `(first, second)`.
pub fn find_repeats<A: Alphabet>(seq: &NucleotideSeq<A>, min_repeat_length: usize) -> Vec<Repeat> {
    let repeats = repeats_in(seq.bases(), min_repeat_length);
    log::trace!(
        "found {} repeat pair(s) of length >= {min_repeat_length} in {} bases",
        repeats.len(),
        seq.bases().len()
    );
    repeats
}

fn repeats_in(bases: &[Base], min_len: usize) -> Vec<Repeat> {
    let n = bases.len();
    let mut repeats = Vec::new();

    for shift in min_len.max(1)..n {
        let mut extension = 0;
        for first in (0..n - shift).rev() {
            if bases[first] == bases[first + shift] {
                extension += 1;
            } else {
                extension = 0;
            }
            if extension >= min_len {
                repeats.push(Repeat {
                    first,
                    second: first + shift,
                    length: extension,
                });
            }
        }
    }

    repeats.sort_unstable();
    repeats
}

/// Pair-scan-and-extend oracle, O(n³) worst case.
#[cfg(test)]
fn naive_repeats(bases: &[Base], min_len: usize) -> Vec<Repeat> {
    let n = bases.len();
    let mut out = Vec::new();
    for i in 0..n {
        for j in (i + min_len.max(1))..n {
            let mut length = 0;
            while j + length < n && bases[i + length] == bases[j + length] {
                length += 1;
            }
            if length >= min_len {
                out.push(Repeat {
                    first: i,
                    second: j,
                    length,
                });
            }
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::types::DnaSequence;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn diagonal_scan_matches_pair_scan(
            text in proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 0..40),
            min_len in 0usize..6,
        ) {
            let text: String = text.into_iter().collect();
            let seq = DnaSequence::new(&text).unwrap();
            prop_assert_eq!(find_repeats(&seq, min_len), naive_repeats(seq.bases(), min_len));
        }
    }
}
