//! Exact motif search.
//!
//! Motifs are typed sequences, so an impure motif can never reach the
//! matcher: [`find_motif`] parses its text strictly and fails on the first
//! invalid character instead of silently shortening the motif.

use genoscan_core::Result;

use crate::alphabet::Alphabet;
use crate::seq::NucleotideSeq;

/// Knuth-Morris-Pratt exact pattern matching over any symbol type.
///
/// Builds a failure (partial match) table in O(m), then scans in O(n).
/// Returns starting positions of all (possibly overlapping) occurrences.
/// An empty pattern matches nowhere.
pub fn kmp<T: Eq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return vec![];
    }

    let mut fail = vec![0usize; m];
    let mut k = 0usize;
    for i in 1..m {
        while k > 0 && pattern[k] != pattern[i] {
            k = fail[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        fail[i] = k;
    }

    let mut results = Vec::new();
    let mut q = 0usize;
    for (i, symbol) in text.iter().enumerate() {
        while q > 0 && pattern[q] != *symbol {
            q = fail[q - 1];
        }
        if pattern[q] == *symbol {
            q += 1;
        }
        if q == m {
            results.push(i + 1 - m);
            q = fail[q - 1];
        }
    }
    results
}

/// Every index `i` such that `seq[i..i + motif.len()] == motif`.
pub fn find_exact_matches<A: Alphabet>(seq: &NucleotideSeq<A>, motif: &NucleotideSeq<A>) -> Vec<usize> {
    kmp(seq.bases(), motif.bases())
}

/// Parse `motif` strictly, then search for it in `seq`.
///
/// # Errors
///
/// Returns [`genoscan_core::GenoscanError::InvalidCharacter`] if the motif
/// contains a character outside the sequence's alphabet.
pub fn find_motif<A: Alphabet>(seq: &NucleotideSeq<A>, motif: &str) -> Result<Vec<usize>> {
    let motif = NucleotideSeq::<A>::new(motif)?;
    Ok(find_exact_matches(seq, &motif))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DnaSequence, RnaSequence};
    use genoscan_core::GenoscanError;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    #[test]
    fn finds_all_occurrences() {
        assert_eq!(find_exact_matches(&dna("ACGTACGTAC"), &dna("ACG")), vec![0, 4]);
    }

    #[test]
    fn overlapping_occurrences() {
        assert_eq!(find_exact_matches(&dna("AAAA"), &dna("AA")), vec![0, 1, 2]);
        assert_eq!(find_exact_matches(&dna("ATATAT"), &dna("ATA")), vec![0, 2]);
    }

    #[test]
    fn motif_longer_than_sequence() {
        assert!(find_exact_matches(&dna("AC"), &dna("ACG")).is_empty());
    }

    #[test]
    fn empty_motif_matches_nowhere() {
        assert!(find_exact_matches(&dna("ACGT"), &dna("")).is_empty());
    }

    #[test]
    fn whole_sequence_match() {
        assert_eq!(find_exact_matches(&dna("GATTACA"), &dna("GATTACA")), vec![0]);
    }

    #[test]
    fn rna_motifs() {
        let seq = RnaSequence::new("AUGAUGA").unwrap();
        assert_eq!(find_motif(&seq, "uga").unwrap(), vec![1, 4]);
    }

    #[test]
    fn impure_motif_is_rejected() {
        let err = find_motif(&dna("ACGTACGT"), "GTN").unwrap_err();
        assert!(matches!(
            err,
            GenoscanError::InvalidCharacter {
                character: 'N',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn kmp_on_bytes() {
        assert_eq!(kmp(b"abababa", b"aba"), vec![0, 2, 4]);
        assert_eq!(kmp(b"aaaa", b"b"), Vec::<usize>::new());
        assert_eq!(kmp::<u8>(b"", b""), Vec::<usize>::new());
    }
}
