//! Open Reading Frame (ORF) finder.
//!
//! Every position holding `ATG` is treated as a candidate start, regardless of
//! frame, so overlapping and nested ORFs are all reported. From each start the
//! scan walks forward codon by codon and stops at the first in-frame `TAA`,
//! `TAG` or `TGA`. A start without an in-frame stop before the end of the
//! sequence produces no ORF.

use crate::alphabet::Base;
use crate::codon::Codon;
use crate::types::DnaSequence;

/// A half-open `[start, end)` span covering a start codon through its stop codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orf {
    /// Position of the `A` of `ATG` (0-indexed).
    pub start: usize,
    /// Position just past the stop codon.
    pub end: usize,
}

impl Orf {
    /// Length in nucleotides, stop codon included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty. Never true for a reported ORF.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

impl From<Orf> for (usize, usize) {
    fn from(orf: Orf) -> Self {
        (orf.start, orf.end)
    }
}

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
}

/// An ORF together with the strand it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrandedOrf {
    /// Coordinates on the forward (input) strand.
    pub orf: Orf,
    pub strand: Strand,
}

fn codon_at(bases: &[Base], pos: usize) -> Option<Codon> {
    bases.get(pos..pos + 3).and_then(Codon::from_slice)
}

/// Find every ORF on the forward strand of `seq`.
///
/// ORFs shorter than `min_length` nucleotides (stop codon included) are
/// skipped. Results are ordered by start position.
pub fn find_orfs(seq: &DnaSequence, min_length: usize) -> Vec<Orf> {
    let bases = seq.bases();
    let mut results = Vec::new();

    for start in 0..bases.len().saturating_sub(2) {
        if !codon_at(bases, start).is_some_and(Codon::is_start) {
            continue;
        }

        let mut pos = start + 3;
        while let Some(codon) = codon_at(bases, pos) {
            if codon.is_stop() {
                let end = pos + 3;
                if end - start >= min_length {
                    results.push(Orf { start, end });
                }
                break;
            }
            pos += 3;
        }
    }

    results
}

/// Find ORFs on both strands.
///
/// The reverse complement is scanned with [`find_orfs`] and its coordinates
/// are mapped back onto the input sequence: position `p` on the reverse
/// complement corresponds to `len - p` on the original.
pub fn find_orfs_both_strands(seq: &DnaSequence, min_length: usize) -> Vec<StrandedOrf> {
    let len = seq.bases().len();
    let forward = find_orfs(seq, min_length).into_iter().map(|orf| StrandedOrf {
        orf,
        strand: Strand::Forward,
    });
    let reverse = find_orfs(&seq.reverse_complement(), min_length)
        .into_iter()
        .map(|orf| StrandedOrf {
            orf: Orf {
                start: len - orf.end,
                end: len - orf.start,
            },
            strand: Strand::Reverse,
        });
    forward.chain(reverse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    fn spans(orfs: &[Orf]) -> Vec<(usize, usize)> {
        orfs.iter().map(|&o| o.into()).collect()
    }

    #[test]
    fn single_orf_spans_whole_sequence() {
        let orfs = find_orfs(&dna("ATGAAATAG"), 6);
        assert_eq!(spans(&orfs), vec![(0, 9)]);
        assert_eq!(orfs[0].len(), 9);
    }

    #[test]
    fn min_length_filtering() {
        assert!(find_orfs(&dna("ATGAAATAA"), 10).is_empty());
        assert_eq!(find_orfs(&dna("ATGAAATAA"), 9).len(), 1);
    }

    #[test]
    fn no_stop_no_orf() {
        assert!(find_orfs(&dna("ATGAAACCC"), 0).is_empty());
    }

    #[test]
    fn no_orfs_without_atg() {
        assert!(find_orfs(&dna("CCCGGGTTTAAA"), 0).is_empty());
    }

    #[test]
    fn only_first_stop_is_used() {
        // ATG AAA TAA CCC TAG
        let orfs = find_orfs(&dna("ATGAAATAACCCTAG"), 0);
        assert_eq!(spans(&orfs), vec![(0, 9)]);
    }

    #[test]
    fn nested_starts_share_a_stop() {
        // ATG ATG AAA TGA: starts at 0 and 3 both end at the same TGA.
        let orfs = find_orfs(&dna("ATGATGAAATGA"), 0);
        assert_eq!(spans(&orfs), vec![(0, 12), (3, 12)]);
    }

    #[test]
    fn every_frame_is_scanned() {
        // Frame 1 start at 1: ATG AAA TGA -> (1, 10)
        let orfs = find_orfs(&dna("AATGAAATGAC"), 0);
        assert_eq!(spans(&orfs), vec![(1, 10)]);
    }

    #[test]
    fn overlapping_frames_are_independent() {
        // ATG at 0 (frame 0) and ATG at 4 (frame 1) in "ATGCATGTAAATAG".
        // frame 0: ATG CAT GTA AAT AG -> no stop
        // frame 1 from 4: ATG TAA -> (4, 10)
        let orfs = find_orfs(&dna("ATGCATGTAAATAG"), 0);
        assert_eq!(spans(&orfs), vec![(4, 10)]);
    }

    #[test]
    fn start_then_immediate_stop() {
        let orfs = find_orfs(&dna("ATGTAA"), 0);
        assert_eq!(spans(&orfs), vec![(0, 6)]);
    }

    #[test]
    fn empty_and_short_sequences() {
        assert!(find_orfs(&dna(""), 0).is_empty());
        assert!(find_orfs(&dna("AT"), 0).is_empty());
        assert!(find_orfs(&dna("ATG"), 0).is_empty());
    }

    #[test]
    fn both_strands() {
        // Forward ORF ATG CCC TAA; reverse complement of TTA GGG CAT is ATG CCC TAA.
        let orfs = find_orfs_both_strands(&dna("ATGCCCTAATTAGGGCAT"), 0);
        assert!(orfs.iter().any(|o| o.strand == Strand::Forward));
        assert!(orfs.iter().any(|o| o.strand == Strand::Reverse));
    }

    #[test]
    fn reverse_strand_coordinates() {
        // TTAGGGCAT reverse-complements to ATGCCCTAA, an ORF at 0..9.
        let orfs = find_orfs_both_strands(&dna("TTAGGGCAT"), 0);
        let rev: Vec<_> = orfs.iter().filter(|o| o.strand == Strand::Reverse).collect();
        assert_eq!(rev.len(), 1);
        assert_eq!(rev[0].orf, Orf { start: 0, end: 9 });
    }

    #[test]
    fn reverse_strand_offset_mapping() {
        // CC + TTACAT: reverse complement is ATGTAA + GG, ORF at rc 0..6 -> original 2..8.
        let orfs = find_orfs_both_strands(&dna("CCTTACAT"), 0);
        let rev: Vec<_> = orfs
            .iter()
            .filter(|o| o.strand == Strand::Reverse)
            .map(|o| o.orf)
            .collect();
        assert_eq!(rev, vec![Orf { start: 2, end: 8 }]);
    }
}
