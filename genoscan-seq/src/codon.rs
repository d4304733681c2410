//! Codons, pluggable codon tables, and codon usage counting.
//!
//! Translation fixes two rules independently of any table: `AUG`/`ATG` is
//! Met, and `UAA`, `UAG`, `UGA` (or their DNA spellings) terminate. Every
//! other codon is resolved through a [`CodonTable`]:
//!
//! - [`PlaceholderCodonTable`] maps every remaining codon to one fixed
//!   residue. Its proteins are not biologically meaningful; it pins the
//!   start/stop behaviour of translation independently of the genetic code.
//! - [`StandardCodonTable`] is the standard genetic code (NCBI Table 1).

use std::collections::BTreeMap;
use std::fmt;

use crate::alphabet::{Alphabet, Base};
use crate::amino_acid::AminoAcid;
use crate::seq::NucleotideSeq;

/// A triplet of bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Codon(pub [Base; 3]);

impl Codon {
    /// Build a codon from a slice of exactly three bases.
    pub fn from_slice(bases: &[Base]) -> Option<Self> {
        match *bases {
            [a, b, c] => Some(Codon([a, b, c])),
            _ => None,
        }
    }

    /// The same codon with every `U` spelled as `T`.
    pub fn to_dna(self) -> Codon {
        Codon(self.0.map(|b| if b == Base::U { Base::T } else { b }))
    }

    /// Whether this is the start codon `ATG`/`AUG`.
    pub fn is_start(self) -> bool {
        self.to_dna().0 == [Base::A, Base::T, Base::G]
    }

    /// Whether this is one of the stop codons `TAA`, `TAG`, `TGA` (or `U` spellings).
    pub fn is_stop(self) -> bool {
        matches!(
            self.to_dna().0,
            [Base::T, Base::A, Base::A] | [Base::T, Base::A, Base::G] | [Base::T, Base::G, Base::A]
        )
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

// ---------------------------------------------------------------------------
// Codon tables
// ---------------------------------------------------------------------------

/// A codon → amino acid mapping consulted for non-start, non-stop codons.
pub trait CodonTable {
    /// Amino acid encoded by `codon`, or `None` if this table treats the
    /// codon as a terminator.
    fn amino_acid(&self, codon: Codon) -> Option<AminoAcid>;
}

/// Maps every codon to the same residue.
///
/// The output is not biologically meaningful; use [`StandardCodonTable`] for
/// real proteins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderCodonTable {
    pub residue: AminoAcid,
}

impl Default for PlaceholderCodonTable {
    fn default() -> Self {
        Self {
            residue: AminoAcid::Ala,
        }
    }
}

impl CodonTable for PlaceholderCodonTable {
    fn amino_acid(&self, _codon: Codon) -> Option<AminoAcid> {
        Some(self.residue)
    }
}

/// The standard genetic code (NCBI Table 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCodonTable;

impl CodonTable for StandardCodonTable {
    fn amino_acid(&self, codon: Codon) -> Option<AminoAcid> {
        STANDARD_CODE[codon_index(codon)]
    }
}

/// Base encoding for table lookups: A=0, C=1, G=2, T/U=3.
fn base_index(b: Base) -> usize {
    match b {
        Base::A => 0,
        Base::C => 1,
        Base::G => 2,
        Base::T | Base::U => 3,
    }
}

fn codon_index(codon: Codon) -> usize {
    let [a, b, c] = codon.0;
    base_index(a) * 16 + base_index(b) * 4 + base_index(c)
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
const STANDARD_CODE: [Option<AminoAcid>; 64] = {
    use AminoAcid::*;
    [
        Some(Lys), Some(Asn), Some(Lys), Some(Asn),
        Some(Thr), Some(Thr), Some(Thr), Some(Thr),
        Some(Arg), Some(Ser), Some(Arg), Some(Ser),
        Some(Ile), Some(Ile), Some(Met), Some(Ile),
        Some(Gln), Some(His), Some(Gln), Some(His),
        Some(Pro), Some(Pro), Some(Pro), Some(Pro),
        Some(Arg), Some(Arg), Some(Arg), Some(Arg),
        Some(Leu), Some(Leu), Some(Leu), Some(Leu),
        Some(Glu), Some(Asp), Some(Glu), Some(Asp),
        Some(Ala), Some(Ala), Some(Ala), Some(Ala),
        Some(Gly), Some(Gly), Some(Gly), Some(Gly),
        Some(Val), Some(Val), Some(Val), Some(Val),
        None, Some(Tyr), None, Some(Tyr),
        Some(Ser), Some(Ser), Some(Ser), Some(Ser),
        None, Some(Cys), Some(Trp), Some(Cys),
        Some(Leu), Some(Phe), Some(Leu), Some(Phe),
    ]
};

/// Translate frame 0 of `bases` until the first stop codon.
///
/// The stop codon is excluded and a trailing partial codon is ignored.
pub(crate) fn translate_bases(bases: &[Base], table: &dyn CodonTable) -> Vec<AminoAcid> {
    let mut protein = Vec::with_capacity(bases.len() / 3);
    for triplet in bases.chunks_exact(3) {
        let codon = Codon([triplet[0], triplet[1], triplet[2]]);
        if codon.is_stop() {
            break;
        }
        if codon.is_start() {
            protein.push(AminoAcid::Met);
            continue;
        }
        match table.amino_acid(codon) {
            Some(aa) => protein.push(aa),
            None => break,
        }
    }
    protein
}

// ---------------------------------------------------------------------------
// Codon usage
// ---------------------------------------------------------------------------

/// Codon usage frequency table for frame 0 of a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodonUsage {
    counts: BTreeMap<Codon, usize>,
    total: usize,
}

impl CodonUsage {
    /// Raw count for a codon.
    pub fn count(&self, codon: Codon) -> usize {
        self.counts.get(&codon).copied().unwrap_or(0)
    }

    /// Total number of codons counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Relative frequency of a codon (count / total codons).
    ///
    /// Returns 0.0 if no codons were counted.
    pub fn frequency(&self, codon: Codon) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(codon) as f64 / self.total as f64
    }

    /// Observed codons and their counts, in codon order.
    pub fn iter(&self) -> impl Iterator<Item = (Codon, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Number of distinct codons observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The underlying codon → count map.
    pub fn as_map(&self) -> &BTreeMap<Codon, usize> {
        &self.counts
    }

    /// Merge another usage table into this one.
    pub fn merge(&mut self, other: &CodonUsage) {
        for (&codon, &n) in &other.counts {
            *self.counts.entry(codon).or_insert(0) += n;
        }
        self.total += other.total;
    }
}

/// Count codons in frame 0 of `seq`, ignoring a trailing partial codon.
pub fn codon_usage<A: Alphabet>(seq: &NucleotideSeq<A>) -> CodonUsage {
    let mut usage = CodonUsage::default();
    for triplet in seq.bases().chunks_exact(3) {
        let codon = Codon([triplet[0], triplet[1], triplet[2]]);
        *usage.counts.entry(codon).or_insert(0) += 1;
        usage.total += 1;
    }
    usage
}
