//! Concrete sequence type aliases and biologically meaningful operations.
//!
//! - [`DnaSequence`]: transcription (plus the generic complement, reverse
//!   complement and GC content from [`NucleotideSeq`])
//! - [`RnaSequence`]: reverse transcription, translation
//! - [`ProteinSequence`]: the product of translation

use std::fmt;

use genoscan_core::{Result, Sequence, Summarizable};

use crate::alphabet::{Base, Dna, Rna};
use crate::amino_acid::AminoAcid;
use crate::codon::{self, CodonTable};
use crate::seq::NucleotideSeq;

/// A DNA sequence over `ACGT`.
pub type DnaSequence = NucleotideSeq<Dna>;

/// An RNA sequence over `ACGU`.
pub type RnaSequence = NucleotideSeq<Rna>;

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        let rna = self
            .bases()
            .iter()
            .map(|&b| if b == Base::T { Base::U } else { b })
            .collect();
        RnaSequence::from_bases(rna)
    }

    /// Transcribe, then translate frame 0 with `table`.
    pub fn translate(&self, table: &dyn CodonTable) -> ProteinSequence {
        self.transcribe().translate(table)
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Reverse-transcribe RNA to DNA (U → T).
    pub fn reverse_transcribe(&self) -> DnaSequence {
        let dna = self
            .bases()
            .iter()
            .map(|&b| if b == Base::U { Base::T } else { b })
            .collect();
        DnaSequence::from_bases(dna)
    }

    /// Translate frame 0 into protein.
    ///
    /// `AUG` always yields Met and `UAA`/`UAG`/`UGA` end translation (the stop
    /// codon is not included). All other codons go through `table`. A trailing
    /// partial codon is discarded.
    pub fn translate(&self, table: &dyn CodonTable) -> ProteinSequence {
        ProteinSequence::from_residues(codon::translate_bases(self.bases(), table))
    }
}

// ---------------------------------------------------------------------------
// Protein
// ---------------------------------------------------------------------------

/// A sequence of standard amino acids.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ProteinSequence {
    residues: Vec<AminoAcid>,
}

impl ProteinSequence {
    /// Parse one-letter codes, rejecting anything outside the 20 standard residues.
    ///
    /// # Errors
    ///
    /// Returns [`genoscan_core::GenoscanError::InvalidCharacter`] for the first
    /// unrecognised code.
    pub fn new(text: impl AsRef<[u8]>) -> Result<Self> {
        let residues = text
            .as_ref()
            .iter()
            .enumerate()
            .map(|(position, &b)| {
                AminoAcid::from_byte(b).ok_or(genoscan_core::GenoscanError::InvalidCharacter {
                    alphabet: "Protein",
                    character: b as char,
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { residues })
    }

    /// Wrap already-typed residues.
    pub fn from_residues(residues: Vec<AminoAcid>) -> Self {
        Self { residues }
    }

    /// The residues, in order.
    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }
}

impl Sequence for ProteinSequence {
    type Symbol = AminoAcid;

    fn symbols(&self) -> &[AminoAcid] {
        &self.residues
    }
}

impl Summarizable for ProteinSequence {
    fn summary(&self) -> String {
        format!("Protein sequence ({} aa): {}", self.residues.len(), self)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.residues {
            write!(f, "{aa}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Protein(\"{self}\")")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProteinSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProteinSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::{PlaceholderCodonTable, StandardCodonTable};

    // --- Complement ---

    #[test]
    fn complement_pointwise() {
        let seq = DnaSequence::new("AACG").unwrap();
        assert_eq!(seq.complement().to_string(), "TTGC");
    }

    #[test]
    fn revcomp_palindromic() {
        let seq = DnaSequence::new("ACGT").unwrap();
        assert_eq!(seq.reverse_complement().to_string(), "ACGT");
    }

    #[test]
    fn revcomp_asymmetric() {
        let seq = DnaSequence::new("AACG").unwrap();
        assert_eq!(seq.reverse_complement().to_string(), "CGTT");
    }

    #[test]
    fn rna_revcomp() {
        let seq = RnaSequence::new("AUGC").unwrap();
        assert_eq!(seq.reverse_complement().to_string(), "GCAU");
    }

    // --- Transcription ---

    #[test]
    fn dna_to_rna() {
        let dna = DnaSequence::new("ATCG").unwrap();
        assert_eq!(dna.transcribe().to_string(), "AUCG");
    }

    #[test]
    fn rna_to_dna() {
        let rna = RnaSequence::new("AUCG").unwrap();
        assert_eq!(rna.reverse_transcribe().to_string(), "ATCG");
    }

    #[test]
    fn transcription_roundtrip() {
        let dna = DnaSequence::new("ATCGATCG").unwrap();
        assert_eq!(dna.transcribe().reverse_transcribe(), dna);
    }

    // --- Translation ---

    #[test]
    fn translate_standard_table() {
        // AUG=M, UUU=F, UAA=stop
        let rna = RnaSequence::new("AUGUUUUAA").unwrap();
        assert_eq!(rna.translate(&StandardCodonTable).to_string(), "MF");
    }

    #[test]
    fn translate_stops_at_first_stop() {
        let rna = RnaSequence::new("AUGUUUUAAGCU").unwrap();
        assert_eq!(rna.translate(&StandardCodonTable).to_string(), "MF");
    }

    #[test]
    fn translate_incomplete_codon_ignored() {
        let rna = RnaSequence::new("AUGUUUAU").unwrap();
        assert_eq!(rna.translate(&StandardCodonTable).to_string(), "MF");
    }

    #[test]
    fn translate_placeholder_table() {
        // AUG keeps Met, everything else collapses to the placeholder residue.
        let rna = RnaSequence::new("AUGUUUGGCUGAAAA").unwrap();
        let protein = rna.translate(&PlaceholderCodonTable::default());
        assert_eq!(
            protein.residues(),
            &[AminoAcid::Met, AminoAcid::Ala, AminoAcid::Ala]
        );
    }

    #[test]
    fn translate_leading_stop_is_empty() {
        let rna = RnaSequence::new("UAGAUG").unwrap();
        assert!(rna.translate(&StandardCodonTable).is_empty());
    }

    #[test]
    fn dna_translate_goes_through_rna() {
        let dna = DnaSequence::new("ATGAAAGCTTAA").unwrap();
        assert_eq!(dna.translate(&StandardCodonTable).to_string(), "MKA");
    }

    // --- GC content ---

    #[test]
    fn gc_content_basic() {
        let seq = DnaSequence::new("ATGC").unwrap();
        assert!((seq.gc_content() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn gc_content_empty() {
        let seq = DnaSequence::new("").unwrap();
        assert_eq!(seq.gc_content(), 0.0);
    }

    // --- Protein ---

    #[test]
    fn protein_parse_and_display() {
        let p = ProteinSequence::new("mkA").unwrap();
        assert_eq!(p.to_string(), "MKA");
        assert_eq!(p.len(), 3);
        assert_eq!(p.summary(), "Protein sequence (3 aa): MKA");
        assert!(ProteinSequence::new("MK*").is_err());
    }
}
