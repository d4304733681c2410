//! Generic nucleotide sequence type.
//!
//! [`NucleotideSeq<A>`] is a newtype over `Vec<Base>` parameterized by an
//! [`Alphabet`] marker type. There are two ways in:
//!
//! - [`NucleotideSeq::new`] is strict and fails on the first character that is
//!   not a base of the alphabet.
//! - [`NucleotideSeq::from_string`] is lenient and silently drops such
//!   characters (whitespace, digits, annotation marks), logging how many were
//!   discarded.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use genoscan_core::{GenoscanError, Result, Sequence, Summarizable};

use crate::alphabet::{Alphabet, Base};

/// A nucleotide sequence parameterized by its alphabet.
///
/// `NucleotideSeq<Dna>` never contains `U`; `NucleotideSeq<Rna>` never
/// contains `T`.
#[derive(Clone)]
pub struct NucleotideSeq<A: Alphabet> {
    bases: Vec<Base>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> NucleotideSeq<A> {
    /// Parse a sequence, rejecting any character outside the alphabet.
    ///
    /// Parsing is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`GenoscanError::InvalidCharacter`] for the first offending
    /// character, with its byte position in `text`.
    pub fn new(text: impl AsRef<[u8]>) -> Result<Self> {
        let text = text.as_ref();
        let mut bases = Vec::with_capacity(text.len());
        for (position, &b) in text.iter().enumerate() {
            match Base::from_byte(b).filter(|&base| A::accepts(base)) {
                Some(base) => bases.push(base),
                None => {
                    return Err(GenoscanError::InvalidCharacter {
                        alphabet: A::NAME,
                        character: b as char,
                        position,
                    })
                }
            }
        }
        Ok(Self::from_bases(bases))
    }

    /// Parse a sequence, dropping every character outside the alphabet.
    ///
    /// Parsing is case-insensitive. Dropped characters are not an error, but
    /// a warning with their count is logged.
    pub fn from_string(text: impl AsRef<[u8]>) -> Self {
        let text = text.as_ref();
        let bases: Vec<Base> = text
            .iter()
            .filter_map(|&b| Base::from_byte(b))
            .filter(|&base| A::accepts(base))
            .collect();
        let dropped = text.len() - bases.len();
        if dropped > 0 {
            log::warn!(
                "dropped {dropped} non-{} character(s) while parsing a {}-byte sequence",
                A::NAME,
                text.len()
            );
        }
        Self::from_bases(bases)
    }

    /// Wrap bases that are already known to belong to the alphabet.
    pub(crate) fn from_bases(bases: Vec<Base>) -> Self {
        debug_assert!(bases.iter().all(|&b| A::accepts(b)));
        Self {
            bases,
            _alphabet: PhantomData,
        }
    }

    /// The bases, in order.
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Consume the sequence and return the inner bases.
    pub fn into_bases(self) -> Vec<Base> {
        self.bases
    }

    /// Pointwise complement using the alphabet's pairing rules.
    pub fn complement(&self) -> Self {
        Self::from_bases(self.bases.iter().map(|&b| A::complement(b)).collect())
    }

    /// Complement, then reverse.
    pub fn reverse_complement(&self) -> Self {
        Self::from_bases(self.bases.iter().rev().map(|&b| A::complement(b)).collect())
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.bases.is_empty() {
            return 0.0;
        }
        let gc = self.bases.iter().filter(|b| b.is_gc()).count();
        gc as f64 / self.bases.len() as f64
    }

    /// Number of occurrences of `base`.
    pub fn count(&self, base: Base) -> usize {
        self.bases.iter().filter(|&&b| b == base).count()
    }
}

impl<A: Alphabet> Deref for NucleotideSeq<A> {
    type Target = [Base];

    fn deref(&self) -> &[Base] {
        &self.bases
    }
}

impl<A: Alphabet> AsRef<[Base]> for NucleotideSeq<A> {
    fn as_ref(&self) -> &[Base] {
        &self.bases
    }
}

impl<A: Alphabet> Sequence for NucleotideSeq<A> {
    type Symbol = Base;

    fn symbols(&self) -> &[Base] {
        &self.bases
    }
}

impl<A: Alphabet> Summarizable for NucleotideSeq<A> {
    fn summary(&self) -> String {
        let preview: String = self.bases.iter().take(20).map(|b| b.to_byte() as char).collect();
        if self.bases.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.bases.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.bases.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for NucleotideSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self)
    }
}

impl<A: Alphabet> fmt::Display for NucleotideSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bases {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

impl<A: Alphabet> PartialEq for NucleotideSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.bases == other.bases
    }
}

impl<A: Alphabet> Eq for NucleotideSeq<A> {}

impl<A: Alphabet> std::hash::Hash for NucleotideSeq<A> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bases.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for NucleotideSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for NucleotideSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Dna, Rna};

    type DnaSeq = NucleotideSeq<Dna>;
    type RnaSeq = NucleotideSeq<Rna>;

    #[test]
    fn strict_parse_is_case_insensitive() {
        let seq = DnaSeq::new("acGt").unwrap();
        assert_eq!(seq.bases(), &[Base::A, Base::C, Base::G, Base::T]);
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn strict_parse_reports_position() {
        let err = DnaSeq::new("ACGNT").unwrap_err();
        assert_eq!(
            err,
            GenoscanError::InvalidCharacter {
                alphabet: "DNA",
                character: 'N',
                position: 3,
            }
        );
    }

    #[test]
    fn strict_dna_rejects_u() {
        assert!(DnaSeq::new("ACGU").is_err());
        assert!(RnaSeq::new("ACGT").is_err());
    }

    #[test]
    fn lenient_parse_drops_unknown_characters() {
        let seq = DnaSeq::from_string("ac gt\nNN-12t");
        assert_eq!(seq.to_string(), "ACGTT");
    }

    #[test]
    fn lenient_dna_drops_u() {
        let seq = DnaSeq::from_string("GCATGCU");
        assert_eq!(seq.to_string(), "GCATGC");
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = DnaSeq::new("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.gc_content(), 0.0);
    }

    #[test]
    fn deref_to_slice() {
        let seq = DnaSeq::new("ACGT").unwrap();
        assert_eq!(seq[0], Base::A);
        assert_eq!(&seq[1..3], &[Base::C, Base::G]);
    }

    #[test]
    fn count_bases() {
        let seq = DnaSeq::new("AACGTA").unwrap();
        assert_eq!(seq.count(Base::A), 3);
        assert_eq!(seq.count(Base::U), 0);
    }

    #[test]
    fn summary_truncates_long_sequences() {
        let seq = DnaSeq::new("ACGT".repeat(10)).unwrap();
        assert_eq!(
            seq.summary(),
            "DNA sequence (40 bp): ACGTACGTACGTACGTACGT..."
        );
        let short = RnaSeq::new("ACGU").unwrap();
        assert_eq!(short.summary(), "RNA sequence (4 bp): ACGU");
    }

    #[test]
    fn debug_format() {
        let seq = DnaSeq::new("ACGT").unwrap();
        assert_eq!(format!("{seq:?}"), "DNA(\"ACGT\")");
    }
}
