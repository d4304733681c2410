//! Typed biological sequences and genome-scanning routines.
//!
//! - **Alphabets**: [`Base`], [`Dna`], [`Rna`]
//! - **Sequences**: [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`]
//! - **Translation**: pluggable [`CodonTable`]s: [`StandardCodonTable`] and
//!   the fixed-residue [`PlaceholderCodonTable`]
//! - **Genome analysis**: [`find_orfs`], [`codon_usage`], [`find_repeats`]
//! - **Motifs**: [`find_exact_matches`], [`pwm_score`], [`pwm_scan`]
//!
//! # Example
//!
//! ```
//! use genoscan_seq::{DnaSequence, StandardCodonTable, find_orfs};
//!
//! // Strict parsing rejects anything outside ACGT; lenient parsing drops it.
//! assert!(DnaSequence::new("ATG AAA").is_err());
//! let dna = DnaSequence::from_string("atg aaa gct taa");
//! assert_eq!(dna.to_string(), "ATGAAAGCTTAA");
//!
//! assert_eq!(dna.reverse_complement().to_string(), "TTAAGCTTTCAT");
//! assert_eq!(dna.transcribe().to_string(), "AUGAAAGCUUAA");
//! assert_eq!(dna.translate(&StandardCodonTable).to_string(), "MKA");
//!
//! let orfs = find_orfs(&dna, 6);
//! assert_eq!((orfs[0].start, orfs[0].end), (0, 12));
//! ```

pub mod alphabet;
pub mod amino_acid;
pub mod codon;
pub mod motif;
pub mod orf;
pub mod pwm;
pub mod repeats;
pub mod seq;
pub mod types;

pub use alphabet::{Alphabet, Base, Dna, Rna};
pub use amino_acid::AminoAcid;
pub use seq::NucleotideSeq;
pub use types::{DnaSequence, ProteinSequence, RnaSequence};

pub use codon::{codon_usage, Codon, CodonTable, CodonUsage, PlaceholderCodonTable, StandardCodonTable};
pub use motif::{find_exact_matches, find_motif};
pub use orf::{find_orfs, find_orfs_both_strands, Orf, Strand, StrandedOrf};
pub use pwm::{pwm_scan, pwm_score, PositionWeightMatrix};
pub use repeats::{find_repeats, Repeat};
