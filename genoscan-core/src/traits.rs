//! Core trait definitions for genoscan.
//!
//! These traits define the contracts that domain types implement across crates.

/// A single residue that can be placed in an alignment column.
///
/// Implemented for raw bytes and for the typed nucleotide and amino acid
/// enums, so the aligner never needs to know which alphabet it is working on.
pub trait Symbol: Copy + Eq {
    /// The printable ASCII byte for this residue.
    fn to_byte(self) -> u8;

    /// Whether two residues count as a match when scoring.
    fn matches(self, other: Self) -> bool {
        self == other
    }
}

impl Symbol for u8 {
    fn to_byte(self) -> u8 {
        self
    }

    /// Case-insensitive, so `b'a'` matches `b'A'`.
    fn matches(self, other: Self) -> bool {
        self.eq_ignore_ascii_case(&other)
    }
}

/// A biological sequence (DNA, RNA, protein) stored as typed symbols.
pub trait Sequence {
    /// The residue type stored in this sequence.
    type Symbol: Symbol;

    /// The residues, in order.
    fn symbols(&self) -> &[Self::Symbol];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.symbols().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.symbols().is_empty()
    }

    /// Render the residues as ASCII bytes.
    fn to_bytes(&self) -> Vec<u8> {
        self.symbols().iter().map(|s| s.to_byte()).collect()
    }
}

/// A type that carries a numeric score (alignment score, motif score, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
