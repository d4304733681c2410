//! Nucleotide bases and the alphabets that restrict them.
//!
//! [`Base`] is the closed vocabulary shared by DNA and RNA. Each alphabet is a
//! zero-sized marker type implementing [`Alphabet`], which decides which bases
//! may appear and how they pair.

use core::fmt;

use genoscan_core::Symbol;

/// A single nucleotide base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Base {
    A,
    T,
    U,
    G,
    C,
}

impl Base {
    /// Parse a base from an ASCII byte. Case-insensitive.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'T' => Some(Base::T),
            b'U' => Some(Base::U),
            b'G' => Some(Base::G),
            b'C' => Some(Base::C),
            _ => None,
        }
    }

    /// Uppercase ASCII letter for this base.
    pub fn to_byte(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::T => b'T',
            Base::U => b'U',
            Base::G => b'G',
            Base::C => b'C',
        }
    }

    /// DNA complement: A<->T, G<->C. `U` passes through unchanged.
    pub fn complement(self) -> Self {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::G => Base::C,
            Base::C => Base::G,
            Base::U => Base::U,
        }
    }

    /// Whether this base is G or C.
    pub fn is_gc(self) -> bool {
        matches!(self, Base::G | Base::C)
    }
}

impl Symbol for Base {
    fn to_byte(self) -> u8 {
        Base::to_byte(self)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}

/// Trait for nucleotide alphabets.
///
/// Implementors decide which [`Base`] values are legal and how each base
/// pairs with its complement.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// Whether `base` may appear in a sequence over this alphabet.
    fn accepts(base: Base) -> bool;

    /// Watson-Crick partner of `base`.
    fn complement(base: Base) -> Base;
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dna;

impl Alphabet for Dna {
    const NAME: &'static str = "DNA";

    fn accepts(base: Base) -> bool {
        base != Base::U
    }

    fn complement(base: Base) -> Base {
        base.complement()
    }
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rna;

impl Alphabet for Rna {
    const NAME: &'static str = "RNA";

    fn accepts(base: Base) -> bool {
        base != Base::T
    }

    /// A<->U, G<->C. `T` never occurs in RNA and passes through unchanged.
    fn complement(base: Base) -> Base {
        match base {
            Base::A => Base::U,
            Base::U => Base::A,
            Base::G => Base::C,
            Base::C => Base::G,
            Base::T => Base::T,
        }
    }
}
