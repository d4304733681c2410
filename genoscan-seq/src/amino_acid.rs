//! The twenty standard amino acids.

use core::fmt;

use genoscan_core::Symbol;

/// One of the 20 standard amino acid residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    /// All residues, in the declaration order above.
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Ala,
        AminoAcid::Arg,
        AminoAcid::Asn,
        AminoAcid::Asp,
        AminoAcid::Cys,
        AminoAcid::Gln,
        AminoAcid::Glu,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Leu,
        AminoAcid::Lys,
        AminoAcid::Met,
        AminoAcid::Phe,
        AminoAcid::Pro,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Trp,
        AminoAcid::Tyr,
        AminoAcid::Val,
    ];

    /// One-letter IUPAC code.
    pub fn to_byte(self) -> u8 {
        match self {
            AminoAcid::Ala => b'A',
            AminoAcid::Arg => b'R',
            AminoAcid::Asn => b'N',
            AminoAcid::Asp => b'D',
            AminoAcid::Cys => b'C',
            AminoAcid::Gln => b'Q',
            AminoAcid::Glu => b'E',
            AminoAcid::Gly => b'G',
            AminoAcid::His => b'H',
            AminoAcid::Ile => b'I',
            AminoAcid::Leu => b'L',
            AminoAcid::Lys => b'K',
            AminoAcid::Met => b'M',
            AminoAcid::Phe => b'F',
            AminoAcid::Pro => b'P',
            AminoAcid::Ser => b'S',
            AminoAcid::Thr => b'T',
            AminoAcid::Trp => b'W',
            AminoAcid::Tyr => b'Y',
            AminoAcid::Val => b'V',
        }
    }

    /// Parse a one-letter code. Case-insensitive.
    ///
    /// Returns `None` for ambiguity codes (`B`, `Z`, `X`), the stop marker
    /// `*`, and anything else outside the 20 standard residues.
    pub fn from_byte(b: u8) -> Option<Self> {
        let upper = b.to_ascii_uppercase();
        Self::ALL.into_iter().find(|aa| aa.to_byte() == upper)
    }

    /// Three-letter code, e.g. `"Met"`.
    pub fn three_letter(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala",
            AminoAcid::Arg => "Arg",
            AminoAcid::Asn => "Asn",
            AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys",
            AminoAcid::Gln => "Gln",
            AminoAcid::Glu => "Glu",
            AminoAcid::Gly => "Gly",
            AminoAcid::His => "His",
            AminoAcid::Ile => "Ile",
            AminoAcid::Leu => "Leu",
            AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met",
            AminoAcid::Phe => "Phe",
            AminoAcid::Pro => "Pro",
            AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr",
            AminoAcid::Trp => "Trp",
            AminoAcid::Tyr => "Tyr",
            AminoAcid::Val => "Val",
        }
    }
}

impl Symbol for AminoAcid {
    fn to_byte(self) -> u8 {
        AminoAcid::to_byte(self)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}
