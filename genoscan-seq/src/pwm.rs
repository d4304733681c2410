//! Position weight matrices (PWMs) for motif scoring.
//!
//! A PWM is an ordered list of columns, one per motif position, each mapping
//! a base to a weight. Bases missing from a column weigh 0.0.
//!
//! [`pwm_score`] scores a single window anchored at the start of the
//! sequence. [`pwm_scan`] slides that window across every offset.

use std::collections::HashMap;

use genoscan_core::{GenoscanError, Result};

use crate::alphabet::{Alphabet, Base};
use crate::seq::NucleotideSeq;

/// A position weight matrix over nucleotide bases.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionWeightMatrix {
    columns: Vec<HashMap<Base, f64>>,
}

impl PositionWeightMatrix {
    /// Build a matrix from per-position weight maps.
    pub fn new(columns: Vec<HashMap<Base, f64>>) -> Self {
        Self { columns }
    }

    /// Append a position to the end of the motif.
    pub fn push_column(&mut self, column: HashMap<Base, f64>) {
        self.columns.push(column);
    }

    /// Number of positions in the motif.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the matrix has zero positions.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Weight of `base` at `position`, 0.0 when absent.
    pub fn weight(&self, position: usize, base: Base) -> f64 {
        self.columns
            .get(position)
            .and_then(|col| col.get(&base))
            .copied()
            .unwrap_or(0.0)
    }

    /// Best achievable score (sum of each column's largest weight, floored at 0.0
    /// because an unlisted base scores 0.0).
    pub fn max_score(&self) -> f64 {
        self.columns
            .iter()
            .map(|col| col.values().copied().fold(0.0, f64::max))
            .sum()
    }

    fn score_window(&self, window: &[Base]) -> f64 {
        window
            .iter()
            .enumerate()
            .map(|(pos, &base)| self.weight(pos, base))
            .sum()
    }
}

/// Sum `pwm[i][seq[i]]` for `i` in `0..pwm.len()`.
///
/// Only the window at offset 0 is scored.
///
/// # Errors
///
/// Returns [`GenoscanError::InvalidInput`] if `seq` is shorter than `pwm`.
pub fn pwm_score<A: Alphabet>(seq: &NucleotideSeq<A>, pwm: &PositionWeightMatrix) -> Result<f64> {
    let window = seq.bases().get(..pwm.len()).ok_or_else(|| {
        GenoscanError::InvalidInput(format!(
            "sequence length {} is shorter than PWM length {}",
            seq.bases().len(),
            pwm.len()
        ))
    })?;
    Ok(pwm.score_window(window))
}

/// Score every window of `seq` and return `(offset, score)` for those at or
/// above `threshold`, in offset order.
///
/// An empty matrix or a sequence shorter than the matrix yields no hits.
pub fn pwm_scan<A: Alphabet>(
    seq: &NucleotideSeq<A>,
    pwm: &PositionWeightMatrix,
    threshold: f64,
) -> Vec<(usize, f64)> {
    if pwm.is_empty() {
        return Vec::new();
    }
    seq.bases()
        .windows(pwm.len())
        .enumerate()
        .map(|(offset, window)| (offset, pwm.score_window(window)))
        .filter(|&(_, score)| score >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DnaSequence;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    /// Position 0 favours A, position 1 favours C, position 2 favours G.
    fn acg_pwm() -> PositionWeightMatrix {
        PositionWeightMatrix::new(vec![
            HashMap::from([(Base::A, 2.0), (Base::T, -1.0)]),
            HashMap::from([(Base::C, 1.5)]),
            HashMap::from([(Base::G, 1.0), (Base::A, -0.5)]),
        ])
    }

    #[test]
    fn scores_fixed_window() {
        let score = pwm_score(&dna("ACGTTT"), &acg_pwm()).unwrap();
        assert!((score - 4.5).abs() < 1e-12);
    }

    #[test]
    fn missing_entries_weigh_zero() {
        // T at 0 = -1.0, G at 1 absent = 0.0, A at 2 = -0.5
        let score = pwm_score(&dna("TGA"), &acg_pwm()).unwrap();
        assert!((score + 1.5).abs() < 1e-12);
    }

    #[test]
    fn only_window_zero_is_scored() {
        // The consensus ACG sits at offset 3, but pwm_score never looks there.
        let score = pwm_score(&dna("TTTACG"), &acg_pwm()).unwrap();
        assert!((score + 1.0).abs() < 1e-12);
    }

    #[test]
    fn short_sequence_is_an_error() {
        let err = pwm_score(&dna("AC"), &acg_pwm()).unwrap_err();
        assert!(matches!(err, GenoscanError::InvalidInput(_)));
    }

    #[test]
    fn empty_pwm_scores_zero() {
        let pwm = PositionWeightMatrix::default();
        assert_eq!(pwm_score(&dna("ACGT"), &pwm).unwrap(), 0.0);
        assert!(pwm_scan(&dna("ACGT"), &pwm, 0.0).is_empty());
    }

    #[test]
    fn scan_finds_consensus_offsets() {
        let hits = pwm_scan(&dna("TTACGTTACGTT"), &acg_pwm(), 4.5);
        let offsets: Vec<usize> = hits.iter().map(|&(p, _)| p).collect();
        assert_eq!(offsets, vec![2, 7]);
    }

    #[test]
    fn scan_first_window_agrees_with_score() {
        let seq = dna("ACGACG");
        let hits = pwm_scan(&seq, &acg_pwm(), f64::NEG_INFINITY);
        assert_eq!(hits.len(), 4);
        assert!((hits[0].1 - pwm_score(&seq, &acg_pwm()).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn scan_short_sequence_is_empty() {
        assert!(pwm_scan(&dna("AC"), &acg_pwm(), f64::NEG_INFINITY).is_empty());
    }

    #[test]
    fn weights_and_bounds() {
        let mut pwm = acg_pwm();
        assert_eq!(pwm.len(), 3);
        assert_eq!(pwm.weight(0, Base::A), 2.0);
        assert_eq!(pwm.weight(0, Base::G), 0.0);
        assert_eq!(pwm.weight(9, Base::A), 0.0);
        assert!((pwm.max_score() - 4.5).abs() < 1e-12);
        pwm.push_column(HashMap::from([(Base::T, -2.0)]));
        assert_eq!(pwm.len(), 4);
        assert!((pwm.max_score() - 4.5).abs() < 1e-12);
    }
}
