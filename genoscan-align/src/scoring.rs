//! Linear-gap scoring parameters.
//!
//! Gap opening and extension cost the same: a gap of length `k` costs
//! `k * gap_penalty`.
//!
//! Cell arithmetic saturates at the `i32` bounds, so unchecked parameters
//! cannot overflow on long inputs.

use genoscan_core::{GenoscanError, Result, Symbol};

/// Largest absolute value [`ScoringParams::new`] accepts for any score.
pub const MAX_SCORE_MAGNITUDE: i32 = 1 << 16;

/// Match/mismatch/gap scores used for every cell of the DP matrix.
///
/// Fields are public so experiments can bypass validation; [`ScoringParams::new`]
/// is the checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringParams {
    pub match_score: i32,
    pub mismatch_penalty: i32,
    pub gap_penalty: i32,
}

impl ScoringParams {
    /// Create validated scoring parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `match_score` is not positive, `mismatch_penalty`
    /// is positive, `gap_penalty` is not negative, or any value exceeds
    /// [`MAX_SCORE_MAGNITUDE`] in absolute value.
    pub fn new(match_score: i32, mismatch_penalty: i32, gap_penalty: i32) -> Result<Self> {
        for (name, value) in [
            ("match_score", match_score),
            ("mismatch_penalty", mismatch_penalty),
            ("gap_penalty", gap_penalty),
        ] {
            if value.unsigned_abs() > MAX_SCORE_MAGNITUDE.unsigned_abs() {
                return Err(GenoscanError::InvalidInput(format!(
                    "{name} magnitude must not exceed {MAX_SCORE_MAGNITUDE}, got {value}"
                )));
            }
        }
        if match_score <= 0 {
            return Err(GenoscanError::InvalidInput(
                "match_score must be positive".into(),
            ));
        }
        if mismatch_penalty > 0 {
            return Err(GenoscanError::InvalidInput(
                "mismatch_penalty must not be positive".into(),
            ));
        }
        if gap_penalty >= 0 {
            return Err(GenoscanError::InvalidInput(
                "gap_penalty must be negative".into(),
            ));
        }
        Ok(Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
        })
    }

    /// Score for placing `a` and `b` in the same column.
    #[inline]
    pub fn substitution<S: Symbol>(&self, a: S, b: S) -> i32 {
        if a.matches(b) {
            self.match_score
        } else {
            self.mismatch_penalty
        }
    }

    /// Cost of a gap run of `len` columns, saturating at `i32::MIN`.
    #[inline]
    pub(crate) fn gap_run(&self, len: usize) -> i32 {
        i32::try_from(len)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.gap_penalty)
    }
}

impl Default for ScoringParams {
    /// `+1` match, `-1` mismatch, `-2` gap.
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_penalty: -1,
            gap_penalty: -2,
        }
    }
}
