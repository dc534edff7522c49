//! Bet sizing from the true count.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::BetRampError;
use crate::math;

/// Lower edge of a ramp step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RampBound {
    /// Applies when the true count is strictly above the value.
    Above(f64),
    /// Applies when the true count is at or above the value.
    AtLeast(f64),
}

impl RampBound {
    const fn value(self) -> f64 {
        match self {
            Self::Above(value) | Self::AtLeast(value) => value,
        }
    }

    fn admits(self, true_count: f64) -> bool {
        match self {
            Self::Above(value) => true_count > value,
            Self::AtLeast(value) => true_count >= value,
        }
    }
}

/// A monotone staircase from true count to betting units.
///
/// This is bankroll policy rather than anything card counting dictates, so
/// callers may supply their own steps.
#[derive(Debug, Clone, PartialEq)]
pub struct BetRamp {
    base_units: u32,
    steps: Vec<(RampBound, u32)>,
}

impl Default for BetRamp {
    /// 1 unit up to +2, 2 units below +3, 4 below +4 and 8 from +4 on.
    fn default() -> Self {
        Self {
            base_units: 1,
            steps: alloc::vec![
                (RampBound::Above(2.0), 2),
                (RampBound::AtLeast(3.0), 4),
                (RampBound::AtLeast(4.0), 8),
                (RampBound::AtLeast(5.0), 8),
            ],
        }
    }
}

impl BetRamp {
    /// Builds a ramp that bets `base_units` until the first step applies.
    ///
    /// # Errors
    ///
    /// Returns [`BetRampError::Unordered`] if step bounds do not increase and
    /// [`BetRampError::Decreasing`] if a step bets fewer units than the one
    /// before it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{BetRamp, RampBound};
    ///
    /// let ramp = BetRamp::new(1, vec![(RampBound::AtLeast(1.0), 2), (RampBound::AtLeast(2.0), 6)]).unwrap();
    /// assert_eq!(ramp.units(0.5), 1);
    /// assert_eq!(ramp.units(2.0), 6);
    /// ```
    pub fn new(base_units: u32, steps: Vec<(RampBound, u32)>) -> Result<Self, BetRampError> {
        let mut floor_units = base_units;
        let mut last_bound: Option<f64> = None;

        for &(bound, units) in &steps {
            if last_bound.is_some_and(|last| bound.value() <= last) {
                return Err(BetRampError::Unordered);
            }
            if units < floor_units {
                return Err(BetRampError::Decreasing);
            }
            last_bound = Some(bound.value());
            floor_units = units;
        }

        Ok(Self { base_units, steps })
    }

    /// Units to bet at `true_count`.
    #[must_use]
    pub fn units(&self, true_count: f64) -> u32 {
        self.steps
            .iter()
            .rev()
            .find(|(bound, _)| bound.admits(true_count))
            .map_or(self.base_units, |&(_, units)| units)
    }

    /// Units bet before any step applies.
    #[must_use]
    pub const fn base_units(&self) -> u32 {
        self.base_units
    }

    /// The ramp's steps, lowest first.
    #[must_use]
    pub fn steps(&self) -> &[(RampBound, u32)] {
        &self.steps
    }
}

/// Betting units at `true_count` on the default ramp.
///
/// # Example
///
/// ```
/// use bjcount::betting_units;
///
/// assert_eq!(betting_units(1.5), 1);
/// assert_eq!(betting_units(2.5), 2);
/// assert_eq!(betting_units(3.5), 4);
/// assert_eq!(betting_units(6.0), 8);
/// ```
#[must_use]
pub fn betting_units(true_count: f64) -> u32 {
    BetRamp::default().units(true_count)
}

/// Wager at `true_count`: the minimum bet at +1 or below, otherwise the
/// floored true count times the minimum, kept between `min_bet` and
/// `max_bet`.
///
/// # Example
///
/// ```
/// use bjcount::optimal_bet;
///
/// assert_eq!(optimal_bet(0.5, 15, 150), 15);
/// assert_eq!(optimal_bet(3.0, 15, 150), 45);
/// assert_eq!(optimal_bet(20.0, 15, 150), 150);
/// ```
#[must_use]
pub fn optimal_bet(true_count: f64, min_bet: u32, max_bet: u32) -> u32 {
    if true_count.is_nan() || true_count <= 1.0 {
        return min_bet;
    }

    let multiple = math::floor(true_count) as u32;
    multiple.saturating_mul(min_bet).min(max_bet).max(min_bet)
}
