use crate::betting;
use crate::card::{Rank, UpCard};
use crate::counting;
use crate::error::AdviceError;
use crate::hand;
use crate::strategy::{self, Recommendation};

use super::Session;

impl Session {
    /// Recommended play for `player` against `dealer_up` at the current
    /// true count.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::UnknownUpCard`] if `dealer_up` is face down.
    pub fn recommend(&self, player: &[Rank], dealer_up: Rank) -> Result<Recommendation, AdviceError> {
        strategy::resolve(player, dealer_up, self.true_count(), &self.deviations)
    }

    /// Returns whether to take insurance against `dealer_up`.
    ///
    /// Only an ace can be insured against.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::UnknownUpCard`] if `dealer_up` is face down.
    pub fn take_insurance(&self, dealer_up: Rank) -> Result<bool, AdviceError> {
        let up = UpCard::from_rank(dealer_up).ok_or(AdviceError::UnknownUpCard)?;
        Ok(self.deviations.take_insurance(up, self.true_count()))
    }

    /// Returns whether the dealer must draw to `dealer_cards` under the
    /// session's soft 17 rule.
    #[must_use]
    pub fn dealer_must_hit(&self, dealer_cards: &[Rank]) -> bool {
        hand::dealer_must_hit(dealer_cards, self.options.stand_on_soft_17)
    }

    /// Betting units on the session's ramp.
    #[must_use]
    pub fn betting_units(&self) -> u32 {
        self.options.bet_ramp.units(self.true_count())
    }

    /// Wager between the table limits for the current true count.
    #[must_use]
    pub fn optimal_bet(&self) -> u32 {
        betting::optimal_bet(self.true_count(), self.options.min_bet, self.options.max_bet)
    }

    /// Betting units times the bet unit, capped by `bankroll`.
    #[must_use]
    pub fn suggested_wager(&self, bankroll: u32) -> u32 {
        self.betting_units()
            .saturating_mul(self.options.bet_unit)
            .min(bankroll)
    }

    /// Estimated player advantage in percent.
    #[must_use]
    pub fn player_edge(&self) -> f64 {
        counting::player_edge(self.true_count())
    }
}
