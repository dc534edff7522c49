//! Trainer configuration options.

use crate::betting::BetRamp;
use crate::counting::CountingSystem;
use crate::error::OptionsError;

/// Configuration for a counting session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::{CountingSystem, TrainerOptions};
///
/// let options = TrainerOptions::default()
///     .with_decks(8)
///     .with_system(CountingSystem::OmegaII)
///     .with_bet_limits(25, 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Counting system in use at the start of the session.
    pub system: CountingSystem,
    /// Starting bankroll.
    pub bankroll: u32,
    /// Size of one betting unit.
    pub bet_unit: u32,
    /// Table minimum.
    pub min_bet: u32,
    /// Table maximum.
    pub max_bet: u32,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Fraction of the shoe dealt before a reshuffle is due.
    /// 0 to disable reshuffling.
    pub penetration: f64,
    /// Units to bet at each true count.
    pub bet_ramp: BetRamp,
}

impl Default for TrainerOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            system: CountingSystem::HiLo,
            bankroll: 1000,
            bet_unit: 10,
            min_bet: 15,
            max_bet: 150,
            stand_on_soft_17: true,
            penetration: 0.75,
            bet_ramp: BetRamp::default(),
        }
    }
}

impl TrainerOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the counting system.
    #[must_use]
    pub fn with_system(mut self, system: CountingSystem) -> Self {
        self.system = system;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub fn with_bankroll(mut self, bankroll: u32) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the betting unit.
    #[must_use]
    pub fn with_bet_unit(mut self, unit: u32) -> Self {
        self.bet_unit = unit;
        self
    }

    /// Sets the table minimum and maximum.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_bet_limits(5, 100);
    /// assert_eq!((options.min_bet, options.max_bet), (5, 100));
    /// ```
    #[must_use]
    pub fn with_bet_limits(mut self, min_bet: u32, max_bet: u32) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    #[must_use]
    pub fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::TrainerOptions;
    ///
    /// let options = TrainerOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the bet ramp.
    #[must_use]
    pub fn with_bet_ramp(mut self, ramp: BetRamp) -> Self {
        self.bet_ramp = ramp;
        self
    }

    /// Checks the options for values no session can run with.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::NoDecks`] for a zero deck count and
    /// [`OptionsError::BetLimits`] if the minimum exceeds the maximum.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        if self.min_bet > self.max_bet {
            return Err(OptionsError::BetLimits);
        }
        Ok(())
    }
}
