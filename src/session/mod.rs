//! Counting session state.

use crate::counting::{self, CountingSystem};
use crate::deviation::DeviationTable;
use crate::error::OptionsError;
use crate::options::TrainerOptions;
use crate::shoe::Shoe;

mod advice;
mod drill;
mod observe;

pub use drill::{CountingDrill, DrillCheck};

/// Everything one player needs to count a shoe.
///
/// A session owns its shoe, running count, active counting system and that
/// system's deviation table. Sessions share nothing, so any number can run
/// side by side.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session options.
    options: TrainerOptions,
    /// Remaining shoe composition.
    shoe: Shoe,
    /// Running count under `system`.
    running_count: i32,
    /// Active counting system.
    system: CountingSystem,
    /// Index numbers for `system`.
    deviations: DeviationTable,
}

impl Session {
    /// Starts a session with a full shoe and a zero count.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TrainerOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Session, TrainerOptions};
    ///
    /// let session = Session::new(TrainerOptions::default()).unwrap();
    /// assert_eq!(session.running_count(), 0);
    /// assert_eq!(session.remaining_decks(), 6.0);
    /// ```
    pub fn new(options: TrainerOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks).map_err(|_| OptionsError::NoDecks)?;
        let system = options.system;

        Ok(Self {
            options,
            shoe,
            running_count: 0,
            system,
            deviations: DeviationTable::for_system(system),
        })
    }

    /// Session options.
    #[must_use]
    pub const fn options(&self) -> &TrainerOptions {
        &self.options
    }

    /// Current shoe composition.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Active counting system.
    #[must_use]
    pub const fn system(&self) -> CountingSystem {
        self.system
    }

    /// Deviation table in use.
    #[must_use]
    pub const fn deviations(&self) -> &DeviationTable {
        &self.deviations
    }

    /// Replaces the deviation table, e.g. with indices from another source.
    pub fn set_deviations(&mut self, deviations: DeviationTable) {
        self.deviations = deviations;
    }

    /// Running count since the shoe was last reset.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Remaining decks, rounded to one decimal place.
    #[must_use]
    pub fn remaining_decks(&self) -> f64 {
        self.shoe.remaining_decks()
    }

    /// True count for the active system.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        counting::true_count(
            f64::from(self.running_count),
            self.remaining_decks(),
            self.system,
        )
    }

    /// Returns whether enough of the shoe has been dealt to reshuffle.
    ///
    /// Always `false` when penetration is 0.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration == 0.0 {
            return false;
        }

        self.shoe.penetration() / 100.0 >= self.options.penetration
    }

    /// Refills the shoe and zeroes the running count.
    pub fn reset_shoe(&mut self) {
        log::debug!("reshuffling {} deck shoe", self.shoe.decks());
        self.shoe.reset();
        self.running_count = 0;
    }
}
