use crate::card::Rank;
use crate::counting::CountingSystem;
use crate::deviation::DeviationTable;
use crate::error::ShoeError;

use super::Session;

impl Session {
    /// Records a dealt card: takes it out of the shoe and adds its point
    /// value to the running count.
    ///
    /// Returns the point value applied. Neither the shoe nor the count moves
    /// when the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if no cards of `rank` remain and
    /// [`ShoeError::UnknownRank`] for the face-down sentinel, which must be
    /// observed once it is revealed.
    pub fn observe(&mut self, rank: Rank) -> Result<i32, ShoeError> {
        self.shoe.observe(rank)?;
        let value = self.system.point_value(rank);
        self.running_count += value;
        log::trace!("observed {rank}: {value:+}, running count {}", self.running_count);
        Ok(value)
    }

    /// Records several dealt cards, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Session::observe`]; cards before it stay
    /// recorded.
    pub fn observe_all(&mut self, ranks: &[Rank]) -> Result<(), ShoeError> {
        for &rank in ranks {
            self.observe(rank)?;
        }
        Ok(())
    }

    /// Undoes an entered card: puts it back in the shoe and subtracts its
    /// point value from the running count.
    ///
    /// Neither the shoe nor the count moves when the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Full`] if every card of `rank` is still in the
    /// shoe and [`ShoeError::UnknownRank`] for the face-down sentinel.
    pub fn return_card(&mut self, rank: Rank) -> Result<i32, ShoeError> {
        self.shoe.return_card(rank)?;
        let value = self.system.point_value(rank);
        self.running_count -= value;
        Ok(value)
    }

    /// Switches to another counting system.
    ///
    /// Point values do not convert between systems, so the running count
    /// restarts at 0. The shoe is left as it is.
    pub fn switch_system(&mut self, system: CountingSystem) {
        if system == self.system {
            return;
        }

        log::debug!(
            "switching from {} to {system}, running count {} discarded",
            self.system,
            self.running_count
        );
        self.system = system;
        self.running_count = 0;
        self.deviations = DeviationTable::for_system(system);
    }
}
