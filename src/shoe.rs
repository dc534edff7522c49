//! Shoe composition tracking.

use crate::card::{CARDS_PER_RANK, DECK_SIZE, Rank};
use crate::error::ShoeError;
use crate::math;

/// Remaining inventory of every real rank across the decks in play.
///
/// Each observed card takes exactly one card of its rank out of the shoe and
/// each returned card puts exactly one back. A rank can never go below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    decks: u8,
    counts: [u16; 13],
}

impl Shoe {
    /// Creates a full shoe of `decks` decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Rank, Shoe};
    ///
    /// let shoe = Shoe::new(6).unwrap();
    /// assert_eq!(shoe.remaining(Rank::Ace), 24);
    /// assert_eq!(shoe.total_remaining(), 312);
    /// ```
    pub fn new(decks: u8) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        Ok(Self {
            decks,
            counts: [u16::from(decks) * CARDS_PER_RANK; 13],
        })
    }

    /// Number of decks the shoe was built with.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Removes one card of `rank` from the shoe.
    ///
    /// The shoe is left untouched when the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if no cards of `rank` remain, or
    /// [`ShoeError::UnknownRank`] for the face-down sentinel.
    pub fn observe(&mut self, rank: Rank) -> Result<(), ShoeError> {
        let index = rank.index().ok_or(ShoeError::UnknownRank)?;
        let count = &mut self.counts[index];
        if *count == 0 {
            return Err(ShoeError::Exhausted(rank));
        }

        *count -= 1;
        Ok(())
    }

    /// Puts one card of `rank` back into the shoe.
    ///
    /// Used when an entered card is corrected or deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Full`] if no card of `rank` has been dealt, or
    /// [`ShoeError::UnknownRank`] for the face-down sentinel.
    pub fn return_card(&mut self, rank: Rank) -> Result<(), ShoeError> {
        let index = rank.index().ok_or(ShoeError::UnknownRank)?;
        let full = self.per_rank();
        let count = &mut self.counts[index];
        if *count >= full {
            return Err(ShoeError::Full(rank));
        }

        *count += 1;
        Ok(())
    }

    /// Cards of `rank` still in the shoe. Always 0 for the sentinel.
    #[must_use]
    pub fn remaining(&self, rank: Rank) -> u16 {
        rank.index().map_or(0, |index| self.counts[index])
    }

    /// Total cards still in the shoe.
    #[must_use]
    pub fn total_remaining(&self) -> u32 {
        self.counts.iter().map(|&count| u32::from(count)).sum()
    }

    /// Cards dealt out of the shoe since it was built.
    #[must_use]
    pub fn cards_played(&self) -> u32 {
        self.full_size().saturating_sub(self.total_remaining())
    }

    /// Remaining decks, rounded to one decimal place.
    ///
    /// Zero only when the shoe is exhausted.
    #[must_use]
    pub fn remaining_decks(&self) -> f64 {
        math::round_tenths(f64::from(self.total_remaining()) / f64::from(DECK_SIZE))
    }

    /// Percentage of the shoe that has been dealt.
    #[must_use]
    pub fn penetration(&self) -> f64 {
        f64::from(self.cards_played()) / f64::from(self.full_size()) * 100.0
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Iterates over `(rank, remaining)` in shoe order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u16)> + '_ {
        Rank::ALL.iter().copied().zip(self.counts.iter().copied())
    }

    /// Refills the shoe with the same number of decks.
    pub fn reset(&mut self) {
        self.counts = [self.per_rank(); 13];
    }

    fn per_rank(&self) -> u16 {
        u16::from(self.decks) * CARDS_PER_RANK
    }

    fn full_size(&self) -> u32 {
        u32::from(self.decks) * u32::from(DECK_SIZE)
    }
}
