use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Rank;
use crate::counting::CountingSystem;
use crate::error::OptionsError;
use crate::options::TrainerOptions;

use super::Session;

/// Outcome of checking a guessed running count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillCheck {
    /// The actual running count.
    pub expected: i32,
    /// Whether the guess matched it.
    pub correct: bool,
}

/// Deals a seeded shoe one card at a time for counting practice.
///
/// Every dealt card is observed by the drill's [`Session`], so the session
/// always holds the count the player should have.
#[derive(Debug, Clone)]
pub struct CountingDrill {
    session: Session,
    /// Undealt cards; the next card is at the end.
    pending: Vec<Rank>,
    rng: ChaCha8Rng,
}

impl CountingDrill {
    /// Creates a drill over a freshly shuffled shoe.
    ///
    /// The same options and seed always deal the same cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TrainerOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{CountingDrill, TrainerOptions};
    ///
    /// let mut drill = CountingDrill::new(TrainerOptions::default().with_decks(1), 7).unwrap();
    /// let card = drill.deal().unwrap();
    /// let check = drill.check(drill.session().system().point_value(card));
    /// assert!(check.correct);
    /// ```
    pub fn new(options: TrainerOptions, seed: u64) -> Result<Self, OptionsError> {
        let session = Session::new(options)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pending = Self::shuffled(&session, &mut rng);

        Ok(Self {
            session,
            pending,
            rng,
        })
    }

    /// Lays out the session's remaining cards in a random order.
    fn shuffled(session: &Session, rng: &mut ChaCha8Rng) -> Vec<Rank> {
        let shoe = session.shoe();
        let mut cards = Vec::with_capacity(shoe.total_remaining() as usize);

        for (rank, count) in shoe.iter() {
            for _ in 0..count {
                cards.push(rank);
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Deals the next card and records it in the session.
    ///
    /// Returns `None` once the shoe is empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "pending cards always come from the session's shoe"
    )]
    pub fn deal(&mut self) -> Option<Rank> {
        let rank = self.pending.pop()?;
        self.session
            .observe(rank)
            .expect("deal order is laid out from the session's own shoe");
        Some(rank)
    }

    /// Compares a guessed running count with the actual one.
    #[must_use]
    pub const fn check(&self, guess: i32) -> DrillCheck {
        let expected = self.session.running_count();
        DrillCheck {
            expected,
            correct: guess == expected,
        }
    }

    /// Refills and reshuffles the shoe, zeroing the count.
    pub fn reshuffle(&mut self) {
        self.session.reset_shoe();
        self.pending = Self::shuffled(&self.session, &mut self.rng);
    }

    /// Cards dealt since the last reshuffle.
    #[must_use]
    pub fn dealt(&self) -> u32 {
        self.session.shoe().cards_played()
    }

    /// Cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// The session counting the drill.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Counts the rest of the shoe with another system, starting from 0.
    pub fn switch_system(&mut self, system: CountingSystem) {
        self.session.switch_system(system);
    }
}
