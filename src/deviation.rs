//! Count-based deviations from basic strategy.
//!
//! Every counting system carries its own table of index numbers. An entry
//! applies once the true count is at or above its threshold; there is no
//! hysteresis. Systems that do not list a situation have no deviation for it.
//!
//! Only the Hi-Lo table comes from a published index set. The other built-in
//! tables are placeholders with no reference behind them. Callers with an
//! authoritative index set can start from [`DeviationTable::empty`] and add
//! their own entries.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Rank, UpCard};
use crate::counting::CountingSystem;
use crate::hand::HandKey;
use crate::strategy::Action;

/// A decision point a deviation can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Situation {
    /// Taking insurance against a dealer ace.
    Insurance,
    /// Playing a hand.
    Hand(HandKey),
}

/// What a deviation tells the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deviation {
    /// Play this action instead of the chart.
    Play(Action),
    /// Take insurance.
    TakeInsurance,
}

/// A single index number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationEntry {
    /// Inclusive true-count threshold.
    pub threshold: f64,
    /// Play once the threshold is reached.
    pub deviation: Deviation,
}

type Seed = (Situation, UpCard, f64, Deviation);

const fn hard(total: u8, up: UpCard, threshold: f64, action: Action) -> Seed {
    (Situation::Hand(HandKey::Hard(total)), up, threshold, Deviation::Play(action))
}

const fn insurance(threshold: f64) -> Seed {
    (Situation::Insurance, UpCard::Ace, threshold, Deviation::TakeInsurance)
}

const TENS_SPLIT: Situation = Situation::Hand(HandKey::Pair(Rank::Ten));

/// Hi-Lo indices as listed by the trainer's deviation chart.
const HI_LO: &[Seed] = &[
    insurance(3.0),
    hard(16, UpCard::Nine, 5.0, Action::Stand),
    hard(16, UpCard::Ten, 0.0, Action::Stand),
    hard(15, UpCard::Ten, 4.0, Action::Stand),
    hard(14, UpCard::Ten, 3.0, Action::Stand),
    hard(13, UpCard::Two, -1.0, Action::Stand),
    hard(13, UpCard::Three, -2.0, Action::Stand),
    hard(12, UpCard::Two, 4.0, Action::Stand),
    hard(12, UpCard::Three, 2.0, Action::Stand),
    hard(12, UpCard::Four, 0.0, Action::Stand),
    hard(11, UpCard::Ace, 1.0, Action::DoubleOrHit),
    hard(10, UpCard::Ten, 4.0, Action::DoubleOrHit),
    hard(10, UpCard::Ace, 4.0, Action::DoubleOrHit),
    hard(9, UpCard::Two, 1.0, Action::DoubleOrHit),
    hard(9, UpCard::Seven, 4.0, Action::DoubleOrHit),
    (TENS_SPLIT, UpCard::Five, 5.0, Deviation::Play(Action::Split)),
    (TENS_SPLIT, UpCard::Six, 5.0, Deviation::Play(Action::Split)),
];

/// Placeholder: a few Hi-Lo indices kept at similar values, not from a reference.
const HI_OPT_I: &[Seed] = &[
    insurance(2.0),
    hard(16, UpCard::Ten, 0.0, Action::Stand),
    hard(15, UpCard::Ten, 4.0, Action::Stand),
    hard(12, UpCard::Two, 3.0, Action::Stand),
    hard(12, UpCard::Three, 2.0, Action::Stand),
    hard(10, UpCard::Ten, 4.0, Action::DoubleOrHit),
    hard(9, UpCard::Two, 1.0, Action::DoubleOrHit),
];

/// Placeholder: Hi-Lo indices roughly doubled for level two tags, not from a
/// reference.
const HI_OPT_II: &[Seed] = &[
    insurance(6.0),
    hard(16, UpCard::Ten, 0.0, Action::Stand),
    hard(15, UpCard::Ten, 8.0, Action::Stand),
    hard(12, UpCard::Two, 6.0, Action::Stand),
    hard(12, UpCard::Three, 4.0, Action::Stand),
    hard(10, UpCard::Ten, 8.0, Action::DoubleOrHit),
];

/// Placeholder: insurance and 16 vs 10 only, not from a reference.
const OMEGA_II: &[Seed] = &[
    insurance(6.0),
    hard(16, UpCard::Ten, 0.0, Action::Stand),
];

/// Placeholder: Hi-Lo indices roughly doubled for level two tags, not from a
/// reference.
const ZEN: &[Seed] = &[
    insurance(6.0),
    hard(16, UpCard::Ten, 0.0, Action::Stand),
    hard(15, UpCard::Ten, 8.0, Action::Stand),
    hard(12, UpCard::Three, 4.0, Action::Stand),
    hard(10, UpCard::Ten, 8.0, Action::DoubleOrHit),
];

/// Placeholder: running-count thresholds, since KO is never converted to a
/// true count. Chosen without a reference.
const KO: &[Seed] = &[
    insurance(3.0),
    hard(16, UpCard::Ten, 4.0, Action::Stand),
    hard(15, UpCard::Ten, 4.0, Action::Stand),
    hard(12, UpCard::Three, 2.0, Action::Stand),
];

const fn seeds(system: CountingSystem) -> &'static [Seed] {
    match system {
        CountingSystem::HiLo => HI_LO,
        CountingSystem::HiOptI => HI_OPT_I,
        CountingSystem::HiOptII => HI_OPT_II,
        CountingSystem::OmegaII => OMEGA_II,
        CountingSystem::ZenCount => ZEN,
        CountingSystem::Ko => KO,
    }
}

/// Index numbers for one counting system.
#[derive(Debug, Clone, Default)]
pub struct DeviationTable {
    entries: HashMap<(Situation, UpCard), DeviationEntry>,
}

impl DeviationTable {
    /// A table with no deviations; play follows the charts exactly.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table for `system`.
    #[must_use]
    pub fn for_system(system: CountingSystem) -> Self {
        seeds(system)
            .iter()
            .fold(Self::empty(), |table, &(situation, up, threshold, deviation)| {
                table.with_entry(situation, up, threshold, deviation)
            })
    }

    /// Adds or replaces the entry for `situation` against `up`.
    ///
    /// Insurance entries are only kept against an ace.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Action, Deviation, DeviationTable, HandKey, Situation, UpCard};
    ///
    /// let table = DeviationTable::empty().with_entry(
    ///     Situation::Hand(HandKey::Hard(16)),
    ///     UpCard::Ten,
    ///     0.0,
    ///     Deviation::Play(Action::Stand),
    /// );
    /// assert_eq!(table.len(), 1);
    /// ```
    #[must_use]
    pub fn with_entry(
        mut self,
        situation: Situation,
        up: UpCard,
        threshold: f64,
        deviation: Deviation,
    ) -> Self {
        if situation == Situation::Insurance && up != UpCard::Ace {
            log::warn!("ignoring insurance index against {up}");
            return self;
        }

        self.entries.insert(
            (situation, up),
            DeviationEntry {
                threshold,
                deviation,
            },
        );
        self
    }

    /// Entry for `situation` against `up`, if the system lists one.
    #[must_use]
    pub fn get(&self, situation: Situation, up: UpCard) -> Option<DeviationEntry> {
        self.entries.get(&(situation, up)).copied()
    }

    /// Deviation that applies at `true_count`, if any.
    #[must_use]
    pub fn deviation(&self, situation: Situation, up: UpCard, true_count: f64) -> Option<Deviation> {
        self.get(situation, up)
            .filter(|entry| true_count >= entry.threshold)
            .map(|entry| entry.deviation)
    }

    /// Returns whether insurance should be taken against `up` at `true_count`.
    ///
    /// Always `false` unless the dealer shows an ace.
    #[must_use]
    pub fn take_insurance(&self, up: UpCard, true_count: f64) -> bool {
        up == UpCard::Ace
            && self.deviation(Situation::Insurance, up, true_count)
                == Some(Deviation::TakeInsurance)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every entry.
    pub fn iter(&self) -> impl Iterator<Item = (Situation, UpCard, DeviationEntry)> + '_ {
        self.entries
            .iter()
            .map(|(&(situation, up), &entry)| (situation, up, entry))
    }
}

/// Deviation from the built-in table of `system` for `situation` against the
/// dealer's `dealer_up` card at `true_count`.
///
/// Returns `None` when the up card is face down, when the system lists no
/// index for the situation, or when the count is below the threshold.
#[must_use]
pub fn deviation_action(
    situation: Situation,
    dealer_up: Rank,
    true_count: f64,
    system: CountingSystem,
) -> Option<Deviation> {
    let up = UpCard::from_rank(dealer_up)?;
    DeviationTable::for_system(system).deviation(situation, up, true_count)
}
