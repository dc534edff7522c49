//! Basic strategy resolution with count-based deviations.

use core::fmt;
use core::str::FromStr;

use crate::card::{Rank, UpCard};
use crate::counting::CountingSystem;
use crate::deviation::{Deviation, DeviationTable, Situation};
use crate::error::{AdviceError, ParseActionError};
use crate::hand::{HandKey, hand_key};

mod tables;

use tables::{HARD, HARD_MAX, HARD_MIN, PAIRS, SOFT};

/// A strategy chart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Hit.
    Hit,
    /// Stand.
    Stand,
    /// Double if allowed, otherwise hit.
    DoubleOrHit,
    /// Double if allowed, otherwise stand.
    DoubleOrStand,
    /// Split the pair.
    Split,
    /// Do not split the pair.
    NoSplit,
    /// Split only when doubling after a split is allowed.
    SplitIfDas,
}

impl Action {
    /// Chart code (`H`, `S`, `D`, `Ds`, `Y`, `N`, `Y/N`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Hit => "H",
            Self::Stand => "S",
            Self::DoubleOrHit => "D",
            Self::DoubleOrStand => "Ds",
            Self::Split => "Y",
            Self::NoSplit => "N",
            Self::SplitIfDas => "Y/N",
        }
    }

    /// Human readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleOrHit => "Double (Hit)",
            Self::DoubleOrStand => "Double (Stand)",
            Self::Split => "Split",
            Self::NoSplit => "No split",
            Self::SplitIfDas => "Split only if 'DAS' is available",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H" => Ok(Self::Hit),
            "S" => Ok(Self::Stand),
            "D" => Ok(Self::DoubleOrHit),
            "Ds" => Ok(Self::DoubleOrStand),
            "Y" => Ok(Self::Split),
            "N" => Ok(Self::NoSplit),
            "Y/N" => Ok(Self::SplitIfDas),
            _ => Err(ParseActionError),
        }
    }
}

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleSource {
    /// A count-based deviation at or above its threshold.
    Deviation {
        /// True count at which the deviation starts to apply.
        threshold: f64,
    },
    /// The pair chart.
    PairTable,
    /// The soft chart.
    SoftTable,
    /// The hard chart.
    HardTable,
    /// No rule matched and the engine defaulted to hitting.
    Fallback,
}

/// A recommended action and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    /// What to do.
    pub action: Action,
    /// Why.
    pub source: RuleSource,
    /// Chart row the hand was looked up under.
    pub key: HandKey,
}

fn pair_row(rank: Rank) -> Option<usize> {
    match rank {
        Rank::Ace => Some(9),
        Rank::Unknown => None,
        rank if rank.is_ten_value() => Some(8),
        rank => Some(usize::from(rank.blackjack_value()) - 2),
    }
}

fn soft_row(kicker: Rank) -> Option<usize> {
    match kicker {
        Rank::Two
        | Rank::Three
        | Rank::Four
        | Rank::Five
        | Rank::Six
        | Rank::Seven
        | Rank::Eight
        | Rank::Nine => Some(usize::from(kicker.blackjack_value()) - 2),
        _ => None,
    }
}

/// Basic strategy chart entry for `key` against `up`.
///
/// Hard totals are clamped to the chart: 8 and below use the 8 row, 17 and
/// above use the 17 row. Soft hands outside A,2 through A,9 have no entry.
#[must_use]
pub fn basic_action(key: HandKey, up: UpCard) -> Option<Action> {
    let column = up.column();
    match key {
        HandKey::Pair(rank) => pair_row(rank).map(|row| PAIRS[row][column]),
        HandKey::Soft(kicker) => soft_row(kicker).map(|row| SOFT[row][column]),
        HandKey::Hard(total) => {
            let row = total.clamp(HARD_MIN, HARD_MAX) - HARD_MIN;
            HARD.get(usize::from(row)).map(|actions| actions[column])
        }
    }
}

/// Resolves the recommended play with a ready-made deviation table.
///
/// Precedence is strict and exactly one rule applies: a deviation whose
/// threshold the true count has reached, then the pair or soft chart, then
/// the hard chart, then hitting.
///
/// # Errors
///
/// Returns [`AdviceError::UnknownUpCard`] if `dealer_up` is face down.
pub fn resolve(
    player: &[Rank],
    dealer_up: Rank,
    true_count: f64,
    deviations: &DeviationTable,
) -> Result<Recommendation, AdviceError> {
    let up = UpCard::from_rank(dealer_up).ok_or(AdviceError::UnknownUpCard)?;
    let key = hand_key(player);

    if let Some(entry) = deviations.get(Situation::Hand(key), up) {
        if let Deviation::Play(action) = entry.deviation {
            if true_count >= entry.threshold {
                log::debug!(
                    "deviation {key:?} vs {up}: {action} at true count {true_count} (index {})",
                    entry.threshold
                );
                return Ok(Recommendation {
                    action,
                    source: RuleSource::Deviation {
                        threshold: entry.threshold,
                    },
                    key,
                });
            }
        }
    }

    let table_source = match key {
        HandKey::Pair(_) => Some(RuleSource::PairTable),
        HandKey::Soft(_) => Some(RuleSource::SoftTable),
        HandKey::Hard(_) => None,
    };
    if let Some(source) = table_source {
        if let Some(action) = basic_action(key, up) {
            return Ok(Recommendation {
                action,
                source,
                key,
            });
        }
    }

    let total = crate::hand::hand_total(player);
    if let Some(action) = basic_action(HandKey::Hard(total), up) {
        return Ok(Recommendation {
            action,
            source: RuleSource::HardTable,
            key,
        });
    }

    log::warn!("no strategy rule for {key:?} vs {up}, defaulting to hit");
    Ok(Recommendation {
        action: Action::Hit,
        source: RuleSource::Fallback,
        key,
    })
}

/// Recommended play for `player` against the dealer's `dealer_up` card.
///
/// Uses the built-in deviation table of `system`.
///
/// # Errors
///
/// Returns [`AdviceError::UnknownUpCard`] if `dealer_up` is face down.
///
/// # Example
///
/// ```
/// use bjcount::{Action, CountingSystem, Rank, recommend};
///
/// let split = recommend(&[Rank::Eight, Rank::Eight], Rank::Six, 0.0, CountingSystem::HiLo);
/// assert_eq!(split, Ok(Action::Split));
///
/// let stand = recommend(&[Rank::Ten, Rank::Six], Rank::Ten, 5.0, CountingSystem::HiLo);
/// assert_eq!(stand, Ok(Action::Stand));
/// ```
pub fn recommend(
    player: &[Rank],
    dealer_up: Rank,
    true_count: f64,
    system: CountingSystem,
) -> Result<Action, AdviceError> {
    let deviations = DeviationTable::for_system(system);
    resolve(player, dealer_up, true_count, &deviations).map(|rec| rec.action)
}
