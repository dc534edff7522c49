//! Counting systems and true-count conversion.

use core::fmt;
use core::str::FromStr;

use crate::card::{CARDS_PER_RANK, Rank};
use crate::error::UnknownCountingSystem;
use crate::math;

/// A card counting system.
///
/// The set is closed; point values live in a single table indexed by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountingSystem {
    /// Hi-Lo.
    #[default]
    HiLo,
    /// Hi-Opt I.
    HiOptI,
    /// Hi-Opt II.
    HiOptII,
    /// Omega II.
    OmegaII,
    /// Zen Count.
    ZenCount,
    /// Knockout.
    Ko,
}

/// How hard a system is to learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// Single-level tags, easy to keep.
    Basic,
    /// Some extra bookkeeping.
    Intermediate,
    /// Multi-level tags.
    Advanced,
}

/// Descriptive metadata for a counting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInfo {
    /// One-line description.
    pub description: &'static str,
    /// Learning difficulty.
    pub complexity: Complexity,
    /// Largest absolute tag value.
    pub level: u8,
}

/// Result of selecting a system by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemSelection {
    /// The system to count with.
    pub system: CountingSystem,
    /// Whether the name was not recognised and Hi-Lo was used instead.
    pub fell_back: bool,
}

// Columns: 2 3 4 5 6 7 8 9 10 J Q K A
const HI_LO: [i8; 13] = [1, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1, -1];
const HI_OPT_I: [i8; 13] = [0, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1, 0];
const HI_OPT_II: [i8; 13] = [1, 1, 2, 2, 1, 1, 0, 0, -2, -2, -2, -2, 0];
const OMEGA_II: [i8; 13] = [1, 1, 2, 2, 2, 1, 0, -1, -2, -2, -2, -2, 0];
const ZEN: [i8; 13] = [1, 1, 2, 2, 2, 1, 0, 0, -2, -2, -2, -2, -1];
const KO: [i8; 13] = [1, 1, 1, 1, 1, 1, 0, 0, -1, -1, -1, -1, -1];

impl CountingSystem {
    /// Every supported system.
    pub const ALL: [Self; 6] = [
        Self::HiLo,
        Self::HiOptI,
        Self::HiOptII,
        Self::OmegaII,
        Self::ZenCount,
        Self::Ko,
    ];

    const fn tags(self) -> &'static [i8; 13] {
        match self {
            Self::HiLo => &HI_LO,
            Self::HiOptI => &HI_OPT_I,
            Self::HiOptII => &HI_OPT_II,
            Self::OmegaII => &OMEGA_II,
            Self::ZenCount => &ZEN,
            Self::Ko => &KO,
        }
    }

    /// Point value of `rank` under this system. The sentinel is always 0.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{CountingSystem, Rank};
    ///
    /// assert_eq!(CountingSystem::HiLo.point_value(Rank::Five), 1);
    /// assert_eq!(CountingSystem::OmegaII.point_value(Rank::Nine), -1);
    /// assert_eq!(CountingSystem::ZenCount.point_value(Rank::Unknown), 0);
    /// ```
    #[must_use]
    pub fn point_value(self, rank: Rank) -> i32 {
        rank.index().map_or(0, |index| i32::from(self.tags()[index]))
    }

    /// Sum of the point values over one full deck.
    #[must_use]
    pub fn deck_sum(self) -> i32 {
        Rank::ALL
            .iter()
            .map(|&rank| self.point_value(rank) * i32::from(CARDS_PER_RANK))
            .sum()
    }

    /// Returns whether a full deck counts to zero.
    ///
    /// Only balanced systems are converted to a true count.
    #[must_use]
    pub fn is_balanced(self) -> bool {
        self.deck_sum() == 0
    }

    /// Display name, as shown in the setup screen.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HiLo => "Hi-Lo",
            Self::HiOptI => "Hi-Opt I",
            Self::HiOptII => "Hi-Opt II",
            Self::OmegaII => "Omega II",
            Self::ZenCount => "Zen Count",
            Self::Ko => "KO",
        }
    }

    /// Descriptive metadata.
    #[must_use]
    pub const fn info(self) -> SystemInfo {
        let (description, complexity, level) = match self {
            Self::HiLo => (
                "Most popular system. Easy to learn, balanced. +1, 0, -1 values.",
                Complexity::Basic,
                1,
            ),
            Self::HiOptI => (
                "Ace-neutral level one count; pairs well with an ace side count.",
                Complexity::Intermediate,
                1,
            ),
            Self::HiOptII => (
                "Very accurate, complex values for better precision.",
                Complexity::Advanced,
                2,
            ),
            Self::OmegaII => (
                "Highly accurate, uses multiple point values.",
                Complexity::Advanced,
                2,
            ),
            Self::ZenCount => (
                "Balanced level two count that tags the ace.",
                Complexity::Advanced,
                2,
            ),
            Self::Ko => (
                "Unbalanced system, no true count conversion needed.",
                Complexity::Basic,
                1,
            ),
        };

        SystemInfo {
            description,
            complexity,
            level,
        }
    }

    /// Looks a system up by name, falling back to Hi-Lo.
    ///
    /// The fallback is reported through [`SystemSelection::fell_back`] and a
    /// warning on the `log` facade.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::CountingSystem;
    ///
    /// let selection = CountingSystem::select("Unknown-System");
    /// assert_eq!(selection.system, CountingSystem::HiLo);
    /// assert!(selection.fell_back);
    /// ```
    #[must_use]
    pub fn select(name: &str) -> SystemSelection {
        match name.parse() {
            Ok(system) => SystemSelection {
                system,
                fell_back: false,
            },
            Err(UnknownCountingSystem) => {
                log::warn!("unknown counting system {name:?}, falling back to Hi-Lo");
                SystemSelection {
                    system: Self::HiLo,
                    fell_back: true,
                }
            }
        }
    }
}

impl fmt::Display for CountingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CountingSystem {
    type Err = UnknownCountingSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key = [0u8; 16];
        let mut len = 0;
        for byte in s.bytes().filter(|b| !matches!(b, b' ' | b'-' | b'_')) {
            if len == key.len() {
                return Err(UnknownCountingSystem);
            }
            key[len] = byte.to_ascii_lowercase();
            len += 1;
        }

        match &key[..len] {
            b"hilo" => Ok(Self::HiLo),
            b"hiopti" | b"hiopt1" => Ok(Self::HiOptI),
            b"hioptii" | b"hiopt2" => Ok(Self::HiOptII),
            b"omegaii" | b"omega2" => Ok(Self::OmegaII),
            b"zencount" | b"zen" => Ok(Self::ZenCount),
            b"ko" | b"knockout" => Ok(Self::Ko),
            _ => Err(UnknownCountingSystem),
        }
    }
}

/// Sums the point values of `cards` under `system`.
#[must_use]
pub fn running_count(system: CountingSystem, cards: &[Rank]) -> i32 {
    cards.iter().map(|&rank| system.point_value(rank)).sum()
}

/// Converts a running count into a true count.
///
/// Balanced systems divide by the remaining decks and round half away from
/// zero to one decimal place. Unbalanced systems return the running count
/// unchanged. With no decks remaining the result is 0.
///
/// # Example
///
/// ```
/// use bjcount::{CountingSystem, true_count};
///
/// assert_eq!(true_count(10.0, 2.0, CountingSystem::HiLo), 5.0);
/// assert_eq!(true_count(-5.0, 2.0, CountingSystem::HiLo), -2.5);
/// assert_eq!(true_count(10.0, 2.0, CountingSystem::Ko), 10.0);
/// assert_eq!(true_count(10.0, 0.0, CountingSystem::HiLo), 0.0);
/// ```
#[must_use]
pub fn true_count(running_count: f64, remaining_decks: f64, system: CountingSystem) -> f64 {
    if remaining_decks == 0.0 {
        return 0.0;
    }

    if !system.is_balanced() {
        return running_count;
    }

    math::round_tenths(running_count / remaining_decks)
}

/// Estimated player advantage in percent at `true_count`.
///
/// Starts from a 0.5% house edge and gains half a percent per true count.
#[must_use]
pub fn player_edge(true_count: f64) -> f64 {
    math::round_hundredths(-0.5 + 0.5 * true_count)
}
