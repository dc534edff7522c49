//! Card ranks and dealer up-card categories.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// Number of cards per deck.
pub const DECK_SIZE: u16 = 52;

/// Number of cards of each rank in one deck.
pub const CARDS_PER_RANK: u16 = 4;

/// A card rank.
///
/// Suits never matter for counting or strategy, so a card is just its rank.
/// [`Rank::Unknown`] stands for a card that has not been revealed yet, such
/// as the dealer's hole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// A face-down card.
    Unknown,
}

impl Rank {
    /// The 13 real ranks, in shoe order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of a real rank in [`Rank::ALL`].
    pub(crate) const fn index(self) -> Option<usize> {
        match self {
            Self::Unknown => None,
            rank => Some(rank as usize),
        }
    }

    /// Returns whether the rank is 10, J, Q or K.
    #[must_use]
    pub const fn is_ten_value(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }

    /// Returns whether this is the face-down sentinel.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Blackjack value of the card, with the Ace counted as 11.
    ///
    /// The face-down sentinel is worth nothing until it is revealed.
    #[must_use]
    pub const fn blackjack_value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
            Self::Unknown => 0,
        }
    }

    /// Collapses J, Q and K onto [`Rank::Ten`].
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.is_ten_value() { Self::Ten } else { self }
    }

    /// Low / neutral / high grouping used by the card picker.
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            Self::Two | Self::Three | Self::Four | Self::Five | Self::Six => CardCategory::Low,
            Self::Seven | Self::Eight | Self::Nine => CardCategory::Neutral,
            Self::Unknown => CardCategory::Unknown,
            _ => CardCategory::High,
        }
    }

    /// Short label, as printed on the card buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Unknown => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim() {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            "?" => Self::Unknown,
            _ => return Err(ParseRankError),
        };
        Ok(rank)
    }
}

/// Hi-Lo style grouping of ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCategory {
    /// 2 through 6.
    Low,
    /// 7 through 9.
    Neutral,
    /// Ten-value cards and aces.
    High,
    /// Face-down card.
    Unknown,
}

/// Dealer up-card as a strategy chart column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpCard {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// Any ten-value card.
    Ten,
    /// Ace.
    Ace,
}

impl UpCard {
    /// All columns, left to right.
    pub const ALL: [Self; 10] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Ace,
    ];

    /// Maps a rank to its column. Returns `None` for the face-down sentinel.
    #[must_use]
    pub const fn from_rank(rank: Rank) -> Option<Self> {
        let up = match rank {
            Rank::Two => Self::Two,
            Rank::Three => Self::Three,
            Rank::Four => Self::Four,
            Rank::Five => Self::Five,
            Rank::Six => Self::Six,
            Rank::Seven => Self::Seven,
            Rank::Eight => Self::Eight,
            Rank::Nine => Self::Nine,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Self::Ten,
            Rank::Ace => Self::Ace,
            Rank::Unknown => return None,
        };
        Some(up)
    }

    pub(crate) const fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for UpCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ten => "10",
            Self::Ace => "A",
            other => return write!(f, "{}", other.column() + 2),
        };
        f.write_str(label)
    }
}
