//! Hand totals and shape classification.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Total of a hand after resolving aces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// Best total not over 21 when possible. Saturates at 255.
    pub total: u8,
    /// Whether an ace is still counted as 11.
    pub soft: bool,
}

impl HandValue {
    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.total > 21
    }
}

/// Hand shape for chart lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandShape {
    /// Two cards of equal rank (ten-value cards pair with each other).
    Pair,
    /// Two cards with one ace counted as 11.
    Soft,
    /// Everything else.
    Hard,
}

/// Chart row a hand is looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandKey {
    /// Hard total.
    Hard(u8),
    /// Ace plus the other card.
    Soft(Rank),
    /// Pair of this rank; ten-value pairs are keyed as [`Rank::Ten`].
    Pair(Rank),
}

fn evaluate_cards(cards: &[Rank]) -> HandValue {
    // Every ace counts 1 here; at most one can ever count 11.
    let mut hard: u32 = 0;
    let mut has_ace = false;

    for &rank in cards {
        if rank == Rank::Ace {
            has_ace = true;
            hard += 1;
        } else {
            hard += u32::from(rank.blackjack_value());
        }
    }

    let soft = has_ace && hard + 10 <= 21;
    let total = if soft { hard + 10 } else { hard };

    HandValue {
        total: u8::try_from(total).unwrap_or(u8::MAX),
        soft,
    }
}

/// Resolves the total of `cards`, counting aces as 11 while that does not
/// bust. Face-down cards count as nothing.
///
/// # Example
///
/// ```
/// use bjcount::{Rank, hand_value};
///
/// let value = hand_value(&[Rank::Ace, Rank::Ace, Rank::Nine]);
/// assert_eq!(value.total, 21);
/// assert!(value.soft);
/// ```
#[must_use]
pub fn hand_value(cards: &[Rank]) -> HandValue {
    evaluate_cards(cards)
}

/// Best total of `cards`. Totals over 21 are bust.
#[must_use]
pub fn hand_total(cards: &[Rank]) -> u8 {
    evaluate_cards(cards).total
}

/// Returns whether `cards` total over 21.
#[must_use]
pub fn is_bust(cards: &[Rank]) -> bool {
    evaluate_cards(cards).is_bust()
}

/// Returns whether `cards` are a two-card 21.
#[must_use]
pub fn is_blackjack(cards: &[Rank]) -> bool {
    cards.len() == 2 && hand_total(cards) == 21
}

fn is_pair(cards: &[Rank]) -> bool {
    matches!(cards, [a, b] if !a.is_unknown() && a.normalized() == b.normalized())
}

/// Classifies `cards` for chart lookup.
///
/// Only two-card hands can be a pair or soft; a hand of three or more cards
/// is always hard, even when it holds an ace counted as 11.
///
/// # Example
///
/// ```
/// use bjcount::{HandShape, Rank, classify_hand};
///
/// assert_eq!(classify_hand(&[Rank::Eight, Rank::Eight]), HandShape::Pair);
/// assert_eq!(classify_hand(&[Rank::Ace, Rank::Six]), HandShape::Soft);
/// assert_eq!(classify_hand(&[Rank::Ace, Rank::Six, Rank::Five]), HandShape::Hard);
/// ```
#[must_use]
pub fn classify_hand(cards: &[Rank]) -> HandShape {
    if is_pair(cards) {
        return HandShape::Pair;
    }

    if cards.len() == 2 {
        let aces = cards.iter().filter(|&&rank| rank == Rank::Ace).count();
        if aces == 1 && evaluate_cards(cards).soft {
            return HandShape::Soft;
        }
    }

    HandShape::Hard
}

/// Chart row for `cards`.
#[must_use]
pub fn hand_key(cards: &[Rank]) -> HandKey {
    match classify_hand(cards) {
        HandShape::Pair => HandKey::Pair(cards[0].normalized()),
        HandShape::Soft => {
            let kicker = cards
                .iter()
                .copied()
                .find(|&rank| rank != Rank::Ace)
                .map_or(Rank::Ace, Rank::normalized);
            HandKey::Soft(kicker)
        }
        HandShape::Hard => HandKey::Hard(hand_total(cards)),
    }
}

/// Returns whether a dealer holding `cards` must draw.
///
/// The dealer draws below 17. On a soft 17 the dealer stands when
/// `stand_on_soft_17` is set and draws otherwise.
#[must_use]
pub fn dealer_must_hit(cards: &[Rank], stand_on_soft_17: bool) -> bool {
    let value = evaluate_cards(cards);
    value.total < 17 || (value.total == 17 && value.soft && !stand_on_soft_17)
}

/// A player's hand as the cards are entered.
///
/// Value and shape are recomputed on every call, so a soft hand turns hard
/// as soon as a drawn card would bust it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// Removes and returns the most recent card.
    pub fn remove_last(&mut self) -> Option<Rank> {
        self.cards.pop()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolved value of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate_cards(&self.cards)
    }

    /// Current shape of the hand.
    #[must_use]
    pub fn shape(&self) -> HandShape {
        classify_hand(&self.cards)
    }

    /// Chart row for the hand.
    #[must_use]
    pub fn key(&self) -> HandKey {
        hand_key(&self.cards)
    }
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Self { cards }
    }
}
