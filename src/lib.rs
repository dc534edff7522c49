//! A blackjack card counting and strategy engine with optional `no_std` support.
//!
//! The crate tracks the composition of a multi-deck shoe, keeps running and
//! true counts under several counting systems, and recommends plays from
//! basic strategy adjusted by count-dependent index numbers. A [`Session`]
//! ties the pieces together for one player; a [`CountingDrill`] deals a
//! seeded shoe for practice.
//!
//! # Example
//!
//! ```
//! use bjcount::{Action, Rank, Session, TrainerOptions};
//!
//! let mut session = Session::new(TrainerOptions::default()).unwrap();
//! for rank in [Rank::Two, Rank::Five, Rank::Six, Rank::King] {
//!     session.observe(rank).unwrap();
//! }
//! assert_eq!(session.running_count(), 2);
//!
//! let advice = session.recommend(&[Rank::Ten, Rank::Six], Rank::Seven).unwrap();
//! assert_eq!(advice.action, Action::Hit);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod betting;
pub mod card;
pub mod counting;
pub mod deviation;
pub mod error;
pub mod hand;
mod math;
pub mod options;
pub mod session;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use betting::{BetRamp, RampBound, betting_units, optimal_bet};
pub use card::{CARDS_PER_RANK, CardCategory, DECK_SIZE, Rank, UpCard};
pub use counting::{
    Complexity, CountingSystem, SystemInfo, SystemSelection, player_edge, running_count,
    true_count,
};
pub use deviation::{Deviation, DeviationEntry, DeviationTable, Situation, deviation_action};
pub use error::{
    AdviceError, BetRampError, OptionsError, ParseActionError, ParseRankError, ShoeError,
    UnknownCountingSystem,
};
pub use hand::{
    Hand, HandKey, HandShape, HandValue, classify_hand, dealer_must_hit, hand_key, hand_total,
    hand_value, is_blackjack, is_bust,
};
pub use options::TrainerOptions;
pub use session::{CountingDrill, DrillCheck, Session};
pub use shoe::Shoe;
pub use strategy::{Action, Recommendation, RuleSource, basic_action, recommend, resolve};
