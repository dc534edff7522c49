//! Session and drill integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use bjcount::{
    Action, AdviceError, BetRamp, CountingDrill, CountingSystem, OptionsError, Rank, RampBound,
    RuleSource, Session, ShoeError, TrainerOptions,
};

use Rank::{Ace, Five, Four, King, Seven, Six, Ten, Three, Two};

const LOW_RUN: [Rank; 10] = [Two, Three, Four, Five, Six, Two, Three, Four, Five, Six];

fn single_deck() -> TrainerOptions {
    TrainerOptions::default().with_decks(1)
}

/// One deck with ten low cards dealt: running count +10, true count +12.5.
fn hot_single_deck() -> Session {
    let mut session = Session::new(single_deck()).unwrap();
    session.observe_all(&LOW_RUN).unwrap();
    session
}

#[test]
fn options_builder_sets_fields() {
    let ramp = BetRamp::new(1, vec![(RampBound::AtLeast(1.0), 3)]).unwrap();
    let options = TrainerOptions::default()
        .with_decks(2)
        .with_system(CountingSystem::ZenCount)
        .with_bankroll(500)
        .with_bet_unit(25)
        .with_bet_limits(25, 400)
        .with_stand_on_soft_17(false)
        .with_penetration(0.6)
        .with_bet_ramp(ramp.clone());

    assert_eq!(options.decks, 2);
    assert_eq!(options.system, CountingSystem::ZenCount);
    assert_eq!(options.bankroll, 500);
    assert_eq!(options.bet_unit, 25);
    assert_eq!((options.min_bet, options.max_bet), (25, 400));
    assert!(!options.stand_on_soft_17);
    assert_eq!(options.penetration, 0.6);
    assert_eq!(options.bet_ramp, ramp);
    assert_eq!(options.validate(), Ok(()));
}

#[test]
fn invalid_options_are_rejected() {
    assert_eq!(
        Session::new(TrainerOptions::default().with_decks(0)).unwrap_err(),
        OptionsError::NoDecks
    );
    assert_eq!(
        Session::new(TrainerOptions::default().with_bet_limits(100, 50)).unwrap_err(),
        OptionsError::BetLimits
    );
}

#[test]
fn new_session_starts_even() {
    let session = Session::new(TrainerOptions::default()).unwrap();
    assert_eq!(session.system(), CountingSystem::HiLo);
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.true_count(), 0.0);
    assert_eq!(session.remaining_decks(), 6.0);
    assert_eq!(session.shoe().total_remaining(), 312);
    assert!(!session.deviations().is_empty());
}

#[test]
fn observing_moves_shoe_and_count_together() {
    let mut session = Session::new(TrainerOptions::default()).unwrap();
    assert_eq!(session.observe(Two), Ok(1));
    assert_eq!(session.observe(Five), Ok(1));
    assert_eq!(session.observe(Six), Ok(1));
    assert_eq!(session.observe(King), Ok(-1));
    assert_eq!(session.running_count(), 2);
    assert_eq!(session.shoe().remaining(King), 23);

    assert_eq!(session.return_card(King), Ok(-1));
    assert_eq!(session.running_count(), 3);
    assert_eq!(session.shoe().remaining(King), 24);
}

#[test]
fn failed_observation_leaves_count_alone() {
    let mut session = Session::new(single_deck()).unwrap();
    session.observe_all(&[Ace, Ace, Ace, Ace]).unwrap();
    assert_eq!(session.running_count(), -4);

    assert_eq!(session.observe(Ace), Err(ShoeError::Exhausted(Ace)));
    assert_eq!(session.observe(Rank::Unknown), Err(ShoeError::UnknownRank));
    assert_eq!(session.return_card(Rank::Unknown), Err(ShoeError::UnknownRank));
    assert_eq!(session.running_count(), -4);
    assert_eq!(session.shoe().cards_played(), 4);
}

#[test]
fn returning_a_card_never_dealt_is_refused() {
    let mut session = Session::new(single_deck()).unwrap();
    assert_eq!(session.return_card(Two), Err(ShoeError::Full(Two)));
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.shoe().remaining(Two), 4);
    assert_eq!(session.shoe().cards_played(), 0);

    session.observe(Two).unwrap();
    assert_eq!(session.return_card(Two), Ok(1));
    assert_eq!(session.return_card(Two), Err(ShoeError::Full(Two)));
    assert_eq!(session.running_count(), 0);
}

#[test]
fn true_count_uses_remaining_decks() {
    let session = hot_single_deck();
    assert_eq!(session.running_count(), 10);
    assert_eq!(session.remaining_decks(), 0.8);
    assert_eq!(session.true_count(), 12.5);
    assert_eq!(session.player_edge(), 5.75);
}

#[test]
fn unbalanced_session_uses_running_count() {
    let mut session = Session::new(single_deck().with_system(CountingSystem::Ko)).unwrap();
    session.observe_all(&[Two, Seven, Ten]).unwrap();
    assert_eq!(session.running_count(), 1);
    assert_eq!(session.true_count(), 1.0);
}

#[test]
fn unbalanced_advice_uses_running_count_thresholds() {
    let options = TrainerOptions::default()
        .with_decks(6)
        .with_system(CountingSystem::Ko);
    let mut session = Session::new(options).unwrap();
    session.observe_all(&[Two, Three, Four]).unwrap();
    assert_eq!(session.running_count(), 3);
    assert_eq!(session.true_count(), 3.0);

    let hit = session.recommend(&[Ten, Six], Ten).unwrap();
    assert_eq!((hit.action, hit.source), (Action::Hit, RuleSource::HardTable));
    assert_eq!(session.take_insurance(Ace), Ok(true));

    session.observe(Five).unwrap();
    assert_eq!(session.running_count(), 4);
    let stand = session.recommend(&[Ten, Six], Ten).unwrap();
    assert_eq!(stand.action, Action::Stand);
    assert_eq!(stand.source, RuleSource::Deviation { threshold: 4.0 });
}

#[test]
fn switching_systems_restarts_the_count() {
    let mut session = hot_single_deck();
    let played = session.shoe().cards_played();

    session.switch_system(CountingSystem::OmegaII);
    assert_eq!(session.system(), CountingSystem::OmegaII);
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.shoe().cards_played(), played);
    assert_eq!(session.deviations().len(), 2);

    session.observe(Four).unwrap();
    assert_eq!(session.running_count(), 2);

    // Switching to the active system is a no-op.
    session.switch_system(CountingSystem::OmegaII);
    assert_eq!(session.running_count(), 2);
}

#[test]
fn reshuffle_due_at_penetration() {
    let mut session = Session::new(single_deck().with_penetration(0.5)).unwrap();
    for rank in Rank::ALL.iter().cycle().take(25) {
        session.observe(*rank).unwrap();
    }
    assert!(!session.needs_reshuffle());

    session.observe(Ten).unwrap();
    assert!(session.needs_reshuffle());

    session.reset_shoe();
    assert!(!session.needs_reshuffle());
    assert_eq!(session.running_count(), 0);
    assert_eq!(session.shoe().total_remaining(), 52);

    let mut endless = Session::new(single_deck().with_penetration(0.0)).unwrap();
    for rank in Rank::ALL.iter().cycle().take(51) {
        endless.observe(*rank).unwrap();
    }
    assert!(!endless.needs_reshuffle());
}

#[test]
fn advice_follows_the_live_count() {
    let cold = Session::new(single_deck()).unwrap();
    let hit = cold.recommend(&[Ten, Two], Two).unwrap();
    assert_eq!((hit.action, hit.source), (Action::Hit, RuleSource::HardTable));

    let hot = hot_single_deck();
    let stand = hot.recommend(&[Ten, Two], Two).unwrap();
    assert_eq!(stand.action, Action::Stand);
    assert_eq!(stand.source, RuleSource::Deviation { threshold: 4.0 });

    assert_eq!(
        hot.recommend(&[Ten, Two], Rank::Unknown),
        Err(AdviceError::UnknownUpCard)
    );
}

#[test]
fn insurance_follows_the_live_count() {
    let cold = Session::new(single_deck()).unwrap();
    assert_eq!(cold.take_insurance(Ace), Ok(false));

    let hot = hot_single_deck();
    assert_eq!(hot.take_insurance(Ace), Ok(true));
    assert_eq!(hot.take_insurance(Ten), Ok(false));
    assert_eq!(hot.take_insurance(Rank::Unknown), Err(AdviceError::UnknownUpCard));
}

#[test]
fn bets_follow_the_live_count() {
    let cold = Session::new(single_deck()).unwrap();
    assert_eq!(cold.betting_units(), 1);
    assert_eq!(cold.optimal_bet(), 15);
    assert_eq!(cold.suggested_wager(1000), 10);

    let hot = hot_single_deck();
    assert_eq!(hot.betting_units(), 8);
    assert_eq!(hot.optimal_bet(), 150);
    assert_eq!(hot.suggested_wager(1000), 80);
    assert_eq!(hot.suggested_wager(50), 50);
}

#[test]
fn dealer_rule_comes_from_options() {
    let stands = Session::new(TrainerOptions::default()).unwrap();
    assert!(!stands.dealer_must_hit(&[Ace, Six]));

    let hits = Session::new(TrainerOptions::default().with_stand_on_soft_17(false)).unwrap();
    assert!(hits.dealer_must_hit(&[Ace, Six]));
}

#[test]
fn sessions_are_independent() {
    let mut hi_lo = Session::new(TrainerOptions::default()).unwrap();
    let mut zen =
        Session::new(TrainerOptions::default().with_system(CountingSystem::ZenCount)).unwrap();

    hi_lo.observe(Ace).unwrap();
    zen.observe(Four).unwrap();

    assert_eq!(hi_lo.running_count(), -1);
    assert_eq!(zen.running_count(), 2);
    assert_eq!(hi_lo.shoe().remaining(Four), 24);
}

#[test]
fn drill_deals_the_whole_shoe() {
    let mut drill = CountingDrill::new(single_deck(), 42).unwrap();
    let mut seen: HashMap<Rank, u32> = HashMap::new();

    while let Some(rank) = drill.deal() {
        *seen.entry(rank).or_default() += 1;
    }

    assert_eq!(drill.dealt(), 52);
    assert_eq!(drill.remaining(), 0);
    assert_eq!(seen.len(), 13);
    assert!(seen.values().all(|&count| count == 4));
    assert!(drill.check(0).correct);
    assert!(drill.session().shoe().is_exhausted());
}

#[test]
fn drill_is_reproducible_from_its_seed() {
    let deal = |seed| {
        let mut drill = CountingDrill::new(TrainerOptions::default(), seed).unwrap();
        (0..20).map(|_| drill.deal().unwrap()).collect::<Vec<_>>()
    };

    assert_eq!(deal(7), deal(7));
}

#[test]
fn drill_checks_guesses() {
    let mut drill = CountingDrill::new(TrainerOptions::default(), 3).unwrap();
    let mut count = 0;
    for _ in 0..10 {
        let rank = drill.deal().unwrap();
        count += CountingSystem::HiLo.point_value(rank);
    }

    let check = drill.check(count);
    assert!(check.correct);
    assert_eq!(check.expected, count);

    let miss = drill.check(count + 1);
    assert!(!miss.correct);
    assert_eq!(miss.expected, count);
}

#[test]
fn drill_reshuffle_restores_the_shoe() {
    let mut drill = CountingDrill::new(single_deck(), 9).unwrap();
    for _ in 0..30 {
        drill.deal().unwrap();
    }
    drill.switch_system(CountingSystem::HiOptII);
    assert_eq!(drill.session().running_count(), 0);

    drill.reshuffle();
    assert_eq!(drill.dealt(), 0);
    assert_eq!(drill.remaining(), 52);
    assert_eq!(drill.session().running_count(), 0);
    assert_eq!(drill.session().system(), CountingSystem::HiOptII);
}
