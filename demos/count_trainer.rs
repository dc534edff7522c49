//! CLI counting trainer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcount::{Action, CardCategory, CountingDrill, CountingSystem, Rank, TrainerOptions};

const CARDS_PER_ROUND: usize = 4;

fn main() {
    println!("Card counting trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(name) = prompt_line("Counting system (Hi-Lo, Hi-Opt I, Hi-Opt II, Omega II, Zen, KO): ")
    else {
        return;
    };
    let selection = CountingSystem::select(&name);
    if selection.fell_back && !name.is_empty() {
        println!("Unknown system '{name}', using Hi-Lo.");
    }
    print_system(selection.system);

    let options = TrainerOptions::default().with_system(selection.system);
    let Ok(mut drill) = CountingDrill::new(options, seed) else {
        println!("Could not start the drill.");
        return;
    };

    let mut correct = 0u32;
    let mut asked = 0u32;

    loop {
        if drill.session().needs_reshuffle() {
            println!("Cut card reached. Shoe reshuffled.");
            drill.reshuffle();
        }

        let mut dealt = Vec::with_capacity(CARDS_PER_ROUND);
        for _ in 0..CARDS_PER_ROUND {
            match drill.deal() {
                Some(rank) => dealt.push(rank),
                None => break,
            }
        }
        if dealt.is_empty() {
            drill.reshuffle();
            continue;
        }

        println!();
        println!("Cards: {}", format_cards(&dealt));

        let Some(guess) = prompt_i32("Running count: ") else {
            break;
        };

        let check = drill.check(guess);
        asked += 1;
        if check.correct {
            correct += 1;
            println!("{}", colorize("Correct.", "32"));
        } else {
            println!("{} The count is {}.", colorize("Wrong.", "31"), check.expected);
        }

        let session = drill.session();
        println!(
            "Decks left: {:.1}  True count: {:+.1}  Bet: {} units  Edge: {:+.2}%",
            session.remaining_decks(),
            session.true_count(),
            session.betting_units(),
            session.player_edge()
        );

        if dealt.len() >= 3 && !quiz_play(&drill, &dealt) {
            break;
        }
    }

    println!("Score: {correct}/{asked}. Goodbye.");
}

/// Treats the first two dealt cards as the player's hand and the third as the
/// dealer's up card. Returns `false` when the player quits.
fn quiz_play(drill: &CountingDrill, dealt: &[Rank]) -> bool {
    let player = &dealt[..2];
    let up = dealt[2];
    let Ok(advice) = drill.session().recommend(player, up) else {
        return true;
    };

    let Some(input) = prompt_line(&format!(
        "You hold {} against {}. Play (H, S, D, Ds, Y, N, Y/N): ",
        format_cards(player),
        format_card(up)
    )) else {
        return false;
    };
    if is_quit(&input) {
        return false;
    }

    match input.parse::<Action>() {
        Ok(action) if action == advice.action => println!("{}", colorize("Right play.", "32")),
        Ok(_) => println!("{} {}.", colorize("Chart says:", "31"), advice.action),
        Err(_) => println!("Chart says: {}.", advice.action),
    }
    true
}

fn print_system(system: CountingSystem) {
    let info = system.info();
    println!("{system}: {}", info.description);
    let tags = Rank::ALL
        .iter()
        .map(|&rank| format!("{rank}:{:+}", system.point_value(rank)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Tags: {tags}");
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}

/// Reads one trimmed line. Returns `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_i32(prompt: &str) -> Option<i32> {
    loop {
        let input = prompt_line(prompt)?;
        if is_quit(&input) {
            return None;
        }
        match input.parse::<i32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_cards(cards: &[Rank]) -> String {
    cards
        .iter()
        .map(|&rank| format_card(rank))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(rank: Rank) -> String {
    let code = match rank.category() {
        CardCategory::Low => "32",
        CardCategory::Neutral => "90",
        CardCategory::High => "31",
        CardCategory::Unknown => "33",
    };
    colorize(rank.label(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
