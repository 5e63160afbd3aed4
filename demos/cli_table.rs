//! Interactive terminal blackjack table.
//!
//! A stand-in for a graphical driver: it forwards input to the engine,
//! ticks the dealer once per "frame", and prints the state it reads back.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use twentyone::{Hand, HandStatus, Phase, Table, TableOptions};

const CHIP_DENOMINATIONS: [usize; 5] = [5, 10, 25, 50, 100];
const FRAME: Duration = Duration::from_millis(50);

fn main() {
    println!("Blackjack (type 'q' at any prompt to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    loop {
        match table.phase() {
            Phase::Betting => {
                if table.is_game_over() {
                    println!("You are out of money. Game over.");
                    break;
                }
                if !betting_phase(&mut table) {
                    break;
                }
            }
            Phase::Playing => {
                if !playing_phase(&mut table) {
                    break;
                }
            }
            Phase::DealerTurn => dealer_phase(&mut table),
            Phase::RoundComplete => {
                print_table(&table);
                println!("\n=> {}", table.message);
                println!("Bankroll: ${}", table.bankroll);
                match prompt("Play again? (y/n): ").as_str() {
                    "y" | "yes" => {
                        if let Err(err) = table.new_round() {
                            println!("Error: {err}");
                        }
                    }
                    _ => break,
                }
            }
        }
    }

    println!("Thanks for playing.");
}

/// Returns `false` when the player quits.
fn betting_phase(table: &mut Table) -> bool {
    println!(
        "\nBankroll: ${}   Bet: ${}",
        table.bankroll,
        table.current_bet()
    );
    println!("Chips: 5, 10, 25, 50, 100. 'd' deals once a bet is down.");

    let input = prompt("Add chip or deal: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "d" | "deal" => {
            if table.can_deal() {
                if let Err(err) = table.deal() {
                    println!("Error: {err}");
                }
            } else {
                println!("Place a bet first.");
            }
        }
        other => match other.parse::<usize>() {
            Ok(amount) if CHIP_DENOMINATIONS.contains(&amount) => {
                if let Err(err) = table.place_bet(amount) {
                    println!("Error: {err}");
                }
            }
            _ => println!("Unknown chip."),
        },
    }
    true
}

/// Returns `false` when the player quits.
fn playing_phase(table: &mut Table) -> bool {
    print_table(table);

    let mut choices = vec!["(h)it", "(s)tand"];
    if table.can_double_down() {
        choices.push("(d)ouble");
    }
    if table.can_split() {
        choices.push("s(p)lit");
    }

    let input = prompt(&format!("{}: ", choices.join(", ")));
    let result = match input.as_str() {
        "q" | "quit" => return false,
        "h" | "hit" => table.hit().map(|card| println!("You draw: {card}")),
        "s" | "stand" => table.stand().map(|()| ()),
        "d" | "double" => table
            .double_down()
            .map(|card| println!("You draw: {card}")),
        "p" | "split" => table.split().map(|()| println!("Hand split.")),
        _ => {
            println!("Unknown action.");
            return true;
        }
    };

    if let Err(err) = result {
        println!("Error: {err}");
    }
    true
}

fn dealer_phase(table: &mut Table) {
    let mut shown_cards = 0;
    let mut hole_shown = false;

    while table.phase() == Phase::DealerTurn {
        if let Err(err) = table.tick(Instant::now()) {
            println!("Error: {err}");
            return;
        }

        if !table.hole_card_hidden() && !hole_shown {
            hole_shown = true;
            shown_cards = table.dealer_hand.len();
            println!(
                "Dealer reveals: {} ({})",
                table.dealer_hand.cards()[1],
                table.dealer_hand.score()
            );
        }
        if table.dealer_hand.len() > shown_cards {
            for card in &table.dealer_hand.cards()[shown_cards..] {
                println!("Dealer draws: {card} ({})", table.dealer_hand.score());
            }
            shown_cards = table.dealer_hand.len();
        }

        thread::sleep(FRAME);
    }
}

fn print_table(table: &Table) {
    println!();
    if table.hole_card_hidden() {
        let up_card = table
            .dealer_hand
            .cards()
            .first()
            .map_or_else(|| "-".to_owned(), ToString::to_string);
        println!("Dealer: {up_card}, [hidden]");
    } else {
        println!(
            "Dealer: {} ({})",
            format_cards(&table.dealer_hand),
            table.dealer_hand.score()
        );
    }

    for (i, hand) in table.player_hands.iter().enumerate() {
        let marker = if i == table.active_hand() && table.phase() == Phase::Playing {
            ">"
        } else {
            " "
        };
        let status = match hand.status() {
            HandStatus::Playing => String::new(),
            status => format!(" [{status}]"),
        };
        println!(
            "{marker} Hand {} (${}): {} ({}){}",
            i + 1,
            hand.bet,
            format_cards(hand),
            hand.score(),
            status
        );
    }
}

fn format_cards(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_owned();
    }
    line.trim().to_lowercase()
}
