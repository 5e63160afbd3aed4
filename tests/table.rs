//! Table integration tests.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Deck, Hand, HandOutcome, HandStatus, Phase,
    RoundError, Suit, Table, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Replaces the table's deck so that `draws` come out in order.
fn stack_deck(table: &mut Table, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.reverse();
    table.deck = Deck::from_cards(cards);
}

fn fast_options() -> TableOptions {
    TableOptions::default().with_dealer_delay(Duration::ZERO)
}

/// Ticks the dealer's turn through to settlement.
fn run_dealer(table: &mut Table) {
    while table.phase() == Phase::DealerTurn {
        table.tick(Instant::now()).unwrap();
    }
}

#[test]
fn deck_has_52_unique_cards_and_draws_partition_it() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::shuffled(&mut rng);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut drawn = HashSet::new();
    for _ in 0..20 {
        let card = deck.draw().unwrap();
        assert!(drawn.insert((card.suit, card.rank)), "repeated card");
    }
    assert_eq!(deck.remaining(), DECK_SIZE - 20);
    assert!(deck.is_low(50));
    assert!(!deck.is_low(20));

    while let Some(card) = deck.draw() {
        assert!(drawn.insert((card.suit, card.rank)), "repeated card");
    }
    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(deck.is_empty());
}

#[test]
fn hand_scoring_resolves_aces_greedily() {
    let cases: &[(&[u8], u8)] = &[
        (&[1, 1], 12),
        (&[1, 9], 20),
        (&[1, 1, 9], 21),
        (&[13, 12], 20),
        (&[1, 13], 21),
        (&[10, 9, 5], 24),
    ];

    for (ranks, expected) in cases {
        let mut hand = Hand::new(0);
        for &rank in *ranks {
            hand.add_card(card(Suit::Hearts, rank));
        }
        assert_eq!(hand.score(), *expected, "ranks {ranks:?}");
    }

    let mut natural = Hand::new(0);
    natural.add_card(card(Suit::Spades, 1));
    natural.add_card(card(Suit::Clubs, 13));
    assert!(natural.is_blackjack());
    assert!(!natural.is_bust());
}

#[test]
fn split_eligibility_is_value_based() {
    let mut ten_king = Hand::new(10);
    ten_king.add_card(card(Suit::Hearts, 10));
    ten_king.add_card(card(Suit::Spades, 13));
    assert!(ten_king.can_split());

    let mut ten_nine = Hand::new(10);
    ten_nine.add_card(card(Suit::Hearts, 10));
    ten_nine.add_card(card(Suit::Spades, 9));
    assert!(!ten_nine.can_split());
}

#[test]
fn hand_double_down_doubles_once() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 5));
    hand.add_card(card(Suit::Spades, 4));

    assert!(hand.can_double_down(100));
    assert_eq!(hand.double_down().unwrap(), 10);
    assert_eq!(hand.bet, 20);
    assert!(hand.doubled);

    assert!(!hand.can_double_down(100));
    assert!(hand.double_down().is_err());
}

#[test]
fn hand_status_precedence() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 6));
    hand.add_card(card(Suit::Spades, 5));
    assert_eq!(hand.status(), HandStatus::Playing);

    hand.doubled = true;
    assert_eq!(hand.status(), HandStatus::Doubled);

    // A doubled hand that auto-stood on 21 reports the stand, not the double.
    hand.finished = true;
    assert_eq!(hand.status(), HandStatus::Stand);

    hand.busted = true;
    assert_eq!(hand.status(), HandStatus::Bust);
}

#[test]
fn bets_accumulate_and_are_guarded() {
    let mut table = Table::new(fast_options(), 1);

    table.place_bet(50).unwrap();
    table.place_bet(25).unwrap();
    assert_eq!(table.current_bet(), 75);
    assert_eq!(table.bankroll, 925);

    assert_eq!(table.place_bet(2000).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(table.bankroll, 925);

    table.deal().unwrap();
    assert_eq!(table.place_bet(5).unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_requires_a_bet() {
    let mut table = Table::new(fast_options(), 1);
    assert!(!table.can_deal());
    assert_eq!(table.deal().unwrap_err(), DealError::NoBet);

    table.place_bet(10).unwrap();
    assert!(table.can_deal());

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    table.deal().unwrap();
    assert_eq!(table.phase(), Phase::Playing);
    assert_eq!(table.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(table.current_hand().unwrap().bet, 10);
}

#[test]
fn dealer_bust_pays_double() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(50).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 6), // dealer hole
            card(Suit::Hearts, 9),   // dealer draw -> 25, bust
        ],
    );

    table.deal().unwrap();
    table.stand().unwrap();
    assert_eq!(table.phase(), Phase::DealerTurn);
    assert!(table.hole_card_hidden());

    run_dealer(&mut table);
    assert_eq!(table.phase(), Phase::RoundComplete);
    assert!(!table.hole_card_hidden());
    assert_eq!(table.bankroll, 1050);
    assert_eq!(table.message, "Win (Dealer Bust)");

    let result = table.round_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_score, 25);
    assert_eq!(result.total_payout, 100);
    assert_eq!(result.hands[0].outcome, HandOutcome::DealerBust);
}

#[test]
fn natural_blackjack_settles_immediately() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(50).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 1),  // player
            card(Suit::Spades, 13), // player
            card(Suit::Clubs, 9),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    table.deal().unwrap();
    assert_eq!(table.phase(), Phase::RoundComplete);
    assert!(!table.hole_card_hidden());
    // Dealer never draws past the initial two cards.
    assert_eq!(table.dealer_hand.len(), 2);
    // floor(50 * 2.5) = 125 on top of the 950 left after betting.
    assert_eq!(table.bankroll, 1075);
    assert_eq!(table.message, "Blackjack! You win!");
    assert!(table.player_hands[0].blackjack);

    let result = table.round_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 125);
}

#[test]
fn mutual_blackjack_pushes() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(50).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Spades, 13),  // player
            card(Suit::Clubs, 1),    // dealer up
            card(Suit::Diamonds, 10), // dealer hole
        ],
    );

    table.deal().unwrap();
    assert_eq!(table.phase(), Phase::RoundComplete);
    assert_eq!(table.bankroll, 1000);
    assert_eq!(table.message, "Push! Both have blackjack!");
    assert_eq!(
        table.round_result().unwrap().hands[0].outcome,
        HandOutcome::Push
    );
}

#[test]
fn hit_stands_automatically_on_21() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 5),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 8), // dealer hole
            card(Suit::Hearts, 6),   // player hit -> 21
        ],
    );

    table.deal().unwrap();
    let drawn = table.hit().unwrap();
    assert_eq!(drawn.rank, 6);
    assert!(table.player_hands[0].finished);
    assert!(!table.player_hands[0].busted);
    assert_eq!(table.phase(), Phase::DealerTurn);
}

#[test]
fn busted_hand_forfeits_its_stake() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(50).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole -> 17, stands
            card(Suit::Hearts, 5),   // player hit -> 24, bust
        ],
    );

    table.deal().unwrap();
    table.hit().unwrap();
    assert!(table.player_hands[0].busted);
    assert_eq!(table.phase(), Phase::DealerTurn);

    // The dealer still plays out the hand.
    run_dealer(&mut table);
    assert_eq!(table.phase(), Phase::RoundComplete);
    assert!(table.dealer_hand.score() >= 17);
    assert_eq!(table.bankroll, 950);
    assert_eq!(table.message, "Bust");
}

#[test]
fn double_down_takes_one_card_and_finishes() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Spades, 4),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole -> 17
            card(Suit::Hearts, 10),  // double draw -> 19
        ],
    );

    table.deal().unwrap();
    assert!(table.can_double_down());
    let drawn = table.double_down().unwrap();
    assert_eq!(drawn.rank, 10);

    let hand = &table.player_hands[0];
    assert_eq!(hand.bet, 20);
    assert!(hand.doubled);
    assert!(hand.finished);
    assert_eq!(table.bankroll, 980);
    assert_eq!(table.phase(), Phase::DealerTurn);

    run_dealer(&mut table);
    // 19 beats the dealer's 17; the doubled bet pays double.
    assert_eq!(table.bankroll, 1020);
    assert_eq!(table.message, "Win");
}

#[test]
fn doubled_hand_hitting_21_is_both_doubled_and_finished() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 6),   // player
            card(Suit::Spades, 5),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole
            card(Suit::Hearts, 10),  // double draw -> 21
        ],
    );

    table.deal().unwrap();
    table.double_down().unwrap();

    let hand = &table.player_hands[0];
    assert_eq!(hand.score(), 21);
    assert!(hand.doubled && hand.finished && !hand.busted);
    assert_eq!(hand.status(), HandStatus::Stand);
}

#[test]
fn double_down_requires_funds() {
    let options = fast_options().with_starting_bankroll(10);
    let mut table = Table::new(options, 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Spades, 4),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    table.deal().unwrap();
    assert!(!table.can_double_down());
    assert_eq!(
        table.double_down().unwrap_err(),
        ActionError::InsufficientFunds
    );
}

#[test]
fn split_funds_a_second_identical_bet() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // dealer hole
            card(Suit::Hearts, 2),   // replacement for the original hand
            card(Suit::Clubs, 3),    // replacement for the new hand
        ],
    );

    table.deal().unwrap();
    assert!(table.can_split());
    table.split().unwrap();

    assert_eq!(table.player_hands.len(), 2);
    assert_eq!(table.split_count(), 1);
    assert_eq!(table.bankroll, 980);
    // Cursor still points at the original hand.
    assert_eq!(table.active_hand(), 0);
    assert_eq!(table.player_hands[0].cards()[1].rank, 2);
    assert_eq!(table.player_hands[1].cards()[0].rank, 8);
    assert_eq!(table.player_hands[1].cards()[1].rank, 3);
    assert_eq!(table.player_hands[0].bet, 10);
    assert_eq!(table.player_hands[1].bet, 10);
}

#[test]
fn split_limit_caps_at_four_hands() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    // Eights all the way down so every resulting hand stays a pair.
    let eight = card(Suit::Hearts, 8);
    stack_deck(
        &mut table,
        &[
            eight,
            eight,
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // dealer hole
            eight,
            eight,
            eight,
            eight,
            eight,
            eight,
        ],
    );

    table.deal().unwrap();
    table.split().unwrap();
    table.split().unwrap();
    table.split().unwrap();

    assert_eq!(table.player_hands.len(), 4);
    assert_eq!(table.split_count(), 3);
    assert!(!table.can_split());
    assert_eq!(table.split().unwrap_err(), ActionError::MaxSplitsReached);
    assert_eq!(table.bankroll, 960);
}

#[test]
fn split_round_reports_per_hand_results() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 9), // dealer hole -> 19, stands
            card(Suit::Hearts, 3),   // replacement, hand 1 -> 11
            card(Suit::Hearts, 5),   // replacement, hand 2 -> 13
            card(Suit::Clubs, 10),   // hand 1 hit -> 21, auto-stand
            card(Suit::Spades, 10),  // hand 2 hit -> 23, bust
        ],
    );

    table.deal().unwrap();
    table.split().unwrap();
    table.hit().unwrap();
    assert_eq!(table.active_hand(), 1);
    table.hit().unwrap();
    assert_eq!(table.phase(), Phase::DealerTurn);

    run_dealer(&mut table);
    assert_eq!(table.message, "Hand 1: Win | Hand 2: Bust");
    // 980 after funding both bets, plus 20 for the winning hand.
    assert_eq!(table.bankroll, 1000);

    let result = table.round_result().unwrap();
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[1].outcome, HandOutcome::Bust);
}

#[test]
fn dealer_pacing_takes_one_step_per_delay() {
    let options = TableOptions::default().with_dealer_delay(Duration::from_secs(1));
    let mut table = Table::new(options, 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 6), // dealer hole -> 16
            card(Suit::Hearts, 5),   // dealer draw -> 21
        ],
    );

    table.deal().unwrap();
    table.stand().unwrap();

    let t0 = Instant::now();
    // First tick only arms the timer.
    table.tick(t0).unwrap();
    assert!(table.hole_card_hidden());

    // Half the delay: nothing visible happens.
    table.tick(t0 + Duration::from_millis(500)).unwrap();
    assert!(table.hole_card_hidden());

    table.tick(t0 + Duration::from_secs(1)).unwrap();
    assert!(!table.hole_card_hidden());
    assert_eq!(table.dealer_hand.len(), 2);

    // Reveal reset the timer, so the draw waits for another full delay.
    table.tick(t0 + Duration::from_millis(1500)).unwrap();
    assert_eq!(table.dealer_hand.len(), 2);

    table.tick(t0 + Duration::from_secs(2)).unwrap();
    assert_eq!(table.dealer_hand.len(), 3);
    assert_eq!(table.phase(), Phase::DealerTurn);

    // At 21 the next tick settles without waiting for the delay.
    table.tick(t0 + Duration::from_millis(2001)).unwrap();
    assert_eq!(table.phase(), Phase::RoundComplete);
    assert_eq!(table.message, "Lose");
}

#[test]
fn tick_is_a_noop_outside_dealer_turn() {
    let mut table = Table::new(fast_options(), 1);
    table.tick(Instant::now()).unwrap();
    assert_eq!(table.phase(), Phase::Betting);
}

#[test]
fn actions_are_rejected_in_the_wrong_phase() {
    let mut table = Table::new(fast_options(), 1);
    assert!(!table.can_hit());
    assert!(!table.can_stand());
    assert!(!table.can_double_down());
    assert!(!table.can_split());
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.new_round().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn non_pair_cannot_split() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 9),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    table.deal().unwrap();
    assert!(!table.can_split());
    assert_eq!(table.split().unwrap_err(), ActionError::CannotSplit);
}

#[test]
fn new_round_resets_state_and_reshuffles_a_low_deck() {
    let mut table = Table::new(fast_options(), 1);
    table.place_bet(10).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 8),   // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Diamonds, 7), // dealer hole -> 17
        ],
    );

    table.deal().unwrap();
    table.stand().unwrap();
    run_dealer(&mut table);
    assert_eq!(table.phase(), Phase::RoundComplete);

    // Below the threshold of 20, so the next round gets a fresh deck.
    assert_eq!(table.cards_remaining(), 0);
    table.new_round().unwrap();

    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert!(table.player_hands.is_empty());
    assert!(table.dealer_hand.is_empty());
    assert_eq!(table.current_bet(), 0);
    assert_eq!(table.split_count(), 0);
    assert!(table.message.is_empty());
    assert!(table.round_result().is_none());
    assert!(table.hole_card_hidden());
}

#[test]
fn game_over_once_the_bankroll_is_gone() {
    let options = fast_options().with_starting_bankroll(100);
    let mut table = Table::new(options, 1);
    table.place_bet(100).unwrap();

    stack_deck(
        &mut table,
        &[
            card(Suit::Hearts, 10),   // player
            card(Suit::Spades, 9),    // player -> 19
            card(Suit::Clubs, 10),    // dealer up
            card(Suit::Diamonds, 10), // dealer hole -> 20
        ],
    );

    table.deal().unwrap();
    table.stand().unwrap();
    run_dealer(&mut table);
    assert_eq!(table.message, "Lose");
    assert_eq!(table.bankroll, 0);
    // Not over yet: the round is still on the table.
    assert!(!table.is_game_over());

    table.new_round().unwrap();
    assert!(table.is_game_over());
    assert_eq!(table.place_bet(5).unwrap_err(), BetError::InsufficientFunds);
}
