//! Table engine and round lifecycle.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::Phase;

/// A single-player blackjack table.
///
/// The table owns the deck, the dealer's hand, the player's hands, and the
/// bankroll, and is the only component that mutates them. A driver loop
/// forwards player input to the action methods and calls [`Table::tick`]
/// once per frame with the current monotonic time; everything else is read
/// back for rendering.
#[derive(Debug)]
pub struct Table {
    /// Cards for the current and upcoming rounds.
    pub deck: Deck,
    /// Table options.
    pub options: TableOptions,
    /// The dealer's hand (always a zero bet).
    pub dealer_hand: Hand,
    /// Player hands in table order; more than one after splits.
    pub player_hands: Vec<Hand>,
    /// Money not currently wagered.
    pub bankroll: usize,
    /// Player-facing result message for the current round.
    pub message: String,
    /// Index of the hand currently taking actions.
    active_hand: usize,
    /// Bet accumulated during the betting phase.
    current_bet: usize,
    /// Splits performed this round.
    split_count: usize,
    phase: Phase,
    /// Whether the dealer's hole card has been revealed.
    dealer_revealed: bool,
    /// Time of the last visible dealer action; `None` until the first tick
    /// of the dealer's turn arms it.
    dealer_timer: Option<Instant>,
    round_result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with a freshly shuffled deck.
    ///
    /// The seed fixes the shuffle order, which makes whole games
    /// reproducible.
    ///
    /// ```
    /// use twentyone::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.bankroll, 1000);
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck,
            bankroll: options.starting_bankroll,
            options,
            dealer_hand: Hand::new(0),
            player_hands: Vec::new(),
            message: String::new(),
            active_hand: 0,
            current_bet: 0,
            split_count: 0,
            phase: Phase::Betting,
            dealer_revealed: false,
            dealer_timer: None,
            round_result: None,
            rng,
        }
    }

    /// Current round phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the hand currently taking actions.
    #[must_use]
    pub const fn active_hand(&self) -> usize {
        self.active_hand
    }

    /// The hand currently taking actions, or `None` once every hand has
    /// finished.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.player_hands.get(self.active_hand)
    }

    /// Bet accumulated during the betting phase.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Number of splits performed this round.
    #[must_use]
    pub const fn split_count(&self) -> usize {
        self.split_count
    }

    /// Whether the dealer's hole card should still be drawn face-down.
    #[must_use]
    pub const fn hole_card_hidden(&self) -> bool {
        !self.dealer_revealed
    }

    /// Settlement record of the last completed round.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.round_result.as_ref()
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns whether the game is permanently over: nothing left to wager
    /// and no round in flight.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.bankroll == 0 && self.current_bet == 0 && matches!(self.phase, Phase::Betting)
    }

    /// Resets the table for the next round and returns to the betting
    /// phase. The deck is replaced with a fresh shuffle when it has dropped
    /// below the reshuffle threshold.
    ///
    /// # Errors
    ///
    /// Returns an error unless the current round is complete.
    pub fn new_round(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::RoundComplete {
            return Err(RoundError::InvalidState);
        }

        if self.deck.is_low(self.options.reshuffle_threshold) {
            self.deck = Deck::shuffled(&mut self.rng);
        }

        self.player_hands.clear();
        self.dealer_hand = Hand::new(0);
        self.active_hand = 0;
        self.current_bet = 0;
        self.split_count = 0;
        self.dealer_revealed = false;
        self.dealer_timer = None;
        self.message.clear();
        self.round_result = None;
        self.phase = Phase::Betting;

        Ok(())
    }
}
