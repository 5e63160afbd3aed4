//! A shuffled single deck of 52 cards.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered stack of cards. Drawing pops from the top.
///
/// A deck is built with every suit/rank combination exactly once and
/// shuffled uniformly at creation. After the shuffle the order carries no
/// meaning beyond "each card is drawn exactly once".
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a fresh 52-card deck shuffled with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck with an explicit card order. The **last** card in
    /// `cards` is drawn first.
    ///
    /// Intended for scripted rounds and tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card, or `None` when the deck is empty.
    ///
    /// An empty draw is a programming error under the engine's reshuffle
    /// policy; the caller turns it into a hard error rather than ignoring it.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether fewer than `threshold` cards remain.
    #[must_use]
    pub fn is_low(&self, threshold: usize) -> bool {
        self.cards.len() < threshold
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
