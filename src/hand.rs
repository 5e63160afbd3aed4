//! Hand representation and scoring.

use core::fmt;

use crate::card::Card;
use crate::error::HandError;

/// Display status of a hand, derived from its flags.
///
/// When several flags are set at once (a doubled hand that auto-stood on
/// 21 is both `doubled` and `finished`), the strongest fact wins:
/// bust > blackjack > stand > doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is still taking actions.
    Playing,
    /// Bet was doubled; one more card ends the hand.
    Doubled,
    /// Player has stood.
    Stand,
    /// Natural blackjack on the initial deal.
    Blackjack,
    /// Hand went over 21.
    Bust,
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "",
            Self::Doubled => "DOUBLED",
            Self::Stand => "STAND",
            Self::Blackjack => "BLACKJACK",
            Self::Bust => "BUST",
        };
        f.write_str(label)
    }
}

/// A hand of cards with its wager and round-lifecycle flags.
///
/// The dealer's hand is simply a `Hand` with a zero bet. Flags are set by
/// the table engine as the round progresses; the score is always derived
/// from the cards, never stored.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    /// Amount wagered on this hand.
    pub bet: usize,
    /// Whether the bet was doubled down.
    pub doubled: bool,
    /// Whether the hand takes no further actions this round.
    pub finished: bool,
    /// Whether the hand went over 21.
    pub busted: bool,
    /// Whether the hand was a natural blackjack on the initial deal.
    ///
    /// Only the initial deal ever sets this; a split hand that reaches a
    /// two-card 21 wins even money, not 3:2.
    pub blackjack: bool,
}

impl Hand {
    /// Creates an empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            doubled: false,
            finished: false,
            busted: false,
            blackjack: false,
        }
    }

    fn seeded(card: Card, bet: usize) -> Self {
        let mut hand = Self::new(bet);
        hand.cards.push(card);
        hand
    }

    /// Appends a card. Flags are untouched; the engine decides what a new
    /// card means for the hand's lifecycle.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best blackjack score for the hand.
    ///
    /// Non-aces are summed first, then each ace counts 11 unless that would
    /// bust the running total, in which case it counts 1. The greedy pass is
    /// order-independent: `{ace, ace, 9}` scores 9 + 11 + 1 = 21.
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut score: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.is_ace() {
                aces += 1;
            } else {
                score = score.saturating_add(card.value());
            }
        }

        for _ in 0..aces {
            // 11 fits exactly when the running total is 10 or less.
            if score <= 10 {
                score += 11;
            } else {
                score = score.saturating_add(1);
            }
        }

        score
    }

    /// Returns whether the score is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is exactly two cards scoring 21.
    ///
    /// Meaningful as a *natural* only right after the initial deal; the
    /// engine records naturals in the [`blackjack`](Self::blackjack) flag
    /// and settles from the flag, not from this predicate.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns whether the hand is a splittable pair.
    ///
    /// Pairing is by numeric value, not rank: a ten and a jack split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].value() == self.cards[1].value()
    }

    /// Returns whether the hand may double down given the bankroll
    /// available to fund the extra wager.
    #[must_use]
    pub fn can_double_down(&self, available: usize) -> bool {
        self.cards.len() == 2 && !self.doubled && !self.finished && self.bet <= available
    }

    /// Doubles the bet and marks the hand doubled.
    ///
    /// Returns the additional amount wagered (equal to the prior bet); the
    /// caller deducts it from the bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CannotDouble`] if the hand is not eligible.
    pub fn double_down(&mut self) -> Result<usize, HandError> {
        if !self.can_double_down(self.bet) {
            return Err(HandError::CannotDouble);
        }

        let additional = self.bet;
        self.bet *= 2;
        self.doubled = true;
        Ok(additional)
    }

    /// Splits the pair: removes the second card and returns a new one-card
    /// hand carrying the same bet. This hand keeps its first card and its
    /// bet unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CannotSplit`] if the hand is not a pair.
    pub fn split(&mut self) -> Result<Self, HandError> {
        if !self.can_split() {
            return Err(HandError::CannotSplit);
        }

        // can_split guarantees exactly two cards.
        let second = self.cards.pop().ok_or(HandError::CannotSplit)?;
        Ok(Self::seeded(second, self.bet))
    }

    /// Derived display status for renderers.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        if self.busted {
            HandStatus::Bust
        } else if self.blackjack {
            HandStatus::Blackjack
        } else if self.finished {
            HandStatus::Stand
        } else if self.doubled {
            HandStatus::Doubled
        } else {
            HandStatus::Playing
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(0)
    }
}
