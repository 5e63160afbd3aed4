use crate::card::Card;
use crate::error::ActionError;

use super::{Phase, Table};

impl Table {
    /// Returns whether the active hand can take another card.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.phase == Phase::Playing && self.current_hand().is_some_and(|hand| !hand.finished)
    }

    /// Returns whether the active hand can stand. Identical to
    /// [`can_hit`](Self::can_hit).
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.can_hit()
    }

    /// Returns whether the active hand can double down, bankroll included.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.phase == Phase::Playing
            && self
                .current_hand()
                .is_some_and(|hand| hand.can_double_down(self.bankroll))
    }

    /// Returns whether the active hand can split: a pair, the split limit
    /// not yet reached, and enough bankroll to fund the new hand's bet.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.phase == Phase::Playing
            && self.split_count + 1 < self.options.max_hands
            && self
                .current_hand()
                .is_some_and(|hand| hand.can_split() && hand.bet <= self.bankroll)
    }

    fn ensure_active_hand(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Playing {
            return Err(ActionError::InvalidState);
        }
        let hand = self.current_hand().ok_or(ActionError::NoActiveHand)?;
        if hand.finished {
            return Err(ActionError::HandFinished);
        }
        Ok(())
    }

    /// Draws one card into the active hand and returns it.
    ///
    /// A bust marks the hand busted and finished; reaching exactly 21
    /// stands automatically; a doubled hand finishes after this one card.
    /// In each of those cases play advances to the next hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no unfinished hand is active in the playing
    /// phase, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_active_hand()?;

        let card = self.deck.draw().ok_or(ActionError::EmptyDeck)?;
        let hand = &mut self.player_hands[self.active_hand];
        hand.add_card(card);

        if hand.is_bust() {
            hand.busted = true;
            hand.finished = true;
            self.next_hand();
        } else if hand.score() == 21 {
            // Nothing left to decide; stand automatically.
            hand.finished = true;
            self.next_hand();
        } else if hand.doubled {
            // Double-down allows exactly one card.
            hand.finished = true;
            self.next_hand();
        }

        Ok(card)
    }

    /// Finishes the active hand and advances play.
    ///
    /// # Errors
    ///
    /// Returns an error if no unfinished hand is active in the playing
    /// phase.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_active_hand()?;

        self.player_hands[self.active_hand].finished = true;
        self.next_hand();
        Ok(())
    }

    /// Doubles the active hand's bet, deducting the extra wager from the
    /// bankroll, then draws its one final card. Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error if no unfinished hand is active, the hand is not
    /// eligible to double, the bankroll cannot cover the extra wager, or
    /// the deck is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_active_hand()?;

        let hand = &self.player_hands[self.active_hand];
        if hand.bet > self.bankroll {
            return Err(ActionError::InsufficientFunds);
        }
        if !hand.can_double_down(self.bankroll) {
            return Err(ActionError::CannotDouble);
        }

        let additional = self.player_hands[self.active_hand].double_down()?;
        self.bankroll -= additional;

        // The doubled flag makes this hit finish the hand.
        self.hit()
    }

    /// Splits the active hand's pair into two hands, funding the new hand
    /// with an identical bet from the bankroll. One replacement card is
    /// drawn into each hand and the new hand is inserted immediately after
    /// the active one, so the cursor keeps pointing at the original hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no unfinished hand is active, the hand is not a
    /// pair, the split limit is reached, the bankroll cannot fund the new
    /// bet, or the deck is empty.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_active_hand()?;

        if self.split_count + 1 >= self.options.max_hands {
            return Err(ActionError::MaxSplitsReached);
        }

        let hand = &self.player_hands[self.active_hand];
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }
        if hand.bet > self.bankroll {
            return Err(ActionError::InsufficientFunds);
        }

        // Draw both replacement cards before mutating anything so an empty
        // deck cannot leave a half-split round behind.
        let first = self.deck.draw().ok_or(ActionError::EmptyDeck)?;
        let second = self.deck.draw().ok_or(ActionError::EmptyDeck)?;

        let hand = &mut self.player_hands[self.active_hand];
        let mut new_hand = hand.split()?;
        self.bankroll -= new_hand.bet;
        hand.add_card(first);
        new_hand.add_card(second);

        self.player_hands.insert(self.active_hand + 1, new_hand);
        self.split_count += 1;

        Ok(())
    }

    /// Moves the cursor to the next hand; past the last hand, the dealer's
    /// turn begins with the pacing timer disarmed (the first tick arms it).
    fn next_hand(&mut self) {
        self.active_hand += 1;
        if self.active_hand >= self.player_hands.len() {
            self.phase = Phase::DealerTurn;
            self.dealer_timer = None;
        }
    }
}
