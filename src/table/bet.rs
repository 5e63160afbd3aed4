use crate::error::{BetError, DealError};
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Phase, Table};

impl Table {
    /// Adds `amount` to the bet for the upcoming round and deducts it from
    /// the bankroll. Bets accumulate across calls until the deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting phase or the
    /// amount exceeds the bankroll.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.current_bet += amount;
        Ok(())
    }

    /// Returns whether the initial cards can be dealt.
    #[must_use]
    pub const fn can_deal(&self) -> bool {
        matches!(self.phase, Phase::Betting) && self.current_bet > 0
    }

    /// Deals two cards to a fresh player hand wagering the accumulated bet,
    /// then two to the dealer, and moves to the playing phase.
    ///
    /// A natural player blackjack short-circuits the round: the hole card
    /// is revealed, the payout (or push) is credited immediately, and the
    /// round completes without the dealer ever playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the betting phase, no bet
    /// has been placed, or the deck runs out of cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Betting {
            return Err(DealError::InvalidState);
        }
        if self.current_bet == 0 {
            return Err(DealError::NoBet);
        }

        let mut player = Hand::new(self.current_bet);
        player.add_card(self.deck.draw().ok_or(DealError::EmptyDeck)?);
        player.add_card(self.deck.draw().ok_or(DealError::EmptyDeck)?);

        let mut dealer = Hand::new(0);
        dealer.add_card(self.deck.draw().ok_or(DealError::EmptyDeck)?);
        dealer.add_card(self.deck.draw().ok_or(DealError::EmptyDeck)?);

        self.player_hands = vec![player];
        self.dealer_hand = dealer;
        self.active_hand = 0;
        self.split_count = 0;
        self.dealer_revealed = false;
        self.dealer_timer = None;
        self.message.clear();
        self.round_result = None;
        self.phase = Phase::Playing;

        if self.player_hands[0].is_blackjack() {
            self.settle_natural();
        }

        Ok(())
    }

    /// Immediate settlement for a natural blackjack on the initial deal.
    fn settle_natural(&mut self) {
        self.dealer_revealed = true;

        let bet = self.current_bet;
        let (outcome, payout, message) = if self.dealer_hand.is_blackjack() {
            (HandOutcome::Push, bet, "Push! Both have blackjack!")
        } else {
            // 3:2 on the bet plus the returned stake, floored.
            (HandOutcome::Blackjack, bet * 5 / 2, "Blackjack! You win!")
        };

        self.bankroll += payout;
        self.player_hands[0].blackjack = true;

        let dealer_score = self.dealer_hand.score();
        self.round_result = Some(RoundResult {
            hands: vec![HandResult {
                hand_index: 0,
                outcome,
                bet,
                payout,
                player_score: 21,
                dealer_score,
            }],
            dealer_score,
            dealer_bust: false,
            total_payout: payout,
        });
        self.message = message.to_owned();
        self.phase = Phase::RoundComplete;
    }
}
