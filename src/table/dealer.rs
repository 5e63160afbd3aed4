use std::time::Instant;

use crate::error::DealerError;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Phase, Table};

impl Table {
    /// Advances automated dealer play by at most one visible step.
    ///
    /// Call once per frame with the current monotonic time; outside the
    /// dealer's turn this is a no-op. The first tick of the turn arms the
    /// pacing timer. After each elapsed delay the dealer takes one step:
    /// first the hole-card reveal, then one draw per interval while below
    /// 17. At 17 or higher the round settles. One card per interval keeps
    /// the reveal animatable; nothing here blocks or sleeps.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw.
    pub fn tick(&mut self, now: Instant) -> Result<(), DealerError> {
        if self.phase != Phase::DealerTurn {
            return Ok(());
        }

        let Some(last_action) = self.dealer_timer else {
            self.dealer_timer = Some(now);
            return Ok(());
        };
        let delay_elapsed = now.duration_since(last_action) >= self.options.dealer_delay;

        if !self.dealer_revealed {
            if delay_elapsed {
                self.dealer_revealed = true;
                self.dealer_timer = Some(now);
            }
        } else if self.dealer_hand.score() < 17 {
            if delay_elapsed {
                let card = self.deck.draw().ok_or(DealerError::EmptyDeck)?;
                self.dealer_hand.add_card(card);
                self.dealer_timer = Some(now);
            }
        } else {
            self.settle();
        }

        Ok(())
    }

    /// Settles every player hand against the dealer and completes the
    /// round.
    fn settle(&mut self) {
        let dealer_score = self.dealer_hand.score();
        let dealer_bust = self.dealer_hand.is_bust();
        let dealer_blackjack = self.dealer_hand.is_blackjack();

        let mut hands = Vec::with_capacity(self.player_hands.len());
        let mut total_payout: usize = 0;

        for (hand_index, hand) in self.player_hands.iter().enumerate() {
            let player_score = hand.score();

            let (outcome, payout) = if hand.busted {
                // Stake was already forfeited when wagered.
                (HandOutcome::Bust, 0)
            } else if hand.blackjack && !dealer_blackjack {
                (HandOutcome::Blackjack, hand.bet * 5 / 2)
            } else if dealer_bust {
                (HandOutcome::DealerBust, hand.bet * 2)
            } else if dealer_score > player_score {
                (HandOutcome::Lose, 0)
            } else if dealer_score < player_score {
                (HandOutcome::Win, hand.bet * 2)
            } else {
                (HandOutcome::Push, hand.bet)
            };

            total_payout += payout;
            hands.push(HandResult {
                hand_index,
                outcome,
                bet: hand.bet,
                payout,
                player_score,
                dealer_score,
            });
        }

        self.bankroll += total_payout;

        let result = RoundResult {
            hands,
            dealer_score,
            dealer_bust,
            total_payout,
        };
        self.message = result.message();
        self.round_result = Some(result);
        self.phase = Phase::RoundComplete;
    }
}
