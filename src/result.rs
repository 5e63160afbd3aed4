//! Round settlement records.

use core::fmt;
use std::fmt::Write as _;

/// Outcome of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Hand went over 21; the stake was forfeited when wagered.
    Bust,
    /// Natural blackjack against a non-blackjack dealer; pays 3:2.
    Blackjack,
    /// Dealer busted.
    DealerBust,
    /// Hand beat the dealer's score; pays 1:1.
    Win,
    /// Dealer's score was higher.
    Lose,
    /// Tie; the stake is returned.
    Push,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Bust => "Bust",
            Self::Blackjack => "Blackjack!",
            Self::DealerBust => "Win (Dealer Bust)",
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Push => "Push",
        };
        f.write_str(text)
    }
}

/// Settlement record for one player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Position of the hand in the round (0 = original hand).
    pub hand_index: usize,
    /// The outcome.
    pub outcome: HandOutcome,
    /// The final bet on the hand (doubled bets included).
    pub bet: usize,
    /// Amount credited back to the bankroll (stake included on a win or push).
    pub payout: usize,
    /// The hand's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

/// Settlement record for a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Per-hand results, in table order.
    pub hands: Vec<HandResult>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Total amount credited to the bankroll.
    pub total_payout: usize,
}

impl RoundResult {
    /// Player-facing summary: the bare outcome for a single hand,
    /// `"Hand 1: ... | Hand 2: ..."` when the round had splits.
    #[must_use]
    pub fn message(&self) -> String {
        if let [only] = self.hands.as_slice() {
            return only.outcome.to_string();
        }

        let mut message = String::new();
        for (i, hand) in self.hands.iter().enumerate() {
            if i > 0 {
                message.push_str(" | ");
            }
            let _ = write!(message, "Hand {}: {}", hand.hand_index + 1, hand.outcome);
        }
        message
    }
}
