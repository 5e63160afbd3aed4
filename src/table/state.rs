//! Round phase.

/// Phase of the current round.
///
/// Transitions are strictly linear: `Betting` → `Playing` → `DealerTurn` →
/// `RoundComplete` → `Betting` of the next round. "Game over" is not a
/// stored phase; it is derived by [`Table::is_game_over`](crate::Table::is_game_over)
/// once the bankroll can no longer fund a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player actions on the active hand.
    Playing,
    /// Automated dealer play, paced by [`Table::tick`](crate::Table::tick).
    DealerTurn,
    /// Round settled; results are available.
    RoundComplete,
}
