//! Table configuration options.

use core::time::Duration;

/// Configuration for a blackjack table.
///
/// These are table constants rather than rule variants: payouts, dealer
/// stand threshold, and the action set are fixed.
///
/// ```
/// use core::time::Duration;
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_bankroll(500)
///     .with_dealer_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Bankroll the player starts with.
    pub starting_bankroll: usize,
    /// Pause between visible dealer actions (hole-card reveal, each draw).
    pub dealer_delay: Duration,
    /// When fewer cards than this remain at the start of a round, the deck
    /// is replaced with a fresh shuffle.
    pub reshuffle_threshold: usize,
    /// Maximum number of player hands, counting the original (so at most
    /// `max_hands - 1` splits per round).
    pub max_hands: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            dealer_delay: Duration::from_secs(1),
            reshuffle_threshold: 20,
            max_hands: 4,
        }
    }
}

impl TableOptions {
    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the pause between visible dealer actions.
    ///
    /// ```
    /// use core::time::Duration;
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_delay(Duration::ZERO);
    /// assert_eq!(options.dealer_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }

    /// Sets the reshuffle threshold.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the maximum number of player hands per round.
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }
}
