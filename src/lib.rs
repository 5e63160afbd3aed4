//! A single-player blackjack table engine with frame-paced dealer play.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! betting, the initial deal, hit/stand/double-down/split, automated dealer
//! play, and settlement. It is built for a frame-based driver: the driver
//! forwards input to the action methods, calls [`Table::tick`] once per
//! frame with a monotonic timestamp to pace the dealer, and reads the
//! table's state back to render.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use twentyone::{Phase, Table, TableOptions};
//!
//! let options = TableOptions::default().with_dealer_delay(Duration::ZERO);
//! let mut table = Table::new(options, 42);
//! table.place_bet(50)?;
//! table.deal()?;
//!
//! while table.phase() == Phase::Playing {
//!     table.stand()?;
//! }
//! while table.phase() == Phase::DealerTurn {
//!     table.tick(Instant::now())?;
//! }
//! println!("{}", table.message);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, DealerError, HandError, RoundError};
pub use hand::{Hand, HandStatus};
pub use options::TableOptions;
pub use result::{HandOutcome, HandResult, RoundResult};
pub use table::{Phase, Table};
