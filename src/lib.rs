//! A text-driven blackjack table with optional `no_std` support.
//!
//! One to seven players share a multi-deck [`Shoe`] with the dealer and play
//! rounds until every one of them is broke. [`Game`] runs the round: bets,
//! the deal, blackjack payouts, split / double down / hit / stand, the
//! dealer's fixed policy, and settlement. Every question asked and every line
//! of narration goes through a [`Prompt`] you supply.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Game, Prompt, TableOptions};
//!
//! struct Cautious;
//!
//! impl Prompt for Cautious {
//!     fn ask_integer(&mut self, _prompt: &str, min: usize, _max: usize) -> usize {
//!         min
//!     }
//!
//!     fn ask_choice(&mut self, _prompt: &str, allowed: &[char]) -> char {
//!         *allowed.last().unwrap_or(&'s')
//!     }
//!
//!     fn notify(&mut self, message: &str) {
//!         println!("{message}");
//!     }
//! }
//!
//! let mut game = Game::new(TableOptions::default(), 42).unwrap();
//! let rounds = game.play(&mut Cautious).unwrap();
//! println!("{rounds} rounds played");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod prompt;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use error::{ActionError, BetError, CardError, GameError, OptionsError, ShoeError};
pub use game::{Game, GameState, blackjack_profit};
pub use hand::Hand;
pub use options::{MutualBlackjack, TableOptions};
pub use player::{Dealer, Human, Participant, STARTING_MONEY};
pub use prompt::Prompt;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
