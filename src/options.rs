//! Table configuration options.

use crate::error::OptionsError;
use crate::player::STARTING_MONEY;
use crate::shoe::{MAX_DECKS, MIN_DECKS};

/// Smallest number of players at a table.
pub const MIN_PLAYERS: u8 = 1;

/// Largest number of players at a table.
pub const MAX_PLAYERS: u8 = 7;

/// Largest starting bankroll. A blackjack paid on it still fits in `usize`.
pub const MAX_STARTING_MONEY: usize = usize::MAX / 4;

/// How a player blackjack fares against a dealer blackjack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[non_exhaustive]
pub enum MutualBlackjack {
    /// The wager is returned.
    #[default]
    Push,
    /// The dealer's blackjack wins; the wager is lost.
    DealerWins,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{MutualBlackjack, TableOptions};
///
/// let options = TableOptions::default()
///     .with_players(3)
///     .with_decks(6)
///     .with_mutual_blackjack(MutualBlackjack::DealerWins);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of human players.
    pub players: u8,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Money each player starts with.
    pub starting_money: usize,
    /// Outcome when both the player and the dealer hold blackjack.
    pub mutual_blackjack: MutualBlackjack,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 1,
            decks: 1,
            starting_money: STARTING_MONEY,
            mutual_blackjack: MutualBlackjack::Push,
        }
    }
}

impl TableOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(7);
    /// assert_eq!(options.players, 7);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets how mutual blackjacks are settled.
    #[must_use]
    pub const fn with_mutual_blackjack(mut self, rule: MutualBlackjack) -> Self {
        self.mutual_blackjack = rule;
        self
    }

    /// Checks every option against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first option found out of range.
    ///
    /// ```
    /// use bjtable::{OptionsError, TableOptions};
    ///
    /// let options = TableOptions::default().with_players(8);
    /// assert_eq!(options.validate(), Err(OptionsError::InvalidPlayerCount(8)));
    /// ```
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.players < MIN_PLAYERS || self.players > MAX_PLAYERS {
            return Err(OptionsError::InvalidPlayerCount(self.players));
        }
        if self.decks < MIN_DECKS || self.decks > MAX_DECKS {
            return Err(OptionsError::InvalidDeckCount(self.decks));
        }
        if self.starting_money == 0 {
            return Err(OptionsError::ZeroStartingMoney);
        }
        if self.starting_money > MAX_STARTING_MONEY {
            return Err(OptionsError::ExcessiveStartingMoney(self.starting_money));
        }
        Ok(())
    }
}
