//! Game engine and round flow.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::GameError;
use crate::options::TableOptions;
use crate::player::{Dealer, Human, Participant};
use crate::prompt::Prompt;
use crate::result::{PlayerResult, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// Profit on a winning blackjack: 3:2, rounded down to whole money.
///
/// ```
/// use bjtable::blackjack_profit;
///
/// assert_eq!(blackjack_profit(10), 15);
/// assert_eq!(blackjack_profit(1), 1);
/// ```
#[must_use]
pub const fn blackjack_profit(bet: usize) -> usize {
    bet.saturating_add(bet / 2)
}

/// A blackjack table that plays rounds until every player is broke.
///
/// The game owns the shoe, the players and the dealer. Every question and
/// every piece of narration goes through the [`Prompt`] passed to
/// [`Game::play_round`] or [`Game::play`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Table options.
    options: TableOptions,
    /// Players still at the table, in seat order.
    players: Vec<Human>,
    /// The dealer.
    dealer: Dealer,
    /// Current engine state.
    state: GameState,
    /// Rounds that reached the betting step.
    rounds_played: usize,
    /// Per-player results collected during the current round.
    results: Vec<PlayerResult>,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default().with_players(2), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.players()[0].money(), 1000);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, GameError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, seed)?;
        Ok(Self::seat(options, shoe))
    }

    /// Creates a new game around a prepared shoe.
    ///
    /// The deck count in `options` is ignored in favour of the shoe's own cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    pub fn with_shoe(options: TableOptions, shoe: Shoe) -> Result<Self, GameError> {
        options.validate()?;
        Ok(Self::seat(options, shoe))
    }

    fn seat(options: TableOptions, shoe: Shoe) -> Self {
        let players = (1..=options.players)
            .map(|seat| Human::new(format!("Player {seat}"), options.starting_money))
            .collect();

        Self {
            shoe,
            options,
            players,
            dealer: Dealer::new(),
            state: GameState::StartRound,
            rounds_played: 0,
            results: Vec::new(),
        }
    }

    /// Plays rounds until every player is bankrupt.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns an error if a round breaks an invariant; see [`Game::play_round`].
    pub fn play(&mut self, prompt: &mut dyn Prompt) -> Result<usize, GameError> {
        while self.play_round(prompt)?.is_some() {}
        Ok(self.rounds_played)
    }

    /// Plays one full round.
    ///
    /// Returns `None` without dealing once no player has money left.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out of cards or a hand is acted on
    /// against its rules. Either leaves the round unfinished.
    pub fn play_round(
        &mut self,
        prompt: &mut dyn Prompt,
    ) -> Result<Option<RoundResult>, GameError> {
        if self.state == GameState::GameOver {
            return Ok(None);
        }

        self.state = GameState::StartRound;
        prompt.notify("New round starting!");
        self.start_round();

        self.state = GameState::RemoveBankrupt;
        if !self.remove_bankrupt(prompt) {
            self.state = GameState::GameOver;
            log::info!("game over after {} rounds", self.rounds_played);
            return Ok(None);
        }

        self.rounds_played += 1;
        log::info!(
            "round {} starting with {} players, {} cards before reshuffle",
            self.rounds_played,
            self.players.len(),
            self.shoe.remaining()
        );
        self.results = self
            .players
            .iter()
            .map(|player| PlayerResult::new(String::from(player.name())))
            .collect();

        self.state = GameState::TakeBets;
        self.take_bets(prompt)?;

        self.state = GameState::DealInitial;
        self.deal_initial(prompt)?;

        self.state = GameState::CheckBlackjacks;
        let dealer_blackjack = self.check_blackjacks(prompt)?;

        if !dealer_blackjack {
            self.state = GameState::PlayerActions;
            self.play_hands(prompt)?;

            self.state = GameState::DealerPlay;
            self.dealer_play()?;
        }

        self.state = GameState::Settlement;
        let result = self.settle(prompt)?;

        for player in &self.players {
            prompt.notify(&format!("{player}"));
        }

        self.state = GameState::StartRound;
        Ok(Some(result))
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current engine state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether every player has gone broke.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the players still at the table.
    #[must_use]
    pub fn players(&self) -> &[Human] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of rounds that reached the betting step.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }
}
