//! The multi-deck shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, deck};
use crate::error::ShoeError;

/// Smallest number of decks a shoe may hold.
pub const MIN_DECKS: u8 = 1;

/// Largest number of decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;

/// An ordered, shuffled sequence of cards shared by the whole table.
///
/// The shoe is never rebuilt. Cards before the cursor have been dealt, cards
/// after it are still to come. The last `dealt` cards before the cursor are
/// the ones in play this round: when the cursor reaches the end they are
/// moved to the front and everything else is shuffled back in behind them.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
    dealt: usize,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe holding `decks` full decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidDeckCount`] if `decks` is outside `1..=8`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Shoe;
    ///
    /// let shoe = Shoe::new(2, 42).unwrap();
    /// assert_eq!(shoe.len(), 104);
    /// assert_eq!(shoe.remaining(), 104);
    /// ```
    pub fn new(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        if !(MIN_DECKS..=MAX_DECKS).contains(&decks) {
            return Err(ShoeError::InvalidDeckCount(decks));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            cards.extend(deck());
        }

        cards.shuffle(&mut rng);
        log::debug!("built a {decks}-deck shoe ({} cards)", cards.len());

        Ok(Self {
            cards,
            cursor: 0,
            dealt: 0,
            reshuffles: 0,
            rng,
        })
    }

    /// Creates a shoe that deals `cards` in exactly the given order.
    ///
    /// The seed only matters once the stack runs out and the shoe reshuffles.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if `cards` is empty.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Result<Self, ShoeError> {
        if cards.is_empty() {
            return Err(ShoeError::Empty);
        }

        Ok(Self {
            cards,
            cursor: 0,
            dealt: 0,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Marks the start of a round: no cards are in play.
    pub const fn start_deal(&mut self) {
        self.dealt = 0;
    }

    /// Deals the next card.
    ///
    /// If this draw takes the last undealt card, the shoe reshuffles before
    /// returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::OutOfCards`] if every card in the shoe is in play.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = *self.cards.get(self.cursor).ok_or(ShoeError::OutOfCards)?;
        self.cursor += 1;
        self.dealt += 1;
        log::trace!("drew {card} ({} left)", self.remaining());

        if self.cursor == self.cards.len() {
            self.reshuffle()?;
        }

        Ok(card)
    }

    /// Moves the cards in play to the front and shuffles the rest behind them.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidState`] if fewer cards have been drawn
    /// than are recorded as in play.
    pub fn reshuffle(&mut self) -> Result<(), ShoeError> {
        if self.cursor < self.dealt {
            return Err(ShoeError::InvalidState {
                dealt: self.dealt,
                cursor: self.cursor,
            });
        }

        let start = self.cursor - self.dealt;
        let mut in_play: Vec<Card> = self.cards.drain(start..self.cursor).collect();
        self.cards.shuffle(&mut self.rng);
        in_play.append(&mut self.cards);
        self.cards = in_play;
        self.cursor = self.dealt;
        self.reshuffles += 1;

        log::debug!(
            "reshuffled shoe: {} cards kept in play, {} shuffled back in",
            self.dealt,
            self.remaining()
        );

        Ok(())
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards that can be drawn before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the number of cards dealt since the last [`Shoe::start_deal`].
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.dealt
    }

    /// Returns how many times the shoe has reshuffled.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Returns every card in shoe order, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
