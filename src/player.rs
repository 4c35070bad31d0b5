//! People at the table: human players and the dealer.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::{ActionError, BetError};
use crate::hand::{BLACKJACK, Hand};
use crate::prompt::Prompt;
use crate::shoe::Shoe;

/// Money each human player sits down with unless configured otherwise.
pub const STARTING_MONEY: usize = 1000;

/// The dealer draws below this total and stands on it, soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

/// Behaviour shared by everyone who holds hands.
pub trait Participant {
    /// Display name.
    fn name(&self) -> &str;

    /// Hands held this round.
    fn hands(&self) -> &[Hand];

    /// Mutable access to the hands held this round.
    fn hands_mut(&mut self) -> &mut Vec<Hand>;

    /// Throws away every hand from the previous round.
    fn start_round(&mut self) {
        self.hands_mut().clear();
    }

    /// Adds one empty hand and returns its index.
    fn new_hand(&mut self) -> usize {
        let hands = self.hands_mut();
        hands.push(Hand::new());
        hands.len() - 1
    }

    /// The hand dealt at the start of the round.
    fn first_hand(&self) -> Option<&Hand> {
        self.hands().first()
    }

    /// Mutable access to the hand dealt at the start of the round.
    fn first_hand_mut(&mut self) -> Option<&mut Hand> {
        self.hands_mut().first_mut()
    }
}

fn ensure_playable(hand: &Hand) -> Result<(), ActionError> {
    if hand.is_resolved() {
        return Err(ActionError::HandResolved);
    }
    if hand.is_bust() {
        return Err(ActionError::HandBust);
    }
    if hand.is_done() {
        return Err(ActionError::HandDone);
    }
    Ok(())
}

/// Draws on `hit`, otherwise stands. A hand that busts or reaches 21 is done.
fn hit_or_stand(hand: &mut Hand, shoe: &mut Shoe, hit: bool) -> Result<bool, ActionError> {
    if !hit {
        hand.mark_done();
        return Ok(false);
    }

    hand.add(shoe.draw()?);
    if hand.is_bust() || hand.score() == u32::from(BLACKJACK) {
        hand.mark_done();
    }
    Ok(true)
}

/// A human player with a bankroll.
#[derive(Debug, Clone)]
pub struct Human {
    name: String,
    money: usize,
    hands: Vec<Hand>,
}

impl Human {
    /// Creates a player with the given bankroll and no hands.
    #[must_use]
    pub fn new(name: impl Into<String>, money: usize) -> Self {
        Self {
            name: name.into(),
            money,
            hands: Vec::new(),
        }
    }

    /// Returns the money not currently wagered.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns whether the player has nothing left to bet.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.money == 0
    }

    /// Adds winnings (including returned wagers) to the bankroll.
    pub(crate) const fn credit(&mut self, amount: usize) {
        self.money = self.money.saturating_add(amount);
    }

    /// Places `amount` on the hand at `hand`, taking it from the bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the bankroll, or the
    /// hand does not exist or is already resolved.
    pub fn set_bet(&mut self, hand: usize, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }

        let hand = self.hands.get_mut(hand).ok_or(BetError::HandNotFound)?;
        if !hand.place_bet(amount) {
            return Err(BetError::HandResolved);
        }

        self.money -= amount;
        Ok(())
    }

    /// Asks whether to hit or stand, and acts on the answer.
    ///
    /// Returns `true` if a card was drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist, is already bust or done,
    /// or the shoe cannot deal.
    pub fn decide_hit(
        &mut self,
        hand: usize,
        shoe: &mut Shoe,
        prompt: &mut dyn Prompt,
    ) -> Result<bool, ActionError> {
        let hand = self.hands.get_mut(hand).ok_or(ActionError::HandNotFound)?;
        ensure_playable(hand)?;

        let question = format!("{}, would you like to (h)it or (s)tand? ", self.name);
        let hit = prompt.ask_choice(&question, &['h', 's']) == 'h';
        hit_or_stand(hand, shoe, hit)
    }

    /// Offers a double down on a two-card hand.
    ///
    /// On acceptance the bet is doubled, exactly one card is drawn, and the
    /// hand is closed. Returns whether the player doubled.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotDouble`] unless the hand holds exactly two
    /// cards, [`ActionError::InsufficientFunds`] if the bankroll cannot match
    /// the bet, or an error if the hand is not playable or the shoe cannot deal.
    pub fn decide_double_down(
        &mut self,
        hand: usize,
        shoe: &mut Shoe,
        prompt: &mut dyn Prompt,
    ) -> Result<bool, ActionError> {
        let hand = self.hands.get_mut(hand).ok_or(ActionError::HandNotFound)?;
        ensure_playable(hand)?;

        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        let bet = hand.wager();
        if bet > self.money {
            return Err(ActionError::InsufficientFunds);
        }

        let question = format!("{}, would you like to double down (y/n)? ", self.name);
        if !prompt.ask_yes_no(&question) {
            return Ok(false);
        }

        let card = shoe.draw()?;
        if !hand.double_bet() {
            return Err(ActionError::HandResolved);
        }
        self.money -= bet;
        hand.add(card);
        hand.mark_done();

        Ok(true)
    }

    /// Offers to split a pair into two hands.
    ///
    /// On acceptance the first card moves to a new hand carrying the same bet,
    /// each hand receives one fresh card, and the new hand is appended to the
    /// player's hands. Returns the new hand's index.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] unless the hand is a pair,
    /// [`ActionError::InsufficientFunds`] if the bankroll cannot match the bet,
    /// or an error if the hand is not playable or the shoe cannot deal.
    pub fn decide_split(
        &mut self,
        hand: usize,
        shoe: &mut Shoe,
        prompt: &mut dyn Prompt,
    ) -> Result<Option<usize>, ActionError> {
        let current = self.hands.get_mut(hand).ok_or(ActionError::HandNotFound)?;
        ensure_playable(current)?;

        if !current.is_pair() {
            return Err(ActionError::CannotSplit);
        }
        let bet = current.wager();
        if bet > self.money {
            return Err(ActionError::InsufficientFunds);
        }

        let question = format!("{}, would you like to split (y/n)? ", self.name);
        if !prompt.ask_yes_no(&question) {
            return Ok(None);
        }

        let first = shoe.draw()?;
        let second = shoe.draw()?;

        let moved = current.remove_at(0).ok_or(ActionError::CannotSplit)?;
        current.add(first);

        let mut split = Hand::from_split(moved, bet);
        split.add(second);

        self.money -= bet;
        self.hands.push(split);

        Ok(Some(self.hands.len() - 1))
    }
}

impl Participant for Human {
    fn name(&self) -> &str {
        &self.name
    }

    fn hands(&self) -> &[Hand] {
        &self.hands
    }

    fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n  Money: ${}\n  Hands:", self.name, self.money)?;
        for hand in &self.hands {
            write!(f, "\n    {hand}")?;
        }
        Ok(())
    }
}

/// The dealer: one hand per round, a fixed drawing policy, no bankroll.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hands: Vec<Hand>,
}

impl Dealer {
    /// Creates a dealer with no hands.
    #[must_use]
    pub const fn new() -> Self {
        Self { hands: Vec::new() }
    }

    /// Hits below 17 and stands on every 17, soft or hard.
    ///
    /// Returns `true` if a card was drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has no hand, the hand is already bust
    /// or done, or the shoe cannot deal.
    pub fn decide_hit(&mut self, shoe: &mut Shoe) -> Result<bool, ActionError> {
        let hand = self.hands.first_mut().ok_or(ActionError::HandNotFound)?;
        ensure_playable(hand)?;

        let hit = hand.score() < DEALER_STANDS_ON;
        hit_or_stand(hand, shoe, hit)
    }

    /// The card shown to the players before the hole card is revealed.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoUpCard`] until two cards have been dealt.
    pub fn up_card(&self) -> Result<Card, ActionError> {
        self.hands
            .first()
            .and_then(|hand| hand.cards().get(1))
            .copied()
            .ok_or(ActionError::NoUpCard)
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        "Dealer"
    }

    fn hands(&self) -> &[Hand] {
        &self.hands
    }

    fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }
}
