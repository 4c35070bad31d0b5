//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses to a higher dealer hand or a dealer blackjack.
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack and was paid 3:2.
    Blackjack,
    /// Player went over 21.
    Bust,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand, doubled if the player doubled down.
    pub bet: usize,
    /// The amount credited back to the player, wager included.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u32,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total wagered across all hands.
    pub total_bet: usize,
    /// Total payout for all hands.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Bankroll after settlement.
    pub money: usize,
}

impl PlayerResult {
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            hands: Vec::new(),
            total_bet: 0,
            total_payout: 0,
            net: 0,
            money: 0,
        }
    }

    pub(crate) fn record(&mut self, result: HandResult) {
        self.total_bet = self.total_bet.saturating_add(result.bet);
        self.total_payout = self.total_payout.saturating_add(result.payout);
        self.hands.push(result);
    }

    pub(crate) fn finish(&mut self, money: usize) {
        self.hands.sort_by_key(|hand| hand.hand_index);
        self.net = if self.total_payout >= self.total_bet {
            isize::try_from(self.total_payout - self.total_bet).unwrap_or(isize::MAX)
        } else {
            isize::try_from(self.total_bet - self.total_payout).map_or(isize::MIN, |loss| -loss)
        };
        self.money = money;
    }
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Which round this was, starting at 1.
    pub round: usize,
    /// Results for each player.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
