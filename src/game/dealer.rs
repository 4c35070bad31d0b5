extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::error::GameError;
use crate::hand::{CardList, Hand};
use crate::options::MutualBlackjack;
use crate::player::Participant;
use crate::prompt::Prompt;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::Game;

/// Decides a hand that is still live at settlement.
///
/// Busts and player naturals are resolved before settlement, so neither
/// reaches this point.
fn live_outcome(
    hand: &Hand,
    dealer_value: u32,
    dealer_bust: bool,
    dealer_blackjack: bool,
    mutual_blackjack: MutualBlackjack,
) -> HandOutcome {
    let player_value = hand.score();

    if dealer_blackjack && hand.is_blackjack() {
        match mutual_blackjack {
            MutualBlackjack::Push => HandOutcome::Push,
            MutualBlackjack::DealerWins => HandOutcome::Lose,
        }
    } else if dealer_blackjack {
        HandOutcome::Lose
    } else if dealer_bust || player_value > dealer_value {
        HandOutcome::Win
    } else if player_value == dealer_value {
        HandOutcome::Push
    } else {
        HandOutcome::Lose
    }
}

impl Game {
    /// Dealer draws until the fixed policy stands or the hand busts.
    pub(super) fn dealer_play(&mut self) -> Result<(), GameError> {
        while !self
            .dealer
            .first_hand()
            .ok_or(GameError::MissingHand)?
            .is_done()
        {
            self.dealer.decide_hit(&mut self.shoe)?;
        }

        if let Some(hand) = self.dealer.first_hand() {
            log::debug!("dealer finishes with {hand}");
        }
        Ok(())
    }

    /// Pays out every hand not already resolved and assembles the round result.
    ///
    /// Winners get twice their wager back, pushes get the wager back, losers
    /// get nothing (the wager left their bankroll when it was placed).
    pub(super) fn settle(&mut self, prompt: &mut dyn Prompt) -> Result<RoundResult, GameError> {
        prompt.notify("Time to resolve all hands!");

        let dealer_hand = self.dealer.first_hand().ok_or(GameError::MissingHand)?;
        let dealer_value = dealer_hand.score();
        let dealer_bust = dealer_hand.is_bust();
        let dealer_blackjack = dealer_hand.is_blackjack();
        prompt.notify(&format!(
            "The dealer's hand is {} -> {dealer_value}.",
            CardList(dealer_hand.cards())
        ));

        let rule = self.options.mutual_blackjack;

        for (player, result) in self.players.iter_mut().zip(self.results.iter_mut()) {
            let name = String::from(player.name());
            let mut winnings: usize = 0;

            for (hand_index, hand) in player.hands_mut().iter_mut().enumerate() {
                if hand.is_resolved() {
                    continue;
                }

                let outcome = live_outcome(hand, dealer_value, dealer_bust, dealer_blackjack, rule);
                let player_value = hand.score();
                let Some(bet) = hand.resolve() else {
                    continue;
                };
                let cards = CardList(hand.cards());

                // Only Win, Push and Lose come out of `live_outcome`.
                let payout = match outcome {
                    HandOutcome::Win => bet.saturating_mul(2),
                    HandOutcome::Push => bet,
                    HandOutcome::Lose | HandOutcome::Bust | HandOutcome::Blackjack => 0,
                };
                winnings = winnings.saturating_add(payout);

                let message = match outcome {
                    HandOutcome::Win => {
                        format!("{name} wins ${bet} with {cards} -> {player_value}!")
                    }
                    HandOutcome::Push => format!("{name} ties with {cards} -> {player_value}."),
                    HandOutcome::Lose | HandOutcome::Bust | HandOutcome::Blackjack => {
                        format!("{name} loses ${bet} with {cards} -> {player_value}.")
                    }
                };
                log::debug!("{name} hand {hand_index}: {outcome:?}, pays {payout}");
                prompt.notify(&message);

                result.record(HandResult {
                    hand_index,
                    outcome,
                    bet,
                    payout,
                    player_value,
                });
            }

            player.credit(winnings);
            result.finish(player.money());
        }

        Ok(RoundResult {
            round: self.rounds_played,
            players: core::mem::take(&mut self.results),
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        })
    }
}
