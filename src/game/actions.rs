extern crate alloc;

use alloc::format;

use crate::error::GameError;
use crate::hand::BLACKJACK;
use crate::player::Participant;
use crate::prompt::Prompt;
use crate::result::{HandOutcome, HandResult};

use super::{Game, blackjack_profit};

impl Game {
    /// Handles naturals right after the deal.
    ///
    /// Returns `true` if the dealer holds blackjack, in which case nothing is
    /// paid here and the round goes straight to settlement. Otherwise every
    /// player blackjack is paid 3:2 and closed.
    pub(super) fn check_blackjacks(&mut self, prompt: &mut dyn Prompt) -> Result<bool, GameError> {
        let dealer_hand = self.dealer.first_hand().ok_or(GameError::MissingHand)?;
        if dealer_hand.is_blackjack() {
            log::debug!("dealer blackjack: {dealer_hand}");
            prompt.notify("Dealer gets blackjack!");
            return Ok(true);
        }

        for (player, result) in self.players.iter_mut().zip(self.results.iter_mut()) {
            let hand = player.first_hand_mut().ok_or(GameError::MissingHand)?;
            if !hand.is_blackjack() {
                continue;
            }
            let player_value = hand.score();
            let Some(bet) = hand.resolve() else {
                continue;
            };

            let profit = blackjack_profit(bet);
            let payout = bet.saturating_add(profit);
            player.credit(payout);

            log::debug!("{} blackjack pays {profit} on {bet}", player.name());
            prompt.notify(&format!(
                "{} wins ${profit} with a blackjack!",
                player.name()
            ));
            result.record(HandResult {
                hand_index: 0,
                outcome: HandOutcome::Blackjack,
                bet,
                payout,
                player_value,
            });
        }

        Ok(false)
    }

    /// Lets each player act on every open hand, including hands split off
    /// along the way.
    pub(super) fn play_hands(&mut self, prompt: &mut dyn Prompt) -> Result<(), GameError> {
        for seat in 0..self.players.len() {
            while let Some(hand) = self.players[seat]
                .hands()
                .iter()
                .position(|hand| !hand.is_done())
            {
                self.play_hand(seat, hand, prompt)?;
            }
        }
        Ok(())
    }

    /// Offers split and double down while the hand is fresh, then hit or
    /// stand until the hand is closed. A bust is settled on the spot.
    fn play_hand(
        &mut self,
        seat: usize,
        index: usize,
        prompt: &mut dyn Prompt,
    ) -> Result<(), GameError> {
        let player = self.players.get_mut(seat).ok_or(GameError::MissingHand)?;
        let shoe = &mut self.shoe;

        let hand = player.hands().get(index).ok_or(GameError::MissingHand)?;
        prompt.notify(&format!("{}'s hand: {hand}", player.name()));

        let fresh = hand.len() == 2;
        if fresh && hand.is_pair() && !hand.is_from_split() && player.money() >= hand.wager() {
            if let Some(split) = player.decide_split(index, shoe, prompt)? {
                let hands = player.hands();
                log::debug!("{} splits into hands {index} and {split}", player.name());
                prompt.notify(&format!(
                    "{} now plays {} and {}",
                    player.name(),
                    hands[index],
                    hands[split]
                ));
            }
        }

        let hand = player
            .hands_mut()
            .get_mut(index)
            .ok_or(GameError::MissingHand)?;
        if hand.score() == u32::from(BLACKJACK) {
            hand.mark_done();
        }

        let wager = hand.wager();
        if fresh && !hand.is_done() && player.money() >= wager {
            if player.decide_double_down(index, shoe, prompt)? {
                log::debug!("{} doubles down to {}", player.name(), wager * 2);
                if let Some(hand) = player.hands().get(index) {
                    prompt.notify(&format!("{}'s hand: {hand}", player.name()));
                }
            }
        }

        while player
            .hands()
            .get(index)
            .is_some_and(|hand| !hand.is_done())
        {
            if player.decide_hit(index, shoe, prompt)? {
                if let Some(hand) = player.hands().get(index) {
                    prompt.notify(&format!("{}'s hand: {hand}", player.name()));
                }
            }
        }

        let hand = player
            .hands_mut()
            .get_mut(index)
            .ok_or(GameError::MissingHand)?;
        if !hand.is_bust() {
            return Ok(());
        }

        let player_value = hand.score();
        let shown = format!("{hand}");
        if let Some(bet) = hand.resolve() {
            log::debug!("{} busts hand {index} with {player_value}", player.name());
            prompt.notify(&format!("{} busts with {shown}.", player.name()));
            if let Some(result) = self.results.get_mut(seat) {
                result.record(HandResult {
                    hand_index: index,
                    outcome: HandOutcome::Bust,
                    bet,
                    payout: 0,
                    player_value,
                });
            }
        }

        Ok(())
    }
}
