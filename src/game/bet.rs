extern crate alloc;

use alloc::format;

use crate::error::{BetError, GameError};
use crate::player::Participant;
use crate::prompt::Prompt;

use super::Game;

impl Game {
    /// Resets the in-play count and gives everyone one empty hand.
    pub(super) fn start_round(&mut self) {
        self.shoe.start_deal();

        self.dealer.start_round();
        self.dealer.new_hand();

        for player in &mut self.players {
            player.start_round();
            player.new_hand();
        }
    }

    /// Drops broke players. Returns whether anyone is left.
    pub(super) fn remove_bankrupt(&mut self, prompt: &mut dyn Prompt) -> bool {
        self.players.retain(|player| {
            if player.is_bankrupt() {
                log::info!("{} leaves the table", player.name());
                prompt.notify(&format!("{} is out of money.", player.name()));
                false
            } else {
                true
            }
        });

        if self.players.is_empty() {
            prompt.notify("The game is over.");
            return false;
        }
        true
    }

    /// Asks every player for a bet on their first hand.
    ///
    /// A refused bet is reported and asked for again.
    pub(super) fn take_bets(&mut self, prompt: &mut dyn Prompt) -> Result<(), GameError> {
        for player in &mut self.players {
            if player.is_bankrupt() {
                return Err(GameError::BankruptPlayer);
            }

            loop {
                let money = player.money();
                let question = format!("{}, how much to bet ($1-${money})? ", player.name());
                let amount = prompt.ask_integer(&question, 1, money);

                match player.set_bet(0, amount) {
                    Ok(()) => {
                        log::debug!("{} bets {amount}", player.name());
                        break;
                    }
                    Err(BetError::HandNotFound) => return Err(GameError::MissingHand),
                    Err(err @ BetError::HandResolved) => return Err(err.into()),
                    Err(err) => {
                        log::warn!("refused bet of {amount} from {}: {err}", player.name());
                        prompt.notify(&format!("Bet refused ({err}); bet between $1 and ${money}."));
                    }
                }
            }
        }

        Ok(())
    }

    /// Deals two round-robin passes, players first and the dealer last.
    pub(super) fn deal_initial(&mut self, prompt: &mut dyn Prompt) -> Result<(), GameError> {
        for _ in 0..2 {
            for player in &mut self.players {
                let card = self.shoe.draw()?;
                player
                    .first_hand_mut()
                    .ok_or(GameError::MissingHand)?
                    .add(card);
            }

            let card = self.shoe.draw()?;
            self.dealer
                .first_hand_mut()
                .ok_or(GameError::MissingHand)?
                .add(card);
        }

        let up_card = self.dealer.up_card()?;
        log::debug!("dealt {} hands, dealer shows {up_card}", self.players.len());
        prompt.notify(&format!("Dealer shows {up_card}."));

        for player in &self.players {
            if let Some(hand) = player.first_hand() {
                prompt.notify(&format!("{}'s hand: {hand}", player.name()));
            }
        }

        Ok(())
    }
}
