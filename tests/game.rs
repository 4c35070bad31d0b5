//! Round engine integration tests.

mod common;

use bjtable::options::MAX_STARTING_MONEY;
use bjtable::{
    Game, GameError, GameState, HandOutcome, MutualBlackjack, OptionsError, Participant, Prompt,
    Shoe, TableOptions, blackjack_profit,
};
use common::{ScriptedPrompt, cards};

const PADDING: [u8; 6] = [2, 2, 2, 2, 2, 2];

fn table(options: TableOptions, draws: &[u8]) -> Game {
    let mut ranks = draws.to_vec();
    ranks.extend_from_slice(&PADDING);
    let shoe = Shoe::stacked(cards(&ranks), 0).unwrap();
    Game::with_shoe(options, shoe).unwrap()
}

/// Bets everything, never splits or doubles, always stands.
struct AllInStander;

impl Prompt for AllInStander {
    fn ask_integer(&mut self, _prompt: &str, _min: usize, max: usize) -> usize {
        max
    }

    fn ask_choice(&mut self, _prompt: &str, allowed: &[char]) -> char {
        if allowed.contains(&'s') { 's' } else { 'n' }
    }

    fn notify(&mut self, _message: &str) {}
}

#[test]
fn options_are_validated() {
    assert_eq!(
        Game::new(TableOptions::default().with_players(0), 1).unwrap_err(),
        GameError::Options(OptionsError::InvalidPlayerCount(0))
    );
    assert_eq!(
        Game::new(TableOptions::default().with_decks(9), 1).unwrap_err(),
        GameError::Options(OptionsError::InvalidDeckCount(9))
    );
    assert_eq!(
        Game::new(TableOptions::default().with_starting_money(0), 1).unwrap_err(),
        GameError::Options(OptionsError::ZeroStartingMoney)
    );

    let game = Game::new(TableOptions::default().with_players(7).with_decks(8), 1).unwrap();
    assert_eq!(game.players().len(), 7);
    assert_eq!(game.players()[6].to_string().lines().next(), Some("Player 7"));
    assert_eq!(game.shoe().len(), 8 * 52);
    assert_eq!(game.state(), GameState::StartRound);
}

#[test]
fn mutual_blackjack_pushes_by_default() {
    // Player A, dealer A, player T, dealer T.
    let mut game = table(TableOptions::default(), &[1, 1, 10, 10]);
    let mut prompt = ScriptedPrompt::new(&[100], "");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    assert!(result.dealer_blackjack);
    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.players[0].hands[0].payout, 100);
    assert_eq!(result.players[0].net, 0);
    assert_eq!(game.players()[0].money(), 1000);
    assert!(prompt.heard("Dealer gets blackjack!"));
    assert!(prompt.heard("Player 1 ties with Ac Tc -> 21."));
    assert_eq!(prompt.questions.len(), 1);
}

#[test]
fn mutual_blackjack_can_go_to_the_dealer() {
    let options = TableOptions::default().with_mutual_blackjack(MutualBlackjack::DealerWins);
    let mut game = table(options, &[1, 1, 10, 10]);
    let mut prompt = ScriptedPrompt::new(&[100], "");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].net, -100);
    assert_eq!(game.players()[0].money(), 900);
}

#[test]
fn dealer_blackjack_skips_player_actions() {
    // Player 10/9, dealer A/K.
    let mut game = table(TableOptions::default(), &[10, 1, 9, 13]);
    let mut prompt = ScriptedPrompt::new(&[50], "");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.players()[0].money(), 950);
    assert_eq!(game.dealer().first_hand().map(|hand| hand.len()), Some(2));
    assert!(prompt.heard("Dealer shows Kc."));
    assert!(prompt.is_exhausted());
}

#[test]
fn player_blackjack_pays_three_to_two() {
    // Player A/K, dealer 9/7 then draws a 2.
    let mut game = table(TableOptions::default(), &[1, 9, 13, 7, 2]);
    let mut prompt = ScriptedPrompt::new(&[10], "");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    let hand = result.players[0].hands[0];
    assert_eq!(hand.outcome, HandOutcome::Blackjack);
    assert_eq!(hand.payout, 25);
    assert_eq!(result.players[0].net, 15);
    assert_eq!(game.players()[0].money(), 1015);
    assert_eq!(result.dealer_value, 18);
    assert!(prompt.heard("Player 1 wins $15 with a blackjack!"));
}

#[test]
fn blackjack_profit_rounds_down() {
    assert_eq!(blackjack_profit(10), 15);
    assert_eq!(blackjack_profit(1), 1);
    assert_eq!(blackjack_profit(3), 4);

    let mut game = table(TableOptions::default(), &[1, 9, 13, 7, 2]);
    let mut prompt = ScriptedPrompt::new(&[1], "");
    game.play_round(&mut prompt).unwrap();
    assert_eq!(game.players()[0].money(), 1001);
}

#[test]
fn dealer_bust_pays_every_live_hand() {
    // P1 10/2, P2 5/7, dealer 10/6 then draws a 7 to 23.
    let options = TableOptions::default().with_players(2);
    let mut game = table(options, &[10, 5, 10, 2, 7, 6, 7]);
    let mut prompt = ScriptedPrompt::new(&[10, 10], "nsns");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 23);
    for player in &result.players {
        assert_eq!(player.hands[0].outcome, HandOutcome::Win);
        assert_eq!(player.hands[0].player_value, 12);
        assert_eq!(player.money, 1010);
    }
    assert!(prompt.is_exhausted());
}

#[test]
fn equal_scores_push() {
    let mut game = table(TableOptions::default(), &[10, 10, 8, 8]);
    let mut prompt = ScriptedPrompt::new(&[10], "ns");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Push);
    assert_eq!(game.players()[0].money(), 1000);
}

#[test]
fn double_down_on_eleven() {
    // Player 5/6, dealer T/7, double draws a T.
    let mut game = table(TableOptions::default(), &[5, 10, 6, 7, 10]);
    let mut prompt = ScriptedPrompt::new(&[10], "y");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    let hand = &game.players()[0].hands()[0];
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.score(), 21);
    assert_eq!(hand.bet(), Some(20));
    assert!(hand.is_done());

    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[0].hands[0].payout, 40);
    assert_eq!(game.players()[0].money(), 1020);
    assert_eq!(
        prompt.questions[1],
        "Player 1, would you like to double down (y/n)? "
    );
}

#[test]
fn split_hands_are_played_and_settled_separately() {
    // Player 8/8, dealer T/9. Split draws 3 and K; double on 8/3 draws a 9.
    let mut game = table(TableOptions::default(), &[8, 10, 8, 9, 3, 13, 9]);
    let mut prompt = ScriptedPrompt::new(&[10], "yyns");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    let hands = game.players()[0].hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].score(), 20);
    assert_eq!(hands[1].score(), 18);
    assert!(hands[1].is_from_split());

    let results = &result.players[0].hands;
    assert_eq!(results[0].outcome, HandOutcome::Win);
    assert_eq!(results[0].bet, 20);
    assert_eq!(results[1].outcome, HandOutcome::Lose);
    assert_eq!(results[1].bet, 10);
    assert_eq!(result.players[0].total_bet, 30);
    assert_eq!(game.players()[0].money(), 1010);

    // The split hand is never offered another split.
    let splits = prompt
        .questions
        .iter()
        .filter(|question| question.contains("split"))
        .count();
    assert_eq!(splits, 1);
    assert!(prompt.is_exhausted());
}

#[test]
fn bust_is_resolved_before_the_dealer_plays() {
    // Player T/6 hits a 9, dealer T/7.
    let mut game = table(TableOptions::default(), &[10, 10, 6, 7, 9]);
    let mut prompt = ScriptedPrompt::new(&[10], "nh");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    let hand = result.players[0].hands[0];
    assert_eq!(hand.outcome, HandOutcome::Bust);
    assert_eq!(hand.player_value, 25);
    assert_eq!(hand.payout, 0);
    assert!(game.players()[0].hands()[0].is_resolved());
    assert_eq!(game.players()[0].money(), 990);
    assert!(prompt.heard("Player 1 busts with Tc 6c 9c -> 25."));
}

#[test]
fn bankrupt_players_leave_and_the_game_ends() {
    // Player all in with 16 against the dealer's 19.
    let options = TableOptions::default().with_starting_money(10);
    let mut game = table(options, &[10, 10, 6, 9]);
    let mut prompt = ScriptedPrompt::new(&[10], "s");

    assert_eq!(game.play(&mut prompt).unwrap(), 1);
    assert!(game.is_over());
    assert_eq!(game.state(), GameState::GameOver);
    assert!(game.players().is_empty());
    assert!(prompt.heard("Player 1 is out of money."));
    assert!(prompt.heard("The game is over."));

    assert_eq!(game.play_round(&mut prompt).unwrap(), None);
}

#[test]
fn seeded_games_replay_identically() {
    let options = TableOptions::default().with_players(3).with_decks(2);

    let mut first = Game::new(options.clone(), 2024).unwrap();
    let mut second = Game::new(options, 2024).unwrap();

    let rounds = first.play(&mut AllInStander).unwrap();
    assert_eq!(second.play(&mut AllInStander).unwrap(), rounds);
    assert!(rounds >= 1);
    assert_eq!(first.shoe().cards(), second.shoe().cards());
    assert!(first.is_over());
}

#[test]
fn round_results_are_numbered() {
    let mut game = table(TableOptions::default(), &[10, 10, 8, 8, 10, 10, 8, 8]);
    let mut prompt = ScriptedPrompt::new(&[10, 10], "nsns");

    let first = game.play_round(&mut prompt).unwrap().unwrap();
    let second = game.play_round(&mut prompt).unwrap().unwrap();

    assert_eq!(first.round, 1);
    assert_eq!(second.round, 2);
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(game.state(), GameState::StartRound);
}

/// Offers a zero bet once, then answers from the script.
struct ZeroBetFirst {
    offered: bool,
    script: ScriptedPrompt,
}

impl Prompt for ZeroBetFirst {
    fn ask_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize {
        if self.offered {
            return self.script.ask_integer(prompt, min, max);
        }
        self.offered = true;
        self.script.questions.push(prompt.to_string());
        0
    }

    fn ask_choice(&mut self, prompt: &str, allowed: &[char]) -> char {
        self.script.ask_choice(prompt, allowed)
    }

    fn notify(&mut self, message: &str) {
        self.script.notify(message);
    }
}

#[test]
fn refused_bet_is_reported_and_asked_again() {
    // Player T/6 stands against the dealer's 19.
    let mut game = table(TableOptions::default(), &[10, 10, 6, 9]);
    let mut prompt = ZeroBetFirst {
        offered: false,
        script: ScriptedPrompt::new(&[10], "ns"),
    };

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    assert!(prompt.script.heard("Bet refused (bet amount is zero)"));
    let bets = prompt
        .script
        .questions
        .iter()
        .filter(|question| question.contains("how much to bet"))
        .count();
    assert_eq!(bets, 2);
    assert_eq!(result.players[0].hands[0].bet, 10);
    assert_eq!(result.players[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.players()[0].money(), 990);
    assert!(prompt.script.is_exhausted());
}

#[test]
fn split_aces_reaching_21_stop_at_once() {
    // Player A/A, dealer T/9. Split draws T and K.
    let mut game = table(TableOptions::default(), &[1, 10, 1, 9, 10, 13]);
    let mut prompt = ScriptedPrompt::new(&[10], "y");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    let hands = game.players()[0].hands();
    assert_eq!(hands.len(), 2);
    assert!(hands.iter().all(|hand| hand.len() == 2 && hand.score() == 21));

    // Only the bet and the split were asked about.
    assert_eq!(prompt.questions.len(), 2);
    assert!(prompt.questions[1].contains("split"));

    for hand in &result.players[0].hands {
        assert_eq!(hand.outcome, HandOutcome::Win);
        assert_eq!(hand.player_value, 21);
        assert_eq!(hand.payout, 20);
    }
    assert_eq!(game.players()[0].money(), 1020);
}

#[test]
fn starting_bankroll_is_capped() {
    let too_rich = MAX_STARTING_MONEY + 1;
    assert_eq!(
        Game::new(TableOptions::default().with_starting_money(too_rich), 1).unwrap_err(),
        GameError::Options(OptionsError::ExcessiveStartingMoney(too_rich))
    );
    assert_eq!(
        TableOptions::default()
            .with_starting_money(usize::MAX)
            .validate(),
        Err(OptionsError::ExcessiveStartingMoney(usize::MAX))
    );
}

#[test]
fn blackjack_on_the_largest_bankroll_pays_in_full() {
    // Player A/K all in, dealer 9/7 then draws a 2.
    let options = TableOptions::default().with_starting_money(MAX_STARTING_MONEY);
    let mut game = table(options, &[1, 9, 13, 7, 2]);
    let mut prompt = ScriptedPrompt::new(&[MAX_STARTING_MONEY], "");

    let result = game.play_round(&mut prompt).unwrap().unwrap();

    let expected = MAX_STARTING_MONEY + MAX_STARTING_MONEY / 2;
    assert_eq!(result.players[0].hands[0].payout, expected);
    assert_eq!(game.players()[0].money(), expected);
    assert!(result.players[0].net > 0);
}
