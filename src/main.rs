//! Terminal blackjack table.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::options::{MAX_PLAYERS, MAX_STARTING_MONEY, MIN_PLAYERS};
use bjtable::shoe::{MAX_DECKS, MIN_DECKS};
use bjtable::{Game, MutualBlackjack, Prompt, STARTING_MONEY, TableOptions};
use clap::Parser;
use clap::builder::RangedU64ValueParser;

#[derive(Parser)]
#[command(
    name = "bjtable",
    about = "Blackjack for one to seven players, played until everyone is broke"
)]
struct Cli {
    /// Number of players (1-7); asked for when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    players: Option<u8>,

    /// Number of decks in the shoe (1-8); asked for when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    decks: Option<u8>,

    /// Money each player sits down with
    #[arg(
        long,
        default_value_t = STARTING_MONEY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_STARTING_MONEY as u64)
    )]
    bankroll: usize,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// How a player blackjack fares against a dealer blackjack
    #[arg(long, value_enum, default_value_t = MutualBlackjack::Push)]
    mutual_blackjack: MutualBlackjack,
}

/// Line-based prompt over any buffered reader, answering on stdout.
struct TerminalPrompt<R> {
    input: R,
}

impl<R: BufRead> TerminalPrompt<R> {
    fn answer(&mut self, question: &str) -> String {
        print!("{question}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("\nGoodbye.");
                std::process::exit(0);
            }
            Ok(_) => line.trim().to_string(),
        }
    }
}

impl<R: BufRead> Prompt for TerminalPrompt<R> {
    fn ask_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize {
        loop {
            match self.answer(prompt).parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return value,
                _ => println!("Please enter a number between {min} and {max}."),
            }
        }
    }

    fn ask_choice(&mut self, prompt: &str, allowed: &[char]) -> char {
        loop {
            if let Some(choice) = self.answer(prompt).chars().next() {
                if allowed.contains(&choice) {
                    return choice;
                }
            }
            let options: Vec<String> = allowed.iter().map(|c| format!("'{c}'")).collect();
            println!("Please enter {}.", options.join(" or "));
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

fn ask_count(prompt: &mut impl Prompt, question: &str, min: u8, max: u8) -> u8 {
    let answer = prompt.ask_integer(question, min.into(), max.into());
    u8::try_from(answer).unwrap_or(min)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut prompt = TerminalPrompt {
        input: io::stdin().lock(),
    };

    prompt.notify("Welcome to blackjack!");

    let players = cli.players.unwrap_or_else(|| {
        ask_count(
            &mut prompt,
            "How many players (1-7)? ",
            MIN_PLAYERS,
            MAX_PLAYERS,
        )
    });
    let decks = cli.decks.unwrap_or_else(|| {
        ask_count(
            &mut prompt,
            "How many decks will the shoe hold (1-8)? ",
            MIN_DECKS,
            MAX_DECKS,
        )
    });
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("{players} players, {decks} decks, seed {seed}");

    let options = TableOptions::default()
        .with_players(players)
        .with_decks(decks)
        .with_starting_money(cli.bankroll)
        .with_mutual_blackjack(cli.mutual_blackjack);

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match game.play(&mut prompt) {
        Ok(rounds) => {
            log::info!("table closed after {rounds} rounds");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("round aborted: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
