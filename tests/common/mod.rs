//! Shared helpers for integration tests.

use std::collections::VecDeque;

use bjtable::{Card, Prompt, Suit};

pub fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).unwrap()
}

/// Cards of rank `ranks`, all clubs.
pub fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank, Suit::Clubs)).collect()
}

/// Replays queued answers and records everything it is told.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    integers: VecDeque<usize>,
    choices: VecDeque<char>,
    pub questions: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(integers: &[usize], choices: &str) -> Self {
        Self {
            integers: integers.iter().copied().collect(),
            choices: choices.chars().collect(),
            ..Self::default()
        }
    }

    pub fn heard(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.contains(needle))
    }

    pub fn is_exhausted(&self) -> bool {
        self.integers.is_empty() && self.choices.is_empty()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize {
        self.questions.push(prompt.to_string());
        let answer = self
            .integers
            .pop_front()
            .unwrap_or_else(|| panic!("no integer scripted for {prompt:?}"));
        assert!(
            (min..=max).contains(&answer),
            "scripted {answer} outside {min}..={max} for {prompt:?}"
        );
        answer
    }

    fn ask_choice(&mut self, prompt: &str, allowed: &[char]) -> char {
        self.questions.push(prompt.to_string());
        let answer = self
            .choices
            .pop_front()
            .unwrap_or_else(|| panic!("no choice scripted for {prompt:?}"));
        assert!(
            allowed.contains(&answer),
            "scripted {answer:?} not in {allowed:?} for {prompt:?}"
        );
        answer
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
