//! The question-and-answer channel between the table and the people at it.

/// Blocking request/response I/O used by the engine.
///
/// Implementations own all input validation: the engine relies on every
/// answer already being valid when the call returns, and never retries.
pub trait Prompt {
    /// Asks for an integer in `min..=max`, re-asking until one is given.
    fn ask_integer(&mut self, prompt: &str, min: usize, max: usize) -> usize;

    /// Asks for one of the `allowed` characters, re-asking until one is given.
    fn ask_choice(&mut self, prompt: &str, allowed: &[char]) -> char;

    /// Tells the table something. Never fails.
    fn notify(&mut self, message: &str);

    /// Asks a yes/no question.
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        self.ask_choice(prompt, &['y', 'n']) == 'y'
    }
}
