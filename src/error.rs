//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when constructing cards or suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("rank {0} is not between 1 and 13")]
    InvalidRank(u8),
    /// Suit not one of clubs, diamonds, hearts, or spades.
    ///
    /// Holds the offending initial, or the first character of an unknown name.
    #[error("suit starting with `{0}` is not clubs, diamonds, hearts, or spades")]
    InvalidSuit(char),
    /// Suit parsed from an empty string.
    #[error("no suit given")]
    EmptySuit,
}

/// Errors that can occur when validating table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Player count outside the allowed range.
    #[error("player count {0} is not between 1 and 7")]
    InvalidPlayerCount(u8),
    /// Deck count outside the allowed range.
    #[error("deck count {0} is not between 1 and 8")]
    InvalidDeckCount(u8),
    /// Players would start with nothing to bet.
    #[error("starting money must be greater than zero")]
    ZeroStartingMoney,
    /// Starting money above the table limit.
    #[error("starting money {0} is above the table limit")]
    ExcessiveStartingMoney(usize),
}

/// Errors that can occur in the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// Deck count outside the allowed range.
    #[error("deck count {0} is not between 1 and 8")]
    InvalidDeckCount(u8),
    /// A stacked shoe was built from no cards.
    #[error("a shoe needs at least one card")]
    Empty,
    /// Every card is in play and nothing is left to reshuffle.
    #[error("no cards left in the shoe")]
    OutOfCards,
    /// The cursor fell behind the in-play count.
    #[error("shoe bookkeeping is inconsistent: {dealt} cards in play but cursor at {cursor}")]
    InvalidState {
        /// Cards dealt since the last `start_deal`.
        dealt: usize,
        /// Position of the next card to draw.
        cursor: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// The hand has already been paid out.
    #[error("hand is already resolved")]
    HandResolved,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// The hand has already busted.
    #[error("this hand has already busted")]
    HandBust,
    /// The hand accepts no further actions.
    #[error("hand is not active")]
    HandDone,
    /// The hand has already been paid out.
    #[error("hand is already resolved")]
    HandResolved,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The dealer has not been dealt two cards yet.
    #[error("dealer has no up card yet")]
    NoUpCard,
    /// Drawing from the shoe failed.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that abort round processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Table options are invalid.
    #[error("invalid table options: {0}")]
    Options(#[from] OptionsError),
    /// The shoe failed.
    #[error("shoe error: {0}")]
    Shoe(#[from] ShoeError),
    /// A player or dealer action failed.
    #[error("action error: {0}")]
    Action(#[from] ActionError),
    /// A bet could not be recorded.
    #[error("bet error: {0}")]
    Bet(#[from] BetError),
    /// A participant had no hand where one was required.
    #[error("participant has no hand this round")]
    MissingHand,
    /// A bankrupt player reached the betting step.
    #[error("bankrupt player reached the betting step")]
    BankruptPlayer,
}
