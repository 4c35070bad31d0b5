//! Game state types.

/// Where the engine is within a round.
///
/// The states are visited in declaration order every round, except that
/// `PlayerActions` and `DealerPlay` are skipped when the dealer holds
/// blackjack, and `GameOver` is entered instead of `TakeBets` once every
/// player is broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Clearing hands and resetting the in-play count.
    StartRound,
    /// Dropping players with no money left.
    RemoveBankrupt,
    /// Collecting a bet from each player.
    TakeBets,
    /// Dealing two cards to every player and the dealer.
    DealInitial,
    /// Paying player blackjacks, or ending early on a dealer blackjack.
    CheckBlackjacks,
    /// Players act on their hands.
    PlayerActions,
    /// Dealer plays out their hand.
    DealerPlay,
    /// Comparing hands and paying out.
    Settlement,
    /// Every player is bankrupt; no further rounds.
    GameOver,
}
