use crate::cards::card::Card;
use thiserror::Error;

/// Everything that can go wrong when callers hand us cards.
///
/// Panics are reserved for internal invariant violations; anything
/// reachable from caller-supplied data comes back through here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("card {0} is outside the 52-card encoding")]
    InvalidCard(u8),
    #[error("card {0} appears more than once across hands and board")]
    DuplicateCards(Card),
    #[error("needed {need} cards with only {have} left in the deck")]
    InsufficientDeck { need: usize, have: usize },
    #[error("every hand in the range conflicts with cards already in play")]
    NoValidOpponents,
    #[error("stud hands take 3 to 7 cards, got {0}")]
    StudHandSize(usize),
    #[error("rank table corrupted: {0}")]
    InternalTableCorruption(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
