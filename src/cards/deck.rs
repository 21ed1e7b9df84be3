use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove
/// cards from itself. draws are uniform over whatever remains, with
/// the random source always injected by the caller so that sampling
/// stays reproducible under a seeded generator.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        let this = u64::from(self.0);
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 = Hand::from(this & mask);
    }

    /// remove a random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// remove n random cards from the deck
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        (0..n).fold(Hand::empty(), |hand, _| {
            Hand::add(hand, Hand::from(self.draw(rng)))
        })
    }
}
