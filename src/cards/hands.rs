use super::card::Card;
use super::hand::Hand;

/// Gosper's hack. successor of a bitstring with the same popcount.
fn permute(x: u64) -> u64 {
    let a = x | (x - 1);
    let b = a + 1;
    let c = !a;
    let d = c & b;
    let e = d - 1;
    let f = 1 + x.trailing_zeros();
    let g = e >> f;
    b | g
}

/// HandIterator walks every size-n Hand that avoids a blocked set of
/// cards. it holds nothing but the current bitstring and the mask, so
/// iteration order is deterministic and allocation-free. successors
/// come from Gosper's hack, discarding any configuration that collides
/// with the mask. best suited to sparse masks: run-out enumeration
/// blocks at most a dozen cards out of 52.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        if self.next == 0 {
            true
        } else {
            (64 - 52) > self.next.leading_zeros()
        }
    }

    fn advance(&mut self) {
        loop {
            self.next = permute(self.next);
            if self.next & self.mask == 0 {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next & this.mask > 0 {
            this.next = permute(this.next);
        }
        this
    }
}

/// SubsetIterator walks every size-k sub-Hand of a source Hand. the
/// dual of HandIterator: where a dense blocked set would make masked
/// Gosper iteration grind through mostly-colliding bitstrings, we
/// instead run Gosper's hack over a compact domain of source-card
/// indices and scatter each combination back onto real cards at yield.
pub struct SubsetIterator {
    next: u64,
    cards: Vec<Card>,
}

impl SubsetIterator {
    pub fn combinations(&self) -> usize {
        let n = self.cards.len();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >> self.cards.len() != 0
    }

    fn scatter(&self) -> Hand {
        let mut bits = self.next;
        let mut hand = Hand::empty();
        while bits > 0 {
            let i = bits.trailing_zeros() as usize;
            hand = Hand::add(hand, Hand::from(self.cards[i]));
            bits &= bits - 1;
        }
        hand
    }
}

impl Iterator for SubsetIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.scatter();
            self.next = permute(self.next);
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

impl From<(usize, Hand)> for SubsetIterator {
    fn from((k, hand): (usize, Hand)) -> Self {
        assert!(k <= hand.size());
        Self {
            next: (1 << k) - 1,
            cards: hand.into_iter().collect(),
        }
    }
}
