use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;

/// A five-card hand's full showdown value.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The category and defining ranks come first, and the
/// kicker cards break ties within a category.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

/// u32 injection, order-preserving
///
/// category in the top bits, then the defining ranks, then the
/// 13-bit kicker mask. two Strengths compare exactly as their packed
/// keys do, and two equivalent hands (differing only by suits) pack
/// to the same key. this is what the rank table is built from.
impl From<Strength> for u32 {
    fn from(strength: Strength) -> Self {
        let (category, primary, secondary) = match strength.value {
            Ranking::HighCard(hi) => (0, hi, None),
            Ranking::OnePair(hi) => (1, hi, None),
            Ranking::TwoPair(hi, lo) => (2, hi, Some(lo)),
            Ranking::ThreeOAK(hi) => (3, hi, None),
            Ranking::Straight(hi) => (4, hi, None),
            Ranking::Flush(hi) => (5, hi, None),
            Ranking::FullHouse(hi, lo) => (6, hi, Some(lo)),
            Ranking::FourOAK(hi) => (7, hi, None),
            Ranking::StraightFlush(hi) => (8, hi, None),
        };
        let primary = u8::from(primary) as u32;
        let secondary = secondary.map_or(0, |r: Rank| u8::from(r) as u32);
        category << 21 | primary << 17 | secondary << 13 | u16::from(strength.kicks) as u32
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
