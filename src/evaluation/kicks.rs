use crate::cards::rank::Rank;

/// A hand's kicker cards, as a 13-bit Rank mask.
///
/// Ord works because kickers within one Ranking category always
/// carry the same number of set bits, making mask comparison agree
/// with rank-by-rank comparison from the top down.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut value = k.0;
        let mut index = 0u8;
        let mut ranks = Vec::new();
        while value > 0 {
            if value & 1 == 1 {
                ranks.push(Rank::from(index));
            }
            value = value >> 1;
            index = index + 1;
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_ranks() {
        let kickers = Kickers::from(vec![Rank::Two, Rank::Jack, Rank::Ace]);
        assert!(kickers == Kickers::from(Vec::<Rank>::from(kickers)));
    }

    #[test]
    fn equal_width_masks_order_by_top_rank() {
        let low = Kickers::from(vec![Rank::King, Rank::Three]);
        let high = Kickers::from(vec![Rank::Ace, Rank::Two]);
        assert!(low < high);
    }
}
