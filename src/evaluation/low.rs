use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::error::Error;
use std::cmp::Ordering;

/// which lowball rules to evaluate under
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LowVariant {
    /// ace-to-five, no qualifier, pairs allowed when shorthanded
    Razz,
    /// ace-to-five with an eight qualifier and no pairs
    EightOrBetter,
}

/// A hand's lowball value.
///
/// Qualified hands carry five ace-to-five card values in ascending
/// order. comparison is positional from the highest card down, lower
/// is better, and any qualified low beats a missing one. straights
/// and flushes never count against a low hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LowRank {
    Qualified([u8; 5]),
    None,
}

impl LowRank {
    pub fn qualifies(&self) -> bool {
        matches!(self, Self::Qualified(_))
    }
}

impl Ord for LowRank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Qualified(a), Self::Qualified(b)) => a.iter().rev().cmp(b.iter().rev()),
            (Self::Qualified(_), Self::None) => Ordering::Less,
            (Self::None, Self::Qualified(_)) => Ordering::Greater,
            (Self::None, Self::None) => Ordering::Equal,
        }
    }
}
impl PartialOrd for LowRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// distinct ace-to-five values present in a hand, ascending
fn distinct(hand: Hand) -> Vec<u8> {
    let mut values = hand
        .into_iter()
        .map(|card| card.rank())
        .collect::<std::collections::BTreeSet<Rank>>()
        .into_iter()
        .map(|rank| rank.low())
        .collect::<Vec<u8>>();
    values.sort_unstable();
    values
}

/// how many times each ace-to-five value occurs, indexed by value
fn occurrences(hand: Hand) -> [u8; 14] {
    let mut counts = [0u8; 14];
    for card in hand {
        counts[card.rank().low() as usize] += 1;
    }
    counts
}

/// ace-to-five value of a hand under Razz rules. every hand has one.
///
/// five cards pad short hands with the highest values not already
/// held; six or seven cards instead reuse duplicated values, lowest
/// first, one copy per value per pass, until five cards are chosen.
pub fn razz(hand: Hand) -> LowRank {
    assert!(hand.size() >= 5 && hand.size() <= 7);
    let mut values = distinct(hand);
    values.truncate(5);
    if values.len() < 5 {
        match hand.size() {
            5 => {
                let mut fill = 13;
                while values.len() < 5 {
                    if !values.contains(&fill) {
                        values.push(fill);
                    }
                    fill -= 1;
                }
            }
            _ => {
                let mut counts = occurrences(hand);
                let uniques = values.clone();
                while values.len() < 5 {
                    for value in uniques.iter() {
                        if counts[*value as usize] > 1 && values.len() < 5 {
                            counts[*value as usize] -= 1;
                            values.push(*value);
                        }
                    }
                }
            }
        }
        values.sort_unstable();
    }
    let mut cards = [0u8; 5];
    cards.copy_from_slice(&values);
    LowRank::Qualified(cards)
}

/// ace-to-five value of a hand under eight-or-better rules. pairs
/// never count, so a hand qualifies only with five distinct values
/// of eight or lower, and the five lowest of those play.
pub fn eight_or_better(hand: Hand) -> LowRank {
    assert!(hand.size() >= 5 && hand.size() <= 7);
    let mut values = distinct(hand);
    values.retain(|value| *value <= 8);
    if values.len() < 5 {
        return LowRank::None;
    }
    values.truncate(5);
    let mut cards = [0u8; 5];
    cards.copy_from_slice(&values);
    LowRank::Qualified(cards)
}

/// lowball value of a hand supplied as raw card encodings
pub fn evaluate_low(cards: &[u8], variant: LowVariant) -> Result<LowRank, Error> {
    let hand = Hand::try_from(cards)?;
    if hand.size() < 5 {
        return Err(Error::InsufficientDeck {
            need: 5,
            have: hand.size(),
        });
    }
    match variant {
        LowVariant::Razz => Ok(razz(hand)),
        LowVariant::EightOrBetter => Ok(eight_or_better(hand)),
    }
}
