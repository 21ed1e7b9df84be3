use crate::cards::hand::Hand;
use crate::evaluation::high;
use crate::evaluation::low;
use crate::evaluation::table::RankTable;
use std::cmp::Ordering;

/// who takes a pot, from the hero's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Hero,
    Villain,
    Tie,
}

/// who takes the low half of a split pot. None means no hand
/// qualified and the whole pot follows the high result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LowOutcome {
    Hero,
    Villain,
    Tie,
    None,
}

/// ranks order with lower as stronger, so Less means the hero wins
impl From<Ordering> for Outcome {
    fn from(order: Ordering) -> Self {
        match order {
            Ordering::Less => Outcome::Hero,
            Ordering::Greater => Outcome::Villain,
            Ordering::Equal => Outcome::Tie,
        }
    }
}
impl From<Ordering> for LowOutcome {
    fn from(order: Ordering) -> Self {
        match order {
            Ordering::Less => LowOutcome::Hero,
            Ordering::Greater => LowOutcome::Villain,
            Ordering::Equal => LowOutcome::Tie,
        }
    }
}

/// showdown between two holes over a shared board, each hole playing
/// under its own size's rules
pub fn judge_winner(hero: Hand, villain: Hand, board: Hand) -> Outcome {
    let table = RankTable::shared();
    let hero = high::strength_of(table, hero, board);
    let villain = high::strength_of(table, villain, board);
    Outcome::from(hero.cmp(&villain))
}

/// showdown between two complete stud hands, best five of each
pub fn judge_stud_high(hero: Hand, villain: Hand) -> Outcome {
    let table = RankTable::shared();
    let hero = high::best_of(table, hero);
    let villain = high::best_of(table, villain);
    Outcome::from(hero.cmp(&villain))
}

/// showdown between two complete Razz hands, lowest five of each
pub fn judge_razz(hero: Hand, villain: Hand) -> Outcome {
    let hero = low::razz(hero);
    let villain = low::razz(villain);
    Outcome::from(hero.cmp(&villain))
}

/// split-pot showdown between two complete stud hands: best five
/// high plus an eight-or-better low that may not exist on either side
pub fn judge_winner_split(hero: Hand, villain: Hand) -> (Outcome, LowOutcome) {
    let high = judge_stud_high(hero, villain);
    let ours = low::eight_or_better(hero);
    let theirs = low::eight_or_better(villain);
    let low = if !ours.qualifies() && !theirs.qualifies() {
        LowOutcome::None
    } else {
        LowOutcome::from(ours.cmp(&theirs))
    };
    (high, low)
}
