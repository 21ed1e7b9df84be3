use super::config::EquityConfig;
use super::config::Z95;
use super::engine::Engine;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::error::Error;
use crate::judge;
use crate::judge::LowOutcome;
use crate::judge::Outcome;
use crate::Equity;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;

/// which stud showdown rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudGame {
    #[serde(rename = "razz")]
    Razz,
    #[serde(rename = "7card_stud_high")]
    High,
    #[serde(rename = "7card_stud_highlow8")]
    HighLow8,
}

impl std::fmt::Display for StudGame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Razz => write!(f, "razz"),
            Self::High => write!(f, "7card_stud_high"),
            Self::HighLow8 => write!(f, "7card_stud_highlow8"),
        }
    }
}

/// per-half breakdown for hi-lo split pots, all percentages
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SplitEquity {
    pub high: Equity,
    pub low: Equity,
    pub scoop: Equity,
}

/// stud equity result. overall equity is the expected pot share,
/// which for hi-lo differs from either half taken alone.
#[derive(Debug, Clone, Serialize)]
pub struct StudEquity {
    pub equity: Equity,
    pub split: Option<SplitEquity>,
    pub iterations: usize,
    pub game: StudGame,
}

/// running pot-share accounting across simulated showdowns
#[derive(Default)]
struct Tally {
    share: f64,
    high: f64,
    low: f64,
    scoops: f64,
    count: usize,
}

impl Tally {
    /// a winner-take-all showdown. returns the hero's pot share.
    fn outright(&mut self, outcome: Outcome) -> f64 {
        let share = Engine::payoff(outcome);
        self.share += share;
        self.count += 1;
        share
    }

    /// a hi-lo showdown. each half splits independently on ties; with
    /// no qualifying low the whole pot follows the high. returns the
    /// hero's pot share.
    fn split(&mut self, high: Outcome, low: LowOutcome) -> f64 {
        self.count += 1;
        self.high += Engine::payoff(high);
        let mut share = 0.;
        if low == LowOutcome::None {
            match high {
                Outcome::Hero => {
                    share = 1.;
                    self.scoops += 1.;
                }
                Outcome::Tie => share = 0.5,
                Outcome::Villain => {}
            }
        } else {
            match high {
                Outcome::Hero => share += 0.5,
                Outcome::Tie => share += 0.25,
                Outcome::Villain => {}
            }
            match low {
                LowOutcome::Hero => {
                    self.low += 1.;
                    share += 0.5;
                }
                LowOutcome::Tie => {
                    self.low += 0.5;
                    share += 0.25;
                }
                _ => {}
            }
            if high == Outcome::Hero && low == LowOutcome::Hero {
                self.scoops += 1.;
            }
        }
        self.share += share;
        share
    }

    fn result(&self, game: StudGame) -> StudEquity {
        let total = self.count as f64;
        StudEquity {
            equity: self.share / total * 100.,
            split: match game {
                StudGame::HighLow8 => Some(SplitEquity {
                    high: self.high / total * 100.,
                    low: self.low / total * 100.,
                    scoop: self.scoops / total * 100.,
                }),
                _ => None,
            },
            iterations: self.count,
            game,
        }
    }
}

impl Engine {
    /// Sampled stud equity over a fixed number of deals. each deal
    /// completes both hands to seven cards from the remaining deck;
    /// dead cards are excluded from the deck but belong to no hand.
    pub fn stud(
        &self,
        hero: Hand,
        villain: Hand,
        dead: Hand,
        game: StudGame,
        iterations: usize,
        rng: &mut SmallRng,
    ) -> Result<StudEquity, Error> {
        assert!(iterations > 0);
        let used = Self::validate_stud(hero, villain, dead)?;
        let stock = Deck::from(used.complement());
        let mut tally = Tally::default();
        for _ in 0..iterations {
            let mut deck = stock;
            let ours = Hand::add(hero, deck.deal(7 - hero.size(), rng));
            let theirs = Hand::add(villain, deck.deal(7 - villain.size(), rng));
            Self::showdown(&mut tally, game, ours, theirs);
        }
        Ok(tally.result(game))
    }

    /// Sampled stud equity that stops once the 95% confidence margin
    /// on the pot share falls below the configured precision.
    pub fn stud_converging(
        &self,
        hero: Hand,
        villain: Hand,
        dead: Hand,
        game: StudGame,
        config: &EquityConfig,
        rng: &mut SmallRng,
    ) -> Result<StudEquity, Error> {
        let used = Self::validate_stud(hero, villain, dead)?;
        let stock = Deck::from(used.complement());
        let mut tally = Tally::default();
        let mut squares = 0.;
        while tally.count < config.max_iterations {
            let mut deck = stock;
            let ours = Hand::add(hero, deck.deal(7 - hero.size(), rng));
            let theirs = Hand::add(villain, deck.deal(7 - villain.size(), rng));
            let x = Self::showdown(&mut tally, game, ours, theirs);
            squares += x * x;
            let count = tally.count;
            if count >= config.min_iterations && count % config.check_interval == 0 {
                let mean = tally.share / count as f64;
                let variance = (squares / count as f64 - mean * mean).max(0.);
                let margin = Z95 * (variance / count as f64).sqrt() * 100.;
                if margin < config.target_precision {
                    break;
                }
            }
        }
        Ok(tally.result(game))
    }

    fn showdown(tally: &mut Tally, game: StudGame, ours: Hand, theirs: Hand) -> f64 {
        match game {
            StudGame::Razz => tally.outright(judge::judge_razz(ours, theirs)),
            StudGame::High => tally.outright(judge::judge_stud_high(ours, theirs)),
            StudGame::HighLow8 => {
                let (high, low) = judge::judge_winner_split(ours, theirs);
                tally.split(high, low)
            }
        }
    }

    fn validate_stud(hero: Hand, villain: Hand, dead: Hand) -> Result<Hand, Error> {
        for hand in [hero, villain] {
            if hand.size() < 3 || hand.size() > 7 {
                return Err(Error::StudHandSize(hand.size()));
            }
        }
        Self::distinct(hero, villain)?;
        Self::distinct(hero, dead)?;
        Self::distinct(villain, dead)?;
        let used = Hand::add(Hand::add(hero, villain), dead);
        let need = (7 - hero.size()) + (7 - villain.size());
        let have = used.complement().size();
        if need > have {
            Err(Error::InsufficientDeck { need, have })
        } else {
            Ok(used)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn made_wheel_always_wins_razz() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As 2s 3d 4c 5h 9d 9c");
        let villain = Hand::from("Kh Kd Qs Jc Ts 8h 7d");
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud(hero, villain, Hand::empty(), StudGame::Razz, 100, rng)
            .unwrap();
        assert!(result.equity == 100.0);
        assert!(result.split.is_none());
        assert!(result.iterations == 100);
    }

    #[test]
    fn stud_high_takes_the_best_five_of_seven() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As Ah Ad Ac 5h 9d 8c");
        let villain = Hand::from("Kh Kd Qs Jc Ts 2h 3d");
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud(hero, villain, Hand::empty(), StudGame::High, 50, rng)
            .unwrap();
        assert!(result.equity == 100.0);
        assert!(result.game == StudGame::High);
    }

    #[test]
    fn scooping_both_halves_is_full_equity() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As 2s 3d 4c 5h 9d 9c");
        let villain = Hand::from("Kh Kd Qs Jc Ts 8h 7d");
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud(hero, villain, Hand::empty(), StudGame::HighLow8, 50, rng)
            .unwrap();
        let split = result.split.unwrap();
        assert!(result.equity == 100.0);
        assert!(split.high == 100.0);
        assert!(split.low == 100.0);
        assert!(split.scoop == 100.0);
    }

    #[test]
    fn without_a_low_the_high_hand_scoops() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("Ks Kd 9h 9c Th Jc 2s");
        let villain = Hand::from("Ah Ad Ts Td Qc Jd 8c");
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud(hero, villain, Hand::empty(), StudGame::HighLow8, 50, rng)
            .unwrap();
        let split = result.split.unwrap();
        assert!(result.equity == 0.0);
        assert!(split.high == 0.0);
        assert!(split.low == 0.0);
        assert!(split.scoop == 0.0);
    }

    #[test]
    fn one_sided_lows_split_the_pot() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As 2s 3d 4c 8h Kd Kc");
        let villain = Hand::from("Ah Ad Ac Jd Qc Td 9c");
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud(hero, villain, Hand::empty(), StudGame::HighLow8, 50, rng)
            .unwrap();
        let split = result.split.unwrap();
        assert!(result.equity == 50.0);
        assert!(split.high == 0.0);
        assert!(split.low == 100.0);
        assert!(split.scoop == 0.0);
    }

    #[test]
    fn partial_hands_complete_to_seven() {
        let engine = Engine::seeded(11);
        let hero = Hand::from("As 2s 3s");
        let villain = Hand::from("Kh Kd 4c");
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud(hero, villain, Hand::empty(), StudGame::Razz, 2_000, rng)
            .unwrap();
        assert!(result.equity > 50.0 && result.equity < 100.0);
        assert!(result.iterations == 2_000);
    }

    #[test]
    fn seeded_stud_runs_reproduce() {
        let hero = Hand::from("As 2s 3s");
        let villain = Hand::from("Kh Kd 4c");
        let engine = Engine::seeded(8);
        let a = engine
            .stud(hero, villain, Hand::empty(), StudGame::High, 300, &mut engine.rng(2))
            .unwrap();
        let b = engine
            .stud(hero, villain, Hand::empty(), StudGame::High, 300, &mut engine.rng(2))
            .unwrap();
        assert!(a.equity == b.equity);
    }

    #[test]
    fn hand_sizes_are_enforced() {
        let engine = Engine::seeded(0);
        let ref mut rng = engine.rng(0);
        let short = engine.stud(
            Hand::from("As Ks"),
            Hand::from("2c 3c 4c"),
            Hand::empty(),
            StudGame::Razz,
            10,
            rng,
        );
        assert!(matches!(short, Err(Error::StudHandSize(2))));
    }

    #[test]
    fn dead_cards_can_exhaust_the_deck() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As 2s 3s");
        let villain = Hand::from("Kh Kd 4c");
        let mut dead = Hand::add(hero, villain).complement();
        for _ in 0..7 {
            let card = dead.take_min().unwrap();
            dead.remove(card);
        }
        let ref mut rng = engine.rng(0);
        let result = engine.stud(hero, villain, dead, StudGame::Razz, 10, rng);
        assert!(matches!(
            result,
            Err(Error::InsufficientDeck { need: 8, have: 7 })
        ));
    }

    #[test]
    fn converging_stud_respects_iteration_bounds() {
        let engine = Engine::seeded(4);
        let hero = Hand::from("As 2s 3s");
        let villain = Hand::from("Kh Kd 4c");
        let config = EquityConfig::default();
        let ref mut rng = engine.rng(0);
        let result = engine
            .stud_converging(hero, villain, Hand::empty(), StudGame::HighLow8, &config, rng)
            .unwrap();
        assert!(result.iterations >= config.min_iterations);
        assert!(result.iterations <= config.max_iterations);
    }
}
