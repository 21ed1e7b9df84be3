use super::cache::RankCache;
use super::config::EquityConfig;
use super::config::Z95;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::street::Street;
use crate::error::Error;
use crate::evaluation::high;
use crate::evaluation::table::RankTable;
use crate::judge::Outcome;
use crate::Equity;
use crate::RankValue;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Equity calculator over the shared rank table.
///
/// holds a memoization cache for repeated (hole, board) lookups and a
/// seed from which every simulation derives its own generator, so any
/// result can be reproduced from the seed alone.
pub struct Engine {
    table: &'static RankTable,
    cache: RankCache,
    seed: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            table: RankTable::shared(),
            cache: RankCache::new(),
            seed,
        }
    }

    pub fn cache(&self) -> &RankCache {
        &self.cache
    }

    /// a generator derived from the engine seed and a caller salt.
    /// distinct salts give independent streams, equal salts replay.
    pub fn rng(&self, salt: u64) -> SmallRng {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        let ref mut hasher = DefaultHasher::new();
        self.seed.hash(hasher);
        salt.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    /// rank of the best hand this hole makes on this board, memoized
    pub fn strength(&self, hole: Hand, board: Hand) -> RankValue {
        match self.cache.get(hole, board) {
            Some(rank) => rank,
            None => {
                let rank = high::strength_of(self.table, hole, board);
                self.cache.put(hole, board, rank);
                rank
            }
        }
    }

    /// head-to-head showdown on a complete board
    pub fn judge(&self, hero: Hand, villain: Hand, board: Hand) -> Outcome {
        let ours = self.strength(hero, board);
        let theirs = self.strength(villain, board);
        Outcome::from(ours.cmp(&theirs))
    }

    /// Exhaustive equity: every remaining run-out is dealt once.
    ///
    /// on a full board this is a single showdown. preflop it walks
    /// C(48, 5) boards, so prefer sampling there unless exactness
    /// matters more than time.
    pub fn exact(&self, hero: Hand, villain: Hand, board: Hand) -> Result<Equity, Error> {
        let used = self.validate(hero, villain, board)?;
        let n = Street::from(board.size()).n_remaining();
        if n == 0 {
            return Ok(Self::payoff(self.judge(hero, villain, board)) * 100.);
        }
        let mut wins = 0.;
        let mut total = 0;
        for runout in HandIterator::from((n, used)) {
            wins += Self::payoff(self.judge(hero, villain, Hand::add(board, runout)));
            total += 1;
        }
        Ok(wins / total as f64 * 100.)
    }

    /// Sampled equity over a fixed number of random run-outs.
    pub fn monte_carlo(
        &self,
        hero: Hand,
        villain: Hand,
        board: Hand,
        iterations: usize,
        rng: &mut SmallRng,
    ) -> Result<Equity, Error> {
        assert!(iterations > 0);
        let used = self.validate(hero, villain, board)?;
        let n = Street::from(board.size()).n_remaining();
        if n == 0 {
            return Ok(Self::payoff(self.judge(hero, villain, board)) * 100.);
        }
        let stock = Deck::from(used.complement());
        let mut wins = 0.;
        for _ in 0..iterations {
            let mut deck = stock;
            let runout = deck.deal(n, rng);
            wins += Self::payoff(self.judge(hero, villain, Hand::add(board, runout)));
        }
        Ok(wins / iterations as f64 * 100.)
    }

    /// Sampled equity that stops once the 95% confidence margin falls
    /// below the configured precision. returns the estimate and the
    /// number of run-outs it took.
    pub fn converging(
        &self,
        hero: Hand,
        villain: Hand,
        board: Hand,
        config: &EquityConfig,
        rng: &mut SmallRng,
    ) -> Result<(Equity, usize), Error> {
        let used = self.validate(hero, villain, board)?;
        let n = Street::from(board.size()).n_remaining();
        if n == 0 {
            return Ok((Self::payoff(self.judge(hero, villain, board)) * 100., 1));
        }
        let stock = Deck::from(used.complement());
        let mut sum = 0.;
        let mut squares = 0.;
        let mut count = 0;
        while count < config.max_iterations {
            let mut deck = stock;
            let runout = deck.deal(n, rng);
            let x = Self::payoff(self.judge(hero, villain, Hand::add(board, runout)));
            sum += x;
            squares += x * x;
            count += 1;
            if count >= config.min_iterations && count % config.check_interval == 0 {
                let mean = sum / count as f64;
                let variance = (squares / count as f64 - mean * mean).max(0.);
                let margin = Z95 * (variance / count as f64).sqrt() * 100.;
                if margin < config.target_precision {
                    break;
                }
            }
        }
        Ok((sum / count as f64 * 100., count))
    }

    /// half a pot for a tie, the whole pot for a win
    pub(crate) fn payoff(outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Hero => 1.,
            Outcome::Tie => 0.5,
            Outcome::Villain => 0.,
        }
    }

    /// checks the matchup for card conflicts and a dealable run-out,
    /// returning the union of cards already in play
    fn validate(&self, hero: Hand, villain: Hand, board: Hand) -> Result<Hand, Error> {
        assert!(hero.size() >= 2);
        assert!(villain.size() >= 2);
        Self::distinct(hero, villain)?;
        Self::distinct(hero, board)?;
        Self::distinct(villain, board)?;
        let used = Hand::add(Hand::add(hero, villain), board);
        let need = Street::from(board.size()).n_remaining();
        let have = used.complement().size();
        if need > have {
            Err(Error::InsufficientDeck { need, have })
        } else {
            Ok(used)
        }
    }

    pub(crate) fn distinct(lhs: Hand, rhs: Hand) -> Result<(), Error> {
        match Hand::overlap(lhs, rhs).take_min() {
            None => Ok(()),
            Some(card) => Err(Error::DuplicateCards(card)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_boards_are_judged_outright() {
        let engine = Engine::seeded(0);
        let board = Hand::from("2c 7d 9h Js Kc");
        let aces = Hand::from("As Ad");
        let kings = Hand::from("Ks Kd");
        assert!(engine.exact(aces, kings, board).unwrap() == 0.0);
        assert!(engine.exact(kings, aces, board).unwrap() == 100.0);
    }

    #[test]
    fn chopped_pots_are_half_equity() {
        let engine = Engine::seeded(0);
        let board = Hand::from("Qc Jd Th 2s 3d");
        let hero = Hand::from("Ah Kd");
        let villain = Hand::from("Ad Kh");
        assert!(engine.exact(hero, villain, board).unwrap() == 50.0);
    }

    #[test]
    fn exact_equities_are_complementary() {
        let engine = Engine::seeded(0);
        let board = Hand::from("8c 9c Tc 2d");
        let hero = Hand::from("Jc 7s");
        let villain = Hand::from("Ac Kc");
        let ours = engine.exact(hero, villain, board).unwrap();
        let theirs = engine.exact(villain, hero, board).unwrap();
        assert!((ours + theirs - 100.0).abs() < 1e-9);
    }

    #[test]
    fn drawing_dead_is_zero_equity() {
        let engine = Engine::seeded(0);
        let board = Hand::from("Kh Qh Jh Th");
        let hero = Hand::from("2c 2d");
        let villain = Hand::from("Ah 9h");
        assert!(engine.exact(hero, villain, board).unwrap() == 0.0);
    }

    #[test]
    fn monte_carlo_agrees_with_exact_on_the_turn() {
        let engine = Engine::seeded(7);
        let board = Hand::from("As 8d 5c 2h");
        let hero = Hand::from("Ad Kd");
        let villain = Hand::from("7c 6c");
        let truth = engine.exact(hero, villain, board).unwrap();
        let ref mut rng = engine.rng(0);
        let sampled = engine
            .monte_carlo(hero, villain, board, 10_000, rng)
            .unwrap();
        assert!((sampled - truth).abs() < 2.0);
    }

    #[test]
    fn converging_agrees_with_exact_on_the_turn() {
        let engine = Engine::seeded(7);
        let board = Hand::from("As 8d 5c 2h");
        let hero = Hand::from("Ad Kd");
        let villain = Hand::from("7c 6c");
        let truth = engine.exact(hero, villain, board).unwrap();
        let ref mut rng = engine.rng(1);
        let (sampled, count) = engine
            .converging(hero, villain, board, &EquityConfig::default(), rng)
            .unwrap();
        assert!((sampled - truth).abs() < 2.0);
        assert!(count >= EquityConfig::default().min_iterations);
    }

    #[test]
    fn omaha_equities_are_complementary() {
        let engine = Engine::seeded(0);
        let board = Hand::from("2c 7d Ts");
        let hero = Hand::from("As Ac Kh Qd");
        let villain = Hand::from("Ks Kc Jh Td");
        let ours = engine.exact(hero, villain, board).unwrap();
        let theirs = engine.exact(villain, hero, board).unwrap();
        assert!((ours + theirs - 100.0).abs() < 1e-9);
        assert!(ours > 0.0 && ours < 100.0);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let board = Hand::from("Qd 7s 2c");
        let hero = Hand::from("Ac Ks");
        let villain = Hand::from("8h 8d");
        let a = Engine::seeded(42)
            .monte_carlo(hero, villain, board, 500, &mut Engine::seeded(42).rng(1))
            .unwrap();
        let b = Engine::seeded(42)
            .monte_carlo(hero, villain, board, 500, &mut Engine::seeded(42).rng(1))
            .unwrap();
        assert!(a == b);
    }

    #[test]
    fn distinct_salts_decorrelate_streams() {
        let engine = Engine::seeded(9);
        let mut a = engine.rng(0);
        let mut b = engine.rng(1);
        let dealt = Deck::new().deal(5, &mut a);
        let other = Deck::new().deal(5, &mut b);
        assert!(dealt != other);
    }

    #[test]
    fn convergence_respects_iteration_bounds() {
        let engine = Engine::seeded(3);
        let hero = Hand::from("Ah Kh");
        let villain = Hand::from("Qs Qd");
        let config = EquityConfig::default();
        let ref mut rng = engine.rng(0);
        let (equity, count) = engine
            .converging(hero, villain, Hand::empty(), &config, rng)
            .unwrap();
        assert!(count >= config.min_iterations);
        assert!(count <= config.max_iterations);
        assert!(equity > 0.0 && equity < 100.0);
    }

    #[test]
    fn cache_warms_across_judgements() {
        let engine = Engine::seeded(0);
        let board = Hand::from("Js 9s 4d 4c");
        let hero = Hand::from("Jc Jd");
        let villain = Hand::from("As 9d");
        engine.exact(hero, villain, board).unwrap();
        assert!(!engine.cache().is_empty());
        engine.exact(hero, villain, board).unwrap();
        assert!(engine.cache().hit_rate() > 0.0);
    }

    #[test]
    fn shared_cards_are_rejected() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As Ks");
        let villain = Hand::from("As Qd");
        let result = engine.exact(hero, villain, Hand::empty());
        assert!(matches!(result, Err(Error::DuplicateCards(_))));
    }

    #[test]
    fn board_cards_cannot_be_held() {
        let engine = Engine::seeded(0);
        let hero = Hand::from("As Ks");
        let villain = Hand::from("Qh Qd");
        let board = Hand::from("Ks 2d 3c");
        let result = engine.exact(hero, villain, board);
        assert!(matches!(result, Err(Error::DuplicateCards(_))));
    }
}
