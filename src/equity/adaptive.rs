use super::config::SamplingConfig;
use super::engine::Engine;
use super::range;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::error::Error;
use crate::Equity;
use rand::rngs::SmallRng;
use rand::Rng;

/// Adaptive equity against a whole opponent range.
///
/// a pilot run of trials estimates how much the outcome varies, the
/// margin-of-error formula with finite-population correction sizes
/// the full run from that variance, and a running confidence check
/// can cut the run short once the estimate is tight enough. every
/// trial draws a fresh uniformly-random opponent from the range, so
/// the returned mean weighs each villain hand equally in expectation.
impl Engine {
    pub fn adaptive(
        &self,
        hero: Hand,
        range: &[Hand],
        board: Hand,
        config: &SamplingConfig,
        rng: &mut SmallRng,
    ) -> Result<(Equity, usize), Error> {
        Self::distinct(hero, board)?;
        let pool = range::filter(hero, range, board);
        if pool.is_empty() {
            return Err(Error::NoValidOpponents);
        }
        let population = pool.len();
        let mut sum = 0.;
        let mut squares = 0.;
        let mut count = 0;
        let pilot = config.pilot_samples.min(population);
        for _ in 0..pilot {
            let x = self.trial(hero, &pool, board, rng);
            sum += x;
            squares += x * x;
            count += 1;
        }
        let mean = sum / count as f64;
        let variance = (squares / count as f64 - mean * mean).max(0.);
        let sigma = variance.sqrt() * 100.;
        let total = Self::required_samples(sigma, population, config);
        log::debug!(
            "{:<32}{:<32}",
            "adaptive sampling sized",
            format!("sigma {:.2} -> {} of {} hands", sigma, total, population)
        );
        while count < total {
            let x = self.trial(hero, &pool, board, rng);
            sum += x;
            squares += x * x;
            count += 1;
            if count >= config.min_samples && count % config.check_interval == 0 {
                let mean = sum / count as f64;
                let variance = (squares / count as f64 - mean * mean).max(0.);
                let margin = config.confidence_z * (variance / count as f64).sqrt() * 100.;
                if margin < config.target_error {
                    break;
                }
            }
        }
        Ok((sum / count as f64 * 100., count))
    }

    /// one sampled showdown: a random opponent from the pool plus a
    /// random run-out, weighed as win 1 / tie 0.5 / loss 0
    fn trial(&self, hero: Hand, pool: &[Hand], board: Hand, rng: &mut SmallRng) -> f64 {
        let villain = pool[rng.random_range(0..pool.len())];
        let n = Street::from(board.size()).n_remaining();
        let used = Hand::add(Hand::add(hero, villain), board);
        let mut deck = Deck::from(used.complement());
        let runout = deck.deal(n, rng);
        Self::payoff(self.judge(hero, villain, Hand::add(board, runout)))
    }

    /// margin-of-error sample size with finite-population correction,
    /// clipped into the configured bounds and never past the range
    fn required_samples(sigma: f64, population: usize, config: &SamplingConfig) -> usize {
        let n0 = (config.confidence_z * sigma / config.target_error).powi(2);
        let corrected = if n0 > 0. {
            n0 / (1. + (n0 - 1.) / population as f64)
        } else {
            0.
        };
        (corrected.ceil() as usize)
            .max(config.min_samples)
            .min(config.max_samples)
            .min(population)
    }
}
