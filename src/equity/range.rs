use super::engine::Engine;
use crate::cards::hand::Hand;
use crate::error::Error;
use crate::Equity;
use std::collections::BTreeMap;

/// drops range entries sharing a card with the hero or the board.
/// conflicts are excluded rather than refused, so a range pasted from
/// a chart still evaluates once the dealt cards block parts of it.
/// repeated entries collapse to one.
pub fn filter(hero: Hand, range: &[Hand], board: Hand) -> Vec<Hand> {
    let blocked = Hand::add(hero, board);
    let mut pool = range
        .iter()
        .copied()
        .filter(|hand| Hand::overlap(*hand, blocked) == Hand::empty())
        .collect::<Vec<_>>();
    pool.sort();
    pool.dedup();
    pool
}

impl Engine {
    /// Exhaustive equity against every hand in a range, one villain at
    /// a time. returns per-villain equity plus the unweighted average.
    pub fn range_exact(
        &self,
        hero: Hand,
        range: &[Hand],
        board: Hand,
    ) -> Result<(BTreeMap<Hand, Equity>, Equity), Error> {
        Self::distinct(hero, board)?;
        let pool = filter(hero, range, board);
        if pool.is_empty() {
            return Err(Error::NoValidOpponents);
        }
        let mut equities = BTreeMap::new();
        for villain in pool {
            equities.insert(villain, self.exact(hero, villain, board)?);
        }
        Ok(Self::averaged(equities))
    }

    /// Sampled equity against every hand in a range, fanned across the
    /// rayon pool. iteration count per villain follows the precision
    /// policy unless pinned by the caller. each worker derives its own
    /// generator from the villain hand, so results do not depend on
    /// which worker picks up which hand.
    #[cfg(feature = "parallel")]
    pub fn range_parallel(
        &self,
        hero: Hand,
        range: &[Hand],
        board: Hand,
        policy: Option<super::config::Precision>,
    ) -> Result<(BTreeMap<Hand, Equity>, Equity), Error> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        Self::distinct(hero, board)?;
        let pool = filter(hero, range, board);
        if pool.is_empty() {
            return Err(Error::NoValidOpponents);
        }
        let precision = policy.unwrap_or_else(|| super::config::Precision::for_range(pool.len()));
        log::info!(
            "{:<32}{:<32}",
            "parallel range evaluation",
            format!(
                "{} hands x {} iterations on {} cores",
                pool.len(),
                precision.iterations(),
                num_cpus::get()
            )
        );
        let equities = std::sync::Mutex::new(BTreeMap::new());
        pool.par_iter().try_for_each(|villain| {
            let ref mut rng = self.rng(u64::from(*villain));
            let equity = self.monte_carlo(hero, *villain, board, precision.iterations(), rng)?;
            equities
                .lock()
                .expect("range evaluation lock poisoned")
                .insert(*villain, equity);
            Ok::<(), Error>(())
        })?;
        let equities = equities
            .into_inner()
            .expect("range evaluation lock poisoned");
        log::info!(
            "{:<32}{:<32}",
            "rank cache after range",
            format!(
                "{} entries {:.1}% hits",
                self.cache().len(),
                self.cache().hit_rate() * 100.
            )
        );
        Ok(Self::averaged(equities))
    }

    fn averaged(equities: BTreeMap<Hand, Equity>) -> (BTreeMap<Hand, Equity>, Equity) {
        let average = equities.values().sum::<f64>() / equities.len() as f64;
        (equities, average)
    }
}
