use serde::Deserialize;
use serde::Serialize;

/// two-sided 95% confidence z-score
pub const Z95: f64 = 1.96;

/// iteration budgets for the fixed precision tiers
pub const FAST_ITERATIONS: usize = 1_000;
pub const NORMAL_ITERATIONS: usize = 5_000;
pub const ACCURATE_ITERATIONS: usize = 10_000;

/// Monte Carlo effort for range evaluation, either pinned by the
/// caller or picked from the range size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    Fast,
    Normal,
    Accurate,
}

impl Precision {
    pub const fn iterations(&self) -> usize {
        match self {
            Self::Fast => FAST_ITERATIONS,
            Self::Normal => NORMAL_ITERATIONS,
            Self::Accurate => ACCURATE_ITERATIONS,
        }
    }

    /// wide ranges get speed, narrow ranges get accuracy
    pub fn for_range(n: usize) -> Self {
        if n > 100 {
            Self::Fast
        } else if n < 20 {
            Self::Accurate
        } else {
            Self::Normal
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Normal => write!(f, "normal"),
            Self::Accurate => write!(f, "accurate"),
        }
    }
}

/// Convergence policy for adaptive hand-vs-hand simulation.
///
/// all equities and error targets are percentage points on [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EquityConfig {
    /// hard ceiling on simulated run-outs
    pub max_iterations: usize,
    /// stop once the 95% confidence margin drops below this
    pub target_precision: f64,
    /// never stop before this many run-outs
    pub min_iterations: usize,
    /// how often to test the margin
    pub check_interval: usize,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            target_precision: 0.5,
            min_iterations: 1_000,
            check_interval: 200,
        }
    }
}

/// Sampling policy for adaptive range equity.
///
/// a pilot estimates the equity variance across the range, the
/// variance sizes the full sample with finite-population correction,
/// and a confidence margin can stop the run early. error targets are
/// percentage points on [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// opponents drawn to estimate variance before sizing
    pub pilot_samples: usize,
    /// floor on total samples, pilot included
    pub min_samples: usize,
    /// ceiling on total samples, pilot included
    pub max_samples: usize,
    /// desired half-width of the confidence interval
    pub target_error: f64,
    /// z-score defining the confidence level
    pub confidence_z: f64,
    /// how often to test the margin past the floor
    pub check_interval: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            pilot_samples: 500,
            min_samples: 1_000,
            max_samples: 10_000,
            target_error: 1.0,
            confidence_z: Z95,
            check_interval: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_tiers_scale_with_range_width() {
        assert!(Precision::for_range(150) == Precision::Fast);
        assert!(Precision::for_range(101) == Precision::Fast);
        assert!(Precision::for_range(100) == Precision::Normal);
        assert!(Precision::for_range(20) == Precision::Normal);
        assert!(Precision::for_range(19) == Precision::Accurate);
        assert!(Precision::for_range(1) == Precision::Accurate);
    }

    #[test]
    fn tier_budgets_are_ordered() {
        assert!(Precision::Fast.iterations() < Precision::Normal.iterations());
        assert!(Precision::Normal.iterations() < Precision::Accurate.iterations());
    }
}
