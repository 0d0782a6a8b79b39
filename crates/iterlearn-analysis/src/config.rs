//! Configuration for the statistical analyses.

use serde::{Deserialize, Serialize};

/// Settings for the structure-score permutation test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Permutation-sampling budget.
    ///
    /// Also the upper bound on exhaustive enumeration: with `K` distinct
    /// labels, all `K!` relabelings are enumerated when `K! <= permutations`;
    /// otherwise `permutations` random relabelings are sampled. The exact
    /// branch's cost grows factorially, so keep this conservative when many
    /// distinct labels are expected.
    pub permutations: usize,

    /// Seed for the sampled branch. `None` draws from OS entropy. The exact
    /// branch is deterministic regardless of the seed.
    pub seed: Option<u64>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            permutations: 1000,
            seed: None,
        }
    }
}

impl StructureConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.permutations == 0 {
            return Err("permutations must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Settings for Monte Carlo transmission-error testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of shuffled alignments in the null distribution.
    pub simulations: usize,

    /// Seed for the shuffles. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            simulations: 100_000,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.simulations == 0 {
            return Err("simulations must be >= 1".to_string());
        }
        Ok(())
    }
}
