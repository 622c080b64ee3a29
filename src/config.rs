use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How the automated player searches.
///
/// Every combination plays perfectly; the switches only trade work for speed.
///
/// ```toml
/// alpha_beta_pruning = true
/// parallel_root = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Skip branches that cannot change the chosen move.
    pub alpha_beta_pruning: bool,
    /// Score the candidate moves of the root on the rayon thread pool.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha_beta_pruning: true,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    /// Parses a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The exhaustive, unpruned search.
    pub fn exhaustive() -> Self {
        Self {
            alpha_beta_pruning: false,
            parallel_root: false,
        }
    }
}
