//! `[batch]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [batch]
//! parallel = true   # convert files on the rayon thread pool
//! ```

use serde::{Deserialize, Serialize};

/// Batch run settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Convert files in parallel.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_batch_defaults() {
        let config = test_parse_config("");
        assert!(config.batch.parallel);
    }

    #[test]
    fn test_batch_sequential() {
        let config = test_parse_config("[batch]\nparallel = false");
        assert!(!config.batch.parallel);
    }
}
