//! `[convert]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [convert]
//! strict = true   # reject empty/non-SVG sources and invalid component names
//! ```

use serde::{Deserialize, Serialize};

/// Conversion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Run boundary checks before transforming.
    ///
    /// Off by default: the transform accepts any text and the output is
    /// offered as-is.
    pub strict: bool,
}
