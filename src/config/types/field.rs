//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, e.g. `output.extension`.
///
/// Sections expose their fields as associated constants:
///
/// ```ignore
/// diag.error(OutputConfig::FIELD_EXTENSION, "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path() {
        const FIELD: FieldPath = FieldPath::new("output.dir");
        assert_eq!(FIELD.as_str(), "output.dir");
        assert_eq!(FIELD.as_ref(), "output.dir");
        assert!(FIELD.to_string().contains("`output.dir`"));
    }
}
