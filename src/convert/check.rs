//! Optional boundary checks run before the (total) transform.
//!
//! [`super::transform`] accepts any input and never fails. These checks let
//! callers reject inputs that would produce unusable components.

use thiserror::Error;

/// Reasons a conversion input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("component name is empty")]
    EmptyName,

    #[error("`{name}` is not a valid component name: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("SVG source is empty")]
    EmptySource,

    #[error("input does not contain an `<svg` element")]
    NotSvg,
}

/// Non-fatal observations about a component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLint {
    /// React renders lowercase tags as DOM elements, not components.
    LowercaseStart,
}

/// Check that `name` is a usable identifier.
///
/// Accepts ASCII letters, digits, `_` and `$`, not starting with a digit.
pub fn check_component_name(name: &str) -> Result<Option<NameLint>, ConvertError> {
    let Some(first) = name.chars().next() else {
        return Err(ConvertError::EmptyName);
    };

    if first.is_ascii_digit() {
        return Err(invalid(name, "starts with a digit"));
    }

    if let Some(bad) = name.chars().find(|c| !is_ident_char(*c)) {
        let reason = if bad.is_whitespace() {
            "contains whitespace".to_string()
        } else {
            format!("contains `{bad}`")
        };
        return Err(invalid(name, reason));
    }

    if first.is_ascii_lowercase() {
        return Ok(Some(NameLint::LowercaseStart));
    }
    Ok(None)
}

/// Check that `svg` looks like SVG markup.
pub fn check_svg_source(svg: &str) -> Result<(), ConvertError> {
    if svg.trim().is_empty() {
        return Err(ConvertError::EmptySource);
    }
    if !svg.contains("<svg") {
        return Err(ConvertError::NotSvg);
    }
    Ok(())
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn invalid(name: &str, reason: impl Into<String>) -> ConvertError {
    ConvertError::InvalidName {
        name: name.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(check_component_name("IconArrowRight"), Ok(None));
        assert_eq!(check_component_name("Icon24"), Ok(None));
        assert_eq!(check_component_name("_Private"), Ok(None));
        assert_eq!(check_component_name("$Icon"), Ok(None));
    }

    #[test]
    fn test_lowercase_name_is_linted() {
        assert_eq!(
            check_component_name("icon"),
            Ok(Some(NameLint::LowercaseStart))
        );
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(check_component_name(""), Err(ConvertError::EmptyName));
        assert!(matches!(
            check_component_name("24Px"),
            Err(ConvertError::InvalidName { reason, .. }) if reason == "starts with a digit"
        ));
        assert!(matches!(
            check_component_name("Icon 2"),
            Err(ConvertError::InvalidName { reason, .. }) if reason == "contains whitespace"
        ));
        assert!(matches!(
            check_component_name("Logo.svg"),
            Err(ConvertError::InvalidName { reason, .. }) if reason == "contains `.`"
        ));
        assert!(check_component_name("Café").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = check_component_name("A-B").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`A-B` is not a valid component name: contains `-`"
        );
    }

    #[test]
    fn test_svg_source() {
        assert_eq!(check_svg_source("<svg></svg>"), Ok(()));
        assert_eq!(
            check_svg_source("<?xml version=\"1.0\"?>\n<svg/>"),
            Ok(())
        );
        assert_eq!(check_svg_source(""), Err(ConvertError::EmptySource));
        assert_eq!(check_svg_source(" \n\t"), Err(ConvertError::EmptySource));
        assert_eq!(check_svg_source("<html></html>"), Err(ConvertError::NotSvg));
    }
}
