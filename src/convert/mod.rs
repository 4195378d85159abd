//! SVG to React component conversion.
//!
//! Pure text functions with no I/O:
//!
//! - [`normalize`]: file name -> component name (`icon-arrow.svg` -> `IconArrow`)
//! - [`transform`]: SVG text + component name -> TSX component source
//! - [`convert_checked`]: [`transform`] guarded by boundary checks
//!
//! # Example
//!
//! ```
//! use svgcomp::convert::{normalize, transform};
//!
//! let name = normalize("check-mark.svg");
//! let code = transform(r#"<svg width="24"><path fill="red"/></svg>"#, &name);
//! assert!(code.contains("export default function CheckMark"));
//! assert!(code.contains(r#"fill="currentColor""#));
//! ```

mod check;
mod name;
mod rules;
mod template;

pub use check::{ConvertError, NameLint, check_component_name, check_svg_source};
pub use name::{SVG_SUFFIX, normalize};
pub use rules::{RULES, RewriteRule, rewrite};
pub use template::{PROPS_SUFFIX, STYLE_PROP, render};

/// Convert SVG markup into a component named `component_name`.
///
/// Total over all inputs: malformed SVG or an invalid name yields malformed
/// output, never an error.
pub fn transform(svg: &str, component_name: &str) -> String {
    render(component_name, &rewrite(svg))
}

/// Like [`transform`], but rejects empty or non-SVG sources and names that
/// are not identifiers.
///
/// A [`NameLint`] never rejects the input; call [`check_component_name`]
/// directly to report it.
pub fn convert_checked(svg: &str, component_name: &str) -> Result<String, ConvertError> {
    check_component_name(component_name)?;
    check_svg_source(svg)?;
    Ok(transform(svg, component_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECK_SVG: &str =
        r##"<svg width="24" height="24"><path fill="#000" stroke-width="2" d="M0 0"/></svg>"##;

    #[test]
    fn test_end_to_end_check() {
        let code = transform(CHECK_SVG, "Check");
        for expected in [
            "<svg className={className}",
            r#"width="100%""#,
            r#"height="100%""#,
            r#"fill="currentColor""#,
            r#"strokeWidth="2""#,
            "interface CheckProps",
            "export default function Check({ className }: CheckProps)",
        ] {
            assert!(code.contains(expected), "missing {expected} in:\n{code}");
        }
        assert!(!code.contains(r#"width="24""#));
        assert!(!code.contains(r##"fill="#000""##));
    }

    #[test]
    fn test_end_to_end_exact_markup() {
        let code = transform(CHECK_SVG, "Check");
        assert!(code.contains(
            r#"<svg className={className} width="100%" height="100%"><path fill="currentColor" strokeWidth="2" d="M0 0"/></svg>"#
        ));
    }

    #[test]
    fn test_fill_red_replaced() {
        let code = transform(r#"<svg><rect fill="red"/><circle fill="red"/></svg>"#, "Foo");
        assert!(code.contains(r#"fill="currentColor""#));
        assert!(!code.contains(r#"fill="red""#));
    }

    #[test]
    fn test_fill_none_survives_repeated_transform() {
        let svg = r##"<svg fill="none"><path fill="none" stroke="#111"/></svg>"##;
        let once = rewrite(svg);
        let twice = rewrite(&once);
        assert_eq!(once.matches(r#"fill="none""#).count(), 2);
        assert_eq!(twice.matches(r#"fill="none""#).count(), 2);
        assert!(transform(&once, "Foo").contains(r#"fill="none""#));
    }

    #[test]
    fn test_props_and_definition_named() {
        let code = transform(r#"<svg width="16" height="32"></svg>"#, "Foo");
        assert!(code.contains("FooProps"));
        assert!(code.contains("function Foo("));
        assert!(!code.contains(r#"width="16""#));
        assert!(!code.contains(r#"height="32""#));
    }

    #[test]
    fn test_attribute_order_independence() {
        let a = rewrite(r#"<path fill="red" stroke="blue" width="1" height="2"/>"#);
        let b = rewrite(r#"<path height="2" width="1" stroke="blue" fill="red"/>"#);

        let attrs = |s: &str| -> Vec<String> {
            let mut v: Vec<_> = s
                .trim_start_matches("<path ")
                .trim_end_matches("/>")
                .split(' ')
                .map(str::to_string)
                .collect();
            v.sort_unstable();
            v
        };
        assert_eq!(attrs(&a), attrs(&b));
    }

    #[test]
    fn test_transform_is_total() {
        for svg in ["", "not svg at all", "<svg", "fill=\"", "-", "<svg fill='x'>"] {
            let code = transform(svg, "");
            assert!(code.contains("export default function"));
        }
    }

    #[test]
    fn test_convert_checked() {
        assert!(convert_checked(CHECK_SVG, "Check").is_ok());
        assert_eq!(
            convert_checked(CHECK_SVG, ""),
            Err(ConvertError::EmptyName)
        );
        assert_eq!(
            convert_checked("hello", "Check"),
            Err(ConvertError::NotSvg)
        );
        assert_eq!(convert_checked("", "Check"), Err(ConvertError::EmptySource));
    }

    #[test]
    fn test_convert_checked_accepts_linted_name() {
        assert_eq!(
            check_component_name("check"),
            Ok(Some(NameLint::LowercaseStart))
        );
        let code = convert_checked(CHECK_SVG, "check").unwrap();
        assert!(code.contains("export default function check("));
    }

    #[test]
    fn test_normalized_name_feeds_transform() {
        let name = normalize("icon-arrow-right.svg");
        let code = transform(CHECK_SVG, &name);
        assert!(code.contains("IconArrowRightProps"));
    }
}
