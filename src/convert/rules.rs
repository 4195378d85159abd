//! Ordered attribute rewrite rules.
//!
//! Every rule runs globally over the output of the previous rule, so the order
//! of [`RULES`] is part of the contract:
//!
//! | # | rule          | effect                                           |
//! |---|---------------|--------------------------------------------------|
//! | 1 | `camel_case`  | `stroke-width` -> `strokeWidth` (anywhere)       |
//! | 2 | `fill`        | `fill="#000"` -> `fill="currentColor"`, keeps `none` |
//! | 3 | `stroke`      | `stroke="red"` -> `stroke="currentColor"`        |
//! | 4 | `width`       | `width="24"` -> `width="100%"`                   |
//! | 5 | `height`      | `height="24"` -> `height="100%"`                 |
//! | 6 | `class_name`  | `<svg` -> `<svg className={className}`           |
//!
//! Only double-quoted attribute values are recognized.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Replacement strategy for a rule.
enum Replace {
    /// Literal replacement (no `$` expansion).
    Literal(&'static str),
    /// Computed replacement per match.
    With(fn(&Captures<'_>) -> String),
}

/// A single (pattern, replacement) rewrite.
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    replace: Replace,
}

impl RewriteRule {
    fn literal(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            replace: Replace::Literal(replacement),
        }
    }

    fn with(name: &'static str, pattern: &str, f: fn(&Captures<'_>) -> String) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            replace: Replace::With(f),
        }
    }

    /// Rule name, used in debug output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to all non-overlapping matches, left to right.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.replace {
            Replace::Literal(s) => self.pattern.replace_all(text, regex::NoExpand(*s)),
            Replace::With(f) => self.pattern.replace_all(text, |caps: &Captures<'_>| f(caps)),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

fn upper_after_hyphen(caps: &Captures<'_>) -> String {
    caps[1].to_ascii_uppercase()
}

fn fill_unless_none(caps: &Captures<'_>) -> String {
    if &caps[1] == "none" {
        caps[0].to_string()
    } else {
        r#"fill="currentColor""#.to_string()
    }
}

/// The fixed rewrite pipeline, in application order.
pub static RULES: LazyLock<[RewriteRule; 6]> = LazyLock::new(|| {
    [
        RewriteRule::with("camel_case", r"-([a-z])", upper_after_hyphen),
        RewriteRule::with("fill", r#"fill="([^"]*)""#, fill_unless_none),
        RewriteRule::literal("stroke", r#"stroke="[^"]*""#, r#"stroke="currentColor""#),
        RewriteRule::literal("width", r#"width="[^"]*""#, r#"width="100%""#),
        RewriteRule::literal("height", r#"height="[^"]*""#, r#"height="100%""#),
        RewriteRule::literal("class_name", "<svg", "<svg className={className}"),
    ]
});

/// Run every rule in order over `svg`.
pub fn rewrite(svg: &str) -> String {
    let mut text = svg.to_string();
    for rule in RULES.iter() {
        let next = match rule.apply(&text) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = next {
            text = next;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static RewriteRule {
        RULES.iter().find(|r| r.name() == name).unwrap()
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(RewriteRule::name).collect();
        assert_eq!(
            names,
            ["camel_case", "fill", "stroke", "width", "height", "class_name"]
        );
    }

    #[test]
    fn test_camel_case() {
        let r = rule("camel_case");
        assert_eq!(r.apply(r#"stroke-width="2""#), r#"strokeWidth="2""#);
        assert_eq!(
            r.apply(r#"stroke-linecap="round" fill-rule="evenodd""#),
            r#"strokeLinecap="round" fillRule="evenodd""#
        );
        // uppercase and digits after a hyphen are left alone
        assert_eq!(r.apply("a-B c-1 -5"), "a-B c-1 -5");
        // applies to text content too
        assert_eq!(r.apply("<!-- my-icon -->"), "<!-- myIcon -->");
    }

    #[test]
    fn test_fill_keeps_none() {
        let r = rule("fill");
        assert_eq!(r.apply(r#"fill="none""#), r#"fill="none""#);
        assert_eq!(r.apply(r##"fill="#000""##), r#"fill="currentColor""#);
        assert_eq!(r.apply(r#"fill="""#), r#"fill="currentColor""#);
        assert_eq!(
            r.apply(r#"fill="red" fill="none" fill="blue""#),
            r#"fill="currentColor" fill="none" fill="currentColor""#
        );
    }

    #[test]
    fn test_fill_exception_is_exact() {
        let r = rule("fill");
        assert_eq!(r.apply(r#"fill="nonexistent""#), r#"fill="currentColor""#);
        assert_eq!(r.apply(r#"fill="None""#), r#"fill="currentColor""#);
    }

    #[test]
    fn test_stroke_has_no_exception() {
        let r = rule("stroke");
        assert_eq!(r.apply(r#"stroke="none""#), r#"stroke="currentColor""#);
        assert_eq!(r.apply(r##"stroke="#fff""##), r#"stroke="currentColor""#);
    }

    #[test]
    fn test_size_rules() {
        assert_eq!(rule("width").apply(r#"width="24px""#), r#"width="100%""#);
        assert_eq!(rule("height").apply(r#"height="1em""#), r#"height="100%""#);
        // camelCased attributes keep their value
        assert_eq!(
            rule("width").apply(r#"strokeWidth="2""#),
            r#"strokeWidth="2""#
        );
    }

    #[test]
    fn test_class_name_every_svg_tag() {
        let r = rule("class_name");
        assert_eq!(
            r.apply("<svg><svg></svg></svg>"),
            "<svg className={className}><svg className={className}></svg></svg>"
        );
    }

    #[test]
    fn test_single_quotes_untouched() {
        let svg = "<path fill='red' stroke='blue' width='3'/>";
        assert_eq!(rewrite(svg), svg);
    }

    #[test]
    fn test_rewrite_runs_in_order() {
        // `fill-opacity` becomes `fillOpacity` before the fill rule runs
        let out = rewrite(r#"<svg fill-opacity="0.5" fill="red"/>"#);
        assert_eq!(
            out,
            r#"<svg className={className} fillOpacity="0.5" fill="currentColor"/>"#
        );
    }

    #[test]
    fn test_rewrite_empty() {
        assert_eq!(rewrite(""), "");
    }
}
