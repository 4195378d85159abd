//! Component name derivation from file names.

/// File suffix stripped before normalization (case-sensitive).
pub const SVG_SUFFIX: &str = ".svg";

/// Derive a PascalCase component name from a file name.
///
/// Strips a trailing `.svg`, splits on `-` and `_`, capitalizes each
/// fragment (first char upper, rest lower) and joins them.
///
/// Characters other than the separators pass through unchanged, and an empty
/// input yields an empty name. See [`super::check_component_name`] for
/// rejecting such results.
///
/// # Examples
///
/// - `normalize("icon-arrow-right.svg")` -> `"IconArrowRight"`
/// - `normalize("my_icon.svg")` -> `"MyIcon"`
/// - `normalize("logo.SVG")` -> `"Logo.svg"`
pub fn normalize(file_name: &str) -> String {
    let stem = file_name.strip_suffix(SVG_SUFFIX).unwrap_or(file_name);

    let mut name = String::with_capacity(stem.len());
    for fragment in stem.split(['-', '_']) {
        capitalize_into(fragment, &mut name);
    }
    name
}

/// Push `word` with its first char uppercased and the rest lowercased.
#[inline]
fn capitalize_into(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize("icon-arrow-right.svg"), "IconArrowRight");
        assert_eq!(normalize("my_icon.svg"), "MyIcon");
        assert_eq!(normalize("Already-Capitalized.svg"), "AlreadyCapitalized");
    }

    #[test]
    fn test_normalize_suffix_is_optional() {
        for name in ["icon-arrow-right", "my_icon", "a--b", "x", ""] {
            let with_suffix = format!("{name}.svg");
            assert_eq!(normalize(&with_suffix), normalize(name), "{name}");
        }
    }

    #[test]
    fn test_normalize_suffix_case_sensitive() {
        assert_eq!(normalize("logo.SVG"), "Logo.svg");
        // only a trailing suffix is stripped
        assert_eq!(normalize("a.svg.bak"), "A.svg.bak");
        assert_eq!(normalize("icon.svg.svg"), "Icon.svg");
    }

    #[test]
    fn test_normalize_lowercases_rest() {
        assert_eq!(normalize("ARROW-UP.svg"), "ArrowUp");
        assert_eq!(normalize("iOS_logo.svg"), "IosLogo");
    }

    #[test]
    fn test_normalize_empty_fragments() {
        assert_eq!(normalize("--icon__name-.svg"), "IconName");
        assert_eq!(normalize("-_-"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(".svg"), "");
    }

    #[test]
    fn test_normalize_passes_other_chars_through() {
        assert_eq!(normalize("icon 2.svg"), "Icon 2");
        assert_eq!(normalize("24-px.svg"), "24Px");
        assert_eq!(normalize("café-icon.svg"), "CaféIcon");
    }
}
