//! React component template.

/// Name of the styling prop consumed by the root `<svg>`.
pub const STYLE_PROP: &str = "className";

/// Suffix of the generated props interface (`{Name}Props`).
pub const PROPS_SUFFIX: &str = "Props";

/// Wrap rewritten markup in a TSX component named `name`.
///
/// The markup is embedded verbatim (no escaping or re-indentation):
///
/// ```text
/// interface {name}Props {
///   className?: string;
/// }
///
/// export default function {name}({ className }: {name}Props) {
///   return (
///     {markup}
///   );
/// }
/// ```
pub fn render(name: &str, markup: &str) -> String {
    format!(
        "interface {name}{PROPS_SUFFIX} {{\n  {STYLE_PROP}?: string;\n}}\n\n\
         export default function {name}({{ {STYLE_PROP} }}: {name}{PROPS_SUFFIX}) {{\n  \
         return (\n    {markup}\n  );\n}}"
    )
}
