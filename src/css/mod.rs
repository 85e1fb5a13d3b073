pub mod channels;

pub use channels::channels;

use crate::theme::Theme;
use crate::tokens::FAMILY_KEYS;

/// Ordered `--name: value` declarations. Iteration order is insertion order;
/// stable output depends on it, so the document never sorts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CssVariableDocument {
    decls: Vec<(String, String)>,
}

impl CssVariableDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.decls.push((name.into(), value.into()));
    }

    pub fn read(&self, name: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Render the declarations as a single `:root { ... }` block.
    pub fn to_stylesheet(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in self.iter() {
            out.push_str("  ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out
    }
}

/// Flatten a theme into CSS variable declarations.
///
/// Families emit one line per shade as `--color-<family>-<shade>`, scalar
/// scales follow with their prefixes, and semantic roles close the block as
/// `--color-<role>`. Color values go through [`channels`]; malformed entries
/// (custom literals that are not 6-digit hex) land in the output as-is.
pub fn emit_theme(theme: &Theme) -> CssVariableDocument {
    let mut doc = CssVariableDocument::new();

    for key in FAMILY_KEYS {
        let Some(scale) = theme.palette.get(&key) else {
            continue;
        };
        for (shade, hex) in scale.entries() {
            doc.declare(format!("--color-{}-{shade}", key.as_str()), channels(hex));
        }
    }

    for (key, value) in theme.spacing.entries() {
        doc.declare(format!("--spacing-{key}"), value);
    }
    for (key, value) in theme.radii.entries() {
        doc.declare(format!("--radius-{key}"), value);
    }
    for (key, value) in theme.shadows.entries() {
        doc.declare(format!("--shadow-{key}"), value);
    }
    for (key, value) in theme.font_sizes.entries() {
        doc.declare(format!("--text-{key}"), value);
    }
    for (key, value) in theme.font_families.entries() {
        doc.declare(format!("--font-{key}"), value);
    }
    for (key, value) in theme.font_weights.entries() {
        doc.declare(format!("--font-{key}"), value);
    }

    for (role, value) in theme.semantic.entries() {
        doc.declare(format!("--color-{role}"), channels(&theme.resolve_color(value)));
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_preserves_insertion_order() {
        let mut doc = CssVariableDocument::new();
        doc.declare("--z-last", "1");
        doc.declare("--a-first", "2");
        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["--z-last", "--a-first"]);
        assert_eq!(doc.read("--a-first"), Some("2"));
        assert_eq!(doc.read("--missing"), None);
    }

    #[test]
    fn theme_emission_is_deterministic() {
        let theme = Theme::default();
        let first = emit_theme(&theme).to_stylesheet();
        let second = emit_theme(&theme).to_stylesheet();
        assert_eq!(first, second);
    }

    #[test]
    fn primary_base_shade_emits_channel_triple() {
        let sheet = emit_theme(&Theme::default()).to_stylesheet();
        assert!(
            sheet.contains("--color-primary-600: 158 27 50;"),
            "missing brand line in:\n{sheet}"
        );
    }

    #[test]
    fn scale_colors_are_never_emitted_as_raw_hex() {
        use crate::tokens::{FAMILY_KEYS, SHADE_KEYS};

        let doc = emit_theme(&Theme::default());
        for family in FAMILY_KEYS {
            for shade in SHADE_KEYS {
                let name = format!("--color-{}-{shade}", family.as_str());
                let value = doc.read(&name).expect("missing scale declaration");
                assert!(!value.starts_with('#'), "{name} leaked raw hex: {value}");
            }
        }
    }

    #[test]
    fn custom_literals_pass_through_raw() {
        let doc = emit_theme(&Theme::default());
        // The overlay mask is an 8-digit alpha literal; the converter leaves it alone.
        assert_eq!(doc.read("--color-overlay-mask"), Some("#00000073"));
    }

    #[test]
    fn scalar_prefixes_follow_family_block() {
        let doc = emit_theme(&Theme::default());
        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        let first_spacing = names
            .iter()
            .position(|n| n.starts_with("--spacing-"))
            .expect("no spacing declarations");
        let last_color_scale = names
            .iter()
            .rposition(|n| n.starts_with("--color-error-"))
            .expect("no error-family declarations");
        assert!(last_color_scale < first_spacing);
        assert!(names.contains(&"--spacing-md"));
        assert!(names.contains(&"--radius-sm"));
        assert!(names.contains(&"--shadow-lg"));
        assert!(names.contains(&"--text-md"));
        assert!(names.contains(&"--font-sans"));
        assert!(names.contains(&"--font-weight-semibold"));
    }
}
