//! Named base themes, registered once at process start.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use crate::error::ThemeError;
use crate::theme::{ColorScheme, RadiusKey, Theme};
use crate::tokens::FamilyKey;

/// Built-in base theme catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default light theme on the crimson primary family.
    Harbor,
    /// Dark counterpart of the default theme.
    HarborDark,
    /// Light variant on the secondary blue family with tighter radii.
    Slate,
}

impl ThemePreset {
    /// Stable preset id; this is the registry key.
    pub fn id(self) -> &'static str {
        match self {
            Self::Harbor => "harbor",
            Self::HarborDark => "harbor-dark",
            Self::Slate => "slate",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Harbor => "Harbor",
            Self::HarborDark => "Harbor Dark",
            Self::Slate => "Slate",
        }
    }

    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] = [
            ThemePreset::Harbor,
            ThemePreset::HarborDark,
            ThemePreset::Slate,
        ];
        &PRESETS
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Harbor => Theme::default(),
            Self::HarborDark => Theme::default().with_color_scheme(ColorScheme::Dark),
            Self::Slate => Theme::default()
                .with_primary_family(FamilyKey::Secondary)
                .with_radius_default(RadiusKey::Xs),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn registry() -> &'static BTreeMap<&'static str, Theme> {
    static REGISTRY: OnceLock<BTreeMap<&'static str, Theme>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        ThemePreset::all()
            .iter()
            .map(|preset| (preset.id(), preset.theme()))
            .collect()
    })
}

/// Look up a registered base theme by name.
pub fn get_theme(name: &str) -> Result<&'static Theme, ThemeError> {
    registry()
        .get(name)
        .ok_or_else(|| ThemeError::NotFound(name.to_string()))
}

/// The theme hosts fall back to when a lookup fails.
pub fn default_theme() -> &'static Theme {
    static FALLBACK: OnceLock<Theme> = OnceLock::new();
    match get_theme(ThemePreset::Harbor.id()) {
        Ok(theme) => theme,
        Err(_) => FALLBACK.get_or_init(Theme::default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_preset_validates() {
        for preset in ThemePreset::all() {
            let theme = get_theme(preset.id()).unwrap();
            theme
                .validate()
                .unwrap_or_else(|err| panic!("{preset} has a dangling reference: {err}"));
        }
    }

    #[test]
    fn lookup_by_known_name_returns_the_preset() {
        let slate = get_theme("slate").unwrap();
        assert_eq!(slate.primary_family, FamilyKey::Secondary);
        assert_eq!(slate.radius_default, RadiusKey::Xs);

        let dark = get_theme("harbor-dark").unwrap();
        assert_eq!(dark.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn unknown_name_is_a_not_found_error() {
        let err = get_theme("does-not-exist").unwrap_err();
        match err {
            ThemeError::NotFound(name) => assert_eq!(name, "does-not-exist"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn default_theme_is_the_harbor_preset() {
        assert_eq!(default_theme(), get_theme("harbor").unwrap());
    }
}
