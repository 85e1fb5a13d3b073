use std::collections::BTreeMap;

use crate::error::ThemeError;
use crate::tokens::{
    ColorScale, FamilyCatalog, FamilyKey, FONT_FAMILIES, FONT_SIZES, FONT_WEIGHTS, FontFamilySet,
    FontWeightScale, NamedScale, PILL_RADIUS, RADIUS, SHADOWS, SPACING, ShadowScale,
};

mod patch_api;
pub mod registry;

pub use registry::{ThemePreset, default_theme, get_theme};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RadiusKey {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Pill,
}

impl RadiusKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Pill => "pill",
        }
    }
}

/// A color slot is either a reference into the primitive palette or a literal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorValue {
    Palette { family: FamilyKey, shade: u16 },
    White,
    Black,
    Custom(String),
}

impl ColorValue {
    pub const fn palette(family: FamilyKey, shade: u16) -> Self {
        Self::Palette { family, shade }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SemanticColors {
    pub brand: ColorValue,
    pub text_primary: ColorValue,
    pub text_secondary: ColorValue,
    pub text_muted: ColorValue,
    pub bg_primary: ColorValue,
    pub bg_secondary: ColorValue,
    pub border_subtle: ColorValue,
    pub border_brand: ColorValue,
    pub state_success: ColorValue,
    pub state_warning: ColorValue,
    pub state_error: ColorValue,
    pub focus_ring: ColorValue,
    pub overlay_mask: ColorValue,
}

impl SemanticColors {
    pub fn defaults(primary: FamilyKey) -> Self {
        Self::defaults_for(primary, ColorScheme::Light)
    }

    pub fn defaults_for(primary: FamilyKey, scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                brand: ColorValue::palette(primary, 600),
                text_primary: ColorValue::palette(FamilyKey::Gray, 900),
                text_secondary: ColorValue::palette(FamilyKey::Gray, 700),
                text_muted: ColorValue::palette(FamilyKey::Gray, 500),
                bg_primary: ColorValue::White,
                bg_secondary: ColorValue::palette(FamilyKey::Gray, 50),
                border_subtle: ColorValue::palette(FamilyKey::Gray, 200),
                border_brand: ColorValue::palette(primary, 300),
                state_success: ColorValue::palette(FamilyKey::Success, 600),
                state_warning: ColorValue::palette(FamilyKey::Warning, 600),
                state_error: ColorValue::palette(FamilyKey::Error, 600),
                focus_ring: ColorValue::palette(primary, 500),
                overlay_mask: ColorValue::Custom("#00000073".to_string()),
            },
            ColorScheme::Dark => Self {
                brand: ColorValue::palette(primary, 400),
                text_primary: ColorValue::palette(FamilyKey::Gray, 25),
                text_secondary: ColorValue::palette(FamilyKey::Gray, 200),
                text_muted: ColorValue::palette(FamilyKey::Gray, 400),
                bg_primary: ColorValue::palette(FamilyKey::Gray, 950),
                bg_secondary: ColorValue::palette(FamilyKey::Gray, 900),
                border_subtle: ColorValue::palette(FamilyKey::Gray, 800),
                border_brand: ColorValue::palette(primary, 500),
                state_success: ColorValue::palette(FamilyKey::Success, 400),
                state_warning: ColorValue::palette(FamilyKey::Warning, 400),
                state_error: ColorValue::palette(FamilyKey::Error, 400),
                focus_ring: ColorValue::palette(primary, 400),
                overlay_mask: ColorValue::Custom("#000000CC".to_string()),
            },
        }
    }

    /// Role names and values in declared order; the emitter and the
    /// reference validator both walk this list.
    pub fn entries(&self) -> [(&'static str, &ColorValue); 13] {
        [
            ("brand", &self.brand),
            ("text-primary", &self.text_primary),
            ("text-secondary", &self.text_secondary),
            ("text-muted", &self.text_muted),
            ("bg-primary", &self.bg_primary),
            ("bg-secondary", &self.bg_secondary),
            ("border-subtle", &self.border_subtle),
            ("border-brand", &self.border_brand),
            ("state-success", &self.state_success),
            ("state-warning", &self.state_warning),
            ("state-error", &self.state_error),
            ("focus-ring", &self.focus_ring),
            ("overlay-mask", &self.overlay_mask),
        ]
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ButtonTokens {
    pub radius: RadiusKey,
    pub focus_ring: ColorValue,
    pub filled_bg: ColorValue,
    pub filled_fg: ColorValue,
    pub outline_border: ColorValue,
    pub outline_fg: ColorValue,
    pub ghost_fg: ColorValue,
    pub disabled_bg: ColorValue,
    pub disabled_fg: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputTokens {
    pub radius: RadiusKey,
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub placeholder: ColorValue,
    pub border: ColorValue,
    pub border_focus: ColorValue,
    pub border_error: ColorValue,
    pub label: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardTokens {
    pub radius: RadiusKey,
    pub bg: ColorValue,
    pub fg: ColorValue,
    pub border: ColorValue,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentTokens {
    pub button: ButtonTokens,
    pub input: InputTokens,
    pub card: CardTokens,
}

impl ComponentTokens {
    pub fn defaults(primary: FamilyKey) -> Self {
        Self::defaults_for(primary, ColorScheme::Light)
    }

    pub fn defaults_for(primary: FamilyKey, scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                button: ButtonTokens {
                    radius: RadiusKey::Sm,
                    focus_ring: ColorValue::palette(primary, 500),
                    filled_bg: ColorValue::palette(primary, 600),
                    filled_fg: ColorValue::White,
                    outline_border: ColorValue::palette(primary, 300),
                    outline_fg: ColorValue::palette(primary, 700),
                    ghost_fg: ColorValue::palette(primary, 600),
                    disabled_bg: ColorValue::palette(FamilyKey::Gray, 100),
                    disabled_fg: ColorValue::palette(FamilyKey::Gray, 400),
                },
                input: InputTokens {
                    radius: RadiusKey::Sm,
                    bg: ColorValue::White,
                    fg: ColorValue::palette(FamilyKey::Gray, 900),
                    placeholder: ColorValue::palette(FamilyKey::Gray, 500),
                    border: ColorValue::palette(FamilyKey::Gray, 300),
                    border_focus: ColorValue::palette(primary, 500),
                    border_error: ColorValue::palette(FamilyKey::Error, 500),
                    label: ColorValue::palette(FamilyKey::Gray, 700),
                },
                card: CardTokens {
                    radius: RadiusKey::Md,
                    bg: ColorValue::White,
                    fg: ColorValue::palette(FamilyKey::Gray, 900),
                    border: ColorValue::palette(FamilyKey::Gray, 200),
                },
            },
            ColorScheme::Dark => Self {
                button: ButtonTokens {
                    radius: RadiusKey::Sm,
                    focus_ring: ColorValue::palette(primary, 400),
                    filled_bg: ColorValue::palette(primary, 500),
                    filled_fg: ColorValue::White,
                    outline_border: ColorValue::palette(primary, 500),
                    outline_fg: ColorValue::palette(primary, 300),
                    ghost_fg: ColorValue::palette(primary, 400),
                    disabled_bg: ColorValue::palette(FamilyKey::Gray, 800),
                    disabled_fg: ColorValue::palette(FamilyKey::Gray, 600),
                },
                input: InputTokens {
                    radius: RadiusKey::Sm,
                    bg: ColorValue::palette(FamilyKey::Gray, 900),
                    fg: ColorValue::palette(FamilyKey::Gray, 50),
                    placeholder: ColorValue::palette(FamilyKey::Gray, 500),
                    border: ColorValue::palette(FamilyKey::Gray, 700),
                    border_focus: ColorValue::palette(primary, 400),
                    border_error: ColorValue::palette(FamilyKey::Error, 400),
                    label: ColorValue::palette(FamilyKey::Gray, 200),
                },
                card: CardTokens {
                    radius: RadiusKey::Md,
                    bg: ColorValue::palette(FamilyKey::Gray, 900),
                    fg: ColorValue::palette(FamilyKey::Gray, 50),
                    border: ColorValue::palette(FamilyKey::Gray, 800),
                },
            },
        }
    }

    pub fn entries(&self) -> [(&'static str, &ColorValue); 18] {
        [
            ("button.focus-ring", &self.button.focus_ring),
            ("button.filled-bg", &self.button.filled_bg),
            ("button.filled-fg", &self.button.filled_fg),
            ("button.outline-border", &self.button.outline_border),
            ("button.outline-fg", &self.button.outline_fg),
            ("button.ghost-fg", &self.button.ghost_fg),
            ("button.disabled-bg", &self.button.disabled_bg),
            ("button.disabled-fg", &self.button.disabled_fg),
            ("input.bg", &self.input.bg),
            ("input.fg", &self.input.fg),
            ("input.placeholder", &self.input.placeholder),
            ("input.border", &self.input.border),
            ("input.border-focus", &self.input.border_focus),
            ("input.border-error", &self.input.border_error),
            ("input.label", &self.input.label),
            ("card.bg", &self.card.bg),
            ("card.fg", &self.card.fg),
            ("card.border", &self.card.border),
        ]
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Theme {
    pub white: &'static str,
    pub black: &'static str,
    pub radius_default: RadiusKey,
    pub primary_family: FamilyKey,
    pub color_scheme: ColorScheme,
    pub palette: BTreeMap<FamilyKey, ColorScale>,
    pub semantic: SemanticColors,
    pub spacing: NamedScale,
    pub radii: NamedScale,
    pub shadows: ShadowScale,
    pub font_sizes: NamedScale,
    pub font_families: FontFamilySet,
    pub font_weights: FontWeightScale,
    pub components: ComponentTokens,
}

impl Default for Theme {
    fn default() -> Self {
        let primary = FamilyKey::Primary;
        Self {
            white: "#FFFFFF",
            black: "#000000",
            radius_default: RadiusKey::Sm,
            primary_family: primary,
            color_scheme: ColorScheme::Light,
            palette: FamilyCatalog::store(),
            semantic: SemanticColors::defaults_for(primary, ColorScheme::Light),
            spacing: SPACING,
            radii: RADIUS,
            shadows: SHADOWS,
            font_sizes: FONT_SIZES,
            font_families: FONT_FAMILIES,
            font_weights: FONT_WEIGHTS,
            components: ComponentTokens::defaults_for(primary, ColorScheme::Light),
        }
    }
}

impl Theme {
    pub fn with_primary_family(mut self, primary: FamilyKey) -> Self {
        self.primary_family = primary;
        self.semantic = SemanticColors::defaults_for(primary, self.color_scheme);
        self.components = ComponentTokens::defaults_for(primary, self.color_scheme);
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self.semantic = SemanticColors::defaults_for(self.primary_family, scheme);
        self.components = ComponentTokens::defaults_for(self.primary_family, scheme);
        self
    }

    pub fn with_palette_override(mut self, key: FamilyKey, scale: ColorScale) -> Self {
        self.palette.insert(key, scale);
        self
    }

    pub fn with_radius_default(mut self, radius: RadiusKey) -> Self {
        self.radius_default = radius;
        self
    }

    pub fn resolve_color(&self, token: &ColorValue) -> String {
        match token {
            ColorValue::Palette { family, shade } => self
                .palette
                .get(family)
                .and_then(|scale| scale.hex(*shade))
                .unwrap_or(self.black)
                .to_string(),
            ColorValue::White => self.white.to_string(),
            ColorValue::Black => self.black.to_string(),
            ColorValue::Custom(value) => value.clone(),
        }
    }

    pub fn resolve_radius(&self, key: RadiusKey) -> &'static str {
        match key {
            RadiusKey::Xs => self.radii.xs,
            RadiusKey::Sm => self.radii.sm,
            RadiusKey::Md => self.radii.md,
            RadiusKey::Lg => self.radii.lg,
            RadiusKey::Xl => self.radii.xl,
            RadiusKey::Pill => PILL_RADIUS,
        }
    }

    /// Check every palette reference in the semantic and component sections.
    ///
    /// A reference to a family or shade absent from the active palette is a
    /// definition-time error. Themes are validated before registration or use,
    /// never at resolution time.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let semantic = self.semantic.entries();
        let components = self.components.entries();
        for (token, value) in semantic.iter().chain(components.iter()) {
            if let ColorValue::Palette { family, shade } = value {
                let resolved = self
                    .palette
                    .get(family)
                    .and_then(|scale| scale.hex(*shade));
                if resolved.is_none() {
                    return Err(ThemeError::InvalidReference {
                        token: (*token).to_string(),
                        family: family.as_str().to_string(),
                        shade: *shade,
                    });
                }
            }
        }
        Ok(())
    }

    /// Apply a patch section by section, inheriting everything absent.
    /// `self` is not consumed or mutated; the result is a new theme.
    pub fn merged(&self, patch: &ThemePatch) -> Self {
        let mut next = self.clone();
        if let Some(primary) = patch.primary_family {
            next = next.with_primary_family(primary);
        }
        if let Some(scheme) = patch.color_scheme {
            next = next.with_color_scheme(scheme);
        }
        if let Some(radius) = patch.radius_default {
            next.radius_default = radius;
        }
        for (key, scale) in &patch.palette_overrides {
            next.palette.insert(*key, *scale);
        }
        if let Some(spacing) = patch.spacing {
            next.spacing = spacing;
        }
        if let Some(radii) = patch.radii {
            next.radii = radii;
        }
        if let Some(shadows) = patch.shadows {
            next.shadows = shadows;
        }
        if let Some(font_sizes) = patch.font_sizes {
            next.font_sizes = font_sizes;
        }
        if let Some(font_families) = patch.font_families {
            next.font_families = font_families;
        }
        if let Some(font_weights) = patch.font_weights {
            next.font_weights = font_weights;
        }
        next.semantic = patch.semantic.apply(next.semantic);
        next.components = patch.components.apply(next.components);
        next
    }
}

/// Derive a new theme from `base` without mutating it, rejecting any override
/// that introduces a dangling palette reference.
pub fn create_subtheme(base: &Theme, patch: &ThemePatch) -> Result<Theme, ThemeError> {
    let subtheme = base.merged(patch);
    subtheme.validate()?;
    Ok(subtheme)
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SemanticPatch {
    pub brand: Option<ColorValue>,
    pub text_primary: Option<ColorValue>,
    pub text_secondary: Option<ColorValue>,
    pub text_muted: Option<ColorValue>,
    pub bg_primary: Option<ColorValue>,
    pub bg_secondary: Option<ColorValue>,
    pub border_subtle: Option<ColorValue>,
    pub border_brand: Option<ColorValue>,
    pub state_success: Option<ColorValue>,
    pub state_warning: Option<ColorValue>,
    pub state_error: Option<ColorValue>,
    pub focus_ring: Option<ColorValue>,
    pub overlay_mask: Option<ColorValue>,
}

impl SemanticPatch {
    fn apply(&self, mut current: SemanticColors) -> SemanticColors {
        if let Some(value) = &self.brand {
            current.brand = value.clone();
        }
        if let Some(value) = &self.text_primary {
            current.text_primary = value.clone();
        }
        if let Some(value) = &self.text_secondary {
            current.text_secondary = value.clone();
        }
        if let Some(value) = &self.text_muted {
            current.text_muted = value.clone();
        }
        if let Some(value) = &self.bg_primary {
            current.bg_primary = value.clone();
        }
        if let Some(value) = &self.bg_secondary {
            current.bg_secondary = value.clone();
        }
        if let Some(value) = &self.border_subtle {
            current.border_subtle = value.clone();
        }
        if let Some(value) = &self.border_brand {
            current.border_brand = value.clone();
        }
        if let Some(value) = &self.state_success {
            current.state_success = value.clone();
        }
        if let Some(value) = &self.state_warning {
            current.state_warning = value.clone();
        }
        if let Some(value) = &self.state_error {
            current.state_error = value.clone();
        }
        if let Some(value) = &self.focus_ring {
            current.focus_ring = value.clone();
        }
        if let Some(value) = &self.overlay_mask {
            current.overlay_mask = value.clone();
        }
        current
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ButtonPatch {
    pub radius: Option<RadiusKey>,
    pub focus_ring: Option<ColorValue>,
    pub filled_bg: Option<ColorValue>,
    pub filled_fg: Option<ColorValue>,
    pub outline_border: Option<ColorValue>,
    pub outline_fg: Option<ColorValue>,
    pub ghost_fg: Option<ColorValue>,
    pub disabled_bg: Option<ColorValue>,
    pub disabled_fg: Option<ColorValue>,
}

impl ButtonPatch {
    fn apply(&self, mut current: ButtonTokens) -> ButtonTokens {
        if let Some(value) = self.radius {
            current.radius = value;
        }
        if let Some(value) = &self.focus_ring {
            current.focus_ring = value.clone();
        }
        if let Some(value) = &self.filled_bg {
            current.filled_bg = value.clone();
        }
        if let Some(value) = &self.filled_fg {
            current.filled_fg = value.clone();
        }
        if let Some(value) = &self.outline_border {
            current.outline_border = value.clone();
        }
        if let Some(value) = &self.outline_fg {
            current.outline_fg = value.clone();
        }
        if let Some(value) = &self.ghost_fg {
            current.ghost_fg = value.clone();
        }
        if let Some(value) = &self.disabled_bg {
            current.disabled_bg = value.clone();
        }
        if let Some(value) = &self.disabled_fg {
            current.disabled_fg = value.clone();
        }
        current
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InputPatch {
    pub radius: Option<RadiusKey>,
    pub bg: Option<ColorValue>,
    pub fg: Option<ColorValue>,
    pub placeholder: Option<ColorValue>,
    pub border: Option<ColorValue>,
    pub border_focus: Option<ColorValue>,
    pub border_error: Option<ColorValue>,
    pub label: Option<ColorValue>,
}

impl InputPatch {
    fn apply(&self, mut current: InputTokens) -> InputTokens {
        if let Some(value) = self.radius {
            current.radius = value;
        }
        if let Some(value) = &self.bg {
            current.bg = value.clone();
        }
        if let Some(value) = &self.fg {
            current.fg = value.clone();
        }
        if let Some(value) = &self.placeholder {
            current.placeholder = value.clone();
        }
        if let Some(value) = &self.border {
            current.border = value.clone();
        }
        if let Some(value) = &self.border_focus {
            current.border_focus = value.clone();
        }
        if let Some(value) = &self.border_error {
            current.border_error = value.clone();
        }
        if let Some(value) = &self.label {
            current.label = value.clone();
        }
        current
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CardPatch {
    pub radius: Option<RadiusKey>,
    pub bg: Option<ColorValue>,
    pub fg: Option<ColorValue>,
    pub border: Option<ColorValue>,
}

impl CardPatch {
    fn apply(&self, mut current: CardTokens) -> CardTokens {
        if let Some(value) = self.radius {
            current.radius = value;
        }
        if let Some(value) = &self.bg {
            current.bg = value.clone();
        }
        if let Some(value) = &self.fg {
            current.fg = value.clone();
        }
        if let Some(value) = &self.border {
            current.border = value.clone();
        }
        current
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ComponentPatch {
    pub button: ButtonPatch,
    pub input: InputPatch,
    pub card: CardPatch,
}

impl ComponentPatch {
    fn apply(&self, current: ComponentTokens) -> ComponentTokens {
        ComponentTokens {
            button: self.button.apply(current.button),
            input: self.input.apply(current.input),
            card: self.card.apply(current.card),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ThemePatch {
    pub primary_family: Option<FamilyKey>,
    pub color_scheme: Option<ColorScheme>,
    pub radius_default: Option<RadiusKey>,
    pub palette_overrides: BTreeMap<FamilyKey, ColorScale>,
    pub spacing: Option<NamedScale>,
    pub radii: Option<NamedScale>,
    pub shadows: Option<ShadowScale>,
    pub font_sizes: Option<NamedScale>,
    pub font_families: Option<FontFamilySet>,
    pub font_weights: Option<FontWeightScale>,
    pub semantic: SemanticPatch,
    pub components: ComponentPatch,
}

impl ThemePatch {
    pub fn palette_override(mut self, key: FamilyKey, scale: ColorScale) -> Self {
        self.palette_overrides.insert(key, scale);
        self
    }
}
