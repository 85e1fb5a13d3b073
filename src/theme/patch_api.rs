use super::*;

macro_rules! impl_option_overrides_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, value: impl Into<$value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

macro_rules! impl_nested_overrides_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, configure: impl FnOnce($value) -> $value) -> Self {
                    self.$field = configure(self.$field);
                    self
                }
            )*
        }
    };
}

impl_option_overrides_methods!(SemanticPatch {
    brand: ColorValue,
    text_primary: ColorValue,
    text_secondary: ColorValue,
    text_muted: ColorValue,
    bg_primary: ColorValue,
    bg_secondary: ColorValue,
    border_subtle: ColorValue,
    border_brand: ColorValue,
    state_success: ColorValue,
    state_warning: ColorValue,
    state_error: ColorValue,
    focus_ring: ColorValue,
    overlay_mask: ColorValue,
});

impl_option_overrides_methods!(ButtonPatch {
    radius: RadiusKey,
    focus_ring: ColorValue,
    filled_bg: ColorValue,
    filled_fg: ColorValue,
    outline_border: ColorValue,
    outline_fg: ColorValue,
    ghost_fg: ColorValue,
    disabled_bg: ColorValue,
    disabled_fg: ColorValue,
});

impl_option_overrides_methods!(InputPatch {
    radius: RadiusKey,
    bg: ColorValue,
    fg: ColorValue,
    placeholder: ColorValue,
    border: ColorValue,
    border_focus: ColorValue,
    border_error: ColorValue,
    label: ColorValue,
});

impl_option_overrides_methods!(CardPatch {
    radius: RadiusKey,
    bg: ColorValue,
    fg: ColorValue,
    border: ColorValue,
});

impl_nested_overrides_methods!(ComponentPatch {
    button: ButtonPatch,
    input: InputPatch,
    card: CardPatch,
});

impl_option_overrides_methods!(ThemePatch {
    primary_family: FamilyKey,
    color_scheme: ColorScheme,
    radius_default: RadiusKey,
    spacing: NamedScale,
    radii: NamedScale,
    shadows: ShadowScale,
    font_sizes: NamedScale,
    font_families: FontFamilySet,
    font_weights: FontWeightScale,
});

impl_nested_overrides_methods!(ThemePatch {
    semantic: SemanticPatch,
    components: ComponentPatch,
});
