//! Hex color to channel-triple conversion.
//!
//! Colors reach stylesheets as space-separated channel triples so consumers
//! can recompose them with fractional opacity (`rgb(var(--color-brand) / 0.4)`).

/// Convert a 6-digit `#RRGGBB` string into `"R G B"` base-10 channels.
///
/// Anything that is not exactly `#` followed by six hex digits is returned
/// unchanged. That covers 3-digit shorthand (`#fff`) and 8-digit alpha forms
/// (`#RRGGBBAA`): both pass through as raw strings rather than erroring, and
/// downstream output keeps the original value verbatim.
pub fn channels(hex: &str) -> String {
    let Some(digits) = hex.strip_prefix('#') else {
        return hex.to_string();
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return hex.to_string();
    }
    match parse_channels(digits) {
        Some((r, g, b)) => format!("{r} {g} {b}"),
        None => hex.to_string(),
    }
}

fn parse_channels(digits: &str) -> Option<(u8, u8, u8)> {
    let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{FAMILY_KEYS, FamilyCatalog};

    fn rederive_hex(triple: &str) -> Option<String> {
        let mut parts = triple.split(' ');
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(format!("#{r:02X}{g:02X}{b:02X}"))
    }

    #[test]
    fn converts_brand_crimson() {
        assert_eq!(channels("#9E1B32"), "158 27 50");
    }

    #[test]
    fn conversion_is_case_insensitive() {
        assert_eq!(channels("#9e1b32"), "158 27 50");
        assert_eq!(channels("#FFFFFF"), channels("#ffffff"));
    }

    #[test]
    fn every_catalog_hex_round_trips() {
        for key in FAMILY_KEYS {
            for (_, hex) in FamilyCatalog::scale(key).entries() {
                let triple = channels(hex);
                let rederived = rederive_hex(&triple)
                    .unwrap_or_else(|| panic!("{hex} did not convert to a triple: {triple}"));
                assert_eq!(rederived.to_ascii_uppercase(), hex.to_ascii_uppercase());
            }
        }
    }

    #[test]
    fn malformed_input_passes_through_unchanged() {
        for input in ["red", "#fff", "#12345", "#9E1B32FF", "", "#", "9E1B32", "#9E1B3G"] {
            assert_eq!(channels(input), input, "expected passthrough for {input:?}");
        }
    }
}
