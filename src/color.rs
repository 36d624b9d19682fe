//! Color mapping utilities for group swatches.
//!
//! Two pure functions drive the overlay's color work:
//!
//! - [`color_code`] maps each of the nine named group colors to a fixed hex
//!   code, with [`FALLBACK_HEX`] for anything outside the palette.
//! - [`hex_to_rgba`] expands a 3- or 6-digit hex code to an `rgba(...)`
//!   string at a given alpha, used to derive a low-opacity background tint
//!   from the same hex as the swatch's solid color.

use crate::group::GroupColor;

/// Neutral hex used for unrecognized color names.
pub const FALLBACK_HEX: &str = "#999";

/// Map a group color to its fixed swatch hex code.
///
/// Total over [`GroupColor`]: the nine palette colors have fixed codes and
/// everything else maps to [`FALLBACK_HEX`].
#[must_use]
pub fn color_code(color: GroupColor) -> &'static str {
    match color {
        GroupColor::Grey => "#dadce0",
        GroupColor::Blue => "#8ab4f8",
        GroupColor::Red => "#f28b82",
        GroupColor::Yellow => "#fdd663",
        GroupColor::Green => "#81c995",
        GroupColor::Pink => "#ff8bcb",
        GroupColor::Purple => "#c58af9",
        GroupColor::Cyan => "#78d9ec",
        GroupColor::Orange => "#fcad70",
        GroupColor::Unknown => FALLBACK_HEX,
    }
}

/// Map a raw color name to its swatch hex code, with fallback.
#[must_use]
pub fn color_code_for_name(name: &str) -> &'static str {
    color_code(GroupColor::from_name(name))
}

/// Parse a hex color string into RGB channels.
///
/// Supports 3-char (#RGB) and 6-char (#RRGGBB) forms, with or without the
/// leading `#`. Each 3-char digit doubles, so `#abc` has the same channels
/// as `#aabbcc`. Parsing works on raw bytes and accepts hex digits only,
/// so multibyte input and sign prefixes are rejected, never panicked on.
#[must_use]
pub fn hex_channels(hex: &str) -> Option<(u8, u8, u8)> {
    fn digit(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    let hex = hex.strip_prefix('#').unwrap_or(hex);

    match hex.as_bytes() {
        // #RGB -> #RRGGBB
        [r, g, b] => Some((digit(*r)? * 17, digit(*g)? * 17, digit(*b)? * 17)),
        [r1, r0, g1, g0, b1, b0] => Some((
            digit(*r1)? * 16 + digit(*r0)?,
            digit(*g1)? * 16 + digit(*g0)?,
            digit(*b1)? * 16 + digit(*b0)?,
        )),
        _ => None,
    }
}

/// Expand a hex color to an `rgba(r,g,b,a)` string at the given alpha.
///
/// Malformed input falls back to the [`FALLBACK_HEX`] channels rather than
/// failing; the overlay always gets a usable tint.
#[must_use]
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let (r, g, b) = hex_channels(hex)
        .or_else(|| hex_channels(FALLBACK_HEX))
        .unwrap_or((0, 0, 0));
    format!("rgba({r},{g},{b},{alpha})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_mapping_is_fixed() {
        let expected = [
            (GroupColor::Grey, "#dadce0"),
            (GroupColor::Blue, "#8ab4f8"),
            (GroupColor::Red, "#f28b82"),
            (GroupColor::Yellow, "#fdd663"),
            (GroupColor::Green, "#81c995"),
            (GroupColor::Pink, "#ff8bcb"),
            (GroupColor::Purple, "#c58af9"),
            (GroupColor::Cyan, "#78d9ec"),
            (GroupColor::Orange, "#fcad70"),
        ];
        for (color, hex) in expected {
            assert_eq!(color_code(color), hex);
        }
    }

    #[test]
    fn test_unrecognized_name_falls_back() {
        assert_eq!(color_code(GroupColor::Unknown), FALLBACK_HEX);
        assert_eq!(color_code_for_name("taupe"), FALLBACK_HEX);
        assert_eq!(color_code_for_name(""), FALLBACK_HEX);
    }

    #[test]
    fn test_hex_channels_6_digit() {
        assert_eq!(hex_channels("#aabbcc"), Some((0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_channels("ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_channels("#000000"), Some((0, 0, 0)));
    }

    #[test]
    fn test_hex_channels_3_digit_doubles() {
        assert_eq!(hex_channels("#abc"), hex_channels("#aabbcc"));
        assert_eq!(hex_channels("#999"), Some((0x99, 0x99, 0x99)));
        assert_eq!(hex_channels("#f00"), Some((255, 0, 0)));
    }

    #[test]
    fn test_hex_channels_rejects_malformed() {
        assert_eq!(hex_channels(""), None);
        assert_eq!(hex_channels("#ab"), None);
        assert_eq!(hex_channels("#gggggg"), None);
        assert_eq!(hex_channels("#aabbccdd"), None);
    }

    #[test]
    fn test_hex_channels_rejects_multibyte() {
        // 3- and 6-byte strings that are not 3 or 6 characters; byte-wise
        // parsing must reject them, not split a character.
        assert_eq!(hex_channels("\u{e9}-"), None);
        assert_eq!(hex_channels("#a\u{e9}"), None);
        assert_eq!(hex_channels("ab\u{e9}cd"), None);
        assert_eq!(hex_to_rgba("\u{e9}-", 0.2), hex_to_rgba(FALLBACK_HEX, 0.2));
    }

    #[test]
    fn test_hex_channels_rejects_sign_prefixes() {
        assert_eq!(hex_channels("+ff"), None);
        assert_eq!(hex_channels("+f+f+f"), None);
        assert_eq!(hex_channels("-12345"), None);
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#8ab4f8", 0.2), "rgba(138,180,248,0.2)");
        assert_eq!(hex_to_rgba("#abc", 0.5), "rgba(170,187,204,0.5)");
        assert_eq!(hex_to_rgba("#abc", 0.5), hex_to_rgba("#aabbcc", 0.5));
    }

    #[test]
    fn test_hex_to_rgba_malformed_falls_back() {
        assert_eq!(hex_to_rgba("nope", 0.2), hex_to_rgba(FALLBACK_HEX, 0.2));
        assert_eq!(hex_to_rgba("", 1.0), "rgba(153,153,153,1)");
    }
}
