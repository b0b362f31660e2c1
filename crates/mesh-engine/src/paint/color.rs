/// 8-bit sRGB color, fully opaque.
///
/// Hex form is `#rrggbb`. Parsing is soft: anything that is not exactly a `#`
/// followed by six hex digits becomes [`Color::BLACK`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks a `0xRRGGBB` integer. Bits above 24 are ignored.
    #[inline]
    pub const fn from_u24(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    /// Strict `#rrggbb` parse (case-insensitive). Returns `None` on any deviation.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u24)
    }

    /// Soft `#rrggbb` parse: malformed input yields black.
    #[inline]
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation, each channel rounded to nearest.
    ///
    /// `t` is expected in `[0, 1]`; values outside extrapolate and saturate at the
    /// channel limits.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        #[inline]
        fn channel(a: u8, b: u8, t: f32) -> u8 {
            let a = a as f32;
            // `as u8` saturates; inputs in range never need it.
            (a + (b as f32 - a) * t).round() as u8
        }

        Color {
            r: channel(self.r, other.r, t),
            g: channel(self.g, other.g, t),
            b: channel(self.b, other.b, t),
        }
    }

    /// RGBA bytes with alpha fixed at 255.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_parses_channels() {
        assert_eq!(Color::from_hex("#4338ca"), Color::rgb(67, 56, 202));
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(Color::from_hex("#EC4899"), Color::from_hex("#ec4899"));
    }

    #[test]
    fn hex_empty_is_black() {
        assert_eq!(Color::from_hex(""), Color::BLACK);
    }

    #[test]
    fn hex_malformed_is_black() {
        for bad in ["4338ca", "#4338c", "#4338caf", "#43g8ca", "#+4338c", "#"] {
            assert_eq!(Color::parse_hex(bad), None, "{bad}");
            assert_eq!(Color::from_hex(bad), Color::BLACK, "{bad}");
        }
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Color::rgb(0xEC, 0x48, 0x99).to_hex(), "#ec4899");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn from_u24_masks_bytes() {
        assert_eq!(Color::from_u24(0x12_34_56), Color::rgb(0x12, 0x34, 0x56));
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_midpoint_rounds_half_up() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_equal_endpoints_is_identity() {
        let c = Color::rgb(67, 56, 202);
        for t in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
            assert_eq!(c.lerp(c, t), c);
        }
    }
}
