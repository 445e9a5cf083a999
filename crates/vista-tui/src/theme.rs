use ratatui::style::Color;

/// Dark neon palette of the landing page
pub struct Neon;

impl Neon {
    // Backgrounds
    pub const BG: Color = Color::Rgb(0x05, 0x08, 0x06);
    pub const BG_SOFT: Color = Color::Rgb(0x07, 0x0e, 0x08);
    pub const CARD: Color = Color::Rgb(0x0c, 0x16, 0x10);
    pub const CARD_SOFT: Color = Color::Rgb(0x10, 0x1c, 0x13);
    pub const BORDER: Color = Color::Rgb(0x27, 0x33, 0x24);

    // Accents
    pub const NEON: Color = Color::Rgb(0xc3, 0xff, 0x3b);
    pub const NEON_SOFT: Color = Color::Rgb(0x99, 0xe6, 0x37);

    // Text
    pub const TEXT: Color = Color::Rgb(0xf5, 0xf8, 0xec);
    pub const TEXT_MUTED: Color = Color::Rgb(0x9f, 0xae, 0x93);
    pub const SUBTLE: Color = Color::Rgb(0x7a, 0x8a, 0x6d);

    // Semantic
    pub const ERROR: Color = Color::Rgb(0xea, 0x69, 0x62);
    pub const SUCCESS: Color = Self::NEON_SOFT;
}

/// Blend `to` over `from` by `t` (0.0 = `from`, 1.0 = `to`)
///
/// Only RGB colors blend; anything else snaps at the halfway point.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            channel(r0, r1, t),
            channel(g0, g1, t),
            channel(b0, b1, t),
        ),
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn channel(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}

/// Foreground for text fading in over the page background
#[inline]
pub fn fade_in(target: Color, progress: f64) -> Color {
    blend(Neon::BG, target, progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(Neon::BG, Neon::NEON, 0.0), Neon::BG);
        assert_eq!(blend(Neon::BG, Neon::NEON, 1.0), Neon::NEON);
        assert_eq!(
            blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5),
            Color::Rgb(100, 50, 25)
        );
    }

    #[test]
    fn test_blend_non_rgb_snaps() {
        assert_eq!(blend(Color::Reset, Neon::TEXT, 0.4), Color::Reset);
        assert_eq!(blend(Color::Reset, Neon::TEXT, 0.6), Neon::TEXT);
    }
}
