use coolor::{Hsl, Rgb};
use ratatui::style::Color;

pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => (0, 0, 0),
            Color::Red => (170, 0, 0),
            Color::Green => (0, 170, 0),
            Color::Yellow => (170, 85, 0),
            Color::Blue => (0, 0, 170),
            Color::Magenta => (170, 0, 170),
            Color::Cyan => (0, 170, 170),
            Color::Gray => (170, 170, 170),
            Color::DarkGray => (85, 85, 85),
            Color::LightRed => (255, 85, 85),
            Color::LightGreen => (85, 255, 85),
            Color::LightYellow => (255, 255, 85),
            Color::LightBlue => (85, 85, 255),
            Color::LightMagenta => (255, 85, 255),
            Color::LightCyan => (85, 255, 255),
            Color::Indexed(i) if i < 16 => basic_ansi(i),
            Color::Indexed(i) if i < 232 => cube_ansi(i - 16),
            Color::Indexed(i) => {
                let v = (i - 232) * 10 + 8;
                (v, v, v)
            }
            _ => (255, 255, 255),
        };

        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Same hue as `color` at the given lightness and saturation.
    #[must_use]
    pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = lightness.clamp(0.0, 1.0);
        hsl.s = saturation.clamp(0.0, 1.0);
        Self::to_ratatui(hsl)
    }
}

fn basic_ansi(i: u8) -> (u8, u8, u8) {
    const TABLE: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (170, 0, 0),
        (0, 170, 0),
        (170, 85, 0),
        (0, 0, 170),
        (170, 0, 170),
        (0, 170, 170),
        (170, 170, 170),
        (85, 85, 85),
        (255, 85, 85),
        (85, 255, 85),
        (255, 255, 85),
        (85, 85, 255),
        (255, 85, 255),
        (85, 255, 255),
        (255, 255, 255),
    ];
    TABLE[usize::from(i)]
}

fn cube_ansi(i: u8) -> (u8, u8, u8) {
    let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
    (level(i / 36), level((i / 6) % 6), level(i % 6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_cube_colors() {
        assert_eq!(cube_ansi(0), (0, 0, 0));
        assert_eq!(cube_ansi(215), (255, 255, 255));
        assert_eq!(basic_ansi(9), (255, 85, 85));
    }

    #[test]
    fn test_shade_changes_lightness() {
        let dark = ColorConverter::shade(Color::Blue, 0.1, 0.5);
        let light = ColorConverter::shade(Color::Blue, 0.8, 0.5);
        let Color::Rgb(dr, dg, db) = dark else {
            panic!("expected rgb");
        };
        let Color::Rgb(lr, lg, lb) = light else {
            panic!("expected rgb");
        };
        let sum = |r: u8, g: u8, b: u8| u16::from(r) + u16::from(g) + u16::from(b);
        assert!(sum(dr, dg, db) < sum(lr, lg, lb));
    }
}
