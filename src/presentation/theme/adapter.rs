use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Bridges ratatui colors and `coolor` HSL math.
pub struct ColorConverter;

impl ColorConverter {
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Indexed(i) => indexed_to_rgb(i),
            named => named_to_index(named).map_or((255, 255, 255), indexed_to_rgb),
        };

        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Keeps the hue of `color` with the given saturation and lightness.
    #[must_use]
    pub fn shade(color: Color, saturation: f32, lightness: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.s = saturation;
        hsl.l = lightness;
        Self::to_ratatui(hsl)
    }
}

const fn named_to_index(color: Color) -> Option<u8> {
    Some(match color {
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
        _ => return None,
    })
}

/// xterm 256-color palette.
fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    const BASE: [(u8, u8, u8); 16] = [
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

    match i {
        0..=15 => BASE[usize::from(i)],
        16..=231 => {
            let cube = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: u8, expected: u8) -> bool {
        (i16::from(actual) - i16::from(expected)).abs() <= 1
    }

    #[test]
    fn test_rgb_survives_hsl() {
        let Color::Rgb(r, g, b) = ColorConverter::to_ratatui(ColorConverter::to_hsl(
            Color::Rgb(100, 150, 200),
        )) else {
            panic!("Expected RGB color");
        };

        assert!(close(r, 100) && close(g, 150) && close(b, 200));
    }

    #[test]
    fn test_named_colors_use_palette() {
        let rgb: Rgb = ColorConverter::to_hsl(Color::Red).to_rgb();
        assert!(close(rgb.r, 170) && close(rgb.g, 0) && close(rgb.b, 0));
    }

    #[test]
    fn test_indexed_palette_ranges() {
        assert_eq!(indexed_to_rgb(208), (255, 135, 0));
        assert_eq!(indexed_to_rgb(16), (0, 0, 0));
        assert_eq!(indexed_to_rgb(231), (255, 255, 255));
        assert_eq!(indexed_to_rgb(232), (8, 8, 8));
    }

    #[test]
    fn test_shade_sets_lightness() {
        let dark = ColorConverter::shade(Color::Green, 0.5, 0.1);
        let light = ColorConverter::shade(Color::Green, 0.5, 0.9);

        assert!(ColorConverter::to_hsl(dark).l < ColorConverter::to_hsl(light).l);
    }
}
