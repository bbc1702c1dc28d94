// palette.rs - Gradient palette mapping cell states to colors

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{AntError, Result};

/// 8-bit RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB`, either case. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || AntError::InvalidColor(hex.to_owned());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                // #F0A is shorthand for #FF00AA
                let expand = |i: usize| channel(digits[i..=i].repeat(2).as_str());
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// `a + (b - a) * t` per channel, truncated toward zero.
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t) as u8
        }
        Rgb::new(channel(a.r, b.r, t), channel(a.g, b.g, t), channel(a.b, b.b, t))
    }
}

impl FromStr for Rgb {
    type Err = AntError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Generates `n` colors evenly spaced from `start` to `end`, both included.
pub fn gradient(start: Rgb, end: Rgb, n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n)
            .map(|i| Rgb::lerp(start, end, i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// One color per cell state, kept in sync with the rule length and the two
/// gradient endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    start: Rgb,
    end: Rgb,
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(start: Rgb, end: Rgb, n: usize) -> Self {
        Self {
            start,
            end,
            colors: gradient(start, end, n),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color for `state`, or `None` if the palette has no such entry.
    pub fn color(&self, state: usize) -> Option<Rgb> {
        self.colors.get(state).copied()
    }

    /// Changes the gradient endpoints, regenerating if either differs.
    pub fn set_endpoints(&mut self, start: Rgb, end: Rgb) -> bool {
        if start == self.start && end == self.end {
            return false;
        }
        self.start = start;
        self.end = end;
        self.regenerate(self.colors.len());
        true
    }

    /// Makes sure there are `n` colors. Returns whether anything was
    /// regenerated.
    pub fn sync(&mut self, n: usize) -> bool {
        if n == self.colors.len() {
            return false;
        }
        self.regenerate(n);
        true
    }

    fn regenerate(&mut self, n: usize) {
        debug!("Regenerating {} palette colors from {} to {}", n, self.start, self.end);
        self.colors = gradient(self.start, self.end, n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("#F00").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("#00f".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 255));
        for bad in ["", "#", "#12345", "#GG0000", "#+1+1+1", "#1234567"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(AntError::InvalidColor(bad.to_owned())),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_to_hex_uppercase() {
        assert_eq!(Rgb::new(0xab, 0x0c, 0xff).to_hex(), "#AB0CFF");
    }

    #[test]
    fn test_black_to_white_three() {
        let colors: Vec<String> = gradient(Rgb::BLACK, Rgb::WHITE, 3)
            .into_iter()
            .map(Rgb::to_hex)
            .collect();
        assert_eq!(colors, ["#000000", "#7F7F7F", "#FFFFFF"]);
    }

    #[test]
    fn test_descending_gradient_truncates() {
        // 255 + (0 - 255) * 0.5 = 127.5 -> 127
        let colors = gradient(Rgb::WHITE, Rgb::BLACK, 3);
        assert_eq!(colors[1], Rgb::new(127, 127, 127));
        assert_eq!(colors[2], Rgb::BLACK);
    }

    #[test]
    fn test_endpoints_exact() {
        let start = Rgb::new(12, 200, 7);
        let end = Rgb::new(250, 3, 99);
        for n in 2..=20 {
            let colors = gradient(start, end, n);
            assert_eq!(colors.len(), n);
            assert_eq!(colors[0], start);
            assert_eq!(colors[n - 1], end);
        }
        assert_eq!(gradient(start, end, 1), vec![start]);
    }

    #[test]
    fn test_palette_sync() {
        let mut palette = Palette::new(Rgb::BLACK, Rgb::WHITE, 2);
        assert!(!palette.sync(2));
        assert!(palette.sync(3));
        assert_eq!(palette.color(1), Some(Rgb::new(127, 127, 127)));
        assert_eq!(palette.color(3), None);

        assert!(!palette.set_endpoints(Rgb::BLACK, Rgb::WHITE));
        assert!(palette.set_endpoints(Rgb::new(255, 0, 0), Rgb::WHITE));
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.color(0), Some(Rgb::new(255, 0, 0)));
    }
}
