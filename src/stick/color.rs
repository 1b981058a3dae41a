//! ARGB fill colors for the two circles.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// 32-bit color packed as `0xAARRGGBB`.
///
/// Parsed from `#RRGGBB` (opaque) or `#AARRGGBB`.
///
/// # Examples
///
/// ```
/// use analog_stick::stick::color::Color;
///
/// let c: Color = "#00DDFF".parse().unwrap();
/// assert_eq!(c.argb(), 0xFF00_DDFF);
/// assert_eq!(c.to_string(), "#FF00DDFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(u32);

impl Color {
    /// Default inner stick fill (bright blue).
    pub const HOLO_BLUE_BRIGHT: Color = Color(0xFF00_DDFF);

    /// Default outer track fill (dark gray).
    pub const DARKER_GRAY: Color = Color(0xFFAA_AAAA);

    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' must start with '#'", s))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color '{}' is not valid hex", s));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| format!("color '{}' is not valid hex", s))?;
        match hex.len() {
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(format!("color '{}' must be #RRGGBB or #AARRGGBB", s)),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
