use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `#rgb`, `#rrggbb` or `#rrggbbaa` color.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let valid = s.strip_prefix('#').map_or(false, |hex| {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        });
        if valid {
            Ok(Self(s.to_owned()))
        } else {
            Err(ConfigError::InvalidColor(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A color used somewhere in the configuration: either a position in the
/// [`Palette`] or a literal value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ColorRef {
    Palette(usize),
    Hex(Color),
}

impl From<Color> for ColorRef {
    fn from(c: Color) -> Self {
        Self::Hex(c)
    }
}

/// Ordered list of colors referenced by index from the rest of the configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette(pub Vec<Color>);

impl Palette {
    /// Builds a palette from literal hex strings.
    pub fn from_hex(colors: &[&str]) -> Result<Self> {
        colors
            .iter()
            .map(|c| c.parse())
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Color> {
        self.0.get(index).ok_or(ConfigError::PaletteIndex {
            index,
            len: self.0.len(),
        })
    }

    pub fn resolve<'a>(&'a self, color: &'a ColorRef) -> Result<&'a Color> {
        match color {
            ColorRef::Palette(index) => self.get(*index),
            ColorRef::Hex(c) => Ok(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_long_and_alpha_forms() {
        for c in ["#fff", "#002b36", "#002b36ff", "#ABCDEF"] {
            assert!(c.parse::<Color>().is_ok(), "{c}");
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        for c in ["002b36", "#02b36", "#00zz36", "", "#"] {
            assert!(c.parse::<Color>().is_err(), "{c}");
        }
    }

    #[test]
    fn resolve_reports_out_of_bounds_index() {
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        assert_eq!(
            palette.resolve(&ColorRef::Palette(1)).unwrap().as_str(),
            "#ffffff"
        );
        assert!(matches!(
            palette.resolve(&ColorRef::Palette(2)),
            Err(ConfigError::PaletteIndex { index: 2, len: 2 })
        ));
    }

    #[test]
    fn invalid_color_fails_to_deserialize() {
        assert!(ron::from_str::<Color>("\"#002b36\"").is_ok());
        assert!(ron::from_str::<Color>("\"blue\"").is_err());
    }
}
