//! Style identifiers

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// Identifier of a theme.
///
/// Ordering follows the numeric value. `Custom` is a sentinel meaning "leave
/// this widget's colors alone" and never resolves to a palette of its own.
/// `Colorful` is the single user-configurable accent theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum StyleId {
    Custom = 0,
    Blue = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
    Gray = 5,
    Purple = 6,
    LayuiGreen = 7,
    LayuiRed = 8,
    LayuiOrange = 9,
    DarkBlue = 101,
    Black = 102,
    Colorful = 999,
}

impl StyleId {
    /// Style every lookup falls back to.
    pub const DEFAULT: StyleId = StyleId::Blue;

    /// Every style id, ascending.
    pub const ALL: [StyleId; 13] = [
        StyleId::Custom,
        StyleId::Blue,
        StyleId::Green,
        StyleId::Orange,
        StyleId::Red,
        StyleId::Gray,
        StyleId::Purple,
        StyleId::LayuiGreen,
        StyleId::LayuiRed,
        StyleId::LayuiOrange,
        StyleId::DarkBlue,
        StyleId::Black,
        StyleId::Colorful,
    ];

    /// Numeric value of the id
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i32) -> Option<StyleId> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    pub fn is_custom(self) -> bool {
        self == StyleId::Custom
    }

    /// Any id other than `Custom`
    pub fn is_valid(self) -> bool {
        !self.is_custom()
    }

    /// User-facing display name, also accepted by [`FromStr`].
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Red => "Red",
            Self::Gray => "Gray",
            Self::Purple => "Purple",
            Self::LayuiGreen => "LayuiGreen",
            Self::LayuiRed => "LayuiRed",
            Self::LayuiOrange => "LayuiOrange",
            Self::DarkBlue => "DarkBlue",
            Self::Black => "Black",
            Self::Colorful => "Colorful",
        }
    }
}

impl Default for StyleId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for StyleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StyleId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownStyle(s.to_string()))
    }
}

impl Serialize for StyleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for StyleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifier of a menu color set, independent of [`StyleId`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuStyleId {
    Custom,
    #[default]
    Black,
    White,
}

impl MenuStyleId {
    pub const ALL: [MenuStyleId; 3] = [MenuStyleId::Custom, MenuStyleId::Black, MenuStyleId::White];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Black => "Black",
            Self::White => "White",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_numeric_value() {
        let mut shuffled = vec![StyleId::Colorful, StyleId::Black, StyleId::Custom, StyleId::Green];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![StyleId::Custom, StyleId::Green, StyleId::Black, StyleId::Colorful]
        );
        assert!(StyleId::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn value_round_trips_through_from_value() {
        assert_eq!(StyleId::DarkBlue.value(), 101);
        assert_eq!(StyleId::from_value(999), Some(StyleId::Colorful));
        assert_eq!(StyleId::from_value(10), None);
    }

    #[test]
    fn parses_display_names_case_insensitively() {
        assert_eq!("darkblue".parse::<StyleId>().unwrap(), StyleId::DarkBlue);
        assert_eq!(" Green ".parse::<StyleId>().unwrap(), StyleId::Green);
        assert!(matches!(
            "magenta".parse::<StyleId>(),
            Err(ThemeError::UnknownStyle(_))
        ));
    }

    #[test]
    fn custom_is_the_only_invalid_style() {
        let invalid: Vec<_> = StyleId::ALL.into_iter().filter(|s| !s.is_valid()).collect();
        assert_eq!(invalid, vec![StyleId::Custom]);
    }
}
