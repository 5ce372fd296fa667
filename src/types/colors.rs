use super::ValidationError;
use std::fmt;

/// The palette served by the records endpoint.
///
/// Records may still carry colors outside this palette; those simply fail to
/// parse and are treated as non-primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Brown,
    Blue,
    Yellow,
    Green,
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "brown" => Ok(Color::Brown),
            "blue" => Ok(Color::Blue),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl Color {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Brown => "brown",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }

    /// Red, blue and yellow are primary. Fixed, not configurable.
    pub fn is_primary(&self) -> bool {
        matches!(self, Color::Red | Color::Blue | Color::Yellow)
    }

    /// Classifies a raw color name as the server sent it.
    ///
    /// Matching is exact: `"Red"` or `" red"` are not primary.
    pub fn is_primary_name(name: &str) -> bool {
        name.parse::<Color>().is_ok_and(|color| color.is_primary())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
