//! Geographic positions in the backend's `(lat,long)` text form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Strict `(lat,long)` form accepted on write.
static POSITION_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(-?\d+(\.\d+)?,-?\d+(\.\d+)?\)$").expect("position pattern is valid")
});

/// A signed decimal number anywhere in free text.
static COORDINATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("coordinate pattern is valid"));

/// A latitude/longitude pair.
///
/// Serializes as the string `"(lat,lng)"`, the form the backend stores in
/// `location_position`.
///
/// ## Examples
///
/// ```rust
/// use tourguide_lib::Position;
///
/// let pos: Position = "(37.7749,-122.4194)".parse().unwrap();
/// assert_eq!(pos.lat, 37.7749);
/// assert_eq!(pos.to_string(), "(37.7749,-122.4194)");
///
/// assert!("37.7749,-122.4194".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Position {
    /// Creates a position from raw coordinates.
    ///
    /// Non-finite coordinates are accepted here but fail to serialize.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Returns `true` if `input` is in the strict `(lat,long)` form.
    pub fn is_valid(input: &str) -> bool {
        POSITION_FORMAT.is_match(input)
    }

    /// Pulls the first two numbers out of arbitrary text.
    ///
    /// Used for display where a stored value may be malformed. Falls back to
    /// [`Position::default`] when fewer than two numbers are present.
    pub fn extract(text: &str) -> Self {
        let mut numbers = COORDINATE
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .filter(|n| n.is_finite());

        match (numbers.next(), numbers.next()) {
            (Some(lat), Some(lng)) => Self { lat, lng },
            _ => Self::default(),
        }
    }
}

impl Default for Position {
    /// The map's initial center.
    fn default() -> Self {
        Self {
            lat: -27.4920,
            lng: 153.0077,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lat, self.lng)
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidPosition {
            input: s.to_string(),
        };

        if !Self::is_valid(s) {
            return Err(invalid());
        }

        let inner = &s[1..s.len() - 1];
        let (lat, lng) = inner.split_once(',').ok_or_else(invalid)?;
        let position = Self {
            lat: lat.parse().map_err(|_| invalid())?,
            lng: lng.parse().map_err(|_| invalid())?,
        };
        // Digit strings too long for f64 parse to infinity.
        if !position.is_finite() {
            return Err(invalid());
        }
        Ok(position)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(serde::ser::Error::custom(format!(
                "position {self} is not in (lat,long) form"
            )));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
