use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction in which strings of a font should be rendered.
///
/// Persisted as its integer ordinal. Decoding an ordinal outside the three
/// known values fails rather than producing an invalid direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Direction {
    /// E.g. Latin (default).
    #[default]
    LeftToRight = 0,
    /// E.g. Arabic.
    RightToLeft = 1,
    /// E.g. Chinese.
    TopToBottom = 2,
}

impl Direction {
    /// All directions, in ordinal order.
    pub const ALL: [Direction; 3] = [
        Direction::LeftToRight,
        Direction::RightToLeft,
        Direction::TopToBottom,
    ];

    /// Whether glyphs advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight | Direction::RightToLeft)
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Direction::LeftToRight),
            1 => Ok(Direction::RightToLeft),
            2 => Ok(Direction::TopToBottom),
            other => Err(InvalidDirection(other)),
        }
    }
}

/// An ordinal that does not name a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection(pub u8);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid direction ordinal {} (expected 0, 1 or 2)",
            self.0
        )
    }
}

impl std::error::Error for InvalidDirection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_left_to_right() {
        assert_eq!(Direction::default(), Direction::LeftToRight);
    }

    #[test]
    fn test_ordinals() {
        for (ordinal, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(u8::from(direction), ordinal as u8);
            assert_eq!(Direction::try_from(ordinal as u8), Ok(direction));
        }
    }

    #[test]
    fn test_invalid_ordinal() {
        assert_eq!(Direction::try_from(3), Err(InvalidDirection(3)));
        assert_eq!(Direction::try_from(255), Err(InvalidDirection(255)));
    }

    #[test]
    fn test_is_horizontal() {
        assert!(Direction::LeftToRight.is_horizontal());
        assert!(Direction::RightToLeft.is_horizontal());
        assert!(!Direction::TopToBottom.is_horizontal());
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(
            serde_json::to_string(&Direction::TopToBottom).unwrap(),
            "2"
        );
        assert_eq!(
            serde_json::from_str::<Direction>("1").unwrap(),
            Direction::RightToLeft
        );
        assert!(serde_json::from_str::<Direction>("7").is_err());
        assert!(serde_json::from_str::<Direction>("-1").is_err());
        assert!(serde_json::from_str::<Direction>("\"LeftToRight\"").is_err());
    }
}
