use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Which of the two fixed paths traffic between the hosts should take.
/// - `North`: R1 → R2 → R3.
/// - `South`: R1 → R4 → R3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Direction {
    /// R1 → R2 → R3.
    North,
    /// R1 → R4 → R3.
    South,
}

impl Direction {
    /// Both directions in declaration order.
    pub const ALL: [Direction; 2] = [Direction::North, Direction::South];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
        }
    }
}

impl FromStr for Direction {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            _ => Err(ModelError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("SOUTH".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!(" South ".parse::<Direction>().unwrap(), Direction::South);
    }

    #[test]
    fn rejects_unknown() {
        for bad in ["", "east", "west", "n"] {
            assert!(bad.parse::<Direction>().is_err(), "expected error for {bad:?}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::North).unwrap(), r#""north""#);
        let d: Direction = serde_json::from_str(r#""south""#).unwrap();
        assert_eq!(d, Direction::South);
    }
}
