//! Rule variants.

use serde::{Deserialize, Serialize};

/// Maximum number of marks on the board in the vanishing variant.
pub const VANISHING_CAPACITY: usize = 6;

/// Which rule set a game is played under.
///
/// Both variants share every rule except piece expiry: under
/// [`Variant::Vanishing`] the oldest mark is removed once a seventh
/// would be placed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// Classic rules: marks stay until the board is reset.
    #[default]
    Standard,
    /// At most six marks; the oldest vanishes when a seventh is played.
    Vanishing,
}

impl Variant {
    /// Move-history capacity, `None` when unbounded.
    pub fn history_capacity(self) -> Option<usize> {
        match self {
            Variant::Standard => None,
            Variant::Vanishing => Some(VANISHING_CAPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Variant::from_str("vanishing"), Ok(Variant::Vanishing));
        assert_eq!(Variant::from_str("Standard"), Ok(Variant::Standard));
        assert!(Variant::from_str("gomoku").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        assert_eq!(Variant::Vanishing.to_string(), "vanishing");
    }

    #[test]
    fn test_capacity() {
        assert_eq!(Variant::Standard.history_capacity(), None);
        assert_eq!(Variant::Vanishing.history_capacity(), Some(6));
    }
}
