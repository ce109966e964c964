//! Suit labels and normalization.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseSuitError;

/// Suit labels accepted at construction.
pub const SUITS: [&str; 6] = ["Diamonds", "Clubs", "Hearts", "Spades", "Joker", "Invalid"];

/// Token stored in place of an unrecognized suit.
///
/// Lower case on purpose: it is not the `"Invalid"` label from [`SUITS`].
pub const INVALID_SUIT: &str = "invalid";

/// Card suit.
///
/// Besides the four standard suits this covers the Joker pseudo-suit, the
/// `"Invalid"` label and the normalized [`INVALID_SUIT`] token.
///
/// Suits order by their labels compared as strings, so
/// `Clubs < Diamonds < Hearts < Invalid < Joker < Spades < Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// The Joker pseudo-suit.
    Joker,
    /// The `"Invalid"` suit label.
    Invalid,
    /// Any input that is not a suit label, shown as `"invalid"`.
    #[cfg_attr(feature = "serde", serde(rename = "invalid"))]
    Unrecognized,
}

impl Suit {
    /// Every suit reachable from a label, in [`SUITS`] order.
    pub const ALL: [Self; 6] = [
        Self::Diamonds,
        Self::Clubs,
        Self::Hearts,
        Self::Spades,
        Self::Joker,
        Self::Invalid,
    ];

    /// Normalizes a suit label.
    ///
    /// Matching is exact and case-sensitive; anything else becomes
    /// [`Suit::Unrecognized`].
    ///
    /// ```
    /// use cardrs::Suit;
    ///
    /// assert_eq!(Suit::from_label("Hearts"), Suit::Hearts);
    /// assert_eq!(Suit::from_label("Heart"), Suit::Unrecognized);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|suit| suit.as_str() == label)
            .unwrap_or(Self::Unrecognized)
    }

    /// Returns the label of this suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diamonds => SUITS[0],
            Self::Clubs => SUITS[1],
            Self::Hearts => SUITS[2],
            Self::Spades => SUITS[3],
            Self::Joker => SUITS[4],
            Self::Invalid => SUITS[5],
            Self::Unrecognized => INVALID_SUIT,
        }
    }

    /// Returns the first character of the label.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Joker => 'J',
            Self::Invalid => 'I',
            Self::Unrecognized => 'i',
        }
    }

    /// Maps a label initial back to its suit.
    #[must_use]
    pub const fn from_initial(initial: char) -> Option<Self> {
        match initial {
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            'J' => Some(Self::Joker),
            'I' => Some(Self::Invalid),
            'i' => Some(Self::Unrecognized),
            _ => None,
        }
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    /// Strict parse: only the labels in [`SUITS`] and the [`INVALID_SUIT`]
    /// token are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == INVALID_SUIT {
            return Ok(Self::Unrecognized);
        }
        match Self::from_label(s) {
            Self::Unrecognized => Err(ParseSuitError::UnknownLabel),
            suit => Ok(suit),
        }
    }
}
