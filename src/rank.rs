//! Rank labels and numeric rank validation.
//!
//! Ranks are plain numbers: 2 through 10 are literal, then Jack = 11,
//! Queen = 12, King = 13, Ace = 14 and Joker = 15. A numeric rank outside
//! `2..=15` collapses to [`INVALID_RANK`]; the `"Invalid"` label is the one
//! label-built rank above that range, stored as [`INVALID_LABEL_RANK`].

/// Rank labels in ascending order, starting at rank 2.
pub const RANKS: [&str; 15] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace", "Joker",
    "Invalid",
];

/// Sentinel stored for an unrecognized rank.
pub const INVALID_RANK: u8 = 0;

/// Lowest valid rank.
pub const MIN_RANK: u8 = 2;

/// Rank of an Ace.
pub const ACE_RANK: u8 = 14;

/// Rank of the Joker, the highest valid rank.
pub const JOKER_RANK: u8 = 15;

/// Rank stored for the trailing `"Invalid"` entry of [`RANKS`].
pub const INVALID_LABEL_RANK: u8 = 16;

/// Label returned for any rank outside `2..=15`.
pub const INVALID_LABEL: &str = "Invalid";

/// Returns whether `value` lies in `2..=15`.
#[must_use]
pub const fn is_valid_rank(value: i32) -> bool {
    value >= MIN_RANK as i32 && value <= JOKER_RANK as i32
}

/// Validates a numeric rank, collapsing out-of-range values to [`INVALID_RANK`].
#[must_use]
pub const fn rank_from_value(value: i32) -> u8 {
    if is_valid_rank(value) {
        value as u8
    } else {
        INVALID_RANK
    }
}

/// Looks up a rank label, returning [`INVALID_RANK`] when it is not a known label.
///
/// The label at index `i` of [`RANKS`] maps to `i + 2`, so the trailing
/// `"Invalid"` entry maps to [`INVALID_LABEL_RANK`], which still reads back
/// as `"Invalid"` and renders as `"invalid card"`.
///
/// ```
/// use cardrs::rank::{rank_from_label, INVALID_LABEL_RANK, INVALID_RANK};
///
/// assert_eq!(rank_from_label("Queen"), 12);
/// assert_eq!(rank_from_label("10"), 10);
/// assert_eq!(rank_from_label("Invalid"), INVALID_LABEL_RANK);
/// assert_eq!(rank_from_label("queen"), INVALID_RANK);
/// ```
#[must_use]
pub fn rank_from_label(label: &str) -> u8 {
    RANKS
        .iter()
        .position(|&candidate| candidate == label)
        .and_then(|index| u8::try_from(index).ok())
        .map_or(INVALID_RANK, |index| index + MIN_RANK)
}

/// Returns the label for a rank, or `"Invalid"` when it is out of range.
#[must_use]
pub const fn rank_label(value: u8) -> &'static str {
    if is_valid_rank(value as i32) {
        RANKS[(value - MIN_RANK) as usize]
    } else {
        INVALID_LABEL
    }
}
