//! The card contract and the standard validated card.

use alloc::string::{String, ToString};
use core::any::Any;
use core::cmp::Ordering;
use core::fmt::{self, Write};
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::ParseCardError;
use crate::rank::{self, JOKER_RANK};
use crate::suit::Suit;

/// Canonical form of a card whose rank is outside `2..=15`.
pub const INVALID_CARD: &str = "invalid card";

/// Capabilities every card-like type exposes.
///
/// Implementers provide the raw rank and the two labels. The canonical text
/// is derived from them by [`CanonicalForm`], which cannot be specialized.
pub trait Card {
    /// Numeric rank. Values outside `2..=15` mean the card is invalid.
    fn rank_value(&self) -> u8;

    /// Rank label, one of [`RANKS`](crate::rank::RANKS).
    fn rank_label(&self) -> &str;

    /// Suit label, one of [`SUITS`](crate::suit::SUITS) or
    /// [`INVALID_SUIT`](crate::suit::INVALID_SUIT).
    fn suit(&self) -> &str;
}

/// Canonical text of a [`Card`].
///
/// Implemented for every [`Card`] and for nothing else, so all card types
/// share one rendering: the decimal rank followed by the first character of
/// the suit, or `"invalid card"` when the rank is out of range.
///
/// ```
/// use cardrs::{CanonicalForm, StandardCard};
///
/// assert_eq!(StandardCard::new("Ace", "Hearts").canonical_form(), "14H");
/// assert_eq!(StandardCard::new("1", "Hearts").canonical_form(), "invalid card");
/// ```
pub trait CanonicalForm: Card {
    /// Returns a [`Display`](fmt::Display) adapter that renders the canonical form.
    fn canonical(&self) -> Canonical<'_, Self> {
        Canonical(self)
    }

    /// Renders the canonical form into a new string.
    fn canonical_form(&self) -> String {
        self.canonical().to_string()
    }
}

impl<C: Card + ?Sized> CanonicalForm for C {}

/// Display adapter returned by [`CanonicalForm::canonical`].
#[derive(Debug)]
pub struct Canonical<'a, C: ?Sized>(&'a C);

impl<C: Card + ?Sized> fmt::Display for Canonical<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.0.rank_value();
        if !rank::is_valid_rank(i32::from(rank)) {
            return f.write_str(INVALID_CARD);
        }
        write!(f, "{rank}")?;
        match self.0.suit().chars().next() {
            Some(initial) => f.write_char(initial),
            None => Ok(()),
        }
    }
}

/// Orders any two cards.
///
/// A Joker (rank 15) is greater than every other card. Otherwise cards order
/// by suit label, compared as strings, and then by numeric rank.
///
/// ```
/// use core::cmp::Ordering;
/// use cardrs::{compare_cards, StandardCard};
///
/// let queen = StandardCard::from_value(12, "Diamonds");
/// let four = StandardCard::from_value(4, "Spades");
/// assert_eq!(compare_cards(&queen, &four), Ordering::Less);
/// ```
pub fn compare_cards<A, B>(a: &A, b: &B) -> Ordering
where
    A: Card + ?Sized,
    B: Card + ?Sized,
{
    match (a.rank_value() == JOKER_RANK, b.rank_value() == JOKER_RANK) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a
            .suit()
            .cmp(b.suit())
            .then_with(|| a.rank_value().cmp(&b.rank_value())),
    }
}

/// A validated playing card.
///
/// Construction never fails. An unknown rank is stored as
/// [`INVALID_RANK`](crate::rank::INVALID_RANK) and an unknown suit as [`Suit::Unrecognized`]. The
/// `"Invalid"` rank label keeps its table position and is stored as 16.
/// A Joker always reports the Joker suit, whatever suit it was built with.
///
/// Equality and hashing follow the ordering, so two Jokers are equal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CardRepr"))]
pub struct StandardCard {
    rank: u8,
    suit: Suit,
}

impl StandardCard {
    /// Creates a card from a rank label and a suit label.
    ///
    /// ```
    /// use cardrs::StandardCard;
    ///
    /// let card = StandardCard::new("Queen", "Diamonds");
    /// assert_eq!(card.rank_value(), 12);
    /// assert_eq!(card.to_string(), "12D");
    /// ```
    #[must_use]
    pub fn new(rank: &str, suit: &str) -> Self {
        Self {
            rank: rank::rank_from_label(rank),
            suit: Suit::from_label(suit),
        }
    }

    /// Creates a card from a numeric rank and a suit label.
    #[must_use]
    pub fn from_value(rank: i32, suit: &str) -> Self {
        Self::from_suit(rank, Suit::from_label(suit))
    }

    /// Creates a card from a numeric rank and an already normalized suit.
    #[must_use]
    pub const fn from_suit(rank: i32, suit: Suit) -> Self {
        Self {
            rank: rank::rank_from_value(rank),
            suit,
        }
    }

    /// Creates a Joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: JOKER_RANK,
            suit: Suit::Joker,
        }
    }

    /// Returns the stored rank: `0` for an unknown rank, `16` for the
    /// `"Invalid"` rank label.
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.rank
    }

    /// Returns the rank label, `"Invalid"` when the rank is invalid.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        rank::rank_label(self.rank)
    }

    /// Returns the suit label as observed by callers.
    #[must_use]
    pub const fn suit(&self) -> &'static str {
        self.observed_suit().as_str()
    }

    /// Returns the suit callers see: [`Suit::Joker`] for a Joker, the stored
    /// suit otherwise.
    #[must_use]
    pub const fn observed_suit(&self) -> Suit {
        if self.is_joker() {
            Suit::Joker
        } else {
            self.suit
        }
    }

    /// Returns the suit given at construction, after normalization.
    #[must_use]
    pub const fn stored_suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is a Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK
    }

    /// Returns whether both the rank and the observed suit were recognized.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.rank, rank::MIN_RANK..=JOKER_RANK)
            && !matches!(self.observed_suit(), Suit::Unrecognized)
    }

    /// Compares against a value of unknown type.
    ///
    /// Anything that is not a [`StandardCard`] compares as greater than this
    /// card, so the result is [`Ordering::Less`]. Pass the card itself, not a
    /// reference to it: a `&StandardCard` is not a `StandardCard` to [`Any`].
    #[must_use]
    pub fn compare_any(&self, other: &dyn Any) -> Ordering {
        other
            .downcast_ref::<Self>()
            .map_or(Ordering::Less, |other| self.cmp(other))
    }
}

impl Card for StandardCard {
    fn rank_value(&self) -> u8 {
        Self::rank_value(self)
    }

    fn rank_label(&self) -> &str {
        Self::rank_label(self)
    }

    fn suit(&self) -> &str {
        Self::suit(self)
    }
}

impl Ord for StandardCard {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_cards(self, other)
    }
}

impl PartialOrd for StandardCard {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for StandardCard {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for StandardCard {}

impl Hash for StandardCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.observed_suit().hash(state);
    }
}

impl fmt::Display for StandardCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canonical(), f)
    }
}

impl FromStr for StandardCard {
    type Err = ParseCardError;

    /// Parses the canonical form, for example `"12D"` or `"15J"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        if s == INVALID_CARD {
            return Err(ParseCardError::InvalidCard);
        }

        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, rest) = s.split_at(split);
        if digits.starts_with('0') {
            return Err(ParseCardError::InvalidRank);
        }
        let rank: i32 = digits.parse().map_err(|_| ParseCardError::InvalidRank)?;
        if !rank::is_valid_rank(rank) {
            return Err(ParseCardError::InvalidRank);
        }

        let mut chars = rest.chars();
        let initial = chars.next().ok_or(ParseCardError::MissingSuit)?;
        let suit = Suit::from_initial(initial).ok_or(ParseCardError::UnknownSuit(initial))?;
        if chars.next().is_some() {
            return Err(ParseCardError::TrailingCharacters);
        }

        Ok(Self::from_suit(rank, suit))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CardRepr {
    rank: i32,
    suit: String,
}

#[cfg(feature = "serde")]
impl From<CardRepr> for StandardCard {
    fn from(repr: CardRepr) -> Self {
        Self::from_value(repr.rank, &repr.suit)
    }
}
