//! A validated playing card with optional `no_std` support.
//!
//! The crate provides the [`Card`] contract, its shared [`CanonicalForm`]
//! rendering, and [`StandardCard`], a card that normalizes invalid input
//! instead of rejecting it and orders itself Joker first, then by suit
//! label, then by rank.
//!
//! # Example
//!
//! ```
//! use cardrs::StandardCard;
//!
//! let queen = StandardCard::new("Queen", "Diamonds");
//! let joker = StandardCard::new("Joker", "Joker");
//!
//! assert_eq!(queen.to_string(), "12D");
//! assert_eq!(joker.to_string(), "15J");
//! assert!(queen < joker);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod rank;
pub mod suit;

// Re-export main types
pub use card::{CanonicalForm, Card, INVALID_CARD, StandardCard, compare_cards};
pub use error::{ParseCardError, ParseSuitError};
pub use rank::{INVALID_LABEL_RANK, INVALID_RANK, JOKER_RANK, RANKS};
pub use suit::{INVALID_SUIT, SUITS, Suit};
