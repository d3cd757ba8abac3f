//! Deck controller: the single owner of the card collection and the
//! armed-card reference.

pub mod deck;

pub use deck::TiltController;
