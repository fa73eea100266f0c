//! Shared types for wordscore.
//!
//! - [`character`] -- Character classification and simple case mapping
//! - [`case`] -- Lowercase test and one-to-one case conversion
//! - [`unit`] -- The scored character unit

pub mod case;
pub mod character;
pub mod unit;

pub use case::Case;
pub use unit::CharUnit;
