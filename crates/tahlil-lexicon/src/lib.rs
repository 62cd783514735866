//! Dictionary loading and root discovery for Turkish morphology.
//!
//! Turns dictionary text into [`Lexeme`]s, expands each lexeme into the
//! concrete roots it can surface as, and answers "which roots start this
//! word?" for the parser.
//!
//! # Architecture
//!
//! - [`loader`] -- Dictionary line format and implicit attribute inference
//! - [`generator`] -- Lexeme to root expansion, irregular root table, circumflex decorator
//! - [`root_map`] -- Surface string to roots index
//! - [`finder`] -- Root finder trait, chain and the built-in finders
//! - [`numeral`] -- Digits to Turkish number words
//! - [`error`] -- [`LexiconError`]

pub mod error;
pub mod finder;
pub mod generator;
pub mod loader;
pub mod numeral;
pub mod root_map;

pub use error::LexiconError;
pub use finder::{ChainPolicy, RootFinder, RootFinderChain};
pub use generator::{CircumflexConvertingRootGenerator, RootGenerator, StandardRootGenerator};
pub use loader::{load_dictionary, parse_dictionary};
pub use root_map::RootMap;

use tahlil_core::Lexeme;

/// The sample dictionary shipped with the crate.
pub const BUNDLED_DICTIONARY: &str = include_str!("../data/dictionary.txt");

/// Options for building a [`RootMap`].
#[derive(Debug, Clone, Default)]
pub struct LexiconOptions {
    /// Also index circumflex-free copies of roots containing â, î or û, so
    /// input typed without circumflexes still finds them.
    pub circumflex_free_roots: bool,
}

/// Parse the bundled dictionary.
pub fn load_bundled() -> Result<Vec<Lexeme>, LexiconError> {
    parse_dictionary(BUNDLED_DICTIONARY)
}

/// Root map over the bundled dictionary.
pub fn bundled_root_map(options: &LexiconOptions) -> Result<RootMap, LexiconError> {
    RootMap::from_lexemes(load_bundled()?, options)
}
