//! Core types for Turkish morphological analysis.
//!
//! This crate holds the language model the parser works on. It has no
//! knowledge of suffixes or grammar states.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Per-letter linguistic properties and voicing maps
//! - [`sequence`] -- Alphabet-aware immutable character sequences
//! - [`flags`] -- Enum-keyed `u64` bit sets
//! - [`phonetics`] -- Phonetic attributes, expectations and the validity table
//! - [`lexeme`] -- Parts of speech, lexeme attributes and dictionary entries
//! - [`root`] -- Concrete roots generated from lexemes

pub mod alphabet;
pub mod flags;
pub mod lexeme;
pub mod phonetics;
pub mod root;
pub mod sequence;

pub use lexeme::{Lexeme, LexemeAttribute, LexemeAttributeSet, PrimaryPos, SecondaryPos};
pub use phonetics::{
    PhoneticAttribute, PhoneticAttributeSet, PhoneticExpectation, PhoneticExpectationSet,
};
pub use root::Root;
pub use sequence::{TurkishChar, TurkishSequence};
