//! Contextless Turkish morphological parser.
//!
//! Finds every decomposition of a single word into a root and a chain of
//! suffixes, walking a suffix graph precompiled for each phonetic context.
//!
//! # Architecture
//!
//! - [`suffix`] -- States, suffixes, suffix-form templates and conditions
//! - [`graph`] -- The suffix graph, the bundled Turkish grammar and the form graph
//! - [`container`] -- Partial parses with incrementally recomputed attributes
//! - [`applier`] -- The gate a suffix form passes before it is taken
//! - [`mandatory`] -- Transitions forced on some fresh candidates
//! - [`predefined`] -- Fixed suffix paths for irregular roots
//! - [`parser`] -- [`MorphologicParser`] and the breadth-first [`ContextlessParser`]
//! - [`cache`] -- A thread-safe caching wrapper
//! - [`batch`] -- Parallel parsing of word lists
//! - [`format`] -- Rendering parses as text and serializable summaries
//! - [`error`] -- [`GrammarError`], [`ParseError`] and [`TahlilError`]
//!
//! # Example
//!
//! ```
//! use tahlil_lexicon::LexiconOptions;
//! use tahlil_parser::{ContextlessParser, MorphologicParser, ParserOptions, format_parse};
//!
//! let parser = ContextlessParser::bundled(&LexiconOptions::default(), ParserOptions::default())?;
//! let parses = parser.parse("kapıya")?;
//! let formatted: Vec<_> = parses.iter().map(|p| format_parse(parser.graph(), p)).collect();
//! assert!(formatted.contains(&"kapı(kapı)+Noun+A3sg+Pnon+Dat(+yA[ya])".to_string()));
//! # Ok::<(), tahlil_parser::TahlilError>(())
//! ```

pub mod applier;
pub mod batch;
pub mod cache;
pub mod container;
pub mod error;
pub mod format;
pub mod graph;
pub mod mandatory;
pub mod parser;
pub mod predefined;
pub mod suffix;

pub use applier::{Rejection, SuffixApplier};
pub use batch::{WordResult, parse_batch};
pub use cache::CachingParser;
pub use container::{MorphemeContainer, SuffixTransition};
pub use error::{GrammarError, ParseError, TahlilError};
pub use format::{ParseSummary, format_parse, format_without_surface};
pub use graph::{FormGraph, SuffixGraph};
pub use mandatory::MandatoryTransitions;
pub use parser::{ContextlessParser, MorphologicParser, ParserOptions};
pub use predefined::PredefinedPaths;
