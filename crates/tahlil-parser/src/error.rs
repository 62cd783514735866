// Error types for grammar construction and parsing.
//
// Grammar errors are configuration problems found while building the suffix
// graph, mandatory transitions or predefined paths. Parse errors are
// internal-consistency failures for a single word. Neither covers "this
// word has no parse", which is an empty result list.

use tahlil_core::PrimaryPos;
use tahlil_lexicon::LexiconError;

use crate::applier::Rejection;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A suffix form template could not be compiled.
    #[error("invalid suffix form template `{template}`: {reason}")]
    InvalidTemplate {
        template: String,
        reason: &'static str,
    },

    #[error("state `{0}` is defined twice")]
    DuplicateState(String),

    #[error("suffix `{0}` is defined twice")]
    DuplicateSuffix(String),

    #[error("unknown state `{0}`")]
    UnknownState(String),

    #[error("unknown suffix `{0}`")]
    UnknownSuffix(String),

    #[error("suffix `{suffix}` has no form `{template}`")]
    UnknownForm { suffix: String, template: String },

    /// More than one form of the suffix has the requested template.
    #[error("suffix `{suffix}` has several forms `{template}`")]
    AmbiguousForm { suffix: String, template: String },

    #[error("no root state for part of speech {0}")]
    NoRootState(PrimaryPos),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A candidate reached a (state, phonetic attributes) pair the form
    /// graph has no node for.
    #[error("`{word}`: no form graph node for state {state} with attributes {attributes}")]
    NodeNotFound {
        word: String,
        state: String,
        attributes: String,
    },

    /// Candidates were still alive when the generation limit was reached.
    #[error("`{word}`: {count} candidates left after {generations} generations")]
    LeftoverCandidates {
        word: String,
        count: usize,
        generations: usize,
    },

    /// A forced transition was rejected for a reason other than a surface
    /// mismatch.
    #[error("`{word}`: mandatory transition {suffix} failed: {rejection}")]
    MandatoryTransition {
        word: String,
        suffix: String,
        rejection: Rejection,
    },

    #[error("`{word}`: {source}")]
    Grammar {
        word: String,
        #[source]
        source: GrammarError,
    },
}

impl ParseError {
    /// The word whose parse failed.
    pub fn word(&self) -> &str {
        match self {
            ParseError::NodeNotFound { word, .. }
            | ParseError::LeftoverCandidates { word, .. }
            | ParseError::MandatoryTransition { word, .. }
            | ParseError::Grammar { word, .. } => word,
        }
    }
}

/// Top-level error for building and running a parser.
#[derive(Debug, thiserror::Error)]
pub enum TahlilError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
