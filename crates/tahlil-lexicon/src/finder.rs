// Root finders: which roots could sit at the start of a word.
//
// The parser offers every non-empty prefix of the input to a chain of
// finders. Each finder decides whether it handles the prefix and, if so,
// which roots it yields. Dictionary roots come from the shared root map;
// numerals, proper nouns and punctuation get roots built on the fly.

use std::sync::Arc;

use tahlil_core::{
    Lexeme, LexemeAttribute, LexemeAttributeSet, PrimaryPos, Root, SecondaryPos, TurkishSequence,
};

use crate::numeral::{digits_to_text, is_numeral};
use crate::root_map::RootMap;

/// Finds candidate roots for a prefix of the input word.
pub trait RootFinder: Send + Sync {
    /// Whether this finder has anything to say about `partial`, a prefix of
    /// `whole`.
    fn handles(&self, partial: &str, whole: &str) -> bool;

    /// Roots whose surface is exactly `partial`. Only called when
    /// [`handles`](Self::handles) returned true.
    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root>;
}

/// What a chain does after a finder handled the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPolicy {
    /// Later finders are not consulted.
    StopWhenHandled,
    /// Later finders still get the input.
    Continue,
}

/// Finders consulted in order, each with its own [`ChainPolicy`].
#[derive(Default)]
pub struct RootFinderChain {
    finders: Vec<(Box<dyn RootFinder>, ChainPolicy)>,
}

impl RootFinderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, finder: impl RootFinder + 'static, policy: ChainPolicy) -> Self {
        self.push(finder, policy);
        self
    }

    pub fn push(&mut self, finder: impl RootFinder + 'static, policy: ChainPolicy) {
        self.finders.push((Box::new(finder), policy));
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }
}

impl RootFinder for RootFinderChain {
    fn handles(&self, partial: &str, whole: &str) -> bool {
        self.finders.iter().any(|(f, _)| f.handles(partial, whole))
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<Root> {
        let mut roots = Vec::new();
        for (finder, policy) in &self.finders {
            if !finder.handles(partial, whole) {
                continue;
            }
            roots.extend(finder.find_roots(partial, whole));
            if *policy == ChainPolicy::StopWhenHandled {
                break;
            }
        }
        roots
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// Exact-match lookup in a shared [`RootMap`].
pub struct DictionaryRootFinder {
    roots: Arc<RootMap>,
}

impl DictionaryRootFinder {
    pub fn new(roots: Arc<RootMap>) -> Self {
        Self { roots }
    }
}

impl RootFinder for DictionaryRootFinder {
    fn handles(&self, partial: &str, _whole: &str) -> bool {
        !partial.is_empty()
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        self.roots.get(partial).to_vec()
    }
}

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

/// Digit strings such as `3`, `1984` or `3,5`. Only the longest numeral
/// prefix is handled, so `1984'te` never yields a root for `19`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumeralRootFinder;

impl RootFinder for NumeralRootFinder {
    fn handles(&self, partial: &str, whole: &str) -> bool {
        if !is_numeral(partial) {
            return false;
        }
        let Some(rest) = whole.strip_prefix(partial) else {
            return false;
        };
        let mut rest = rest.chars();
        match rest.next() {
            Some(c) if c.is_ascii_digit() => false,
            Some(',') => !rest.next().is_some_and(|c| c.is_ascii_digit()),
            _ => true,
        }
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        let Some(text) = digits_to_text(partial) else {
            return Vec::new();
        };
        let lexeme = Arc::new(Lexeme::dynamic(
            partial,
            partial,
            PrimaryPos::Numeral,
            Some(SecondaryPos::Digits),
            LexemeAttributeSet::of(&[LexemeAttribute::NoVoicing]),
        ));
        vec![Root::numeral(TurkishSequence::new(partial), lexeme, text)]
    }
}

// ---------------------------------------------------------------------------
// Proper nouns
// ---------------------------------------------------------------------------

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn proper_noun_root(surface: &str) -> Root {
    let lexeme = Arc::new(Lexeme::dynamic(
        surface,
        surface,
        PrimaryPos::Noun,
        Some(SecondaryPos::ProperNoun),
        LexemeAttributeSet::of(&[LexemeAttribute::NoVoicing]),
    ));
    Root::dynamic(TurkishSequence::new(surface), lexeme)
}

/// Capitalized words whose suffixes are split off with an apostrophe:
/// `Ankara'ya` yields the root `Ankara`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProperNounFromApostropheRootFinder;

impl RootFinder for ProperNounFromApostropheRootFinder {
    fn handles(&self, partial: &str, whole: &str) -> bool {
        starts_uppercase(partial)
            && !partial.contains('\'')
            && whole
                .strip_prefix(partial)
                .is_some_and(|rest| rest.starts_with('\''))
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        vec![proper_noun_root(partial)]
    }
}

/// A whole capitalized word without an apostrophe, taken as a bare proper
/// noun: `Ankara`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProperNounWithoutApostropheRootFinder;

impl RootFinder for ProperNounWithoutApostropheRootFinder {
    fn handles(&self, partial: &str, whole: &str) -> bool {
        partial == whole && starts_uppercase(partial) && !partial.contains('\'')
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        vec![proper_noun_root(partial)]
    }
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Whole-word punctuation such as `.`, `...` or `?!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationRootFinder;

impl RootFinder for PunctuationRootFinder {
    fn handles(&self, partial: &str, whole: &str) -> bool {
        partial == whole
            && !partial.is_empty()
            && partial
                .chars()
                .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
    }

    fn find_roots(&self, partial: &str, _whole: &str) -> Vec<Root> {
        let lexeme = Arc::new(Lexeme::dynamic(
            partial,
            partial,
            PrimaryPos::Punctuation,
            None,
            LexemeAttributeSet::empty(),
        ));
        vec![Root::dynamic(TurkishSequence::new(partial), lexeme)]
    }
}
