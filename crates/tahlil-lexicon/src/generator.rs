// Root generation: expanding a lexeme into the concrete roots it can take.
//
// Most lexemes yield a single root. Lexemes whose root changes shape before
// some suffixes (voicing, doubling, vowel drop, irregular stems) yield an
// original and a modified root, each carrying the phonetic expectation that
// selects it: the original wants a consonant next, the modified one a vowel.

use std::sync::{Arc, LazyLock};

use hashbrown::HashMap;
use tahlil_core::alphabet::{self, has_circumflex, remove_circumflex};
use tahlil_core::phonetics::attributes_of_with_lexeme;
use tahlil_core::{
    Lexeme, LexemeAttribute, PhoneticExpectation, PhoneticExpectationSet, PrimaryPos, Root,
    TurkishSequence,
};

use crate::error::LexiconError;

/// Produces the roots of a lexeme.
pub trait RootGenerator: Send + Sync {
    fn generate(&self, lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError>;
}

// ---------------------------------------------------------------------------
// Irregular root table
// ---------------------------------------------------------------------------

/// Irregular stems keyed by (lemma root, part of speech). A `None` part of
/// speech is the fallback for any part of speech.
static ROOT_CHANGES: LazyLock<HashMap<(&'static str, Option<PrimaryPos>), &'static str>> =
    LazyLock::new(|| {
        [
            (("ben", Some(PrimaryPos::Pronoun)), "ban"),
            (("sen", Some(PrimaryPos::Pronoun)), "san"),
            (("o", Some(PrimaryPos::Pronoun)), "on"),
            (("bu", Some(PrimaryPos::Pronoun)), "bun"),
            (("şu", Some(PrimaryPos::Pronoun)), "şun"),
            (("de", Some(PrimaryPos::Verb)), "di"),
            (("ye", Some(PrimaryPos::Verb)), "yi"),
            (("su", None), "suy"),
        ]
        .into_iter()
        .collect()
    });

/// Irregular stem for a lemma root, falling back to the entry without a
/// part of speech.
pub fn changed_root(lemma_root: &str, pos: PrimaryPos) -> Option<&'static str> {
    ROOT_CHANGES
        .get(&(lemma_root, Some(pos)))
        .or_else(|| ROOT_CHANGES.get(&(lemma_root, None)))
        .copied()
}

// ---------------------------------------------------------------------------
// Standard generator
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRootGenerator;

impl RootGenerator for StandardRootGenerator {
    fn generate(&self, lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError> {
        let attrs = lexeme.attributes();
        if LexemeAttribute::MODIFIERS
            .iter()
            .any(|a| attrs.contains(*a))
        {
            return modified_roots(lexeme);
        }
        let sequence = TurkishSequence::new(lexeme.lemma_root());
        let phonetics = attributes_of_with_lexeme(&sequence, attrs);
        Ok(vec![Root::immutable(
            sequence,
            Arc::clone(lexeme),
            phonetics,
            PhoneticExpectationSet::empty(),
        )])
    }
}

fn modified_roots(lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError> {
    use LexemeAttribute::*;

    if lexeme.has_attribute(RootChange) {
        return changed_roots(lexeme);
    }

    let lemma_root = lexeme.lemma_root();
    let attrs = lexeme.attributes();
    let inapplicable = |attribute: &'static str| LexiconError::InapplicableAttribute {
        lemma_root: lemma_root.to_string(),
        attribute,
    };

    let original = TurkishSequence::new(lemma_root);
    let original_phonetics = attributes_of_with_lexeme(&original, attrs);
    let mut original_expectations = PhoneticExpectationSet::empty();
    let mut modified_expectations = PhoneticExpectationSet::empty();
    let mut chars: Vec<char> = lemma_root.chars().collect();

    if attrs.contains(Voicing) || attrs.contains(VoicingOpt) {
        let last = chars.last_mut().ok_or_else(|| inapplicable("Voicing"))?;
        *last = if lemma_root.ends_with("nk") {
            'g'
        } else {
            alphabet::voice_char(*last).ok_or_else(|| inapplicable("Voicing"))?
        };
        if !attrs.contains(VoicingOpt) {
            original_expectations.insert(PhoneticExpectation::ConsonantStart);
        }
        modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    if attrs.contains(Doubling) {
        let last = *chars.last().ok_or_else(|| inapplicable("Doubling"))?;
        chars.push(last);
        original_expectations.insert(PhoneticExpectation::ConsonantStart);
        modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    if attrs.contains(LastVowelDrop) {
        if chars.len() < 2 {
            return Err(inapplicable("LastVowelDrop"));
        }
        chars.remove(chars.len() - 2);
        if lexeme.primary_pos() != PrimaryPos::Verb {
            original_expectations.insert(PhoneticExpectation::ConsonantStart);
        }
        modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    if attrs.contains(ProgressiveVowelDrop) {
        chars
            .pop()
            .ok_or_else(|| inapplicable("ProgressiveVowelDrop"))?;
        modified_expectations.insert(PhoneticExpectation::VowelStart);
    }

    let modified = TurkishSequence::new(&chars.into_iter().collect::<String>());
    if modified == original {
        return Ok(vec![Root::immutable(
            original,
            Arc::clone(lexeme),
            original_phonetics,
            original_expectations,
        )]);
    }

    let modified_phonetics = if modified.has_vowel() {
        attributes_of_with_lexeme(&modified, attrs)
    } else {
        original_phonetics
    };

    Ok(vec![
        Root::immutable(
            original,
            Arc::clone(lexeme),
            original_phonetics,
            original_expectations,
        ),
        Root::immutable(
            modified,
            Arc::clone(lexeme),
            modified_phonetics,
            modified_expectations,
        ),
    ])
}

fn changed_roots(lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError> {
    let lemma_root = lexeme.lemma_root();
    let changed = changed_root(lemma_root, lexeme.primary_pos()).ok_or_else(|| {
        LexiconError::RootChangeMissing {
            lemma_root: lemma_root.to_string(),
            pos: lexeme.primary_pos(),
        }
    })?;

    let mut roots = Vec::with_capacity(2);
    for text in [lemma_root, changed] {
        let sequence = TurkishSequence::new(text);
        if roots.iter().any(|r: &Root| r.sequence() == &sequence) {
            continue;
        }
        let phonetics = attributes_of_with_lexeme(&sequence, lexeme.attributes());
        roots.push(Root::immutable(
            sequence,
            Arc::clone(lexeme),
            phonetics,
            PhoneticExpectationSet::empty(),
        ));
    }
    Ok(roots)
}

// ---------------------------------------------------------------------------
// Circumflex decorator
// ---------------------------------------------------------------------------

/// Wraps another generator and adds a circumflex-free copy of every root
/// containing â, î or û, so ASCII-leaning input like `kar` finds `kâr`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CircumflexConvertingRootGenerator<G> {
    inner: G,
}

impl<G: RootGenerator> CircumflexConvertingRootGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<G: RootGenerator> RootGenerator for CircumflexConvertingRootGenerator<G> {
    fn generate(&self, lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError> {
        let roots = self.inner.generate(lexeme)?;
        let mut out = Vec::with_capacity(roots.len() * 2);
        for root in roots {
            if root.as_str().chars().any(has_circumflex) {
                let plain: String = root.as_str().chars().map(remove_circumflex).collect();
                let duplicate = root.with_sequence(TurkishSequence::new(&plain));
                out.push(root);
                out.push(duplicate);
            } else {
                out.push(root);
            }
        }
        Ok(out)
    }
}
