// Roots: concrete surface forms a lexeme can take before any suffix.
//
// A lexeme yields one or two roots (plain and phonologically modified).
// Roots built while parsing (proper nouns, punctuation) and numerals have
// their own variants; parser-facing code only uses the shared accessors.

use std::sync::Arc;

use crate::lexeme::Lexeme;
use crate::phonetics::{PhoneticAttributeSet, PhoneticExpectationSet, attributes_of_with_lexeme};
use crate::sequence::TurkishSequence;

/// A root generated from a dictionary lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableRoot {
    pub sequence: TurkishSequence,
    pub lexeme: Arc<Lexeme>,
    pub phonetic_attributes: PhoneticAttributeSet,
    pub phonetic_expectations: PhoneticExpectationSet,
}

/// A root built while parsing from the input itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicRoot {
    pub sequence: TurkishSequence,
    pub lexeme: Arc<Lexeme>,
    pub phonetic_attributes: PhoneticAttributeSet,
    pub phonetic_expectations: PhoneticExpectationSet,
}

/// A root written in digits. Its phonetics come from the spelled-out text,
/// so `3` behaves like `üç`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumeralRoot {
    pub sequence: TurkishSequence,
    pub lexeme: Arc<Lexeme>,
    pub text: String,
    pub phonetic_attributes: PhoneticAttributeSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Root {
    Immutable(ImmutableRoot),
    Dynamic(DynamicRoot),
    Numeral(NumeralRoot),
}

impl Root {
    pub fn immutable(
        sequence: TurkishSequence,
        lexeme: Arc<Lexeme>,
        phonetic_attributes: PhoneticAttributeSet,
        phonetic_expectations: PhoneticExpectationSet,
    ) -> Self {
        Root::Immutable(ImmutableRoot {
            sequence,
            lexeme,
            phonetic_attributes,
            phonetic_expectations,
        })
    }

    /// Dynamic root whose phonetic attributes are computed from its own
    /// sequence.
    pub fn dynamic(sequence: TurkishSequence, lexeme: Arc<Lexeme>) -> Self {
        let phonetic_attributes = attributes_of_with_lexeme(&sequence, lexeme.attributes());
        Root::Dynamic(DynamicRoot {
            sequence,
            lexeme,
            phonetic_attributes,
            phonetic_expectations: PhoneticExpectationSet::empty(),
        })
    }

    pub fn numeral(sequence: TurkishSequence, lexeme: Arc<Lexeme>, text: String) -> Self {
        let phonetic_attributes =
            attributes_of_with_lexeme(&TurkishSequence::new(&text), lexeme.attributes());
        Root::Numeral(NumeralRoot {
            sequence,
            lexeme,
            text,
            phonetic_attributes,
        })
    }

    pub fn sequence(&self) -> &TurkishSequence {
        match self {
            Root::Immutable(r) => &r.sequence,
            Root::Dynamic(r) => &r.sequence,
            Root::Numeral(r) => &r.sequence,
        }
    }

    pub fn lexeme(&self) -> &Arc<Lexeme> {
        match self {
            Root::Immutable(r) => &r.lexeme,
            Root::Dynamic(r) => &r.lexeme,
            Root::Numeral(r) => &r.lexeme,
        }
    }

    pub fn phonetic_attributes(&self) -> PhoneticAttributeSet {
        match self {
            Root::Immutable(r) => r.phonetic_attributes,
            Root::Dynamic(r) => r.phonetic_attributes,
            Root::Numeral(r) => r.phonetic_attributes,
        }
    }

    pub fn phonetic_expectations(&self) -> PhoneticExpectationSet {
        match self {
            Root::Immutable(r) => r.phonetic_expectations,
            Root::Dynamic(r) => r.phonetic_expectations,
            Root::Numeral(_) => PhoneticExpectationSet::empty(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.sequence().as_str()
    }

    /// Same root with a different surface sequence; everything else is
    /// copied.
    pub fn with_sequence(&self, sequence: TurkishSequence) -> Root {
        match self {
            Root::Immutable(r) => Root::Immutable(ImmutableRoot {
                sequence,
                ..r.clone()
            }),
            Root::Dynamic(r) => Root::Dynamic(DynamicRoot {
                sequence,
                ..r.clone()
            }),
            Root::Numeral(r) => Root::Numeral(NumeralRoot {
                sequence,
                ..r.clone()
            }),
        }
    }
}
