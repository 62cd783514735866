// Phonetic attribute calculus.
//
// A word's phonetic attributes describe its last letter (vowel/consonant,
// voicing class) and its last vowel (frontness, roundedness). These decide
// which concrete form a suffix takes. Only some attribute combinations can
// co-occur; the validity table below is the single source of truth for
// that, and the closed set of valid combinations is enumerated once.

use std::sync::LazyLock;

use crate::flags::{Flag, FlagSet};
use crate::lexeme::{LexemeAttribute, LexemeAttributeSet};
use crate::sequence::TurkishSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterNotVoiceless,
    LastLetterVoicelessStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    HasNoVowel,
}

impl Flag for PhoneticAttribute {
    const ALL: &'static [Self] = &[
        Self::LastLetterVowel,
        Self::LastLetterConsonant,
        Self::LastVowelFrontal,
        Self::LastVowelBack,
        Self::LastVowelRounded,
        Self::LastVowelUnrounded,
        Self::LastLetterVoiceless,
        Self::LastLetterNotVoiceless,
        Self::LastLetterVoicelessStop,
        Self::FirstLetterVowel,
        Self::FirstLetterConsonant,
        Self::HasNoVowel,
    ];

    fn bit(self) -> u32 {
        self as u32
    }
}

impl PhoneticAttribute {
    /// Short tag used in debug output.
    pub fn tag(self) -> &'static str {
        match self {
            Self::LastLetterVowel => "LLV",
            Self::LastLetterConsonant => "LLC",
            Self::LastVowelFrontal => "LVF",
            Self::LastVowelBack => "LVB",
            Self::LastVowelRounded => "LVR",
            Self::LastVowelUnrounded => "LVU",
            Self::LastLetterVoiceless => "LLVless",
            Self::LastLetterNotVoiceless => "LLNotVless",
            Self::LastLetterVoicelessStop => "LLVlessStop",
            Self::FirstLetterVowel => "FLV",
            Self::FirstLetterConsonant => "FLC",
            Self::HasNoVowel => "NoVow",
        }
    }
}

pub type PhoneticAttributeSet = FlagSet<PhoneticAttribute>;

/// Constraint on the first letter of the next non-blank suffix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticExpectation {
    VowelStart,
    ConsonantStart,
}

impl Flag for PhoneticExpectation {
    const ALL: &'static [Self] = &[Self::VowelStart, Self::ConsonantStart];

    fn bit(self) -> u32 {
        self as u32
    }
}

impl PhoneticExpectation {
    /// Whether a form starting with `first` satisfies this expectation.
    pub fn is_satisfied_by(self, first_is_vowel: bool) -> bool {
        match self {
            Self::VowelStart => first_is_vowel,
            Self::ConsonantStart => !first_is_vowel,
        }
    }
}

pub type PhoneticExpectationSet = FlagSet<PhoneticExpectation>;

// ---------------------------------------------------------------------------
// Validity table
// ---------------------------------------------------------------------------

use PhoneticAttribute::*;

fn has(set: PhoneticAttributeSet, a: PhoneticAttribute) -> bool {
    set.contains(a)
}

fn exactly_one_of(set: PhoneticAttributeSet, a: PhoneticAttribute, b: PhoneticAttribute) -> bool {
    set.contains(a) != set.contains(b)
}

fn vowel_info_complete(set: PhoneticAttributeSet) -> bool {
    exactly_one_of(set, LastVowelFrontal, LastVowelBack)
        && exactly_one_of(set, LastVowelRounded, LastVowelUnrounded)
}

/// For each attribute, the predicate the whole set must satisfy when that
/// attribute is present.
pub static VALIDITY_TABLE: &[(PhoneticAttribute, fn(PhoneticAttributeSet) -> bool)] = &[
    (LastLetterVowel, |s: PhoneticAttributeSet| {
        !has(s, LastLetterConsonant)
            && !has(s, HasNoVowel)
            && !has(s, LastLetterVoiceless)
            && !has(s, LastLetterVoicelessStop)
            && has(s, LastLetterNotVoiceless)
            && vowel_info_complete(s)
    }),
    (LastLetterConsonant, |s: PhoneticAttributeSet| {
        !has(s, LastLetterVowel)
            && exactly_one_of(s, LastLetterVoiceless, LastLetterNotVoiceless)
            && (has(s, HasNoVowel) || vowel_info_complete(s))
    }),
    (LastVowelFrontal, |s: PhoneticAttributeSet| {
        !has(s, LastVowelBack)
            && !has(s, HasNoVowel)
            && exactly_one_of(s, LastVowelRounded, LastVowelUnrounded)
            && exactly_one_of(s, LastLetterVowel, LastLetterConsonant)
    }),
    (LastVowelBack, |s: PhoneticAttributeSet| {
        !has(s, LastVowelFrontal)
            && !has(s, HasNoVowel)
            && exactly_one_of(s, LastVowelRounded, LastVowelUnrounded)
            && exactly_one_of(s, LastLetterVowel, LastLetterConsonant)
    }),
    (LastVowelRounded, |s: PhoneticAttributeSet| {
        !has(s, LastVowelUnrounded)
            && !has(s, HasNoVowel)
            && exactly_one_of(s, LastVowelFrontal, LastVowelBack)
            && exactly_one_of(s, LastLetterVowel, LastLetterConsonant)
    }),
    (LastVowelUnrounded, |s: PhoneticAttributeSet| {
        !has(s, LastVowelRounded)
            && !has(s, HasNoVowel)
            && exactly_one_of(s, LastVowelFrontal, LastVowelBack)
            && exactly_one_of(s, LastLetterVowel, LastLetterConsonant)
    }),
    (LastLetterVoiceless, |s: PhoneticAttributeSet| {
        has(s, LastLetterConsonant) && !has(s, LastLetterNotVoiceless)
    }),
    (LastLetterNotVoiceless, |s: PhoneticAttributeSet| {
        !has(s, LastLetterVoiceless)
            && !has(s, LastLetterVoicelessStop)
            && exactly_one_of(s, LastLetterVowel, LastLetterConsonant)
    }),
    (LastLetterVoicelessStop, |s: PhoneticAttributeSet| has(s, LastLetterVoiceless)),
    (FirstLetterVowel, |s: PhoneticAttributeSet| !has(s, FirstLetterConsonant)),
    (FirstLetterConsonant, |s: PhoneticAttributeSet| !has(s, FirstLetterVowel)),
    (HasNoVowel, |s: PhoneticAttributeSet| {
        !has(s, LastVowelFrontal)
            && !has(s, LastVowelBack)
            && !has(s, LastVowelRounded)
            && !has(s, LastVowelUnrounded)
            && has(s, LastLetterConsonant)
    }),
];

/// A set is valid iff it is non-empty and every member's predicate holds
/// against the whole set.
pub fn is_valid(set: PhoneticAttributeSet) -> bool {
    if set.is_empty() {
        return false;
    }
    VALIDITY_TABLE
        .iter()
        .all(|(attr, predicate)| !set.contains(*attr) || predicate(set))
}

/// Attributes that describe the end of a word. Parse states are keyed by
/// combinations of these only; first-letter attributes describe suffix
/// forms, not accumulated surfaces.
pub const TRAILING_ATTRIBUTES: &[PhoneticAttribute] = &[
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterNotVoiceless,
    LastLetterVoicelessStop,
    HasNoVowel,
];

static VALID_SETS: LazyLock<Vec<PhoneticAttributeSet>> = LazyLock::new(|| {
    let n = TRAILING_ATTRIBUTES.len();
    (0u32..(1 << n))
        .map(|mask| {
            TRAILING_ATTRIBUTES
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, a)| *a)
                .collect::<PhoneticAttributeSet>()
        })
        .filter(|set| is_valid(*set))
        .collect()
});

/// Every valid combination of trailing attributes, enumerated once by
/// power-set filtering.
pub fn all_valid_sets() -> &'static [PhoneticAttributeSet] {
    &VALID_SETS
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Trailing phonetic attributes of a sequence, computed from its last
/// character and last vowel only.
pub fn attributes_of(seq: &TurkishSequence) -> PhoneticAttributeSet {
    let mut attrs = PhoneticAttributeSet::empty();
    let Some(last) = seq.last_char() else {
        return attrs;
    };

    match seq.last_vowel() {
        Some(vowel) => {
            let l = vowel.letter();
            attrs.insert(if l.rounded {
                LastVowelRounded
            } else {
                LastVowelUnrounded
            });
            attrs.insert(if l.frontal {
                LastVowelFrontal
            } else {
                LastVowelBack
            });
        }
        None => attrs.insert(HasNoVowel),
    }

    let l = last.letter();
    if l.vowel {
        attrs.insert(LastLetterVowel);
    } else {
        attrs.insert(LastLetterConsonant);
    }

    if l.voiceless {
        attrs.insert(LastLetterVoiceless);
        if !l.continuant {
            attrs.insert(LastLetterVoicelessStop);
        }
    } else {
        attrs.insert(LastLetterNotVoiceless);
    }

    attrs
}

/// [`attributes_of`] with lexeme attributes applied: `InverseHarmony`
/// swaps back and frontal.
pub fn attributes_of_with_lexeme(
    seq: &TurkishSequence,
    lexeme_attributes: LexemeAttributeSet,
) -> PhoneticAttributeSet {
    let attrs = attributes_of(seq);
    if lexeme_attributes.contains(LexemeAttribute::InverseHarmony) {
        invert_harmony(attrs)
    } else {
        attrs
    }
}

/// Swap `LastVowelBack` and `LastVowelFrontal`. Sets with neither are
/// returned unchanged.
pub fn invert_harmony(attrs: PhoneticAttributeSet) -> PhoneticAttributeSet {
    if attrs.contains(LastVowelBack) {
        attrs.without(LastVowelBack).with(LastVowelFrontal)
    } else if attrs.contains(LastVowelFrontal) {
        attrs.without(LastVowelFrontal).with(LastVowelBack)
    } else {
        attrs
    }
}

/// Attributes after appending `appended` to a surface whose attributes are
/// `previous`. Blank or non-alphanumeric additions leave the attributes
/// untouched; additions without a vowel keep the previous vowel facts.
pub fn attributes_after(
    previous: PhoneticAttributeSet,
    appended: &TurkishSequence,
) -> PhoneticAttributeSet {
    if appended.is_blank() || appended.has_no_alphanumeric() {
        return previous;
    }
    let own = attributes_of(appended);
    if !own.contains(HasNoVowel) || previous.contains(HasNoVowel) {
        return own;
    }
    let mut merged = own.without(HasNoVowel);
    for a in [
        LastVowelFrontal,
        LastVowelBack,
        LastVowelRounded,
        LastVowelUnrounded,
    ] {
        if previous.contains(a) {
            merged.insert(a);
        }
    }
    merged
}

/// First-letter attribute of a non-empty suffix form string.
pub fn first_letter_attribute(seq: &TurkishSequence) -> Option<PhoneticAttribute> {
    seq.first_char().map(|c| {
        if c.is_vowel() {
            FirstLetterVowel
        } else {
            FirstLetterConsonant
        }
    })
}
