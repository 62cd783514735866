// Lexemes: dictionary entries with part-of-speech and morphophonemic flags.

use std::fmt;

use crate::flags::{Flag, FlagSet};

// ---------------------------------------------------------------------------
// Parts of speech
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Verb,
    Pronoun,
    Numeral,
    Determiner,
    Postposition,
    Question,
    Punctuation,
    Part,
}

impl PrimaryPos {
    pub const ALL: &'static [PrimaryPos] = &[
        Self::Noun,
        Self::Adjective,
        Self::Adverb,
        Self::Conjunction,
        Self::Interjection,
        Self::Verb,
        Self::Pronoun,
        Self::Numeral,
        Self::Determiner,
        Self::Postposition,
        Self::Question,
        Self::Punctuation,
        Self::Part,
    ];

    /// Short form used in dictionaries and formatted parses.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Adjective => "Adj",
            Self::Adverb => "Adv",
            Self::Conjunction => "Conj",
            Self::Interjection => "Interj",
            Self::Verb => "Verb",
            Self::Pronoun => "Pron",
            Self::Numeral => "Num",
            Self::Determiner => "Det",
            Self::Postposition => "Postp",
            Self::Question => "Ques",
            Self::Punctuation => "Punc",
            Self::Part => "Part",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.tag() == tag)
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecondaryPos {
    Duplicator,
    PostPositive,
    Question,
    Demonstrative,
    Reflexive,
    Personal,
    Time,
    ProperNoun,
    Abbreviation,
    Cardinal,
    Ordinal,
    Digits,
    Range,
    Distribution,
    Fraction,
}

impl SecondaryPos {
    pub const ALL: &'static [SecondaryPos] = &[
        Self::Duplicator,
        Self::PostPositive,
        Self::Question,
        Self::Demonstrative,
        Self::Reflexive,
        Self::Personal,
        Self::Time,
        Self::ProperNoun,
        Self::Abbreviation,
        Self::Cardinal,
        Self::Ordinal,
        Self::Digits,
        Self::Range,
        Self::Distribution,
        Self::Fraction,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Duplicator => "Dup",
            Self::PostPositive => "PostPos",
            Self::Question => "Ques",
            Self::Demonstrative => "Demons",
            Self::Reflexive => "Reflex",
            Self::Personal => "Pers",
            Self::Time => "Time",
            Self::ProperNoun => "Prop",
            Self::Abbreviation => "Abbr",
            Self::Cardinal => "Card",
            Self::Ordinal => "Ord",
            Self::Digits => "Digits",
            Self::Range => "Range",
            Self::Distribution => "Dist",
            Self::Fraction => "Frac",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.tag() == tag)
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Lexeme attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LexemeAttribute {
    Voicing,
    NoVoicing,
    VoicingOpt,
    Doubling,
    LastVowelDrop,
    ProgressiveVowelDrop,
    InverseHarmony,
    RootChange,
    CompoundP3sg,
    Plural,
    Special,
    NoSuffix,
    EndsWithAyn,
    Reflexive,
    Reciprocal,
    NonTransitive,
    CausativeT,
    CausativeIr,
    CausativeIt,
    CausativeAr,
    CausativeDir,
    PassiveIn,
    PassiveInIl,
    PassiveIl,
    AoristI,
    AoristA,
}

impl Flag for LexemeAttribute {
    const ALL: &'static [Self] = &[
        Self::Voicing,
        Self::NoVoicing,
        Self::VoicingOpt,
        Self::Doubling,
        Self::LastVowelDrop,
        Self::ProgressiveVowelDrop,
        Self::InverseHarmony,
        Self::RootChange,
        Self::CompoundP3sg,
        Self::Plural,
        Self::Special,
        Self::NoSuffix,
        Self::EndsWithAyn,
        Self::Reflexive,
        Self::Reciprocal,
        Self::NonTransitive,
        Self::CausativeT,
        Self::CausativeIr,
        Self::CausativeIt,
        Self::CausativeAr,
        Self::CausativeDir,
        Self::PassiveIn,
        Self::PassiveInIl,
        Self::PassiveIl,
        Self::AoristI,
        Self::AoristA,
    ];

    fn bit(self) -> u32 {
        self as u32
    }
}

impl LexemeAttribute {
    /// Spelling used in dictionary files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Voicing => "Voicing",
            Self::NoVoicing => "NoVoicing",
            Self::VoicingOpt => "VoicingOpt",
            Self::Doubling => "Doubling",
            Self::LastVowelDrop => "LastVowelDrop",
            Self::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            Self::InverseHarmony => "InverseHarmony",
            Self::RootChange => "RootChange",
            Self::CompoundP3sg => "CompoundP3sg",
            Self::Plural => "Plural",
            Self::Special => "Special",
            Self::NoSuffix => "NoSuffix",
            Self::EndsWithAyn => "EndsWithAyn",
            Self::Reflexive => "Reflexive",
            Self::Reciprocal => "Reciprocal",
            Self::NonTransitive => "NonTransitive",
            Self::CausativeT => "Causative_t",
            Self::CausativeIr => "Causative_Ir",
            Self::CausativeIt => "Causative_It",
            Self::CausativeAr => "Causative_Ar",
            Self::CausativeDir => "Causative_dIr",
            Self::PassiveIn => "Passive_In",
            Self::PassiveInIl => "Passive_InIl",
            Self::PassiveIl => "Passive_Il",
            Self::AoristI => "Aorist_I",
            Self::AoristA => "Aorist_A",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.tag() == tag)
    }

    /// Attributes that make the root generator produce a modified root.
    pub const MODIFIERS: &'static [LexemeAttribute] = &[
        Self::Voicing,
        Self::VoicingOpt,
        Self::Doubling,
        Self::LastVowelDrop,
        Self::InverseHarmony,
        Self::ProgressiveVowelDrop,
        Self::RootChange,
    ];

    pub const CAUSATIVES: &'static [LexemeAttribute] = &[
        Self::CausativeT,
        Self::CausativeIr,
        Self::CausativeIt,
        Self::CausativeAr,
        Self::CausativeDir,
    ];

    pub const PASSIVES: &'static [LexemeAttribute] =
        &[Self::PassiveIn, Self::PassiveInIl, Self::PassiveIl];

    pub const AORISTS: &'static [LexemeAttribute] = &[Self::AoristI, Self::AoristA];
}

pub type LexemeAttributeSet = FlagSet<LexemeAttribute>;

// ---------------------------------------------------------------------------
// Lexeme
// ---------------------------------------------------------------------------

/// Where a lexeme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeOrigin {
    /// Loaded from a dictionary.
    Dictionary,
    /// Built while parsing (numerals, proper nouns, punctuation).
    Dynamic,
}

/// A dictionary entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lexeme {
    lemma: String,
    lemma_root: String,
    primary_pos: PrimaryPos,
    secondary_pos: Option<SecondaryPos>,
    attributes: LexemeAttributeSet,
    origin: LexemeOrigin,
}

impl Lexeme {
    pub fn new(
        lemma: impl Into<String>,
        lemma_root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: Option<SecondaryPos>,
        attributes: LexemeAttributeSet,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            lemma_root: lemma_root.into(),
            primary_pos,
            secondary_pos,
            attributes,
            origin: LexemeOrigin::Dictionary,
        }
    }

    /// A lexeme constructed on the fly rather than loaded from a dictionary.
    pub fn dynamic(
        lemma: impl Into<String>,
        lemma_root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: Option<SecondaryPos>,
        attributes: LexemeAttributeSet,
    ) -> Self {
        Self {
            origin: LexemeOrigin::Dynamic,
            ..Self::new(lemma, lemma_root, primary_pos, secondary_pos, attributes)
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn lemma_root(&self) -> &str {
        &self.lemma_root
    }

    pub fn primary_pos(&self) -> PrimaryPos {
        self.primary_pos
    }

    pub fn secondary_pos(&self) -> Option<SecondaryPos> {
        self.secondary_pos
    }

    pub fn attributes(&self) -> LexemeAttributeSet {
        self.attributes
    }

    pub fn has_attribute(&self, attribute: LexemeAttribute) -> bool {
        self.attributes.contains(attribute)
    }

    pub fn origin(&self) -> LexemeOrigin {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_tags_round_trip() {
        for pos in PrimaryPos::ALL {
            assert_eq!(PrimaryPos::from_tag(pos.tag()), Some(*pos));
        }
        for pos in SecondaryPos::ALL {
            assert_eq!(SecondaryPos::from_tag(pos.tag()), Some(*pos));
        }
        assert_eq!(PrimaryPos::from_tag("Adjective"), None);
    }

    #[test]
    fn attribute_tags() {
        assert_eq!(
            LexemeAttribute::from_tag("Causative_dIr"),
            Some(LexemeAttribute::CausativeDir)
        );
        assert_eq!(
            LexemeAttribute::from_tag("Aorist_A"),
            Some(LexemeAttribute::AoristA)
        );
        assert_eq!(LexemeAttribute::from_tag("Bogus"), None);
        assert!(LexemeAttribute::ALL.len() < 64);
    }

    #[test]
    fn dynamic_lexeme_origin() {
        let lex = Lexeme::dynamic(
            "Ankara",
            "Ankara",
            PrimaryPos::Noun,
            Some(SecondaryPos::ProperNoun),
            LexemeAttributeSet::empty(),
        );
        assert_eq!(lex.origin(), LexemeOrigin::Dynamic);
        assert_eq!(lex.lemma_root(), "Ankara");
    }
}
