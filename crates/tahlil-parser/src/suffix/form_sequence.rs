// Suffix form templates.
//
// A template such as `+yAcAk` is compiled once into per-letter rules and
// then resolved against the phonetic attributes of whatever precedes it:
//
//   a-z, ç, ğ, ...   literal letter
//   A                a/e by last-vowel frontness
//   I                ı/i/u/ü by frontness and roundedness (`!I`: ı/i only)
//   +x               optional letter, first position only: an optional
//                    vowel appears after a consonant, an optional consonant
//                    after a vowel
//   b, c, d, ğ       devoiced after a voiceless letter when every earlier
//                    rule is optional (`!d` keeps it literal)
//
// Anything that is not a letter (the apostrophe) is copied as is. Missing
// frontness or roundedness means back and unrounded.

use tahlil_core::alphabet;
use tahlil_core::phonetics::attributes_after;
use tahlil_core::{PhoneticAttribute, PhoneticAttributeSet, TurkishSequence};

use crate::error::GrammarError;

/// One compiled template position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Consonant(char),
    Vowel(char),
    /// A non-letter character such as `'`.
    Literal(char),
    HarmonizedA,
    HarmonizedI { rounding: bool },
    Optional(Box<Rule>),
    Devoicable(char),
}

impl Rule {
    /// Whether this rule produces a vowel when it produces anything.
    pub fn is_vowel(&self) -> bool {
        match self {
            Rule::Vowel(_) | Rule::HarmonizedA | Rule::HarmonizedI { .. } => true,
            Rule::Optional(inner) => inner.is_vowel(),
            Rule::Consonant(_) | Rule::Literal(_) | Rule::Devoicable(_) => false,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Rule::Optional(_))
    }

    fn is_applicable(&self, attrs: PhoneticAttributeSet) -> bool {
        use PhoneticAttribute::*;
        match self {
            Rule::Optional(_) => {
                attrs.contains(LastLetterVowel) || attrs.contains(LastLetterConsonant)
            }
            Rule::Devoicable(_) => {
                attrs.contains(LastLetterVoiceless) || attrs.contains(LastLetterNotVoiceless)
            }
            _ => true,
        }
    }

    /// The character this rule produces after a surface with `attrs`, or
    /// `None` when an optional letter is left out.
    fn resolve(&self, attrs: PhoneticAttributeSet) -> Option<char> {
        use PhoneticAttribute::*;
        match self {
            Rule::Consonant(c) | Rule::Vowel(c) | Rule::Literal(c) => Some(*c),
            Rule::HarmonizedA => Some(if attrs.contains(LastVowelFrontal) { 'e' } else { 'a' }),
            Rule::HarmonizedI { rounding } => {
                let frontal = attrs.contains(LastVowelFrontal);
                let rounded = *rounding && attrs.contains(LastVowelRounded);
                Some(match (frontal, rounded) {
                    (false, false) => '\u{0131}',
                    (true, false) => 'i',
                    (false, true) => 'u',
                    (true, true) => '\u{00FC}',
                })
            }
            Rule::Optional(inner) => {
                let include = if inner.is_vowel() {
                    attrs.contains(LastLetterConsonant)
                } else {
                    attrs.contains(LastLetterVowel)
                };
                if include { inner.resolve(attrs) } else { None }
            }
            Rule::Devoicable(c) => Some(if attrs.contains(LastLetterVoiceless) {
                alphabet::devoice_char(*c).unwrap_or(*c)
            } else {
                *c
            }),
        }
    }
}

/// A compiled suffix form template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFormSequence {
    template: String,
    rules: Vec<Rule>,
}

impl SuffixFormSequence {
    pub fn compile(template: &str) -> Result<Self, GrammarError> {
        let invalid = |reason| GrammarError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        let mut rules: Vec<Rule> = Vec::with_capacity(template.len());
        let mut optional = false;
        let mut suppress = false;

        for (i, c) in template.chars().enumerate() {
            let rule = match c {
                '+' if i == 0 => {
                    optional = true;
                    continue;
                }
                '+' => return Err(invalid("`+` is only allowed as the first character")),
                '!' => {
                    suppress = true;
                    continue;
                }
                'A' => Rule::HarmonizedA,
                'I' => Rule::HarmonizedI {
                    rounding: !suppress,
                },
                c if c.is_uppercase() => return Err(invalid("unknown harmonized letter")),
                c => match alphabet::letter(c) {
                    Some(l) if l.vowel => Rule::Vowel(c),
                    Some(_)
                        if !suppress
                            && alphabet::devoice_char(c).is_some()
                            && rules.iter().all(Rule::is_optional) =>
                    {
                        Rule::Devoicable(c)
                    }
                    Some(_) => Rule::Consonant(c),
                    None => Rule::Literal(c),
                },
            };
            suppress = false;
            rules.push(if optional {
                optional = false;
                Rule::Optional(Box::new(rule))
            } else {
                rule
            });
        }

        if optional || suppress {
            return Err(invalid("template ends with a modifier"));
        }

        Ok(Self {
            template: template.to_string(),
            rules,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// An empty template; the form never adds letters.
    pub fn is_blank(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether every rule can be resolved after a surface with `attrs`.
    /// An optional letter that would be left out still counts.
    pub fn is_applicable(&self, attrs: PhoneticAttributeSet) -> bool {
        self.rules.iter().all(|r| r.is_applicable(attrs))
    }

    /// Resolve the template after a surface with `attrs`. Harmony follows
    /// the letters added so far, so `lArI` gives `ları` after `kapı` and
    /// `leri` after `ev`.
    pub fn apply(&self, attrs: PhoneticAttributeSet) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut attrs = attrs;
        let mut buf = [0u8; 4];
        for rule in &self.rules {
            if let Some(c) = rule.resolve(attrs) {
                out.push(c);
                attrs = attributes_after(attrs, &TurkishSequence::new(c.encode_utf8(&mut buf)));
            }
        }
        out
    }

    /// Whether the first letter is a vowel, for each way the template can
    /// start. A leading optional letter gives two options: with it, and
    /// with whatever follows it.
    pub fn first_letter_options(&self) -> Vec<bool> {
        match self.rules.as_slice() {
            [] => Vec::new(),
            [Rule::Optional(inner)] => vec![inner.is_vowel()],
            [Rule::Optional(inner), next, ..] => vec![inner.is_vowel(), next.is_vowel()],
            [first, ..] => vec![first.is_vowel()],
        }
    }
}
