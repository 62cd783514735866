// Dictionary loader.
//
// One lexeme per line:
//
//     rootStr [P:PrimaryPos,SecondaryPos; A:Attr1,Attr2; R:actualRoot]
//
// `#` comment lines and blank lines are skipped. Without `P:` the part of
// speech is Verb when the root ends in the infinitive `mek`/`mak` (which is
// stripped), otherwise Noun. Attributes the dictionary leaves implicit are
// inferred from the root's shape.

use std::path::Path;

use tahlil_core::{
    Lexeme, LexemeAttribute, LexemeAttributeSet, PrimaryPos, SecondaryPos, TurkishSequence,
};
use tracing::debug;

use crate::error::LexiconError;

/// Single-syllable verbs that take the `Ir` aorist instead of `Ar`.
const AORIST_I_SINGLE_SYLLABLE: &[&str] = &[
    "al", "bil", "bul", "dur", "gel", "gör", "kal", "ol", "öl", "san", "var", "ver", "vur",
];

/// Parse a whole dictionary text.
pub fn parse_dictionary(text: &str) -> Result<Vec<Lexeme>, LexiconError> {
    let mut lexemes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(lexeme) = parse_line(line, i + 1)? {
            lexemes.push(lexeme);
        }
    }
    debug!(count = lexemes.len(), "parsed dictionary");
    Ok(lexemes)
}

/// Read and parse a dictionary file.
pub fn load_dictionary(path: &Path) -> Result<Vec<Lexeme>, LexiconError> {
    let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dictionary(&text)
}

/// Parse one dictionary line. Returns `Ok(None)` for comments and blank
/// lines. `line_no` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Lexeme>, LexiconError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (root_part, meta) = match line.find('[') {
        Some(open) => {
            let Some(inner) = line[open + 1..].strip_suffix(']') else {
                return Err(LexiconError::MalformedLine {
                    line: line_no,
                    reason: "metadata must end with `]`".to_string(),
                });
            };
            (line[..open].trim(), inner)
        }
        None => (line, ""),
    };

    if root_part.is_empty() || root_part.contains(char::is_whitespace) {
        return Err(LexiconError::MalformedLine {
            line: line_no,
            reason: format!("invalid root `{root_part}`"),
        });
    }

    let mut primary_pos = None;
    let mut secondary_pos = None;
    let mut attributes = LexemeAttributeSet::empty();
    let mut actual_root = None;

    for item in meta.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let Some((key, value)) = item.split_once(':') else {
            return Err(LexiconError::MalformedLine {
                line: line_no,
                reason: format!("expected `KEY:value`, got `{item}`"),
            });
        };
        let value = value.trim();
        match key.trim() {
            "P" => {
                let mut tags = value.split(',').map(str::trim);
                let primary = tags.next().unwrap_or_default();
                primary_pos = Some(PrimaryPos::from_tag(primary).ok_or_else(|| {
                    LexiconError::UnknownPos {
                        line: line_no,
                        tag: primary.to_string(),
                    }
                })?);
                if let Some(secondary) = tags.next() {
                    secondary_pos = Some(SecondaryPos::from_tag(secondary).ok_or_else(|| {
                        LexiconError::UnknownPos {
                            line: line_no,
                            tag: secondary.to_string(),
                        }
                    })?);
                }
            }
            "A" => {
                for tag in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    let attr = LexemeAttribute::from_tag(tag).ok_or_else(|| {
                        LexiconError::UnknownAttribute {
                            line: line_no,
                            tag: tag.to_string(),
                        }
                    })?;
                    attributes.insert(attr);
                }
            }
            "R" => actual_root = Some(value.to_string()),
            other => {
                return Err(LexiconError::MalformedLine {
                    line: line_no,
                    reason: format!("unknown metadata key `{other}`"),
                });
            }
        }
    }

    let lemma = root_part.to_string();
    let infinitive_stem = strip_infinitive(root_part);
    let primary_pos = primary_pos.unwrap_or(if infinitive_stem.is_some() {
        PrimaryPos::Verb
    } else {
        PrimaryPos::Noun
    });

    let lemma_root = match actual_root {
        Some(root) => root,
        None if primary_pos == PrimaryPos::Verb => {
            infinitive_stem.unwrap_or(root_part).to_string()
        }
        None => root_part.to_string(),
    };

    let attributes = infer_attributes(&lemma_root, primary_pos, secondary_pos, attributes);
    Ok(Some(Lexeme::new(
        lemma,
        lemma_root,
        primary_pos,
        secondary_pos,
        attributes,
    )))
}

fn strip_infinitive(word: &str) -> Option<&str> {
    word.strip_suffix("mek")
        .or_else(|| word.strip_suffix("mak"))
        .filter(|stem| !stem.is_empty())
}

// ---------------------------------------------------------------------------
// Attribute inference
// ---------------------------------------------------------------------------

/// Add the attributes a dictionary normally leaves implicit. Explicit
/// attributes always win over inferred ones.
pub fn infer_attributes(
    lemma_root: &str,
    primary_pos: PrimaryPos,
    secondary_pos: Option<SecondaryPos>,
    explicit: LexemeAttributeSet,
) -> LexemeAttributeSet {
    use LexemeAttribute::*;

    let seq = TurkishSequence::new(lemma_root);
    let Some(last) = seq.last_char() else {
        return explicit;
    };
    let ends_with_vowel = last.is_vowel();
    let ends_with_stop = last.letter().is_voiceless_stop();
    let syllables = seq.vowel_count();
    let voicing_given =
        explicit.contains_any(LexemeAttributeSet::of(&[Voicing, NoVoicing, VoicingOpt]));

    let mut attrs = explicit;

    if primary_pos == PrimaryPos::Verb {
        if ends_with_vowel && syllables > 1 && !attrs.contains(RootChange) {
            attrs.insert(ProgressiveVowelDrop);
        }

        if !LexemeAttribute::AORISTS.iter().any(|a| attrs.contains(*a)) {
            let aorist_i = if syllables > 1 {
                true
            } else {
                AORIST_I_SINGLE_SYLLABLE.contains(&lemma_root)
            };
            attrs.insert(if aorist_i { AoristI } else { AoristA });
        }

        if !LexemeAttribute::CAUSATIVES
            .iter()
            .any(|a| attrs.contains(*a))
        {
            let last_char = last.char_value();
            let causative_t =
                ends_with_vowel || (syllables > 1 && matches!(last_char, 'l' | 'r'));
            attrs.insert(if causative_t { CausativeT } else { CausativeDir });
        }

        if !LexemeAttribute::PASSIVES
            .iter()
            .any(|a| attrs.contains(*a))
        {
            let passive_in = ends_with_vowel || last.char_value() == 'l';
            attrs.insert(if passive_in { PassiveIn } else { PassiveIl });
        }

        // The stem left by progressive vowel drop (yık from yıka) keeps its
        // stop before -Iyor.
        if (ends_with_stop || attrs.contains(ProgressiveVowelDrop)) && !voicing_given {
            attrs.insert(NoVoicing);
        }
        return attrs;
    }

    if secondary_pos == Some(SecondaryPos::ProperNoun) {
        if !voicing_given {
            attrs.insert(NoVoicing);
        }
        return attrs;
    }

    if ends_with_stop && !voicing_given {
        let voices =
            matches!(primary_pos, PrimaryPos::Noun | PrimaryPos::Adjective) && syllables > 1;
        attrs.insert(if voices { Voicing } else { NoVoicing });
    }

    attrs
}
