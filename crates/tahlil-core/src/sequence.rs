// Alphabet-aware character sequences.
//
// A `TurkishSequence` is the unit the phonetic calculus and the parser work
// on: the characters paired with their letter descriptors, the underlying
// string, and cached positions of the first and last vowel so that harmony
// lookups are O(1).

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::alphabet::{self, TurkicLetter};

/// A raw character paired with its letter descriptor.
///
/// Equality and hashing look at the raw character only.
#[derive(Debug, Clone, Copy)]
pub struct TurkishChar {
    ch: char,
    letter: &'static TurkicLetter,
}

impl TurkishChar {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            letter: alphabet::letter_or_undefined(ch),
        }
    }

    pub fn char_value(&self) -> char {
        self.ch
    }

    pub fn letter(&self) -> &'static TurkicLetter {
        self.letter
    }

    pub fn is_vowel(&self) -> bool {
        self.letter.vowel
    }
}

impl PartialEq for TurkishChar {
    fn eq(&self, other: &Self) -> bool {
        self.ch == other.ch
    }
}

impl Eq for TurkishChar {}

impl std::hash::Hash for TurkishChar {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ch.hash(state);
    }
}

/// Immutable sequence of [`TurkishChar`]s.
///
/// `append` and `subsequence` return new instances; the character buffer
/// is never shared mutably. `len()` counts characters, not bytes.
#[derive(Clone)]
pub struct TurkishSequence {
    chars: Arc<[TurkishChar]>,
    text: Arc<str>,
    first_vowel: Option<usize>,
    last_vowel: Option<usize>,
}

impl TurkishSequence {
    pub fn new(text: &str) -> Self {
        let chars: Vec<TurkishChar> = text.chars().map(TurkishChar::new).collect();
        Self::from_parts(chars, text.into())
    }

    pub fn from_chars(chars: &[TurkishChar]) -> Self {
        let text: String = chars.iter().map(|c| c.ch).collect();
        Self::from_parts(chars.to_vec(), text.into())
    }

    pub fn empty() -> Self {
        Self::new("")
    }

    fn from_parts(chars: Vec<TurkishChar>, text: Arc<str>) -> Self {
        let first_vowel = chars.iter().position(TurkishChar::is_vowel);
        let last_vowel = chars.iter().rposition(TurkishChar::is_vowel);
        Self {
            chars: chars.into(),
            text,
            first_vowel,
            last_vowel,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when empty or made entirely of whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// True when no character is a letter or digit.
    pub fn has_no_alphanumeric(&self) -> bool {
        !self.text.chars().any(char::is_alphanumeric)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[TurkishChar] {
        &self.chars
    }

    pub fn char_at(&self, index: usize) -> Option<&TurkishChar> {
        self.chars.get(index)
    }

    pub fn first_char(&self) -> Option<&TurkishChar> {
        self.chars.first()
    }

    pub fn last_char(&self) -> Option<&TurkishChar> {
        self.chars.last()
    }

    pub fn first_vowel(&self) -> Option<&TurkishChar> {
        self.first_vowel.map(|i| &self.chars[i])
    }

    pub fn last_vowel(&self) -> Option<&TurkishChar> {
        self.last_vowel.map(|i| &self.chars[i])
    }

    pub fn has_vowel(&self) -> bool {
        self.first_vowel.is_some()
    }

    /// Number of vowels, which is the syllable count for Turkish words.
    pub fn vowel_count(&self) -> usize {
        self.chars.iter().filter(|c| c.is_vowel()).count()
    }

    pub fn append(&self, other: &TurkishSequence) -> TurkishSequence {
        if other.is_empty() {
            return self.clone();
        }
        let mut chars = Vec::with_capacity(self.len() + other.len());
        chars.extend_from_slice(&self.chars);
        chars.extend_from_slice(&other.chars);
        let mut text = String::with_capacity(self.text.len() + other.text.len());
        text.push_str(&self.text);
        text.push_str(&other.text);
        Self::from_parts(chars, text.into())
    }

    pub fn append_str(&self, other: &str) -> TurkishSequence {
        self.append(&TurkishSequence::new(other))
    }

    /// Characters in `start..end`. Out-of-range bounds are clamped.
    pub fn subsequence(&self, start: usize, end: usize) -> TurkishSequence {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::from_chars(&self.chars[start..end])
    }

    /// Characters from `start` to the end.
    pub fn suffix_from(&self, start: usize) -> TurkishSequence {
        self.subsequence(start, self.len())
    }

    pub fn starts_with(&self, prefix: &TurkishSequence) -> bool {
        self.text.starts_with(&*prefix.text)
    }

    pub fn starts_with_str(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// New sequence with the last character replaced.
    pub fn with_last_char(&self, ch: char) -> TurkishSequence {
        let mut chars = self.chars.to_vec();
        if let Some(last) = chars.last_mut() {
            *last = TurkishChar::new(ch);
        }
        Self::from_chars(&chars)
    }
}

impl PartialEq for TurkishSequence {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TurkishSequence {}

impl std::hash::Hash for TurkishSequence {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Debug for TurkishSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TurkishSequence({:?})", &*self.text)
    }
}

impl fmt::Display for TurkishSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TurkishSequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for TurkishSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn caches_vowels() {
        let s = TurkishSequence::new("kitap");
        assert_eq!(s.first_vowel().map(TurkishChar::char_value), Some('i'));
        assert_eq!(s.last_vowel().map(TurkishChar::char_value), Some('a'));
        assert_eq!(s.last_char().map(TurkishChar::char_value), Some('p'));
        assert_eq!(s.vowel_count(), 2);
    }

    #[test]
    fn no_vowel() {
        let s = TurkishSequence::new("3");
        assert!(s.last_vowel().is_none());
        assert!(!s.has_vowel());
        assert!(s.last_char().is_some_and(|c| c.letter().is_undefined()));
    }

    #[test]
    fn append_recomputes_last_vowel() {
        let s = TurkishSequence::new("ev").append_str("ler");
        assert_eq!(s.as_str(), "evler");
        assert_eq!(s.last_vowel().map(TurkishChar::char_value), Some('e'));
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn length_counts_characters() {
        let s = TurkishSequence::new("ağaç");
        assert_eq!(s.len(), 4);
        assert_eq!(s.subsequence(1, 3).as_str(), "ğa");
        assert_eq!(s.suffix_from(2).as_str(), "aç");
    }

    #[test]
    fn blank_and_punctuation() {
        assert!(TurkishSequence::new("").is_blank());
        assert!(TurkishSequence::new("  ").is_blank());
        assert!(TurkishSequence::new("'").has_no_alphanumeric());
        assert!(!TurkishSequence::new("'ya").has_no_alphanumeric());
    }

    #[test]
    fn replace_last_char() {
        let s = TurkishSequence::new("armut");
        let v = s.with_last_char('d');
        assert_eq!(v.as_str(), "armud");
        assert_eq!(s.as_str(), "armut");
    }

    #[test]
    fn char_equality_by_value() {
        assert_eq!(TurkishChar::new('a'), TurkishChar::new('a'));
        assert_ne!(TurkishChar::new('a'), TurkishChar::new('A'));
    }

    proptest! {
        #[test]
        fn length_matches_chars(s in "[a-zçğıöşü' ]{0,12}") {
            let seq = TurkishSequence::new(&s);
            prop_assert_eq!(seq.len(), s.chars().count());
            prop_assert_eq!(seq.chars().len(), seq.len());
        }

        #[test]
        fn split_and_append_round_trips(s in "[a-zçğıöşü]{0,12}", cut in 0usize..13) {
            let seq = TurkishSequence::new(&s);
            let cut = cut.min(seq.len());
            let joined = seq.subsequence(0, cut).append(&seq.suffix_from(cut));
            prop_assert_eq!(joined.as_str(), seq.as_str());
            prop_assert_eq!(
                joined.last_vowel().map(TurkishChar::char_value),
                seq.last_vowel().map(TurkishChar::char_value)
            );
        }
    }
}
