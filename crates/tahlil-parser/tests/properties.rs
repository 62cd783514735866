//! Invariants every parse of the bundled parser holds.

use std::sync::OnceLock;

use hashbrown::HashSet;
use proptest::prelude::*;
use tahlil_lexicon::LexiconOptions;
use tahlil_parser::{ContextlessParser, MorphemeContainer, MorphologicParser, ParserOptions};

const WORDS: &[&str] = &[
    "kapıya", "armudunu", "kitapçı", "kitabı", "evlerde", "evlerimizden", "geliyor", "gelmez",
    "arıyor", "yıkıyor", "atıyor", "diyor", "yiyecek", "bana", "onunla", "sizinle", "3'ü",
    "1984'te", "Ankara'ya", "Ankara", "güzellik", "gözlük", "okullu", "arabasız", "çocuklar",
    "yapılır", "gelecekler", "okudum", "yazmalı", "koşarak", "bakıp", "öğretmendi", "öğrenciymiş",
    "renginden", "saate", "ağzı", "oğlu", "hakkı", ".", "?!", "xyzzy",
];

fn parser() -> &'static ContextlessParser {
    static PARSER: OnceLock<ContextlessParser> = OnceLock::new();
    PARSER.get_or_init(|| {
        ContextlessParser::bundled(&LexiconOptions::default(), ParserOptions::default()).unwrap()
    })
}

/// Root surface followed by every applied suffix, in order.
fn concatenated(parse: &MorphemeContainer) -> String {
    let mut out = parse.root().as_str().to_string();
    for t in parse.transitions() {
        out.push_str(t.application.applied.as_str());
    }
    out
}

#[test]
fn every_word_parses_without_error() {
    for word in WORDS {
        assert!(parser().parse(word).is_ok(), "{word}");
    }
}

#[test]
fn results_consume_the_whole_word() {
    let p = parser();
    for word in WORDS {
        for parse in p.parse(word).unwrap() {
            assert!(parse.remaining().is_empty(), "{word}");
            assert!(p.graph().state(parse.last_state()).is_terminal(), "{word}");
            assert_eq!(parse.surface().as_str(), *word);
        }
    }
}

#[test]
fn no_group_repeats_within_a_derivation() {
    let p = parser();
    for word in WORDS {
        for parse in p.parse(word).unwrap() {
            let mut seen = HashSet::new();
            for t in parse.transitions() {
                if t.derivational {
                    seen.clear();
                }
                if let Some(group) = p.graph().suffix(t.application.suffix).group {
                    assert!(seen.insert(group), "{word}: group repeated");
                }
            }
        }
    }
}

#[test]
fn non_repeatable_suffixes_appear_once_per_derivation() {
    let p = parser();
    for word in WORDS {
        for parse in p.parse(word).unwrap() {
            let mut seen = HashSet::new();
            for t in parse.transitions() {
                if t.derivational {
                    seen.clear();
                }
                let suffix = p.graph().suffix(t.application.suffix);
                if !suffix.allow_repetition {
                    assert!(
                        seen.insert(t.application.suffix),
                        "{word}: {} repeated",
                        suffix.name
                    );
                }
            }
        }
    }
}

#[test]
fn known_words_have_parses() {
    let p = parser();
    let words = [
        "kapıya", "kitabı", "evlerimizden", "güzellik", "yiyecek", "sizinle", "1984'te", "yıkıyor",
        "atıyor",
    ];
    for word in words {
        assert!(!p.parse(word).unwrap().is_empty(), "{word}");
    }
}

proptest! {
    #[test]
    fn root_and_suffixes_spell_the_word(word in prop::sample::select(WORDS)) {
        for parse in parser().parse(word).unwrap() {
            prop_assert_eq!(concatenated(&parse), word);
        }
    }

    #[test]
    fn parsing_is_deterministic(word in prop::sample::select(WORDS)) {
        let p = parser();
        let a = p.parse(word).unwrap().len();
        let b = p.parse(word).unwrap().len();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn arbitrary_lowercase_input_never_errors(word in "[a-zçğıöşü]{0,12}") {
        prop_assert!(parser().parse(&word).is_ok());
    }
}
