//! Parses against the bundled dictionary and grammar.

use std::sync::OnceLock;

use tahlil_lexicon::LexiconOptions;
use tahlil_parser::{
    CachingParser, ContextlessParser, MorphologicParser, ParseSummary, ParserOptions,
    format_parse, format_without_surface, parse_batch,
};

fn parser() -> &'static ContextlessParser {
    static PARSER: OnceLock<ContextlessParser> = OnceLock::new();
    PARSER.get_or_init(|| {
        ContextlessParser::bundled(&LexiconOptions::default(), ParserOptions::default()).unwrap()
    })
}

fn parses(word: &str) -> Vec<String> {
    let p = parser();
    let mut out: Vec<String> = p
        .parse(word)
        .unwrap()
        .iter()
        .map(|c| format_parse(p.graph(), c))
        .collect();
    out.sort();
    out
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

#[test]
fn dative_takes_buffer_y_after_vowel() {
    assert_eq!(
        parses("kapıya"),
        vec!["kapı(kapı)+Noun+A3sg+Pnon+Dat(+yA[ya])"]
    );
}

#[test]
fn voiced_root_before_vowel() {
    assert_eq!(
        parses("armudunu"),
        vec![
            "armud(armut)+Noun+A3sg+P2sg(+In[un])+Acc(+yI[u])",
            "armud(armut)+Noun+A3sg+P3sg(+sI[u])+Acc(nI[nu])",
        ]
    );
}

#[test]
fn unvoiced_root_does_not_take_vowel() {
    assert!(parses("armutunu").is_empty());
    assert!(parses("armutu").is_empty());
}

#[test]
fn agentive_derivation() {
    assert_eq!(
        parses("kitapçı"),
        vec!["kitap(kitap)+Noun+A3sg+Pnon+Nom+Noun+Agt(cI[çı])+A3sg+Pnon+Nom"]
    );
}

#[test]
fn plural_locative() {
    assert_eq!(
        parses("evlerde"),
        vec!["ev(ev)+Noun+A3pl(lAr[ler])+Pnon+Loc(dA[de])"]
    );
}

// ---------------------------------------------------------------------------
// Numerals, proper nouns, punctuation
// ---------------------------------------------------------------------------

#[test]
fn digits_harmonize_with_spelled_out_number() {
    assert_eq!(
        parses("3'ü"),
        vec![
            "3(3)+Num+Digits+Apos+Noun+Zero+A3sg+P3sg(+sI[ü])+Nom",
            "3(3)+Num+Digits+Apos+Noun+Zero+A3sg+Pnon+Acc(+yI[ü])",
        ]
    );
}

#[test]
fn proper_noun_with_apostrophe() {
    assert_eq!(
        parses("Ankara'ya"),
        vec!["Ankara(Ankara)+Noun+Prop+Apos+A3sg+Pnon+Dat(+yA[ya])"]
    );
}

#[test]
fn punctuation_is_a_whole_word() {
    assert_eq!(parses("."), vec![".(.)+Punc"]);
    assert!(parses("kapı.").is_empty());
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

#[test]
fn progressive() {
    assert_eq!(
        parses("geliyor"),
        vec!["gel(gel)+Verb+Pos+Prog(+Iyor[iyor])+A3sg"]
    );
}

#[test]
fn negative_aorist() {
    assert_eq!(
        parses("gelmez"),
        vec!["gel(gel)+Verb+Neg(mA[me])+Aor(z[z])+A3sg"]
    );
}

#[test]
fn dropped_vowel_forces_progressive() {
    assert_eq!(
        parses("arıyor"),
        vec!["ar(ara)+Verb+Pos+Prog(+Iyor[ıyor])+A3sg"]
    );
}

#[test]
fn dropped_vowel_keeps_stem_stop() {
    assert_eq!(
        parses("yıkıyor"),
        vec!["yık(yıka)+Verb+Pos+Prog(+Iyor[ıyor])+A3sg"]
    );
    assert_eq!(
        parses("atıyor"),
        vec!["at(ata)+Verb+Pos+Prog(+Iyor[ıyor])+A3sg"]
    );
    assert!(parses("yığıyor").is_empty());

    let p = parser();
    for word in ["yıkıyor", "atıyor"] {
        for parse in p.parse(word).unwrap() {
            assert_eq!(parse.surface().as_str(), word);
            assert!(parse.remaining().is_empty());
        }
    }
}

#[test]
fn changed_verb_root() {
    assert_eq!(
        parses("diyor"),
        vec!["di(de)+Verb+Pos+Prog(+Iyor[yor])+A3sg"]
    );
}

// ---------------------------------------------------------------------------
// Pronouns
// ---------------------------------------------------------------------------

#[test]
fn changed_pronoun_root() {
    assert_eq!(
        parses("bana"),
        vec!["ban(ben)+Pron+Pers+A1sg+Pnon+Dat(+yA[a])"]
    );
}

#[test]
fn irregular_instrumental() {
    let instrumental = "on(o)+Pron+Pers+A3sg+Pnon+Ins(unla[unla])".to_string();
    assert!(parses("onunla").contains(&instrumental));
}

// ---------------------------------------------------------------------------
// Wrappers and output
// ---------------------------------------------------------------------------

#[test]
fn unknown_word_has_no_parse() {
    assert!(parses("xyzzy").is_empty());
    assert!(parses("").is_empty());
}

#[test]
fn surface_free_rendering() {
    let p = parser();
    let out = p.parse("kapıya").unwrap();
    assert_eq!(
        format_without_surface(p.graph(), &out[0]),
        "kapı+Noun+A3sg+Pnon+Dat"
    );
}

#[test]
fn summary_serializes() {
    let p = parser();
    let out = p.parse("kitapçı").unwrap();
    let summary = ParseSummary::new(p.graph(), &out[0]);
    assert_eq!(summary.root, "kitap");
    assert_eq!(summary.lemma, "kitap");
    let json = serde_json::to_string(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value["suffixes"],
        serde_json::json!(["A3sg", "Pnon", "Nom", "Agt", "A3sg", "Pnon", "Nom"])
    );
}

#[test]
fn cache_returns_equal_results_without_reparsing() {
    let p =
        ContextlessParser::bundled(&LexiconOptions::default(), ParserOptions::default()).unwrap();
    let cache = CachingParser::new(p);
    let render = |word: &str| -> Vec<String> {
        cache
            .parse(word)
            .unwrap()
            .iter()
            .map(|c| format_parse(cache.inner().graph(), c))
            .collect()
    };
    let first = render("armudunu");
    let second = render("armudunu");
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn batch_keeps_words_apart() {
    let words = ["kapıya", "xyzzy", "geliyor", "3'ü"];
    let results = parse_batch(parser(), &words);
    assert_eq!(results.len(), 4);
    for (result, word) in results.iter().zip(words) {
        assert_eq!(result.word, word);
    }
    assert!(results[1].is_unparsable());
    assert_eq!(results[2].result.as_ref().unwrap().len(), 1);
}
