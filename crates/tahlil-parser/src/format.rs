// Parse rendering.
//
// Full form:         kapı(kapı)+Noun+A3sg+Pnon+Dat(+yA[ya])
// Without surfaces:  kapı+Noun+A3sg+Pnon+Dat
//
// Free transitions print nothing. A transition leaving a derivational state
// first prints the part of speech it derives into. Template and resolved
// text are shown only when the resolved text has a letter or digit in it,
// so zero suffixes and the apostrophe print as bare names.

use std::fmt::Write;

use serde::Serialize;

use crate::container::{MorphemeContainer, SuffixTransition};
use crate::graph::SuffixGraph;

/// `root(lemmaRoot)+Pos[+Secondary]+Suffix(template[applied])...`
pub fn format_parse(graph: &SuffixGraph, parse: &MorphemeContainer) -> String {
    let root = parse.root();
    let mut out = format!("{}({})", root.as_str(), root.lexeme().lemma_root());
    push_pos(&mut out, parse);
    for t in parse.transitions() {
        push_transition(&mut out, graph, t, true);
    }
    out
}

/// `lemmaRoot+Pos[+Secondary]+Suffix...`
pub fn format_without_surface(graph: &SuffixGraph, parse: &MorphemeContainer) -> String {
    let mut out = parse.root().lexeme().lemma_root().to_string();
    push_pos(&mut out, parse);
    for t in parse.transitions() {
        push_transition(&mut out, graph, t, false);
    }
    out
}

fn push_pos(out: &mut String, parse: &MorphemeContainer) {
    let lexeme = parse.root().lexeme();
    out.push('+');
    out.push_str(lexeme.primary_pos().tag());
    if let Some(secondary) = lexeme.secondary_pos() {
        out.push('+');
        out.push_str(secondary.tag());
    }
}

fn push_transition(out: &mut String, graph: &SuffixGraph, t: &SuffixTransition, surfaces: bool) {
    if t.derivational {
        out.push('+');
        out.push_str(graph.state(t.to).pos.tag());
    }
    let suffix = graph.suffix(t.application.suffix);
    let Some(pretty) = suffix.pretty_name.as_deref() else {
        return;
    };
    out.push('+');
    out.push_str(pretty);
    let applied = &t.application.applied;
    if surfaces && !applied.has_no_alphanumeric() {
        let template = graph.form(t.application.form).template();
        // Writing into a String cannot fail.
        let _ = write!(out, "({}[{}])", template, applied.as_str());
    }
}

/// Flat, serializable view of one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub surface: String,
    pub root: String,
    pub lemma: String,
    pub lemma_root: String,
    pub pos: &'static str,
    pub formatted: String,
    /// Pretty names of the non-free suffixes, in order.
    pub suffixes: Vec<String>,
}

impl ParseSummary {
    pub fn new(graph: &SuffixGraph, parse: &MorphemeContainer) -> Self {
        let root = parse.root();
        let lexeme = root.lexeme();
        Self {
            surface: parse.surface().as_str().to_string(),
            root: root.as_str().to_string(),
            lemma: lexeme.lemma().to_string(),
            lemma_root: lexeme.lemma_root().to_string(),
            pos: lexeme.primary_pos().tag(),
            formatted: format_parse(graph, parse),
            suffixes: parse
                .transitions()
                .iter()
                .filter_map(|t| graph.suffix(t.application.suffix).pretty_name.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tahlil_core::phonetics::attributes_of;
    use tahlil_core::{
        Lexeme, LexemeAttributeSet, PhoneticExpectationSet, PrimaryPos, Root, TurkishSequence,
    };

    use crate::applier::SuffixApplier;
    use crate::graph::turkish;

    fn noun(text: &str) -> Root {
        let lexeme = Arc::new(Lexeme::new(
            text,
            text,
            PrimaryPos::Noun,
            None,
            LexemeAttributeSet::empty(),
        ));
        let seq = TurkishSequence::new(text);
        let attributes = attributes_of(&seq);
        Root::immutable(seq, lexeme, attributes, PhoneticExpectationSet::empty())
    }

    /// Walk `steps` (suffix name, template, target state) from the root.
    fn walk(
        graph: &SuffixGraph,
        root: Root,
        input: &str,
        steps: &[(&str, &str, &str)],
    ) -> MorphemeContainer {
        let applier = SuffixApplier::new(graph);
        let remaining = TurkishSequence::new(input).suffix_from(root.sequence().len());
        let state = graph.root_state(&root).unwrap();
        let mut c = MorphemeContainer::new(root, state, remaining);
        for &(suffix, template, target) in steps {
            let suffix = graph.suffix_id(suffix).unwrap();
            let form = graph.find_form(suffix, template).unwrap();
            c = applier
                .try_form(&c, form, graph.state_id(target).unwrap())
                .unwrap();
        }
        c
    }

    fn kapiya(graph: &SuffixGraph) -> MorphemeContainer {
        walk(
            graph,
            noun("kapı"),
            "kapıya",
            &[
                ("A3sg", "", "NOUN_WITH_AGREEMENT"),
                ("Pnon", "", "NOUN_WITH_POSSESSION"),
                ("Dat", "+yA", "NOUN_WITH_CASE"),
                ("Noun_Free", "", "NOUN_TERMINAL"),
            ],
        )
    }

    #[test]
    fn full_form() {
        let g = turkish::grammar().unwrap();
        assert_eq!(
            format_parse(&g, &kapiya(&g)),
            "kapı(kapı)+Noun+A3sg+Pnon+Dat(+yA[ya])"
        );
    }

    #[test]
    fn surface_free_form() {
        let g = turkish::grammar().unwrap();
        assert_eq!(
            format_without_surface(&g, &kapiya(&g)),
            "kapı+Noun+A3sg+Pnon+Dat"
        );
    }

    #[test]
    fn derivation_prints_target_pos() {
        let g = turkish::grammar().unwrap();
        let c = walk(
            &g,
            noun("kitap"),
            "kitapçı",
            &[
                ("A3sg", "", "NOUN_WITH_AGREEMENT"),
                ("Pnon", "", "NOUN_WITH_POSSESSION"),
                ("Nom_Deriv", "", "NOUN_NOM_DERIV"),
                ("Agt", "cI", "NOUN_ROOT"),
            ],
        );
        assert_eq!(
            format_parse(&g, &c),
            "kitap(kitap)+Noun+A3sg+Pnon+Nom+Noun+Agt(cI[çı])"
        );
    }

    #[test]
    fn summary_lists_named_suffixes() {
        let g = turkish::grammar().unwrap();
        let summary = ParseSummary::new(&g, &kapiya(&g));
        assert_eq!(summary.surface, "kapıya");
        assert_eq!(summary.pos, "Noun");
        assert_eq!(summary.suffixes, vec!["A3sg", "Pnon", "Dat"]);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["formatted"], "kapı(kapı)+Noun+A3sg+Pnon+Dat(+yA[ya])");
        assert_eq!(json["lemma_root"], "kapı");
    }
}
