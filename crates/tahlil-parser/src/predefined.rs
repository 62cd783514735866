// Predefined paths.
//
// Irregular roots are not parsed from scratch. Each one carries a fixed set
// of partial parses built ahead of time; the parser re-anchors those that
// the input starts with and expands them like any other candidate. The
// personal and demonstrative pronouns (`bana`, `onu`) and the `di`/`yi`
// stems of `demek` and `yemek` are handled this way.

use hashbrown::HashMap;
use tahlil_core::alphabet::devoice_char;
use tahlil_core::{PhoneticExpectation, PrimaryPos, Root, TurkishSequence};
use tahlil_lexicon::RootMap;
use tracing::debug;

use crate::container::MorphemeContainer;
use crate::error::GrammarError;
use crate::graph::SuffixGraph;
use crate::suffix::{FormApplication, StateId};

/// One step of a path: the suffix form taken, what it spells and where it
/// leads.
#[derive(Debug, Clone, Copy)]
pub struct PathStep {
    pub suffix: &'static str,
    pub template: &'static str,
    pub applied: &'static str,
    pub target: &'static str,
    /// `applied` ends in a voiced consonant that the template spells
    /// voiceless (`yeceğ` for `+yAcAk`); the next form has to start with a
    /// vowel.
    pub voiced: bool,
}

const fn step(
    suffix: &'static str,
    template: &'static str,
    applied: &'static str,
    target: &'static str,
) -> PathStep {
    PathStep {
        suffix,
        template,
        applied,
        target,
        voiced: false,
    }
}

const fn voiced(
    suffix: &'static str,
    template: &'static str,
    applied: &'static str,
    target: &'static str,
) -> PathStep {
    PathStep {
        voiced: true,
        ..step(suffix, template, applied, target)
    }
}

/// Paths for the roots spelled `surface` of the lexeme with `lemma_root`
/// and `pos`.
#[derive(Debug, Clone)]
pub struct PathSpec {
    pub lemma_root: &'static str,
    pub pos: PrimaryPos,
    pub surface: &'static str,
    pub paths: Vec<Vec<PathStep>>,
}

#[derive(Debug, Clone, Default)]
pub struct PredefinedPaths {
    paths: HashMap<Root, Vec<MorphemeContainer>>,
}

impl PredefinedPaths {
    /// Build `specs` for the roots present in `roots`. Specs whose root is
    /// missing from the map are skipped; unknown suffixes, forms or states
    /// are errors.
    pub fn build(
        graph: &SuffixGraph,
        roots: &RootMap,
        specs: &[PathSpec],
    ) -> Result<Self, GrammarError> {
        let mut paths: HashMap<Root, Vec<MorphemeContainer>> = HashMap::new();
        for spec in specs {
            let matching = roots.get(spec.surface).iter().filter(|r| {
                r.lexeme().lemma_root() == spec.lemma_root && r.lexeme().primary_pos() == spec.pos
            });
            for root in matching {
                let state = graph.root_state(root)?;
                for steps in &spec.paths {
                    let container = build_path(graph, root, state, steps)?;
                    paths.entry(root.clone()).or_default().push(container);
                }
            }
        }
        debug!(
            roots = paths.len(),
            paths = paths.values().map(Vec::len).sum::<usize>(),
            "predefined paths built"
        );
        Ok(Self { paths })
    }

    /// Paths for the bundled grammar.
    pub fn turkish(graph: &SuffixGraph, roots: &RootMap) -> Result<Self, GrammarError> {
        Self::build(graph, roots, &turkish_specs())
    }

    pub fn has_paths(&self, root: &Root) -> bool {
        self.paths.contains_key(root)
    }

    pub fn paths(&self, root: &Root) -> &[MorphemeContainer] {
        self.paths.get(root).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of roots with paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn build_path(
    graph: &SuffixGraph,
    root: &Root,
    state: StateId,
    steps: &[PathStep],
) -> Result<MorphemeContainer, GrammarError> {
    let mut container = MorphemeContainer::new(root.clone(), state, TurkishSequence::empty());
    for step in steps {
        let suffix = graph.suffix_id(step.suffix)?;
        let form = graph.find_form(suffix, step.template)?;
        let target = graph.state_id(step.target)?;
        let applied = TurkishSequence::new(step.applied);
        let (fitting, expectation) = if step.voiced {
            let devoiced = applied
                .last_char()
                .and_then(|c| devoice_char(c.char_value()))
                .map_or_else(|| applied.clone(), |c| applied.with_last_char(c));
            (devoiced, Some(PhoneticExpectation::VowelStart))
        } else {
            (applied.clone(), None)
        };
        container.add_transition(
            graph,
            FormApplication {
                form,
                suffix,
                applied,
                fitting,
                expectation,
            },
            target,
        );
    }
    Ok(container)
}

// ---------------------------------------------------------------------------
// Bundled paths
// ---------------------------------------------------------------------------

const PRON_AGR: &str = "PRONOUN_WITH_AGREEMENT";
const PRON_POSS: &str = "PRONOUN_WITH_POSSESSION";
const PRON_CASE: &str = "PRONOUN_WITH_CASE";

/// Agreement, no possession, then each case in `cases`.
fn pronoun_cases(
    agreement: &'static str,
    cases: &[(&'static str, &'static str, &'static str)],
) -> Vec<Vec<PathStep>> {
    cases
        .iter()
        .map(|&(suffix, template, applied)| {
            vec![
                step(agreement, "", "", PRON_AGR),
                step("Pron_Pnon", "", "", PRON_POSS),
                step(suffix, template, applied, PRON_CASE),
            ]
        })
        .collect()
}

fn pronoun(surface: &'static str, lemma_root: &'static str, paths: Vec<Vec<PathStep>>) -> PathSpec {
    PathSpec {
        lemma_root,
        pos: PrimaryPos::Pronoun,
        surface,
        paths,
    }
}

/// `on`, `bun`, `şun`: every case but the nominative, and the plural.
fn demonstrative_stem(surface: &'static str, lemma_root: &'static str) -> PathSpec {
    let mut paths = pronoun_cases(
        "Pron_A3sg",
        &[
            ("Pron_Acc", "+yI", "u"),
            ("Pron_Dat", "+yA", "a"),
            ("Pron_Loc", "dA", "da"),
            ("Pron_Abl", "dAn", "dan"),
            ("Pron_Gen", "+nIn", "un"),
            ("Pron_Ins", "unla", "unla"),
        ],
    );
    paths.push(vec![step("Pron_A3pl", "lAr", "lar", PRON_AGR)]);
    pronoun(surface, lemma_root, paths)
}

fn verb_stem(surface: &'static str, lemma_root: &'static str) -> PathSpec {
    const POL: &str = "VERB_WITH_POLARITY";
    const TENSE: &str = "VERB_WITH_TENSE";
    const DERIV: &str = "VERB_POLARITY_DERIV";
    let pos = || step("Pos", "", "", POL);
    let deriv = || step("Verb_Polarity_Deriv_Free", "", "", DERIV);
    let paths = vec![
        vec![pos(), step("Prog", "+Iyor", "yor", TENSE)],
        vec![pos(), step("Fut", "+yAcAk", "yecek", TENSE)],
        vec![pos(), voiced("Fut", "+yAcAk", "yeceğ", TENSE)],
        vec![pos(), step("Opt", "+yA", "ye", TENSE)],
        vec![pos(), deriv(), step("PresPart", "+yAn", "yen", "ADJECTIVE_ROOT")],
        vec![pos(), deriv(), step("Inf3", "+yIş", "yiş", "NOUN_ROOT")],
        vec![pos(), deriv(), step("AfterDoingSo", "+yIp", "yip", "ADVERB_ROOT")],
        vec![pos(), deriv(), step("ByDoingSo", "+yArAk", "yerek", "ADVERB_ROOT")],
    ];
    PathSpec {
        lemma_root,
        pos: PrimaryPos::Verb,
        surface,
        paths,
    }
}

fn turkish_specs() -> Vec<PathSpec> {
    vec![
        pronoun(
            "ben",
            "ben",
            pronoun_cases(
                "Pron_A1sg",
                &[
                    ("Pron_Nom", "", ""),
                    ("Pron_Acc", "+yI", "i"),
                    ("Pron_Loc", "dA", "de"),
                    ("Pron_Abl", "dAn", "den"),
                    ("Pron_Gen", "im", "im"),
                    ("Pron_Ins", "imle", "imle"),
                ],
            ),
        ),
        pronoun("ban", "ben", pronoun_cases("Pron_A1sg", &[("Pron_Dat", "+yA", "a")])),
        pronoun(
            "sen",
            "sen",
            pronoun_cases(
                "Pron_A2sg",
                &[
                    ("Pron_Nom", "", ""),
                    ("Pron_Acc", "+yI", "i"),
                    ("Pron_Loc", "dA", "de"),
                    ("Pron_Abl", "dAn", "den"),
                    ("Pron_Gen", "+nIn", "in"),
                    ("Pron_Ins", "inle", "inle"),
                ],
            ),
        ),
        pronoun("san", "sen", pronoun_cases("Pron_A2sg", &[("Pron_Dat", "+yA", "a")])),
        pronoun(
            "biz",
            "biz",
            pronoun_cases(
                "Pron_A1pl",
                &[
                    ("Pron_Nom", "", ""),
                    ("Pron_Acc", "+yI", "i"),
                    ("Pron_Dat", "+yA", "e"),
                    ("Pron_Loc", "dA", "de"),
                    ("Pron_Abl", "dAn", "den"),
                    ("Pron_Gen", "im", "im"),
                    ("Pron_Ins", "imle", "imle"),
                ],
            ),
        ),
        pronoun(
            "siz",
            "siz",
            pronoun_cases(
                "Pron_A2pl",
                &[
                    ("Pron_Nom", "", ""),
                    ("Pron_Acc", "+yI", "i"),
                    ("Pron_Dat", "+yA", "e"),
                    ("Pron_Loc", "dA", "de"),
                    ("Pron_Abl", "dAn", "den"),
                    ("Pron_Gen", "+nIn", "in"),
                    ("Pron_Ins", "inle", "inle"),
                ],
            ),
        ),
        pronoun("o", "o", pronoun_cases("Pron_A3sg", &[("Pron_Nom", "", "")])),
        demonstrative_stem("on", "o"),
        pronoun("bu", "bu", pronoun_cases("Pron_A3sg", &[("Pron_Nom", "", "")])),
        demonstrative_stem("bun", "bu"),
        pronoun("şu", "şu", pronoun_cases("Pron_A3sg", &[("Pron_Nom", "", "")])),
        demonstrative_stem("şun", "şu"),
        verb_stem("di", "de"),
        verb_stem("yi", "ye"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tahlil_lexicon::{LexiconOptions, RootMap, parse_dictionary};

    use crate::graph::turkish;

    fn root_map(text: &str) -> RootMap {
        RootMap::from_lexemes(parse_dictionary(text).unwrap(), &LexiconOptions::default()).unwrap()
    }

    #[test]
    fn builds_for_present_roots_only() {
        let graph = turkish::grammar().unwrap();
        let roots = root_map("ben [P:Pron,Pers; A:RootChange]\nkapı\n");
        let paths = PredefinedPaths::turkish(&graph, &roots).unwrap();
        assert_eq!(paths.len(), 2);

        let ben = &roots.get("ben")[0];
        assert!(paths.has_paths(ben));
        assert_eq!(paths.paths(ben).len(), 6);
        assert!(!paths.has_paths(&roots.get("kapı")[0]));
        assert!(paths.paths(&roots.get("kapı")[0]).is_empty());
    }

    #[test]
    fn paths_spell_their_surface() {
        let graph = turkish::grammar().unwrap();
        let roots = root_map("ben [P:Pron,Pers; A:RootChange]\n");
        let paths = PredefinedPaths::turkish(&graph, &roots).unwrap();
        let ban = roots
            .get("ban")
            .iter()
            .find(|r| paths.has_paths(r))
            .unwrap();
        let bana = &paths.paths(ban)[0];
        assert_eq!(bana.surface().as_str(), "bana");
        assert_eq!(bana.last_state(), graph.state_id(PRON_CASE).unwrap());
        assert_eq!(bana.transitions().len(), 3);

        let rebased = bana.rebase(&TurkishSequence::new("banadır")).unwrap();
        assert_eq!(rebased.remaining().as_str(), "dır");
        assert!(bana.rebase(&TurkishSequence::new("beni")).is_none());
    }

    #[test]
    fn voiced_step_expects_vowel() {
        let graph = turkish::grammar().unwrap();
        let roots = root_map("demek [A:RootChange]\n");
        let paths = PredefinedPaths::turkish(&graph, &roots).unwrap();
        let di = roots.get("di").iter().find(|r| paths.has_paths(r)).unwrap();
        let voiced = paths
            .paths(di)
            .iter()
            .find(|c| c.surface().as_str() == "diyeceğ")
            .unwrap();
        let fut = voiced.last_transition().unwrap();
        assert_eq!(fut.application.fitting.as_str(), "yecek");
        assert!(
            voiced
                .phonetic_expectations()
                .contains(PhoneticExpectation::VowelStart)
        );
        // the plain `de` root is parsed from scratch
        assert!(!paths.has_paths(&roots.get("de")[0]));
    }

    #[test]
    fn unknown_names_are_errors() {
        let graph = turkish::grammar().unwrap();
        let roots = root_map("ben [P:Pron,Pers; A:RootChange]\n");
        let spec = PathSpec {
            lemma_root: "ben",
            pos: PrimaryPos::Pronoun,
            surface: "ben",
            paths: vec![vec![step("Pron_A1sg", "", "", "NO_SUCH_STATE")]],
        };
        assert_eq!(
            PredefinedPaths::build(&graph, &roots, &[spec]).unwrap_err(),
            GrammarError::UnknownState("NO_SUCH_STATE".into())
        );
    }
}
