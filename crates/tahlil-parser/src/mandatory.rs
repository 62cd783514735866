// Mandatory transitions.
//
// Some fresh candidates may only continue one way, whatever the input says.
// A rule names the condition on the candidate and the fixed list of forms it
// must take. Rules are resolved against the suffix graph once, when the
// parser is built.

use tahlil_core::LexemeAttribute;
use tracing::trace;

use crate::applier::{Rejection, SuffixApplier};
use crate::container::MorphemeContainer;
use crate::error::{GrammarError, ParseError};
use crate::graph::SuffixGraph;
use crate::suffix::{Condition, FormId, StateId};

/// A forced step, by name.
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub suffix: &'static str,
    pub template: &'static str,
    pub target: &'static str,
}

/// A rule before it is resolved against a grammar.
pub struct RuleSpec {
    pub name: &'static str,
    /// State the candidate has to sit in.
    pub state: &'static str,
    pub condition: Condition,
    pub steps: Vec<StepSpec>,
}

#[derive(Debug, Clone)]
struct Step {
    form: FormId,
    target: StateId,
    suffix: &'static str,
}

#[derive(Debug, Clone)]
struct Rule {
    name: &'static str,
    state: StateId,
    condition: Condition,
    steps: Vec<Step>,
}

#[derive(Debug, Clone, Default)]
pub struct MandatoryTransitions {
    rules: Vec<Rule>,
}

impl MandatoryTransitions {
    /// Resolve `specs` against `graph`. Unknown names are configuration
    /// errors.
    pub fn resolve(graph: &SuffixGraph, specs: Vec<RuleSpec>) -> Result<Self, GrammarError> {
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            let mut steps = Vec::with_capacity(spec.steps.len());
            for step in &spec.steps {
                let suffix = graph.suffix_id(step.suffix)?;
                steps.push(Step {
                    form: graph.find_form(suffix, step.template)?,
                    target: graph.state_id(step.target)?,
                    suffix: step.suffix,
                });
            }
            rules.push(Rule {
                name: spec.name,
                state: graph.state_id(spec.state)?,
                condition: spec.condition,
                steps,
            });
        }
        Ok(Self { rules })
    }

    /// The rules shipped with the bundled grammar.
    pub fn turkish(graph: &SuffixGraph) -> Result<Self, GrammarError> {
        Self::resolve(graph, turkish_rules())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every candidate through the first matching rule. Candidates no
    /// rule matches pass through unchanged; candidates whose forced steps
    /// do not fit the input are dropped.
    pub fn apply(
        &self,
        graph: &SuffixGraph,
        word: &str,
        candidates: Vec<MorphemeContainer>,
    ) -> Result<Vec<MorphemeContainer>, ParseError> {
        let applier = SuffixApplier::new(graph);
        let mut out = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let rule = self.rules.iter().find(|r| {
                r.state == candidate.last_state() && r.condition.is_satisfied_by(&candidate)
            });
            let Some(rule) = rule else {
                out.push(candidate);
                continue;
            };
            if let Some(forced) = rule.force(&applier, word, candidate)? {
                out.push(forced);
            }
        }
        Ok(out)
    }
}

impl Rule {
    fn force(
        &self,
        applier: &SuffixApplier<'_>,
        word: &str,
        mut candidate: MorphemeContainer,
    ) -> Result<Option<MorphemeContainer>, ParseError> {
        for step in &self.steps {
            match applier.try_form(&candidate, step.form, step.target) {
                Ok(next) => candidate = next,
                Err(Rejection::PrefixMismatch) => {
                    trace!(
                        word,
                        rule = self.name,
                        suffix = step.suffix,
                        "forced step does not fit input"
                    );
                    return Ok(None);
                }
                Err(rejection) => {
                    return Err(ParseError::MandatoryTransition {
                        word: word.to_string(),
                        suffix: step.suffix.to_string(),
                        rejection,
                    });
                }
            }
        }
        Ok(Some(candidate))
    }
}

/// A progressive-vowel-drop verb whose root already lost its vowel (`ar`
/// of `aramak`) can only be followed by the progressive: `arıyor`.
fn turkish_rules() -> Vec<RuleSpec> {
    let dropped_vowel = Condition::new(|c| {
        let root = c.root();
        let lexeme = root.lexeme();
        lexeme.has_attribute(LexemeAttribute::ProgressiveVowelDrop)
            && root.as_str() != lexeme.lemma_root()
            && !c.has_transitions()
    });
    vec![RuleSpec {
        name: "progressive_vowel_drop",
        state: "VERB_ROOT",
        condition: dropped_vowel,
        steps: vec![
            StepSpec {
                suffix: "Pos",
                template: "",
                target: "VERB_WITH_POLARITY",
            },
            StepSpec {
                suffix: "Prog",
                template: "+Iyor",
                target: "VERB_WITH_TENSE",
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tahlil_core::phonetics::attributes_of;
    use tahlil_core::{
        Lexeme, PhoneticExpectation, PhoneticExpectationSet, PrimaryPos, Root, TurkishSequence,
    };

    use crate::graph::turkish;

    fn ara_root(surface: &str) -> Root {
        let lexeme = Arc::new(Lexeme::new(
            "aramak",
            "ara",
            PrimaryPos::Verb,
            None,
            [LexemeAttribute::ProgressiveVowelDrop, LexemeAttribute::AoristA]
                .into_iter()
                .collect(),
        ));
        let seq = TurkishSequence::new(surface);
        let attributes = attributes_of(&seq);
        Root::immutable(
            seq,
            lexeme,
            attributes,
            PhoneticExpectationSet::of(&[PhoneticExpectation::VowelStart]),
        )
    }

    fn candidate(graph: &SuffixGraph, root: Root, input: &str) -> MorphemeContainer {
        let state = graph.root_state(&root).unwrap();
        let remaining = TurkishSequence::new(input).suffix_from(root.sequence().len());
        MorphemeContainer::new(root, state, remaining)
    }

    #[test]
    fn forces_progressive_on_dropped_root() {
        let graph = turkish::grammar().unwrap();
        let mandatory = MandatoryTransitions::turkish(&graph).unwrap();
        assert_eq!(mandatory.len(), 1);

        let c = candidate(&graph, ara_root("ar"), "arıyor");
        let out = mandatory.apply(&graph, "arıyor", vec![c]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].surface().as_str(), "arıyor");
        assert_eq!(out[0].transitions().len(), 2);
        assert!(out[0].remaining().is_empty());
    }

    #[test]
    fn dropped_stem_keeps_its_stop() {
        let graph = turkish::grammar().unwrap();
        let mandatory = MandatoryTransitions::turkish(&graph).unwrap();
        let lexeme = Arc::new(Lexeme::new(
            "yıkamak",
            "yıka",
            PrimaryPos::Verb,
            None,
            [
                LexemeAttribute::ProgressiveVowelDrop,
                LexemeAttribute::AoristI,
                LexemeAttribute::NoVoicing,
            ]
            .into_iter()
            .collect(),
        ));
        let seq = TurkishSequence::new("yık");
        let attributes = attributes_of(&seq);
        let root = Root::immutable(
            seq,
            lexeme,
            attributes,
            PhoneticExpectationSet::of(&[PhoneticExpectation::VowelStart]),
        );

        let c = candidate(&graph, root, "yıkıyor");
        let out = mandatory.apply(&graph, "yıkıyor", vec![c]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].surface().as_str(), "yıkıyor");
        assert!(out[0].remaining().is_empty());
    }

    #[test]
    fn mismatch_drops_candidate() {
        let graph = turkish::grammar().unwrap();
        let mandatory = MandatoryTransitions::turkish(&graph).unwrap();
        let c = candidate(&graph, ara_root("ar"), "arar");
        assert!(mandatory.apply(&graph, "arar", vec![c]).unwrap().is_empty());
    }

    #[test]
    fn unmatched_candidates_pass_through() {
        let graph = turkish::grammar().unwrap();
        let mandatory = MandatoryTransitions::turkish(&graph).unwrap();
        let c = candidate(&graph, ara_root("ara"), "arar");
        let out = mandatory.apply(&graph, "arar", vec![c]).unwrap();
        assert_eq!(out.len(), 1);
        assert!(!out[0].has_transitions());
    }

    #[test]
    fn other_rejections_are_errors() {
        let graph = turkish::grammar().unwrap();
        let never = RuleSpec {
            name: "bad",
            state: "VERB_ROOT",
            condition: Condition::new(|_| true),
            steps: vec![
                StepSpec {
                    suffix: "Pos",
                    template: "",
                    target: "VERB_WITH_POLARITY",
                },
                StepSpec {
                    suffix: "Neg",
                    template: "mA",
                    target: "VERB_WITH_POLARITY",
                },
            ],
        };
        let mandatory = MandatoryTransitions::resolve(&graph, vec![never]).unwrap();
        let c = candidate(&graph, ara_root("ara"), "arama");
        let err = mandatory.apply(&graph, "arama", vec![c]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MandatoryTransition {
                rejection: Rejection::GroupExclusivity,
                ..
            }
        ));
        assert_eq!(err.word(), "arama");
    }

    #[test]
    fn unknown_names_fail_to_resolve() {
        let graph = turkish::grammar().unwrap();
        let spec = RuleSpec {
            name: "typo",
            state: "VERB_ROOT",
            condition: Condition::new(|_| true),
            steps: vec![StepSpec {
                suffix: "Prog",
                template: "Iyor",
                target: "VERB_WITH_TENSE",
            }],
        };
        assert!(matches!(
            MandatoryTransitions::resolve(&graph, vec![spec]),
            Err(GrammarError::UnknownForm { .. })
        ));
    }
}
