// Suffix applier: the gate every transition passes through.
//
// A transition is judged against a container in a fixed order and the first
// failing gate rejects it. Accepted transitions are applied to a clone; the
// container being extended is never modified.
//
// Two entry points share the gates:
// - `try_edge` takes a form-graph edge whose surface is already resolved.
// - `try_form` takes a bare suffix form and resolves it against the
//   container. Forced transitions and predefined paths use this path.

use tahlil_core::{LexemeAttribute, TurkishSequence};

use crate::container::MorphemeContainer;
use crate::graph::{FormEdge, SuffixGraph};
use crate::suffix::{FormApplication, FormId, StateId, SuffixForm, SuffixId};

/// Why a transition was not taken. These are ordinary dead ends, not
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("suffix group already used since the last derivation")]
    GroupExclusivity,

    #[error("suffix already used and not repeatable")]
    NonRepeatable,

    #[error("precondition not satisfied")]
    Precondition,

    #[error("phonetic expectation not met")]
    PhoneticExpectation,

    #[error("form does not resolve in this phonetic context")]
    PhoneticInapplicable,

    /// A voiceless stop would have to voice before this vowel-initial form.
    #[error("last consonant must voice before this form")]
    Voicing,

    #[error("form does not match the input")]
    PrefixMismatch,

    #[error("postcondition of the previous form not satisfied")]
    Postcondition,

    #[error("post-derivative condition not satisfied")]
    PostDerivativeCondition,
}

#[derive(Debug, Clone, Copy)]
pub struct SuffixApplier<'g> {
    graph: &'g SuffixGraph,
}

impl<'g> SuffixApplier<'g> {
    pub fn new(graph: &'g SuffixGraph) -> Self {
        Self { graph }
    }

    /// Take a resolved form-graph edge.
    pub fn try_edge(
        &self,
        container: &MorphemeContainer,
        edge: &FormEdge,
    ) -> Result<MorphemeContainer, Rejection> {
        let application = &edge.application;
        let form = self.graph.form(application.form);
        self.check_history(container, application.suffix, form)?;

        if let Some(first) = application.applied.first_char() {
            let vowel = first.is_vowel();
            if !expectations_hold(container, &[vowel]) {
                return Err(Rejection::PhoneticExpectation);
            }
            if vowel && must_voice(container) {
                return Err(Rejection::Voicing);
            }
        }

        if !container.remaining().starts_with(&application.applied) {
            return Err(Rejection::PrefixMismatch);
        }

        let mut next = container.clone();
        next.add_transition(self.graph, application.clone(), edge.target);
        self.check_followers(container, &next)?;
        Ok(next)
    }

    /// Resolve `form` against the container and take it into `target`.
    pub fn try_form(
        &self,
        container: &MorphemeContainer,
        form_id: FormId,
        target: StateId,
    ) -> Result<MorphemeContainer, Rejection> {
        let form = self.graph.form(form_id);
        self.check_history(container, form.suffix, form)?;

        // The expectation is judged on the resolved first letter when there
        // is one, otherwise on every way the template can start.
        let attributes = container.phonetic_attributes();
        let applied = form
            .sequence
            .is_applicable(attributes)
            .then(|| TurkishSequence::new(&form.sequence.apply(attributes)));
        let first_is_vowel = match applied.as_ref().and_then(|a| a.first_char()) {
            Some(first) => vec![first.is_vowel()],
            None if form.is_blank() => Vec::new(),
            None => form.sequence.first_letter_options(),
        };
        if !first_is_vowel.is_empty() && !expectations_hold(container, &first_is_vowel) {
            return Err(Rejection::PhoneticExpectation);
        }
        let applied = applied.ok_or(Rejection::PhoneticInapplicable)?;

        // The consumed surface is already a prefix of the input, so a stop
        // that would voice here can never be spelled by it.
        if applied.first_char().is_some_and(|c| c.is_vowel()) && must_voice(container) {
            return Err(Rejection::Voicing);
        }

        if !container.remaining().starts_with(&applied) {
            return Err(Rejection::PrefixMismatch);
        }

        let mut next = container.clone();
        let application = FormApplication {
            form: form_id,
            suffix: form.suffix,
            fitting: applied.clone(),
            applied,
            expectation: None,
        };
        next.add_transition(self.graph, application, target);
        self.check_followers(container, &next)?;
        Ok(next)
    }

    // Gates 1-3: what the container has already taken.
    fn check_history(
        &self,
        container: &MorphemeContainer,
        suffix_id: SuffixId,
        form: &SuffixForm,
    ) -> Result<(), Rejection> {
        let suffix = self.graph.suffix(suffix_id);
        if let Some(group) = suffix.group {
            if container.groups_since_derivation().contains(&group) {
                return Err(Rejection::GroupExclusivity);
            }
        }

        if !suffix.allow_repetition {
            let repeated = container
                .suffixes_since_derivation()
                .any(|s| s == suffix_id)
                || container
                    .last_derivation()
                    .is_some_and(|t| t.application.suffix == suffix_id);
            if repeated {
                return Err(Rejection::NonRepeatable);
            }
        }

        if let Some(condition) = &form.precondition {
            if !condition.is_satisfied_by(container) {
                return Err(Rejection::Precondition);
            }
        }
        Ok(())
    }

    // Gate 8: conditions that look at the transition just added.
    fn check_followers(
        &self,
        previous: &MorphemeContainer,
        next: &MorphemeContainer,
    ) -> Result<(), Rejection> {
        if let Some(last) = previous.last_transition() {
            let form = self.graph.form(last.application.form);
            if let Some(condition) = &form.postcondition {
                if !condition.is_satisfied_by(next) {
                    return Err(Rejection::Postcondition);
                }
            }
        }

        if self.graph.state(previous.last_state()).is_derivational() {
            for transition in previous.transitions_from_derivation() {
                let form = self.graph.form(transition.application.form);
                if let Some(condition) = &form.post_derivative_condition {
                    if !condition.is_satisfied_by(next) {
                        return Err(Rejection::PostDerivativeCondition);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Every pending expectation holds for at least one way the form can start.
fn expectations_hold(container: &MorphemeContainer, first_is_vowel: &[bool]) -> bool {
    let expectations = container.phonetic_expectations();
    if expectations.is_empty() {
        return true;
    }
    first_is_vowel
        .iter()
        .any(|&vowel| expectations.iter().all(|e| e.is_satisfied_by(vowel)))
}

/// The surface ends in a voiceless stop that a following vowel would voice.
fn must_voice(container: &MorphemeContainer) -> bool {
    container
        .surface()
        .last_char()
        .is_some_and(|c| c.letter().is_voiceless_stop())
        && !container
            .lexeme_attributes()
            .contains(LexemeAttribute::NoVoicing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tahlil_core::phonetics::attributes_of;
    use tahlil_core::{Lexeme, PhoneticExpectation, PhoneticExpectationSet, PrimaryPos, Root};

    use crate::graph::FormGraph;
    use crate::graph::turkish;
    use crate::suffix::{Condition, FormConditions, StateKind};

    fn noun(
        lemma: &str,
        surface: &str,
        attrs: &[LexemeAttribute],
        expect: &[PhoneticExpectation],
    ) -> Root {
        let lexeme = Arc::new(Lexeme::new(
            lemma,
            lemma,
            PrimaryPos::Noun,
            None,
            attrs.iter().copied().collect(),
        ));
        let seq = TurkishSequence::new(surface);
        let attributes = attributes_of(&seq);
        Root::immutable(seq, lexeme, attributes, PhoneticExpectationSet::of(expect))
    }

    fn start(graph: &SuffixGraph, root: Root, input: &str) -> MorphemeContainer {
        let state = graph.root_state(&root).unwrap();
        let remaining = TurkishSequence::new(input).suffix_from(root.sequence().len());
        MorphemeContainer::new(root, state, remaining)
    }

    fn take(
        applier: &SuffixApplier<'_>,
        graph: &SuffixGraph,
        c: &MorphemeContainer,
        steps: &[(&str, &str, &str)],
    ) -> Result<MorphemeContainer, Rejection> {
        let mut c = c.clone();
        for (suffix, template, state) in steps {
            let suffix = graph.suffix_id(suffix).unwrap();
            let form = graph.find_form(suffix, template).unwrap();
            c = applier.try_form(&c, form, graph.state_id(state).unwrap())?;
        }
        Ok(c)
    }

    const TO_POSSESSION: &[(&str, &str, &str)] = &[
        ("A3sg", "", "NOUN_WITH_AGREEMENT"),
        ("Pnon", "", "NOUN_WITH_POSSESSION"),
    ];

    #[test]
    fn resolves_and_appends() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("kapı", "kapı", &[], &[]), "kapıya");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        let c = take(&applier, &graph, &c, &[("Dat", "+yA", "NOUN_WITH_CASE")]).unwrap();
        assert_eq!(c.surface().as_str(), "kapıya");
        assert!(c.remaining().is_empty());
        assert_eq!(c.transitions()[2].application.applied.as_str(), "ya");
    }

    #[test]
    fn group_is_exclusive() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("ev", "ev", &[], &[]), "ev");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        // P1sg belongs to the possessive group Pnon already used.
        let err = take(
            &applier,
            &graph,
            &c,
            &[("P1sg", "+Im", "NOUN_WITH_POSSESSION")],
        );
        assert_eq!(err.unwrap_err(), Rejection::GroupExclusivity);
    }

    #[test]
    fn suffix_does_not_repeat() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("ev", "ev", &[], &[]), "ev");
        let c = take(&applier, &graph, &c, &[("A3sg", "", "NOUN_WITH_AGREEMENT")]).unwrap();
        let err = take(&applier, &graph, &c, &[("A3sg", "", "NOUN_WITH_AGREEMENT")]);
        // Repetition is checked after the group, which already rejects it.
        assert_eq!(err.unwrap_err(), Rejection::GroupExclusivity);

        let c = start(&graph, noun("ev", "ev", &[], &[]), "evcicik");
        let c = take(
            &applier,
            &graph,
            &c,
            &[
                ("A3sg", "", "NOUN_WITH_AGREEMENT"),
                ("Pnon", "", "NOUN_WITH_POSSESSION"),
                ("Nom_Deriv", "", "NOUN_NOM_DERIV"),
                ("Agt", "cI", "NOUN_ROOT"),
            ],
        )
        .unwrap();
        let err = take(&applier, &graph, &c, &[("Agt", "cI", "NOUN_ROOT")]);
        assert_eq!(err.unwrap_err(), Rejection::NonRepeatable);
    }

    #[test]
    fn precondition_gates_form() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("ev", "ev", &[], &[]), "evinde");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        // `ndA` only follows a third person possessive.
        let err = take(&applier, &graph, &c, &[("Loc", "ndA", "NOUN_WITH_CASE")]);
        assert_eq!(err.unwrap_err(), Rejection::Precondition);
    }

    #[test]
    fn expectation_and_voicing() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);

        let plain = noun(
            "armut",
            "armut",
            &[LexemeAttribute::Voicing],
            &[PhoneticExpectation::ConsonantStart],
        );
        let c = start(&graph, plain, "armutu");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        let err = take(&applier, &graph, &c, &[("Acc", "+yI", "NOUN_WITH_CASE")]);
        assert_eq!(err.unwrap_err(), Rejection::PhoneticExpectation);

        let voiced = noun(
            "armut",
            "armud",
            &[LexemeAttribute::Voicing],
            &[PhoneticExpectation::VowelStart],
        );
        let c = start(&graph, voiced, "armudu");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        let c = take(&applier, &graph, &c, &[("Acc", "+yI", "NOUN_WITH_CASE")]).unwrap();
        assert_eq!(c.surface().as_str(), "armudu");
    }

    #[test]
    fn raw_path_rejects_unvoiced_stop() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("kitap", "kitap", &[], &[]), "kitapı");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        let err = take(&applier, &graph, &c, &[("Acc", "+yI", "NOUN_WITH_CASE")]);
        assert_eq!(err.unwrap_err(), Rejection::Voicing);
        assert_eq!(c.surface().as_str(), "kitap");
    }

    #[test]
    fn raw_path_keeps_unvoicing_stop() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let root = noun("top", "top", &[LexemeAttribute::NoVoicing], &[]);
        let c = start(&graph, root, "topu");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        let c = take(&applier, &graph, &c, &[("Acc", "+yI", "NOUN_WITH_CASE")]).unwrap();
        assert_eq!(c.surface().as_str(), "topu");
        assert!(c.remaining().is_empty());
    }

    #[test]
    fn edge_path_rejects_unvoiced_stop() {
        let graph = turkish::grammar().unwrap();
        let forms = FormGraph::build(&graph);
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("kitap", "kitap", &[], &[]), "kitapı");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();

        let node = forms.node(c.last_state(), c.phonetic_attributes()).unwrap();
        let acc = graph.suffix_id("Acc").unwrap();
        let edge = node
            .edges
            .iter()
            .find(|e| e.application.suffix == acc && e.application.applied.as_str() == "ı")
            .unwrap();
        assert_eq!(applier.try_edge(&c, edge).unwrap_err(), Rejection::Voicing);
    }

    #[test]
    fn prefix_mismatch() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("ev", "ev", &[], &[]), "eve");
        let c = take(&applier, &graph, &c, TO_POSSESSION).unwrap();
        let err = take(&applier, &graph, &c, &[("Loc", "dA", "NOUN_WITH_CASE")]);
        assert_eq!(err.unwrap_err(), Rejection::PrefixMismatch);
    }

    #[test]
    fn rejection_leaves_container_untouched() {
        let graph = turkish::grammar().unwrap();
        let applier = SuffixApplier::new(&graph);
        let c = start(&graph, noun("ev", "ev", &[], &[]), "eve");
        let before = (c.surface().clone(), c.transitions().len());
        let _ = take(
            &applier,
            &graph,
            &c,
            &[("A3pl", "lAr", "NOUN_WITH_AGREEMENT")],
        );
        assert_eq!((c.surface().clone(), c.transitions().len()), before);
    }

    // A tiny graph exercising post- and post-derivative conditions.
    fn conditional_graph() -> SuffixGraph {
        use PrimaryPos::Noun;
        use StateKind::{Derivational, NonTerminal, Terminal};

        let mut g = SuffixGraph::new();
        let start = g.add_state("START", NonTerminal, Noun).unwrap();
        let deriv = g.add_state("DERIV", Derivational, Noun).unwrap();
        let end = g.add_state("END", Terminal, Noun).unwrap();

        let x = g.add_suffix("X", Some("X"), None, false).unwrap();
        let y = g.add_suffix("Y", Some("Y"), None, false).unwrap();
        let z = g.add_suffix("Z", Some("Z"), None, false).unwrap();
        let before_z = FormConditions::post(crate::suffix::condition::followed_by(z));
        let never = FormConditions::none().with_post_derivative(Condition::new(|_| false));
        g.add_form(x, "a", before_z).unwrap();
        g.add_form(y, "b", never).unwrap();
        g.add_form(z, "c", FormConditions::none()).unwrap();
        g.add_edge(start, x, deriv);
        g.add_edge(start, y, deriv);
        g.add_edge(deriv, z, end);
        g.set_root_state(PrimaryPos::Noun, None, start);
        g
    }

    #[test]
    fn follower_conditions() {
        let g = conditional_graph();
        let applier = SuffixApplier::new(&g);
        let root = noun("ev", "ev", &[], &[]);
        let form = |s: &str, t: &str| g.find_form(g.suffix_id(s).unwrap(), t).unwrap();
        let deriv = g.state_id("DERIV").unwrap();
        let end = g.state_id("END").unwrap();

        let c = start(&g, root.clone(), "evac");
        let c = applier.try_form(&c, form("X", "a"), deriv).unwrap();
        assert!(applier.try_form(&c, form("Z", "c"), end).is_ok());

        let c = start(&g, root, "evbc");
        let c = applier.try_form(&c, form("Y", "b"), deriv).unwrap();
        assert_eq!(
            applier.try_form(&c, form("Z", "c"), end).unwrap_err(),
            Rejection::PostDerivativeCondition
        );
    }
}
