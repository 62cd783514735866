// Morpheme container: one partial parse.
//
// A container is a root plus the suffix transitions taken so far, with the
// remaining input and the phonetic and lexeme facts the next transition is
// judged against. Applying a transition clones the container; the original
// is never touched, so a rejected candidate cannot leak into its parent.

use tahlil_core::phonetics::attributes_of_with_lexeme;
use tahlil_core::{
    LexemeAttribute, LexemeAttributeSet, PhoneticAttributeSet, PhoneticExpectationSet, PrimaryPos,
    Root, TurkishSequence,
};

use crate::graph::SuffixGraph;
use crate::suffix::{FormApplication, GroupId, StateId, SuffixId};

/// One suffix taken while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTransition {
    pub from: StateId,
    pub application: FormApplication,
    pub to: StateId,
    /// The source state was derivational, so this transition opened a new
    /// derivation.
    pub derivational: bool,
}

#[derive(Debug, Clone)]
pub struct MorphemeContainer {
    root: Root,
    root_state: StateId,
    surface: TurkishSequence,
    remaining: TurkishSequence,
    transitions: Vec<SuffixTransition>,
    last_state: StateId,
    phonetic_attributes: PhoneticAttributeSet,
    phonetic_expectations: PhoneticExpectationSet,
    lexeme_attributes: LexemeAttributeSet,

    // Indices into `transitions`.
    since_derivation: Vec<usize>,
    from_derivation: Vec<usize>,
    last_derivation: Option<usize>,
    groups_since_derivation: Vec<GroupId>,
}

impl MorphemeContainer {
    /// A container holding just `root`, sitting in `root_state`, with
    /// `remaining` still to be consumed.
    pub fn new(root: Root, root_state: StateId, remaining: TurkishSequence) -> Self {
        Self {
            surface: root.sequence().clone(),
            phonetic_attributes: root.phonetic_attributes(),
            phonetic_expectations: root.phonetic_expectations(),
            lexeme_attributes: root.lexeme().attributes(),
            root,
            root_state,
            remaining,
            transitions: Vec::new(),
            last_state: root_state,
            since_derivation: Vec::new(),
            from_derivation: Vec::new(),
            last_derivation: None,
            groups_since_derivation: Vec::new(),
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn root_state(&self) -> StateId {
        self.root_state
    }

    /// Root plus every applied suffix.
    pub fn surface(&self) -> &TurkishSequence {
        &self.surface
    }

    /// What the suffixes have added after the root.
    pub fn surface_since_root(&self) -> TurkishSequence {
        self.surface.suffix_from(self.root.sequence().len())
    }

    pub fn remaining(&self) -> &TurkishSequence {
        &self.remaining
    }

    pub fn transitions(&self) -> &[SuffixTransition] {
        &self.transitions
    }

    pub fn last_transition(&self) -> Option<&SuffixTransition> {
        self.transitions.last()
    }

    pub fn last_state(&self) -> StateId {
        self.last_state
    }

    pub fn phonetic_attributes(&self) -> PhoneticAttributeSet {
        self.phonetic_attributes
    }

    pub fn phonetic_expectations(&self) -> PhoneticExpectationSet {
        self.phonetic_expectations
    }

    /// Lexeme attributes that still apply to the surface built so far.
    pub fn lexeme_attributes(&self) -> LexemeAttributeSet {
        self.lexeme_attributes
    }

    /// Transitions taken after the last derivation boundary.
    pub fn transitions_since_derivation(&self) -> impl Iterator<Item = &SuffixTransition> {
        self.since_derivation.iter().map(|&i| &self.transitions[i])
    }

    /// The last derivational transition and everything after it.
    pub fn transitions_from_derivation(&self) -> impl Iterator<Item = &SuffixTransition> {
        self.from_derivation.iter().map(|&i| &self.transitions[i])
    }

    pub fn suffixes_since_derivation(&self) -> impl Iterator<Item = SuffixId> + '_ {
        self.transitions_since_derivation()
            .map(|t| t.application.suffix)
    }

    pub fn groups_since_derivation(&self) -> &[GroupId] {
        &self.groups_since_derivation
    }

    pub fn last_derivation(&self) -> Option<&SuffixTransition> {
        self.last_derivation.map(|i| &self.transitions[i])
    }

    /// Last transition that added letters.
    pub fn last_non_blank(&self) -> Option<&SuffixTransition> {
        self.transitions
            .iter()
            .rev()
            .find(|t| !t.application.is_blank())
    }

    pub fn has_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Take `application` into `target`, updating the surface, the
    /// derivation indices and the recomputed phonetic and lexeme facts.
    pub fn add_transition(
        &mut self,
        graph: &SuffixGraph,
        application: FormApplication,
        target: StateId,
    ) {
        let from = self.last_state;
        let derivational = graph.state(from).is_derivational();

        self.surface = self.surface.append(&application.applied);
        self.remaining = self.remaining.suffix_from(application.applied.len());

        if !application.is_blank() {
            self.phonetic_expectations = PhoneticExpectationSet::empty();
        }
        if let Some(expectation) = application.expectation {
            self.phonetic_expectations.insert(expectation);
        }

        let group = graph.suffix(application.suffix).group;
        let index = self.transitions.len();
        self.transitions.push(SuffixTransition {
            from,
            application,
            to: target,
            derivational,
        });
        self.last_state = target;

        if derivational {
            self.since_derivation.clear();
            self.groups_since_derivation.clear();
            self.from_derivation.clear();
            self.from_derivation.push(index);
            self.last_derivation = Some(index);
        } else {
            self.since_derivation.push(index);
            self.from_derivation.push(index);
            if let Some(group) = group {
                self.groups_since_derivation.push(group);
            }
        }

        self.lexeme_attributes = self.lexeme_attribute_view(graph);
        self.phonetic_attributes = self.recompute_phonetic_attributes();
    }

    fn lexeme_attribute_view(&self, graph: &SuffixGraph) -> LexemeAttributeSet {
        if self.transitions.iter().all(|t| t.application.is_blank()) {
            return self.root.lexeme().attributes();
        }
        let state = graph.state(self.last_state);
        if state.pos != PrimaryPos::Verb {
            return LexemeAttributeSet::empty();
        }
        let last_blank = self
            .transitions
            .last()
            .is_some_and(|t| t.application.is_blank());
        // a verb left through a derivation or a zero transition does not
        // voice its last consonant
        if state.is_derivational() || last_blank {
            LexemeAttributeSet::of(&[LexemeAttribute::NoVoicing])
        } else {
            LexemeAttributeSet::empty()
        }
    }

    fn recompute_phonetic_attributes(&self) -> PhoneticAttributeSet {
        if self.transitions.is_empty() {
            return self.root.phonetic_attributes();
        }
        let added = self.surface_since_root();
        if added.is_blank() || added.has_no_alphanumeric() {
            return self.root.phonetic_attributes();
        }
        attributes_of_with_lexeme(&self.surface, self.lexeme_attributes)
    }

    /// This container re-anchored onto `input`, or `None` when `input` does
    /// not start with its surface.
    pub fn rebase(&self, input: &TurkishSequence) -> Option<MorphemeContainer> {
        if !input.starts_with(&self.surface) {
            return None;
        }
        let mut rebased = self.clone();
        rebased.remaining = input.suffix_from(self.surface.len());
        Some(rebased)
    }
}
