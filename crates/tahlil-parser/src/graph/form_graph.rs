// Form graph: the suffix graph resolved against every phonetic context.
//
// Nodes are (state, phonetic attribute set) pairs. Each grammar edge is
// expanded into one form edge per applicable suffix form, with the form's
// surface already resolved and the attributes it leaves behind. Forms
// ending in a voiceable consonant get a second edge with that consonant
// voiced, usable only before a vowel (`acak` / `acağ`).
//
// The graph is built once per suffix graph. Every state is seeded with
// every valid attribute set, so any phonetic context a parse can reach has
// a node.

use hashbrown::{HashMap, HashSet};
use tahlil_core::alphabet;
use tahlil_core::phonetics::{all_valid_sets, attributes_after};
use tahlil_core::{PhoneticAttributeSet, PhoneticExpectation, TurkishSequence};
use tracing::debug;

use crate::graph::SuffixGraph;
use crate::suffix::{FormApplication, StateId};

type NodeKey = (StateId, PhoneticAttributeSet);

/// A suffix form resolved in one phonetic context.
#[derive(Debug, Clone)]
pub struct FormEdge {
    pub application: FormApplication,
    pub target: StateId,
    pub target_attributes: PhoneticAttributeSet,
}

#[derive(Debug, Clone)]
pub struct FormNode {
    pub state: StateId,
    pub attributes: PhoneticAttributeSet,
    pub edges: Vec<FormEdge>,
}

#[derive(Debug, Default)]
pub struct FormGraph {
    nodes: HashMap<NodeKey, FormNode>,
    edge_count: usize,
}

impl FormGraph {
    pub fn build(graph: &SuffixGraph) -> Self {
        let mut nodes: HashMap<NodeKey, FormNode> = HashMap::new();
        let mut explored: HashSet<NodeKey> = HashSet::new();
        let mut pending: Vec<NodeKey> = graph
            .state_ids()
            .flat_map(|state| all_valid_sets().iter().map(move |&attrs| (state, attrs)))
            .collect();
        let mut edge_count = 0;

        while let Some(key) = pending.pop() {
            if !explored.insert(key) {
                continue;
            }
            let (state, attributes) = key;
            let edges = resolve_edges(graph, state, attributes);
            for edge in &edges {
                let next = (edge.target, edge.target_attributes);
                if !explored.contains(&next) {
                    pending.push(next);
                }
            }
            edge_count += edges.len();
            nodes.insert(
                key,
                FormNode {
                    state,
                    attributes,
                    edges,
                },
            );
        }

        debug!(
            nodes = nodes.len(),
            edges = edge_count,
            states = graph.state_count(),
            "form graph built"
        );
        Self { nodes, edge_count }
    }

    pub fn node(&self, state: StateId, attributes: PhoneticAttributeSet) -> Option<&FormNode> {
        self.nodes.get(&(state, attributes))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

fn resolve_edges(
    graph: &SuffixGraph,
    state: StateId,
    attributes: PhoneticAttributeSet,
) -> Vec<FormEdge> {
    let mut edges = Vec::new();
    for grammar_edge in graph.edges(state) {
        for &form_id in &graph.suffix(grammar_edge.suffix).forms {
            let form = graph.form(form_id);
            if !form.sequence.is_applicable(attributes) {
                continue;
            }
            let applied = TurkishSequence::new(&form.sequence.apply(attributes));
            edges.push(FormEdge {
                application: FormApplication {
                    form: form_id,
                    suffix: grammar_edge.suffix,
                    applied: applied.clone(),
                    fitting: applied.clone(),
                    expectation: None,
                },
                target: grammar_edge.target,
                target_attributes: attributes_after(attributes, &applied),
            });

            // Vowelless forms get no voiced edge, otherwise causative `t`
            // would also be read as `d` before a vowel (`yürüdüyor`).
            if let Some(voiced) = voiced_variant(&applied) {
                edges.push(FormEdge {
                    target_attributes: attributes_after(attributes, &voiced),
                    application: FormApplication {
                        form: form_id,
                        suffix: grammar_edge.suffix,
                        applied: voiced,
                        fitting: applied,
                        expectation: Some(PhoneticExpectation::VowelStart),
                    },
                    target: grammar_edge.target,
                });
            }
        }
    }
    edges
}

/// `applied` with its final consonant voiced. Only syllabic forms take
/// part: a lone consonant such as causative `t` never voices.
fn voiced_variant(applied: &TurkishSequence) -> Option<TurkishSequence> {
    if applied.is_blank() || !applied.has_vowel() {
        return None;
    }
    let last = applied.last_char()?.char_value();
    alphabet::voice_char(last).map(|v| applied.with_last_char(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tahlil_core::phonetics::{attributes_of, is_valid};

    use crate::graph::turkish;

    fn attrs(word: &str) -> PhoneticAttributeSet {
        attributes_of(&TurkishSequence::new(word))
    }

    #[test]
    fn every_state_has_every_valid_set() {
        let grammar = turkish::grammar().unwrap();
        let forms = FormGraph::build(&grammar);
        assert!(forms.node_count() >= grammar.state_count() * all_valid_sets().len());
        for state in grammar.state_ids() {
            for &set in all_valid_sets() {
                assert!(forms.node(state, set).is_some());
            }
        }
        assert!(forms.edge_count() > 0);
    }

    #[test]
    fn node_attributes_are_valid() {
        let grammar = turkish::grammar().unwrap();
        let forms = FormGraph::build(&grammar);
        for node in forms.nodes.values() {
            assert!(is_valid(node.attributes), "{:?}", node.attributes);
            for edge in &node.edges {
                assert!(is_valid(edge.target_attributes));
            }
        }
    }

    #[test]
    fn dative_after_back_vowel() {
        let grammar = turkish::grammar().unwrap();
        let forms = FormGraph::build(&grammar);
        let state = grammar.state_id("NOUN_WITH_POSSESSION").unwrap();
        let dat = grammar.suffix_id("Dat").unwrap();

        let node = forms.node(state, attrs("kapı")).unwrap();
        let applied: Vec<&str> = node
            .edges
            .iter()
            .filter(|e| e.application.suffix == dat)
            .map(|e| e.application.applied.as_str())
            .collect();
        assert!(applied.contains(&"ya"));
        assert!(applied.contains(&"na"));
    }

    #[test]
    fn voiced_variants_expect_a_vowel() {
        let grammar = turkish::grammar().unwrap();
        let forms = FormGraph::build(&grammar);
        let state = grammar.state_id("VERB_WITH_POLARITY").unwrap();
        let fut = grammar.suffix_id("Fut").unwrap();

        let node = forms.node(state, attrs("gel")).unwrap();
        let futures: Vec<&FormEdge> = node
            .edges
            .iter()
            .filter(|e| e.application.suffix == fut)
            .collect();
        assert_eq!(futures.len(), 2);

        let plain = futures
            .iter()
            .find(|e| e.application.expectation.is_none())
            .unwrap();
        assert_eq!(plain.application.applied.as_str(), "ecek");

        let voiced = futures
            .iter()
            .find(|e| e.application.expectation == Some(PhoneticExpectation::VowelStart))
            .unwrap();
        assert_eq!(voiced.application.applied.as_str(), "eceğ");
        assert_eq!(voiced.application.fitting.as_str(), "ecek");
    }

    #[test]
    fn lone_consonants_do_not_voice() {
        assert!(voiced_variant(&TurkishSequence::new("t")).is_none());
        assert!(voiced_variant(&TurkishSequence::new("")).is_none());
        assert!(voiced_variant(&TurkishSequence::new("lar")).is_none());
        assert_eq!(
            voiced_variant(&TurkishSequence::new("lık")).map(|s| s.as_str().to_string()),
            Some("lığ".to_string())
        );
    }
}
