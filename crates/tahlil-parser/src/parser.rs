// Contextless parser: every decomposition of a single word, without looking
// at its neighbours.
//
// Parsing is a breadth-first search over partial parses:
// 1. Seed one candidate per root found for each prefix of the word, or the
//    root's predefined paths when it has any.
// 2. Run the seeds through the mandatory transitions.
// 3. Expand generation by generation along form-graph edges whose surface
//    is a prefix of the remaining input. Candidates reaching a terminal
//    state with nothing left are results; terminal candidates with input
//    left over are dropped.
//
// The suffix graph, form graph, root finders and paths are built once and
// never change, so a parser can be shared across threads.

use std::sync::Arc;

use tahlil_core::TurkishSequence;
use tahlil_lexicon::finder::{
    DictionaryRootFinder, NumeralRootFinder, ProperNounFromApostropheRootFinder,
    ProperNounWithoutApostropheRootFinder, PunctuationRootFinder,
};
use tahlil_lexicon::{ChainPolicy, LexiconOptions, RootFinder, RootFinderChain, RootMap};
use tracing::{debug, trace};

use crate::applier::SuffixApplier;
use crate::container::MorphemeContainer;
use crate::error::{GrammarError, ParseError, TahlilError};
use crate::graph::{FormGraph, SuffixGraph, turkish};
use crate::mandatory::MandatoryTransitions;
use crate::predefined::PredefinedPaths;

/// Trait for morphological parsers.
///
/// An empty result means the word has no parse. Errors are reserved for
/// inconsistencies in the grammar or the parser itself.
pub trait MorphologicParser: Send + Sync {
    fn parse(&self, word: &str) -> Result<Vec<MorphemeContainer>, ParseError>;

    /// Parse each word in order.
    fn parse_all(&self, words: &[&str]) -> Vec<Result<Vec<MorphemeContainer>, ParseError>> {
        words.iter().map(|w| self.parse(w)).collect()
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Generations to expand before giving up on a word. Candidates still
    /// alive at that point are reported as an error.
    pub max_generations: usize,
    /// Find roots for digit strings (`3'ü`, `1984`).
    pub numerals: bool,
    /// Find roots for capitalized words (`Ankara'ya`, `Ankara`).
    pub proper_nouns: bool,
    /// Find roots for whole-word punctuation.
    pub punctuation: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_generations: 256,
            numerals: true,
            proper_nouns: true,
            punctuation: true,
        }
    }
}

pub struct ContextlessParser {
    graph: Arc<SuffixGraph>,
    forms: FormGraph,
    finder: Box<dyn RootFinder>,
    mandatory: MandatoryTransitions,
    predefined: PredefinedPaths,
    options: ParserOptions,
}

impl ContextlessParser {
    /// Parser over the bundled grammar with roots from `roots`.
    pub fn new(roots: Arc<RootMap>, options: ParserOptions) -> Result<Self, GrammarError> {
        let graph = Arc::new(turkish::grammar()?);
        let mandatory = MandatoryTransitions::turkish(&graph)?;
        let predefined = PredefinedPaths::turkish(&graph, &roots)?;
        let finder = root_finder_chain(roots, &options);
        Ok(Self::from_parts(graph, finder, mandatory, predefined, options))
    }

    /// Parser over the bundled grammar and the bundled dictionary.
    pub fn bundled(
        lexicon: &LexiconOptions,
        options: ParserOptions,
    ) -> Result<Self, TahlilError> {
        let roots = tahlil_lexicon::bundled_root_map(lexicon)?;
        Ok(Self::new(Arc::new(roots), options)?)
    }

    /// Assemble a parser from prebuilt parts. The form graph is derived
    /// from `graph` here.
    pub fn from_parts(
        graph: Arc<SuffixGraph>,
        finder: impl RootFinder + 'static,
        mandatory: MandatoryTransitions,
        predefined: PredefinedPaths,
        options: ParserOptions,
    ) -> Self {
        let forms = FormGraph::build(&graph);
        debug!(
            states = graph.state_count(),
            suffixes = graph.suffix_count(),
            forms = graph.form_count(),
            mandatory = mandatory.len(),
            predefined_roots = predefined.len(),
            "parser ready"
        );
        Self {
            graph,
            forms,
            finder: Box::new(finder),
            mandatory,
            predefined,
            options,
        }
    }

    pub fn graph(&self) -> &SuffixGraph {
        &self.graph
    }

    pub fn form_graph(&self) -> &FormGraph {
        &self.forms
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// One candidate per root (or predefined path) found for each prefix
    /// of `input`.
    fn seed(
        &self,
        word: &str,
        input: &TurkishSequence,
    ) -> Result<Vec<MorphemeContainer>, ParseError> {
        let mut candidates = Vec::new();
        for end in 1..=input.len() {
            let partial = input.subsequence(0, end);
            if !self.finder.handles(partial.as_str(), word) {
                continue;
            }
            for root in self.finder.find_roots(partial.as_str(), word) {
                if self.predefined.has_paths(&root) {
                    candidates.extend(
                        self.predefined
                            .paths(&root)
                            .iter()
                            .filter_map(|path| path.rebase(input)),
                    );
                    continue;
                }
                let state = self.graph.root_state(&root).map_err(|source| ParseError::Grammar {
                    word: word.to_string(),
                    source,
                })?;
                let remaining = input.suffix_from(end);
                candidates.push(MorphemeContainer::new(root, state, remaining));
            }
        }
        Ok(candidates)
    }

    /// Move finished candidates into `results` and return the rest.
    fn settle(
        &self,
        word: &str,
        candidates: Vec<MorphemeContainer>,
        results: &mut Vec<MorphemeContainer>,
    ) -> Vec<MorphemeContainer> {
        let mut alive = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !self.graph.state(candidate.last_state()).is_terminal() {
                alive.push(candidate);
            } else if candidate.remaining().is_empty() {
                results.push(candidate);
            } else {
                trace!(
                    word,
                    surface = candidate.surface().as_str(),
                    remaining = candidate.remaining().as_str(),
                    "terminal candidate with input left, dropped"
                );
            }
        }
        alive
    }

    fn expand(
        &self,
        word: &str,
        applier: &SuffixApplier<'_>,
        candidate: &MorphemeContainer,
        next: &mut Vec<MorphemeContainer>,
    ) -> Result<(), ParseError> {
        let state = candidate.last_state();
        let attributes = candidate.phonetic_attributes();
        let node = self
            .forms
            .node(state, attributes)
            .ok_or_else(|| ParseError::NodeNotFound {
                word: word.to_string(),
                state: self.graph.state(state).name.clone(),
                attributes: attributes.iter().map(|a| a.tag()).collect::<Vec<_>>().join(","),
            })?;

        for edge in &node.edges {
            let applied = &edge.application.applied;
            if !candidate.remaining().starts_with(applied) {
                continue;
            }
            match applier.try_edge(candidate, edge) {
                Ok(taken) => next.push(taken),
                Err(rejection) => trace!(
                    word,
                    surface = candidate.surface().as_str(),
                    suffix = self.graph.suffix(edge.application.suffix).name.as_str(),
                    %rejection,
                    "edge rejected"
                ),
            }
        }
        Ok(())
    }
}

impl MorphologicParser for ContextlessParser {
    fn parse(&self, word: &str) -> Result<Vec<MorphemeContainer>, ParseError> {
        let input = TurkishSequence::new(word);
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let seeds = self.seed(word, &input)?;
        let seeds = self.mandatory.apply(&self.graph, word, seeds)?;

        let applier = SuffixApplier::new(&self.graph);
        let mut results = Vec::new();
        let mut candidates = self.settle(word, seeds, &mut results);
        let mut generation = 0;
        while !candidates.is_empty() {
            if generation == self.options.max_generations {
                return Err(ParseError::LeftoverCandidates {
                    word: word.to_string(),
                    count: candidates.len(),
                    generations: generation,
                });
            }
            generation += 1;

            let mut next = Vec::new();
            for candidate in &candidates {
                self.expand(word, &applier, candidate, &mut next)?;
            }
            candidates = self.settle(word, next, &mut results);
        }

        trace!(
            word,
            results = results.len(),
            generations = generation,
            "parsed"
        );
        Ok(results)
    }
}

/// The finder chain for `options`: numerals and punctuation end the chain
/// when they handle a prefix, proper nouns and the dictionary do not.
pub fn root_finder_chain(roots: Arc<RootMap>, options: &ParserOptions) -> RootFinderChain {
    let mut chain = RootFinderChain::new();
    if options.numerals {
        chain.push(NumeralRootFinder, ChainPolicy::StopWhenHandled);
    }
    if options.punctuation {
        chain.push(PunctuationRootFinder, ChainPolicy::StopWhenHandled);
    }
    if options.proper_nouns {
        chain.push(ProperNounFromApostropheRootFinder, ChainPolicy::Continue);
        chain.push(ProperNounWithoutApostropheRootFinder, ChainPolicy::Continue);
    }
    chain.push(DictionaryRootFinder::new(roots), ChainPolicy::Continue);
    chain
}
