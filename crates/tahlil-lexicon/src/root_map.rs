// Root map: surface root string -> every root with that surface.
//
// Built once from the lexicon and shared read-only by the dictionary root
// finder. Lookups are exact string matches.

use std::sync::Arc;

use hashbrown::HashMap;
use tahlil_core::{Lexeme, Root};
use tracing::debug;

use crate::LexiconOptions;
use crate::error::LexiconError;
use crate::generator::{CircumflexConvertingRootGenerator, RootGenerator, StandardRootGenerator};

#[derive(Debug, Default, Clone)]
pub struct RootMap {
    roots: HashMap<String, Vec<Root>>,
    root_count: usize,
}

impl RootMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the roots of every lexeme with `generator` and index them.
    pub fn build<G: RootGenerator + ?Sized>(
        lexemes: impl IntoIterator<Item = Lexeme>,
        generator: &G,
    ) -> Result<Self, LexiconError> {
        let mut map = Self::new();
        let mut lexeme_count = 0usize;
        for lexeme in lexemes {
            let lexeme = Arc::new(lexeme);
            for root in generator.generate(&lexeme)? {
                map.insert(root);
            }
            lexeme_count += 1;
        }
        debug!(
            lexemes = lexeme_count,
            roots = map.root_count,
            keys = map.roots.len(),
            "built root map"
        );
        Ok(map)
    }

    /// Build with the standard generator, wrapped in the circumflex
    /// decorator when `options.circumflex_free_roots` is set.
    pub fn from_lexemes(
        lexemes: impl IntoIterator<Item = Lexeme>,
        options: &LexiconOptions,
    ) -> Result<Self, LexiconError> {
        if options.circumflex_free_roots {
            Self::build(
                lexemes,
                &CircumflexConvertingRootGenerator::new(StandardRootGenerator),
            )
        } else {
            Self::build(lexemes, &StandardRootGenerator)
        }
    }

    /// Add a root. Identical roots are stored once.
    pub fn insert(&mut self, root: Root) {
        let bucket = self.roots.entry(root.as_str().to_string()).or_default();
        if !bucket.contains(&root) {
            bucket.push(root);
            self.root_count += 1;
        }
    }

    /// Roots whose surface is exactly `surface`.
    pub fn get(&self, surface: &str) -> &[Root] {
        self.roots.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.roots.contains_key(surface)
    }

    /// Total number of roots.
    pub fn len(&self) -> usize {
        self.root_count
    }

    pub fn is_empty(&self) -> bool {
        self.root_count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.values().flatten()
    }
}
