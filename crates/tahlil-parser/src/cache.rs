// Caching parser: remembers every word's parses.
//
// Concurrent misses on the same word may both run the inner parser; the
// last one to finish populates the cache. Both computations are value-equal
// so either result is "the" result. Errors are returned but never cached.

use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::container::MorphemeContainer;
use crate::error::ParseError;
use crate::parser::MorphologicParser;

pub struct CachingParser<P> {
    inner: P,
    cache: RwLock<HashMap<String, Vec<MorphemeContainer>>>,
    hits: AtomicU64,
}

impl<P: MorphologicParser> CachingParser<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of cached words.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl<P: MorphologicParser> MorphologicParser for CachingParser<P> {
    fn parse(&self, word: &str) -> Result<Vec<MorphemeContainer>, ParseError> {
        if let Some(cached) = self.cache.read().get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(word, "cache hit");
            return Ok(cached.clone());
        }
        let parses = self.inner.parse(word)?;
        self.cache.write().insert(word.to_string(), parses.clone());
        Ok(parses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Counts calls and fails on words starting with `!`.
    struct Counting {
        calls: AtomicUsize,
    }

    impl MorphologicParser for Counting {
        fn parse(&self, word: &str) -> Result<Vec<MorphemeContainer>, ParseError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if word.starts_with('!') {
                return Err(ParseError::LeftoverCandidates {
                    word: word.to_string(),
                    count: 1,
                    generations: 0,
                });
            }
            Ok(Vec::new())
        }
    }

    fn counting() -> CachingParser<Counting> {
        CachingParser::new(Counting {
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn second_lookup_is_a_hit() {
        let cache = counting();
        assert!(cache.parse("ev").unwrap().is_empty());
        assert!(cache.parse("ev").unwrap().is_empty());
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = counting();
        assert!(cache.parse("!x").is_err());
        assert!(cache.parse("!x").is_err());
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_forgets() {
        let cache = counting();
        cache.parse("ev").unwrap();
        cache.clear();
        cache.parse("ev").unwrap();
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.hits(), 0);
    }
}
