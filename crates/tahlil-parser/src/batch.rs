// Batch parsing across threads.
//
// Each word is parsed independently on the rayon pool. A failing word is
// reported in its own result, attributed to the word, and never stops the
// rest of the batch.

use rayon::prelude::*;
use tracing::warn;

use crate::container::MorphemeContainer;
use crate::error::ParseError;
use crate::parser::MorphologicParser;

/// The outcome of parsing one word of a batch.
#[derive(Debug)]
pub struct WordResult {
    pub word: String,
    pub result: Result<Vec<MorphemeContainer>, ParseError>,
}

impl WordResult {
    /// Parsed without error but found nothing.
    pub fn is_unparsable(&self) -> bool {
        matches!(&self.result, Ok(parses) if parses.is_empty())
    }
}

/// Parse `words` in parallel. Results come back in input order.
pub fn parse_batch<P, S>(parser: &P, words: &[S]) -> Vec<WordResult>
where
    P: MorphologicParser + ?Sized,
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(|word| {
            let word = word.as_ref();
            let result = parser.parse(word);
            if let Err(e) = &result {
                warn!(word, error = %e, "parse failed");
            }
            WordResult {
                word: word.to_string(),
                result,
            }
        })
        .collect()
}
