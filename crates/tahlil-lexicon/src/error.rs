// Error type for dictionary loading and root generation.

use std::path::PathBuf;

use tahlil_core::PrimaryPos;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A dictionary line could not be split into root and metadata.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("line {line}: unknown part of speech `{tag}`")]
    UnknownPos { line: usize, tag: String },

    #[error("line {line}: unknown lexeme attribute `{tag}`")]
    UnknownAttribute { line: usize, tag: String },

    /// A lexeme is marked `RootChange` but the irregular root table has no
    /// entry for it. This is a dictionary/table inconsistency.
    #[error("no root change entry for `{lemma_root}` ({pos})")]
    RootChangeMissing { lemma_root: String, pos: PrimaryPos },

    /// A modifying attribute was applied to a root it cannot modify, such
    /// as `Voicing` on a root that does not end in a voiceless stop.
    #[error("cannot apply {attribute} to root `{lemma_root}`")]
    InapplicableAttribute {
        lemma_root: String,
        attribute: &'static str,
    },

    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
