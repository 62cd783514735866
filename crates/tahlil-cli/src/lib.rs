// tahlil-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use serde_json::{Value, json};
use tahlil_lexicon::{LexiconOptions, RootMap, load_dictionary};
use tahlil_parser::{
    ContextlessParser, ParseSummary, ParserOptions, WordResult, format_parse,
};

/// Environment variable naming a dictionary file.
const DICT_ENV: &str = "TAHLIL_DICT_PATH";

/// Build a parser over a dictionary file, or over the bundled dictionary
/// when no file is named.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `TAHLIL_DICT_PATH` environment variable
/// 3. The dictionary bundled with tahlil-lexicon
pub fn load_parser(dict_path: Option<&str>, ascii: bool) -> Result<ContextlessParser, String> {
    let lexicon = LexiconOptions {
        circumflex_free_roots: ascii,
    };
    let options = ParserOptions::default();

    match dictionary_path(dict_path) {
        Some(path) => {
            let roots = load_root_map(&path, &lexicon)?;
            ContextlessParser::new(Arc::new(roots), options)
                .map_err(|e| format!("failed to build parser: {e}"))
        }
        None => ContextlessParser::bundled(&lexicon, options)
            .map_err(|e| format!("failed to build parser: {e}")),
    }
}

fn dictionary_path(dict_path: Option<&str>) -> Option<PathBuf> {
    dict_path
        .map(PathBuf::from)
        .or_else(|| std::env::var(DICT_ENV).ok().map(PathBuf::from))
}

fn load_root_map(path: &Path, lexicon: &LexiconOptions) -> Result<RootMap, String> {
    let lexemes =
        load_dictionary(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    RootMap::from_lexemes(lexemes, lexicon)
        .map_err(|e| format!("failed to build roots from {}: {e}", path.display()))
}

/// Parse a `--dict=PATH`, `--dict PATH` or `-d PATH` argument from command
/// line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if let Some(val) = arg.strip_prefix("--dict=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            let Some(val) = args.next() else {
                return Err(format!("{arg} requires a value"));
            };
            dict_path = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((dict_path, remaining))
}

/// Remove `flag` from `args`, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Plain text: the word, then one indented line per parse.
pub fn render_plain(parser: &ContextlessParser, result: &WordResult) -> String {
    match &result.result {
        Err(e) => format!("{}: error: {e}", result.word),
        Ok(parses) if parses.is_empty() => format!("{}: (no parse)", result.word),
        Ok(parses) => {
            let mut out = format!("{}:", result.word);
            for parse in parses {
                out.push_str("\n  ");
                out.push_str(&format_parse(parser.graph(), parse));
            }
            out
        }
    }
}

/// One JSON object per word, with either `parses` or `error`.
pub fn render_json(parser: &ContextlessParser, result: &WordResult) -> Value {
    match &result.result {
        Err(e) => json!({ "word": result.word, "error": e.to_string() }),
        Ok(parses) => {
            let summaries: Vec<ParseSummary> = parses
                .iter()
                .map(|p| ParseSummary::new(parser.graph(), p))
                .collect();
            json!({ "word": result.word, "parses": summaries })
        }
    }
}
