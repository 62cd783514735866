// tahlil-parse: Morphological parsing of Turkish words.
//
// Prints every parse of each word, either as formatted parse strings or as
// one JSON object per line.
//
// Usage:
//   tahlil-parse [-d DICT] [--json] [--ascii] [WORD...]
//
// Options:
//   -d, --dict PATH   Dictionary file (default: bundled sample dictionary)
//   --json            Print one JSON object per word
//   --ascii           Also match roots typed without circumflexes
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use tahlil_parser::parse_batch;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) =
        tahlil_cli::parse_dict_path(&args).unwrap_or_else(|e| tahlil_cli::fatal(&e));

    if tahlil_cli::wants_help(&args) {
        println!("tahlil-parse: Morphological parsing of Turkish words.");
        println!();
        println!("Usage: tahlil-parse [-d DICT] [--json] [--ascii] [WORD...]");
        println!();
        println!("If WORD arguments are given, parses each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH   Dictionary file (default: bundled sample dictionary)");
        println!("  --json            Print one JSON object per word");
        println!("  --ascii           Also match roots typed without circumflexes");
        println!("  -h, --help        Print this help");
        return;
    }

    let json = tahlil_cli::take_flag(&mut args, "--json");
    let ascii = tahlil_cli::take_flag(&mut args, "--ascii");
    if let Some(unknown) = args.iter().find(|a| a.starts_with("--")) {
        tahlil_cli::fatal(&format!("unknown option {unknown}"));
    }

    let parser = tahlil_cli::load_parser(dict_path.as_deref(), ascii)
        .unwrap_or_else(|e| tahlil_cli::fatal(&e));

    let words: Vec<String> = if args.is_empty() {
        let mut words = Vec::new();
        for line in io::stdin().lock().lines() {
            match line {
                Ok(l) => {
                    let word = l.trim();
                    if !word.is_empty() {
                        words.push(word.to_string());
                    }
                }
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            }
        }
        words
    } else {
        args
    };

    let results = parse_batch(&parser, &words);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;
    for result in &results {
        failed |= result.result.is_err();
        let line = if json {
            tahlil_cli::render_json(&parser, result).to_string()
        } else {
            tahlil_cli::render_plain(&parser, result)
        };
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();

    if failed {
        std::process::exit(2);
    }
}
