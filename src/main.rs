//! Minimal CLI around the puzzle engine. Commands map one-to-one onto the
//! library's public entry points so operators can generate and check
//! puzzles without any surrounding service.

use std::env;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use quipcore::{
    score_difficulty, validate_solution, BuiltinKeywords, InMemoryQuoteSource, Puzzle,
    PuzzleDate, PuzzleEngine, QuoteSource,
};

fn print_usage() {
    eprintln!("Commands:\n  generate <quotes.json> <quote-id> [seed]\n  daily <quotes.json> [YYYY-MM-DD]\n  score <text>\n  check <submission> <original>");
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "generate" => {
            if !(4..=5).contains(&args.len()) {
                return print_usage();
            }
            let source = match InMemoryQuoteSource::from_json_file(&args[2]) {
                Ok(source) => source,
                Err(err) => return eprintln!("quote load failed: {err}"),
            };
            let engine = PuzzleEngine::new(source, BuiltinKeywords::default());
            let quote = match engine.quotes().quote(&args[3]) {
                Some(quote) => quote.clone(),
                None => return eprintln!("unknown quote id: {}", args[3]),
            };
            match engine.generate_puzzle(&quote, args.get(4).map(String::as_str)) {
                Ok(puzzle) => print_puzzle(&puzzle),
                Err(err) => eprintln!("generation failed: {err}"),
            }
        }
        "daily" => {
            if !(3..=4).contains(&args.len()) {
                return print_usage();
            }
            let source = match InMemoryQuoteSource::from_json_file(&args[2]) {
                Ok(source) => source,
                Err(err) => return eprintln!("quote load failed: {err}"),
            };
            let date = match args.get(3) {
                Some(raw) => match raw.parse::<PuzzleDate>() {
                    Ok(date) => date,
                    Err(err) => return eprintln!("{err}"),
                },
                None => PuzzleDate::today_utc(),
            };
            let engine = PuzzleEngine::new(source, BuiltinKeywords::default());
            match engine.generate_daily_puzzle(date) {
                Ok(puzzle) => print_puzzle(&puzzle),
                Err(err) => eprintln!("generation failed: {err}"),
            }
        }
        "score" => {
            if args.len() != 3 {
                return print_usage();
            }
            println!("{}", score_difficulty(&args[2]));
        }
        "check" => {
            if args.len() != 4 {
                return print_usage();
            }
            let verdict = if validate_solution(&args[2], &args[3]) {
                "correct"
            } else {
                "incorrect"
            };
            println!("{verdict}");
        }
        _ => print_usage(),
    }
}

fn print_puzzle(puzzle: &Puzzle) {
    let mapping: serde_json::Map<String, serde_json::Value> = puzzle
        .mapping
        .pairs()
        .map(|(plain, cipher)| (plain.to_string(), json!(cipher.to_string())))
        .collect();
    let printable = json!({
        "quoteId": puzzle.quote_id,
        "encryptedText": puzzle.encrypted_text,
        "hints": puzzle.hints,
        "mapping": mapping,
    });
    println!("{}", serde_json::to_string_pretty(&printable).unwrap());
}
