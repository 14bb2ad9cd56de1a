use hsk_vocab::{HskLevel, VocabTableBuilder};
use std::env;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <words-dir> <output-json> [--encoding <LABEL>]",
            args[0]
        );
        std::process::exit(1);
    }

    let words_dir = &args[1];
    let output_path = &args[2];
    let mut encoding: Option<&str> = None;
    // Parse --encoding argument
    if let Some(encoding_idx) = args.iter().position(|arg| arg == "--encoding") {
        if let Some(label) = args.get(encoding_idx + 1) {
            encoding = Some(label);
        } else {
            eprintln!("ERROR: --encoding flag requires an argument.");
            std::process::exit(1);
        }
    }

    println!("Building HSK vocabulary table from: {}", words_dir);
    if let Some(label) = encoding {
        println!("Using encoding: {}", label);
    }
    println!("{}", "=".repeat(60));

    let mut builder = VocabTableBuilder::new(words_dir);
    if let Some(label) = encoding {
        builder = builder.with_encoding(label);
    }

    match builder.build_to_file(output_path) {
        Ok(outcome) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! Table written.");
            println!("{}", "=".repeat(60));

            println!("\nOutput: {}", output_path);
            println!("  Distinct words: {}", outcome.table.len());

            println!("\nWords per level:");
            for level in HskLevel::ALL {
                println!(
                    "  Level {}: {}",
                    level,
                    outcome.table.words_at_level(level).count()
                );
            }

            if !outcome.missing.is_empty() {
                println!("\nMissing word lists (skipped):");
                for path in &outcome.missing {
                    println!("  {}", path.display());
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to build vocabulary table");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
