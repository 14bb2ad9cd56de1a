//! Merges HSK 4-6 vocabulary from a cloned `hsk-vocabulary` repo into one
//! combined document.
//!
//! Clone <https://github.com/clem109/hsk-vocabulary> first, or point
//! `HSK_VOCAB_REPO_PATH` at an existing local clone.

use hsk_vocab::hsk::merge;
use std::env;
use std::path::Path;

const DEFAULT_OUT_PATH: &str = "data/hsk-vocabulary.json";

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut repo_arg: Option<&str> = None;
    let mut out_path = DEFAULT_OUT_PATH;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                if let Some(path) = args.get(i + 1) {
                    out_path = path;
                    i += 2;
                } else {
                    eprintln!("ERROR: --out flag requires an argument.");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [repo-path] [--out <path>]", args[0]);
                std::process::exit(0);
            }
            path if repo_arg.is_none() => {
                repo_arg = Some(path);
                i += 1;
            }
            unexpected => {
                eprintln!("ERROR: Unexpected argument: {}", unexpected);
                std::process::exit(1);
            }
        }
    }

    let repo_path = merge::resolve_repo_path(repo_arg);
    println!("Merging HSK 4-6 vocabulary from: {}", repo_path.display());
    println!("{}", "=".repeat(60));

    match merge::write_merged(&repo_path, Path::new(out_path)) {
        Ok(count) => {
            println!("Written {} words to {}", count, out_path);
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to merge vocabulary");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
