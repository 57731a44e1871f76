// SPDX-License-Identifier: Apache-2.0

//! Reads a Liberty file and reports how long it took.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use xlsynth_liberty::{LibraryError, ReadOptions, read_liberty};

#[derive(Parser, Debug)]
#[command(
    name = "try-read-liberty",
    about = "Reads a Liberty (.lib or .lib.gz) file into a cell library"
)]
struct Args {
    /// Liberty file to read.
    input: PathBuf,

    /// Accept simple attributes with a missing ';'.
    #[arg(long)]
    allow_no_semi: bool,

    /// Reject unknown keywords instead of skipping them.
    #[arg(long)]
    strict_unknown_keywords: bool,

    /// Dump the resulting library as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let size = std::fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);
    println!("File size: {:.3} MiB", size as f64 / 1024.0 / 1024.0);

    let options = ReadOptions {
        allow_no_semi: args.allow_no_semi,
        strict_unknown_keywords: args.strict_unknown_keywords,
    };
    let start = Instant::now();
    let library = match read_liberty(&args.input, &options) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("error: {:#}", e);
            if let Some(LibraryError::EntriesFailed(failures)) = e.downcast_ref::<LibraryError>() {
                eprintln!("{} entries failed", failures.len());
            }
            std::process::exit(1);
        }
    };
    let duration = start.elapsed();
    println!("Read in {:?}", duration);
    println!(
        "Implied: {:.3} MiB/s",
        size as f64 / duration.as_secs_f64() / 1024.0 / 1024.0
    );
    println!(
        "Library '{}': {} cells, {} templates, {} timings",
        library.name,
        library.cells().len(),
        library.templates().len(),
        library.timing_num()
    );

    if args.json {
        match serde_json::to_string_pretty(&library) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: serializing library: {}", e);
                std::process::exit(1);
            }
        }
    }
}
