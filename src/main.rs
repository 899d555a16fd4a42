use std::{path::Path, process::ExitCode};

use clap::Parser;
use halfrpn::{
    batch::{Batch, DEFAULT_EXTENSION, LineOutcome},
    report::token_table,
    scan,
};
use tracing_subscriber::EnvFilter;

/// halfrpn evaluates Reverse Polish Notation expressions in IEEE-754 half
/// precision, one expression per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a file or directory path instead of expressions.
    #[arg(short, long)]
    file: bool,

    /// Print the token table of every line before its result.
    #[arg(short, long)]
    tokens: bool,

    /// Extension of the files read when CONTENTS is a directory.
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("halfrpn=warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let mut batch = Batch::new().with_extension(&args.extension);

    if !args.file {
        print_outcomes(&batch.run_source(&args.contents), args.tokens);
        return ExitCode::SUCCESS;
    }

    match batch.run_path(Path::new(&args.contents)) {
        Ok(reports) => {
            for report in reports {
                println!("File: {}", report.path.display());
                print_outcomes(&report.outcomes, args.tokens);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn print_outcomes(outcomes: &[LineOutcome], tokens: bool) {
    for outcome in outcomes {
        if tokens {
            print!("{}", token_table(&scan(&outcome.source)));
        }
        match &outcome.result {
            Ok(value) => println!("Line {}: {} => {value}", outcome.line, outcome.source),
            Err(e) => eprintln!("Line {}: {} => {e}", outcome.line, outcome.source),
        }
    }
}
