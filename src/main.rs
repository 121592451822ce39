use std::{fs, process};

use clap::Parser;
use kodme::interpreter::host::StdioHost;

/// kodme is a small, friendly scripting language for people learning to
/// program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells kodme to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Only checks the program for syntax errors, without running it.
    #[arg(short, long)]
    check: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let result = if args.check {
        kodme::parse(&script).map(drop)
    } else {
        kodme::run(&script, StdioHost)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
