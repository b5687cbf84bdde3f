use std::{
    collections::HashMap,
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use intcalc::{error::CalcError, interpreter::session::Session, settings::Settings};
use num::BigInt;

/// The line that ends an interactive session.
const EXIT_COMMAND: &str = ":exit";
const PROMPT: &str = ">>> ";

/// intcalc evaluates integer expressions with `let`-bound variables.
///
/// Without `--expr` or `--file`, intcalc reads lines interactively until
/// `:exit` or end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single line and exits.
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Evaluates every line of a file and exits.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Prints the tree of every line to stderr before evaluating it.
    #[arg(short, long)]
    verbose: bool,

    /// Binds a variable before the first line, e.g. `--let x=42`.
    #[arg(long = "let", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, BigInt)>,
}

fn parse_binding(arg: &str) -> Result<(String, BigInt), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid_name = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                     && chars.all(|c| c.is_ascii_alphanumeric())
                     && name != "let";
    if !valid_name {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("'{}' is not an integer", value.trim()))?;
    Ok((name.to_string(), value))
}

/// Handles one line, printing its value or its error.
fn process(session: &mut Session, line: &str, verbose: bool) {
    let result = session.parse(line).and_then(|tree| {
                                        let Some(tree) = tree else {
                                            return Ok(None);
                                        };
                                        if verbose {
                                            eprintln!("{tree}");
                                        }
                                        session.evaluate(&tree)
                                    });

    match result {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => report(&e),
    }
}

fn report(e: &CalcError) {
    if e.is_defect() {
        eprintln!("It looks like some internal problem appeared. Please let the developers know about it.");
        eprintln!("{e:?}");
    } else {
        eprintln!("something went wrong...");
        eprintln!("{e}");
    }
}

fn repl(session: &mut Session, verbose: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        if line.trim() == EXIT_COMMAND {
            return Ok(());
        }
        process(session, &line, verbose);
    }
}

fn main() {
    let args = Args::parse();

    let initial: HashMap<String, BigInt> = args.bindings.into_iter().collect();
    let mut session = Session::new(&Settings::default(), initial);

    if let Some(line) = args.expr {
        process(&mut session, &line, args.verbose);
        return;
    }

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   path.display());
                         std::process::exit(1);
                     });
        for line in script.lines() {
            process(&mut session, line, args.verbose);
        }
        return;
    }

    if let Err(e) = repl(&mut session, args.verbose) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}
