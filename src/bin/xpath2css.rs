//! Command-line translator from `XPath` location paths to CSS selectors.
//!
//! Translates expressions given as arguments or read from a file (one per
//! line), printing one selector per line. Errors go to stderr with the
//! expression's origin, and the exit code reflects the worst failure.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use xpath2css::css::to_selector;
use xpath2css::xpath::parse;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// xpath2css -- translate `XPath` location paths to CSS selectors.
///
/// Accepts the abbreviated child/descendant subset: tag and wildcard node
/// tests, attribute comparisons, position filters, and `contains`.
#[derive(Parser, Debug)]
#[command(name = "xpath2css", version, about, long_about = None)]
struct Cli {
    /// Expressions to translate.
    #[arg(required_unless_present = "file")]
    exprs: Vec<String>,

    /// Read expressions from a file, one per line (use `-` for stdin).
    #[arg(long, value_name = "FILE")]
    file: Option<String>,

    /// Check the expressions without printing selectors.
    #[arg(long)]
    check: bool,

    /// Save output to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<String>,

    /// Print the parsed steps instead of the selector.
    #[arg(long)]
    debug: bool,

    /// Print timing information for parsing and rendering.
    #[arg(long)]
    timing: bool,
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SUCCESS: u8 = 0;
const EXIT_TRANSLATE_ERROR: u8 = 1;

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut worst_exit: u8 = EXIT_SUCCESS;
    let mut output = String::new();

    for expr in &cli.exprs {
        let exit = process_expression(&cli, expr, expr, &mut output);
        if exit > worst_exit {
            worst_exit = exit;
        }
    }

    if let Some(ref file) = cli.file {
        match read_expressions(file) {
            Ok(lines) => {
                for (line_no, expr) in &lines {
                    let origin = format!("{file}:{line_no}");
                    let exit = process_expression(&cli, &origin, expr, &mut output);
                    if exit > worst_exit {
                        worst_exit = exit;
                    }
                }
            }
            Err(e) => {
                eprintln!("{file}: failed to read: {e}");
                worst_exit = EXIT_TRANSLATE_ERROR;
            }
        }
    }

    if !output.is_empty() {
        write_output(&cli, &output);
    }

    ExitCode::from(worst_exit)
}

/// Translates a single expression, appending its output line, and returns
/// an exit code. `origin` names the expression in error messages.
fn process_expression(cli: &Cli, origin: &str, expr: &str, out: &mut String) -> u8 {
    let start_parse = Instant::now();

    let steps = match parse(expr) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("{origin}: {e}");
            return EXIT_TRANSLATE_ERROR;
        }
    };

    if cli.timing {
        eprintln!("Parsing took {:?}", start_parse.elapsed());
    }

    if cli.debug {
        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "step {}: {step}", i + 1);
        }
        return EXIT_SUCCESS;
    }

    let start_render = Instant::now();

    let selector = match to_selector(&steps) {
        Ok(selector) => selector,
        Err(e) => {
            eprintln!("{origin}: {e}");
            return EXIT_TRANSLATE_ERROR;
        }
    };

    if cli.timing {
        eprintln!("Rendering took {:?}", start_render.elapsed());
    }

    if !cli.check {
        out.push_str(&selector);
        out.push('\n');
    }
    EXIT_SUCCESS
}

// ---------------------------------------------------------------------------
// Input reading
// ---------------------------------------------------------------------------

/// Reads expressions from a file or stdin (when the name is `-`), keeping
/// 1-based line numbers and skipping blank lines.
fn read_expressions(filename: &str) -> io::Result<Vec<(usize, String)>> {
    let content = if filename == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(filename)?
    };

    let mut expressions = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if !line.trim().is_empty() {
            expressions.push((idx + 1, line.to_string()));
        }
    }
    Ok(expressions)
}

// ---------------------------------------------------------------------------
// Output writing
// ---------------------------------------------------------------------------

/// Writes output to stdout or to the file specified by --output.
fn write_output(cli: &Cli, content: &str) {
    if let Some(ref output_file) = cli.output {
        if let Err(e) = fs::write(output_file, content) {
            eprintln!("{output_file}: failed to write: {e}");
        }
    } else {
        print!("{content}");
        let _ = io::stdout().flush();
    }
}
