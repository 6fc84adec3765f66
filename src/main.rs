use std::{fs, process::ExitCode};

use clap::Parser;
use rpntrace::{
    CompileOptions, ParenPolicy, compile_with,
    render::{join_tokens, render_trace},
    util::num::format_value,
};
use tracing_subscriber::EnvFilter;

/// rpntrace compiles arithmetic expressions to postfix notation and shows
/// how a stack machine evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpntrace to read expressions from a file, one per line, instead
    /// of taking a single expression. Blank lines and lines starting with
    /// `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Print every evaluation step with the stack after it.
    #[arg(short, long)]
    trace: bool,

    /// Absorb unbalanced parentheses instead of rejecting them.
    #[arg(short, long)]
    lenient: bool,

    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let options = CompileOptions { parentheses: if args.lenient {
                                       ParenPolicy::Lenient
                                   } else {
                                       ParenPolicy::Strict
                                   } };

    let expressions: Vec<&str> = if args.file {
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .collect()
    } else {
        vec![script.as_str()]
    };

    let mut failed = false;
    for (i, expression) in expressions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Expression: {}", expression.trim());

        match compile_with(expression, &options) {
            Ok(compiled) => {
                println!("Tokens:     {}", join_tokens(&compiled.tokens));
                println!("Postfix:    {}", join_tokens(&compiled.postfix));
                if args.trace {
                    println!();
                    println!("{}", render_trace(&compiled.trace));
                    println!();
                }
                println!("Result:     {}", format_value(compiled.value));
            },
            Err(e) => {
                failed = true;
                eprintln!("Error ({}): {e}", e.stage());
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
