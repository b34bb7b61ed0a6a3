mod highlighter;

use bumpalo::Bump;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, Emacs, Reedline, Signal, default_emacs_keybindings};
use shisoku::{
    Calculator, EngineOptions, Evaluation, EvaluatorOptions, ParserOptions, render_error, traversal,
};
use std::io::BufRead;
use std::io::BufReader;
use tracing::debug;

use crate::highlighter::Highlighter;

const SEPARATOR: &str = "---------------------------------------------";

/// Shisoku - single-pass integer arithmetic
#[derive(Parser, Debug)]
#[command(name = "shisoku")]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Args {
    /// Longest accepted input line, in characters
    #[arg(long, default_value_t = 49)]
    max_line_length: usize,

    /// Most digits allowed in one operand
    #[arg(long, default_value_t = ParserOptions::default().max_token_digits)]
    max_digits: usize,

    /// Most operand and operator tokens allowed in one expression
    #[arg(long, default_value_t = ParserOptions::default().max_tokens)]
    max_tokens: usize,

    /// Most intermediate values held on the evaluation stack
    #[arg(long, default_value_t = EvaluatorOptions::default().stack_capacity)]
    stack_capacity: usize,

    /// Print the expression tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print evaluation stack activity
    #[arg(long)]
    stats: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            parser: ParserOptions {
                max_token_digits: self.max_digits,
                max_tokens: self.max_tokens,
            },
            evaluator: EvaluatorOptions {
                stack_capacity: self.stack_capacity,
            },
        }
    }
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let edit_mode = Box::new(Emacs::new(default_emacs_keybindings()));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("shisoku".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Everything printed for one successfully evaluated line.
fn format_report(
    input: &str,
    infix: &str,
    postfix: &str,
    evaluation: &Evaluation,
    stats: bool,
) -> String {
    let mut out = format!(
        "expression: {}\ninfix:      {}\npostfix:    {}\nanswer:     {}\n",
        input.trim_end(),
        infix,
        postfix,
        evaluation.value
    );
    if stats {
        out.push_str(&format!(
            "stack:      {} pushes, {} pops, peak {}\n",
            evaluation.stats.pushes, evaluation.stats.pops, evaluation.stats.peak
        ));
    }
    out.push_str(SEPARATOR);
    out
}

/// Evaluate one line and print the outcome.
///
/// Returns whether the line produced an answer.
fn interpret_line(calculator: &Calculator, args: &Args, line: &str) -> bool {
    let length = line.chars().count();
    if length > args.max_line_length {
        eprintln!(
            "error: line has {} characters, the limit is {}",
            length, args.max_line_length
        );
        return false;
    }

    let arena = Bump::new();
    let expr = match calculator.compile(&arena, line) {
        Ok(expr) => expr,
        Err(e) => {
            render_error(&e);
            return false;
        }
    };

    if args.debug_parse {
        println!("=== Expression Tree ===");
        println!("{}", traversal::render_outline(expr.expr()));
        println!();
    }

    match expr.run_with_stats() {
        Ok(evaluation) => {
            debug!(tokens = expr.token_count(), "evaluated line");
            println!(
                "{}",
                format_report(line, &expr.infix(), &expr.postfix(), &evaluation, args.stats)
            );
            true
        }
        Err(e) => {
            render_error(&e);
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let calculator = Calculator::new(args.engine_options());

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        if !interpret_line(&calculator, &args, expr) {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("Shisoku REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if !buffer.trim().is_empty() {
                        interpret_line(&calculator, &args, &buffer);
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if line.trim().is_empty() {
                continue;
            }
            interpret_line(&calculator, &args, &line);
        }
    }

    Ok(())
}
