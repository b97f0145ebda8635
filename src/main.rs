use std::process::ExitCode;

use calcline::{
    Outcome,
    interpreter::{
        evaluator::{core::Context, function::core::BUILTIN_FUNCTIONS},
        mode::AngleMode,
    },
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "> ";

/// calcline is an interactive calculator for arithmetic, trigonometric and
/// logarithmic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start in degree mode instead of radians.
    #[arg(short, long)]
    degrees: bool,

    /// Do not keep a history of entered lines.
    #[arg(long)]
    no_history: bool,

    /// Lines to evaluate in order instead of starting the interactive prompt.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mode = if args.degrees {
        AngleMode::Degrees
    } else {
        AngleMode::Radians
    };
    let mut context = Context::new().with_angle_mode(mode);

    if args.expressions.is_empty() {
        run_interactive(&mut context, !args.no_history)
    } else {
        run_lines(&mut context, &args.expressions)
    }
}

/// Evaluates each line in one session, stopping at the first error or `exit`.
fn run_lines(context: &mut Context, lines: &[String]) -> ExitCode {
    for line in lines {
        match context.eval_line(line) {
            Ok(Outcome::Exit) => break,
            Ok(outcome) => report(&outcome),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

fn run_interactive(context: &mut Context, keep_history: bool) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the line editor: {e}");
            return ExitCode::FAILURE;
        },
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if keep_history && let Err(e) = editor.add_history_entry(line.as_str()) {
                    log::warn!("could not record history: {e}");
                }

                match context.eval_line(&line) {
                    Ok(Outcome::Exit) => break,
                    Ok(outcome) => report(&outcome),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Help => println!("{}", help_text()),
        other => println!("{other}"),
    }
}

fn help_text() -> String {
    let functions = BUILTIN_FUNCTIONS.iter()
                                     .map(ToString::to_string)
                                     .collect::<Vec<_>>()
                                     .join(", ");

    format!("Enter one expression per line.\n\
             \n\
             Operators:  + - * / ^, infix mod and root, unary -, parentheses\n\
             Functions:  {functions}\n\
             \x20           log(x) is base 10, log(b, x) is base b; round(x, n) keeps n decimals\n\
             Commands:   rad, deg, help, exit\n\
             \n\
             Ctrl-C clears the line, Ctrl-D exits.")
}
