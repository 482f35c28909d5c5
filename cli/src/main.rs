mod highlighter;

use bitcalc::{
    BitWidth, Calculator, CalculatorOptions, EvaluatorOptions, LiteralValidation, render_error,
    render_error_to_string_no_color,
};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::BufRead;
use std::io::BufReader;
use tracing::{debug, warn};

/// bitcalc - evaluate postfix expressions over a fixed bit width
#[derive(Parser, Debug)]
#[command(name = "bitcalc")]
#[command(about = "Evaluate postfix expressions with bounded unsigned arithmetic", long_about = None)]
struct Args {
    /// Bit size of every operand and result (asked for if not provided)
    #[arg(short, long)]
    bits: Option<u32>,

    /// Check literals against the bit size only when an operator uses them
    #[arg(long)]
    lazy_literals: bool,

    /// Print errors without colors
    #[arg(long)]
    no_color: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn options(&self, bit_width: BitWidth) -> CalculatorOptions {
        let literal_validation = if self.lazy_literals {
            LiteralValidation::Lazy
        } else {
            LiteralValidation::Eager
        };
        CalculatorOptions {
            evaluator: EvaluatorOptions {
                bit_width,
                literal_validation,
            },
        }
    }

    fn calculator(&self, bits: &str) -> std::result::Result<Calculator, String> {
        let bits: u32 = bits
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid bit size", bits.trim()))?;
        let bit_width = BitWidth::new(bits).map_err(|e| e.to_string())?;
        Ok(Calculator::new(self.options(bit_width)))
    }
}

fn interpret_input(calculator: &mut Calculator, input: &str, use_color: bool) {
    match calculator.evaluate(input) {
        Ok(Some(result)) => println!("{result}"),
        Ok(None) => debug!("Empty expression"),
        Err(e) if use_color => render_error(&e),
        Err(e) => eprint!("{}", render_error_to_string_no_color(&e)),
    }
}

fn prompt(label: &str) -> DefaultPrompt {
    DefaultPrompt::new(
        DefaultPromptSegment::Basic(label.to_string()),
        DefaultPromptSegment::Empty,
    )
}

fn run_interactive(args: &Args, use_color: bool) -> Result<()> {
    let mut line_editor = Reedline::create().with_highlighter(Box::new(highlighter::Highlighter));

    println!("bitcalc - postfix calculator (Ctrl+D or Ctrl+C to exit)");

    let mut calculator = match args.bits {
        Some(bits) => args.calculator(&bits.to_string()),
        None => Err(String::new()),
    };
    let bits_prompt = prompt("Enter the bit size");
    while calculator.is_err() {
        match line_editor.read_line(&bits_prompt).into_diagnostic()? {
            Signal::Success(buffer) => {
                calculator = args.calculator(&buffer);
                if let Err(msg) = &calculator {
                    eprintln!("Error: {msg}");
                }
            }
            Signal::CtrlD | Signal::CtrlC => return Ok(()),
        }
    }
    let Ok(mut calculator) = calculator else {
        return Ok(());
    };

    let expression_prompt = prompt(&format!(
        "Enter the postfix expression ({}-bit)",
        calculator.bit_width().bits()
    ));
    loop {
        match line_editor.read_line(&expression_prompt) {
            Ok(Signal::Success(buffer)) => interpret_input(&mut calculator, &buffer, use_color),
            Ok(Signal::CtrlD | Signal::CtrlC) => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Reedline error: {e}");
                return Ok(());
            }
        }
    }
}

fn run_pipe(args: &Args, use_color: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut lines = reader.lines();

    // Without --bits the first line holds the bit size.
    let mut calculator = match args.bits {
        Some(bits) => args.calculator(&bits.to_string()),
        None => match lines.next() {
            Some(line) => args.calculator(&line.into_diagnostic()?),
            None => return Ok(()),
        },
    }
    .map_err(|msg| miette::miette!("{msg}"))?;

    for line in lines {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "Failed to read line from stdin");
                eprintln!("Error reading line from stdin: {}", e);
                return Ok(());
            }
        };
        interpret_input(&mut calculator, &line, use_color);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use BITCALC_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("BITCALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let use_color = !args.no_color && atty::is(atty::Stream::Stderr);

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        let bits = args
            .bits
            .ok_or_else(|| miette::miette!("--bits is required when an expression is given"))?;
        let mut calculator = args
            .calculator(&bits.to_string())
            .map_err(|msg| miette::miette!("{msg}"))?;
        interpret_input(&mut calculator, expr, use_color);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    if atty::is(atty::Stream::Stdin) {
        run_interactive(&args, use_color)
    } else {
        run_pipe(&args, use_color)
    }
}
