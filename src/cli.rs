use crate::logging::DEFAULT_FILTER;
use clap::Parser;

/// Running-total keypad calculator.
///
/// Without `--keys` the interactive keypad starts: digits, `.`, `+ - * /` (or `x`), `%`,
/// `n` toggles the sign, `=` or Enter evaluates, `c` or Esc clears, `q` or CTRL-C quits.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(version, about)]
pub struct Cli {
    /// Keys to evaluate without a terminal, e.g. "12+7*2="
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Also print the equation line when evaluating --keys
    #[arg(short, long, requires = "keys")]
    pub equation: bool,

    /// Skip keys without a binding instead of failing
    #[arg(long, requires = "keys")]
    pub skip_unknown: bool,

    /// Log filter (error, warn, info, debug, trace), RUST_LOG takes precedence
    #[arg(long, default_value = DEFAULT_FILTER)]
    pub log_level: String,
}
