use clap::Parser;
use keypad_calc::cli::Cli;
use keypad_calc::keyboard::TerminalInputProvider;
use keypad_calc::{display, logging, session, terminal};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Some(keys) = &cli.keys {
        let calc = session::evaluate_keys(keys, cli.skip_unknown)?;
        let screen = display::render(&calc);
        if cli.equation {
            println!("{}", screen.equation);
        }
        println!("{}", screen.result);
        return Ok(());
    }

    let _lock = terminal::set_terminal_raw()?;
    session::run_interactive(&mut TerminalInputProvider::new(), &mut io::stdout())?;
    Ok(())
}
