use std::env;
use std::process;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod terminal;
mod tui;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    if let Err(e) = cli::run(args) {
        cli::prompts::error(&e.to_string());
        process::exit(1);
    }
}
