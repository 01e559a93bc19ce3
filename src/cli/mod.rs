mod board;
mod context;
mod flags;
mod parse;
pub mod prompts;

pub use board::Board;
pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use env_logger::Env;
use log::LevelFilter;

use crate::error::Result;

/// Parse arguments and run. Without generation flags the interactive form opens.
pub fn run(args: Vec<String>) -> Result<()> {
    let mut flags = parse(&args)?;
    if !flags.has_explicit_args() && !flags.help && !flags.version {
        flags.interactive = true;
    }

    init_logging(flags.quiet);
    prompts::set_quiet(flags.quiet);

    Context::new(flags).run()
}

/// Log to stderr. `RUST_LOG` overrides the default `warn` filter.
fn init_logging(quiet: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_secs().format_target(true);
    if quiet {
        builder.filter_level(LevelFilter::Off);
    }
    let _ = builder.try_init();
}
