//! Interactive password form.

mod form;
mod text;

pub use form::{Action, Form};
pub use text::*;

use log::{info, warn};

use crate::cli::Board;
use crate::entropy::Source;
use crate::error::Result;
use crate::pass::GeneratorConfig;
use crate::terminal::{clear, read_key, reset_terminal};

/// Run the form until the user quits.
pub fn run(config: GeneratorConfig, source: Source) -> Result<()> {
    reset_terminal();
    let mut rng = source.rng();
    let mut form = Form::new(config);
    let mut board: Option<Board> = None;

    loop {
        clear();
        print_form(&form, source);

        let key = read_key()?;
        match form.handle_key(key, &mut *rng) {
            Action::Continue => {}
            Action::Copy => {
                let copied = match board.take() {
                    Some(b) => Ok(b),
                    None => Board::open(),
                }
                .and_then(|mut b| {
                    let copied = b.copy(form.output());
                    board = Some(b);
                    copied
                });
                match copied {
                    Ok(()) => form.set_status("Copied to clipboard"),
                    Err(e) => {
                        warn!("{e}");
                        form.set_status(e.to_string());
                    }
                }
            }
            Action::Quit => break,
        }
    }

    info!("form closed with {:?}", form.config());
    clear();
    reset_terminal();
    Ok(())
}
