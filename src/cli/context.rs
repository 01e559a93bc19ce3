//! CLI context: flags resolved into a generator configuration and output.

use std::fs::OpenOptions;
use std::io::{self, Write};

use log::{info, warn};
use zeroize::Zeroize;

use super::{Board, CliFlags, prompts};
use crate::entropy::Source;
use crate::error::Result;
use crate::pass::{self, GeneratorConfig};
use crate::tui;

/// Length used by one-shot CLI runs when `-l` is not given. The interactive
/// form starts from the configuration's own default of 0.
pub const DEFAULT_CLI_LENGTH: i64 = 16;

pub struct Context {
    pub flags: CliFlags,
    pub config: GeneratorConfig,
    pub source: Source,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let config = build_config(&flags);
        let source = select_source(&flags);
        Self {
            flags,
            config,
            source,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            tui::print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("classpass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        if self.flags.interactive {
            info!("opening form with {:?}", self.config);
            return tui::run(self.config.clone(), self.source);
        }

        self.generate_output()
    }

    /// Generate passwords and route them to the clipboard, a file or stdout.
    pub fn generate_output(&mut self) -> Result<()> {
        let count = self.flags.number.unwrap_or(1);
        prompts::empty_output(self.config.get_length(), self.config.active_class_count());
        info!(
            "generating {count} password(s) with {} source",
            self.source.name()
        );

        let mut rng = self.source.rng();

        if self.flags.clipboard {
            match Board::open() {
                Ok(mut board) => {
                    let mut buf = Vec::new();
                    pass::generate_batch(&self.config, count, &mut *rng, &mut buf)?;
                    let mut text = String::from_utf8_lossy(&buf).into_owned();
                    buf.zeroize();
                    text.pop();
                    let copied = board.copy(&text);
                    text.zeroize();
                    copied?;
                    prompts::clipboard_copied();
                    return Ok(());
                }
                Err(e) => {
                    warn!("{e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        if let Some(path) = &self.flags.output {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            pass::generate_batch(&self.config, count, &mut *rng, &mut file)?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.clone());
            prompts::passwords_written(count, &full_path);
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        pass::generate_batch(&self.config, count, &mut *rng, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Resolve flags into a configuration.
///
/// Starts from the startup default (numbers only), or from `--classes` when
/// given, then applies the add/remove switches and the length.
pub fn build_config(flags: &CliFlags) -> GeneratorConfig {
    let mut config = match &flags.classes {
        Some(classes) => {
            let mut config = GeneratorConfig::new();
            for &class in classes {
                config.add_class(class);
            }
            config
        }
        None => GeneratorConfig::initial(),
    };

    for &class in &flags.extra_classes {
        config.add_class(class);
    }
    if flags.no_digits {
        config.remove_class(pass::CharClass::Numbers);
    }

    if !flags.interactive {
        config.set_length(DEFAULT_CLI_LENGTH);
    }
    if let Some(n) = flags.length {
        if n < 0 {
            warn!("negative length {n} ignored");
            prompts::negative_length(n);
        }
        config.set_length(n);
    }

    config
}

pub fn select_source(flags: &CliFlags) -> Source {
    match (flags.seed, flags.thread_rng) {
        (Some(seed), _) => Source::Seeded(seed),
        (None, true) => Source::Thread,
        (None, false) => Source::Hardware,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClass;

    #[test]
    fn default_flags_use_numbers_and_cli_length() {
        let config = build_config(&CliFlags::default());
        assert_eq!(config.active_classes(), &[CharClass::Numbers]);
        assert_eq!(config.get_length(), DEFAULT_CLI_LENGTH as usize);
    }

    #[test]
    fn interactive_keeps_zero_length() {
        let flags = CliFlags {
            interactive: true,
            ..Default::default()
        };
        assert_eq!(build_config(&flags), GeneratorConfig::initial());
    }

    #[test]
    fn class_list_replaces_default() {
        let flags = CliFlags {
            classes: Some(vec![CharClass::Uppercase, CharClass::Uppercase]),
            extra_classes: vec![CharClass::Punctuation],
            ..Default::default()
        };
        let config = build_config(&flags);
        assert_eq!(
            config.active_classes(),
            &[CharClass::Uppercase, CharClass::Punctuation]
        );
    }

    #[test]
    fn no_digits_removes_numbers() {
        let flags = CliFlags {
            no_digits: true,
            extra_classes: vec![CharClass::Lowercase],
            ..Default::default()
        };
        let config = build_config(&flags);
        assert_eq!(config.active_classes(), &[CharClass::Lowercase]);
    }

    #[test]
    fn negative_length_keeps_previous_value() {
        let flags = CliFlags {
            length: Some(-3),
            quiet: true,
            ..Default::default()
        };
        assert_eq!(build_config(&flags).get_length(), DEFAULT_CLI_LENGTH as usize);
    }

    #[test]
    fn explicit_length_wins() {
        let flags = CliFlags {
            length: Some(40),
            ..Default::default()
        };
        assert_eq!(build_config(&flags).get_length(), 40);
    }

    #[test]
    fn source_selection() {
        assert_eq!(select_source(&CliFlags::default()), Source::Hardware);
        let flags = CliFlags {
            thread_rng: true,
            ..Default::default()
        };
        assert_eq!(select_source(&flags), Source::Thread);
        let flags = CliFlags {
            thread_rng: true,
            seed: Some(5),
            ..Default::default()
        };
        assert_eq!(select_source(&flags), Source::Seeded(5));
    }

    #[test]
    fn seeded_output_to_file_is_reproducible() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("classpass-{}-a.txt", std::process::id()));
        let second = dir.join(format!("classpass-{}-b.txt", std::process::id()));

        for path in [&first, &second] {
            let _ = std::fs::remove_file(path);
            let flags = CliFlags {
                seed: Some(11),
                number: Some(4),
                quiet: true,
                classes: Some(vec![CharClass::Lowercase, CharClass::Numbers]),
                output: Some(path.display().to_string()),
                ..Default::default()
            };
            Context::new(flags).run().unwrap();
        }

        let a = std::fs::read_to_string(&first).unwrap();
        let b = std::fs::read_to_string(&second).unwrap();
        let _ = std::fs::remove_file(&first);
        let _ = std::fs::remove_file(&second);

        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 4);
        assert!(a.lines().all(|l| l.len() == DEFAULT_CLI_LENGTH as usize));
    }
}
