//! Form state and key handling, kept free of terminal I/O.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use zeroize::Zeroize;

use crate::pass::{CharClass, GeneratorConfig, MAX_FORM_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Copy,
    Quit,
}

pub struct Form {
    config: GeneratorConfig,
    output: String,
    status: Option<String>,
}

impl Form {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            output: String::new(),
            status: None,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Last generated password.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) -> Action {
        self.status = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Continue,
            };
        }

        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.config.toggle_class(CharClass::ALL[idx]);
            }
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => self.step_length(-1),
            KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.step_length(1)
            }
            KeyCode::Home => self.config.set_length(0),
            KeyCode::End => self.config.set_length(MAX_FORM_LENGTH as i64),
            KeyCode::Enter | KeyCode::Char('g') => {
                self.output.zeroize();
                self.output = self.config.generate_with(rng);
            }
            KeyCode::Char('b') => {
                if self.output.is_empty() {
                    self.set_status("Nothing to copy yet");
                } else {
                    return Action::Copy;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        Action::Continue
    }

    /// Move the length by `delta`, staying within the form's 0..=25 choices.
    fn step_length(&mut self, delta: i64) {
        let max = MAX_FORM_LENGTH as i64;
        let current = self.config.get_length() as i64;
        if delta > 0 && current >= max {
            return;
        }
        // negative results are absorbed by the configuration
        self.config.set_length((current + delta).min(max));
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.output.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn press(form: &mut Form, code: KeyCode) -> Action {
        let mut rng = StdRng::seed_from_u64(8);
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut rng)
    }

    #[test]
    fn digit_keys_toggle_classes() {
        let mut form = Form::new(GeneratorConfig::initial());
        press(&mut form, KeyCode::Char('1'));
        assert_eq!(form.config().active_class_count(), 0);
        press(&mut form, KeyCode::Char('3'));
        press(&mut form, KeyCode::Char('4'));
        assert_eq!(
            form.config().active_classes(),
            &[CharClass::Uppercase, CharClass::Punctuation]
        );
    }

    #[test]
    fn length_is_clamped_to_form_range() {
        let mut form = Form::new(GeneratorConfig::initial());
        press(&mut form, KeyCode::Left);
        assert_eq!(form.config().get_length(), 0);
        for _ in 0..40 {
            press(&mut form, KeyCode::Right);
        }
        assert_eq!(form.config().get_length(), MAX_FORM_LENGTH);
        press(&mut form, KeyCode::Char('-'));
        assert_eq!(form.config().get_length(), MAX_FORM_LENGTH - 1);
        press(&mut form, KeyCode::Home);
        assert_eq!(form.config().get_length(), 0);
        press(&mut form, KeyCode::End);
        assert_eq!(form.config().get_length(), MAX_FORM_LENGTH);
    }

    #[test]
    fn longer_cli_length_only_steps_down() {
        let mut config = GeneratorConfig::initial();
        config.set_length(40);
        let mut form = Form::new(config);
        press(&mut form, KeyCode::Right);
        assert_eq!(form.config().get_length(), 40);
        press(&mut form, KeyCode::Left);
        assert_eq!(form.config().get_length(), MAX_FORM_LENGTH);
    }

    #[test]
    fn generate_uses_current_config() {
        let mut form = Form::new(GeneratorConfig::initial());
        press(&mut form, KeyCode::Enter);
        assert_eq!(form.output(), "");

        for _ in 0..8 {
            press(&mut form, KeyCode::Up);
        }
        press(&mut form, KeyCode::Char('g'));
        assert_eq!(form.output().len(), 8);
        assert!(form.output().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn copy_needs_output() {
        let mut form = Form::new(GeneratorConfig::initial());
        assert_eq!(press(&mut form, KeyCode::Char('b')), Action::Continue);
        assert!(form.status().is_some());

        press(&mut form, KeyCode::End);
        press(&mut form, KeyCode::Enter);
        assert!(form.status().is_none());
        assert_eq!(press(&mut form, KeyCode::Char('b')), Action::Copy);
    }

    #[test]
    fn quit_keys() {
        let mut form = Form::new(GeneratorConfig::new());
        assert_eq!(press(&mut form, KeyCode::Esc), Action::Quit);
        assert_eq!(press(&mut form, KeyCode::Char('q')), Action::Quit);
        let mut rng = StdRng::seed_from_u64(0);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(form.handle_key(ctrl_c, &mut rng), Action::Quit);
    }
}
