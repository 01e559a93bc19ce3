//! Generator configuration: target length and active classes.

use log::debug;

use super::charset::CharClass;

/// Longest length offered by the interactive form. The configuration itself
/// accepts any non-negative length.
pub const MAX_FORM_LENGTH: usize = 25;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    length: usize,
    active: Vec<CharClass>,
}

impl GeneratorConfig {
    /// Empty configuration: length 0, no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startup state handed to the shell: length 0, numbers included.
    pub fn initial() -> Self {
        let mut config = Self::new();
        config.add_class(CharClass::Numbers);
        config
    }

    /// Negative lengths are ignored and leave the configuration unchanged.
    pub fn set_length(&mut self, n: i64) {
        match usize::try_from(n) {
            Ok(length) => self.length = length,
            Err(_) => debug!("ignoring negative length {n}"),
        }
    }

    pub fn get_length(&self) -> usize {
        self.length
    }

    /// No-op when the class is already active.
    pub fn add_class(&mut self, class: CharClass) {
        if !self.is_active(class) {
            debug!("class {class} enabled");
            self.active.push(class);
        }
    }

    /// No-op when the class is not active.
    pub fn remove_class(&mut self, class: CharClass) {
        if let Some(pos) = self.active.iter().position(|&c| c == class) {
            debug!("class {class} disabled");
            self.active.remove(pos);
        }
    }

    /// Checkbox semantics: enable if off, disable if on.
    pub fn toggle_class(&mut self, class: CharClass) {
        if self.is_active(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }

    pub fn is_active(&self, class: CharClass) -> bool {
        self.active.contains(&class)
    }

    pub fn active_class_count(&self) -> usize {
        self.active.len()
    }

    /// Active classes in the order they were enabled.
    pub fn active_classes(&self) -> &[CharClass] {
        &self.active
    }
}
