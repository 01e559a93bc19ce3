use crate::pass::CharClass;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub interactive: bool,
    pub clipboard: bool,
    pub thread_rng: bool,
    pub no_digits: bool,
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    /// Replaces the default class set when present.
    pub classes: Option<Vec<CharClass>>,
    /// Added on top of the default (or `classes`).
    pub extra_classes: Vec<CharClass>,
    pub output: Option<String>,
}

impl CliFlags {
    /// True when any flag shapes the generated passwords.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.seed.is_some()
            || self.classes.is_some()
            || !self.extra_classes.is_empty()
            || self.no_digits
            || self.clipboard
            || self.thread_rng
            || self.output.is_some()
    }
}
