//! Character class registry.

use std::fmt;
use std::str::FromStr;

const NUMBERS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const PUNCTUATION: &[char] = &[
    ' ', '`', '~', '.', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '+', '=',
    '\\', '/', '|', '[', ']', '{', '}', ';', ':', '"', '<', '>', ',', '?',
];

/// A selectable character class.
///
/// Classes are compared by tag, never by their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Numbers,
    Lowercase,
    Uppercase,
    Punctuation,
}

impl CharClass {
    /// Every class, in registry order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Numbers,
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Punctuation,
    ];

    /// Ordered member characters.
    pub const fn chars(self) -> &'static [char] {
        match self {
            CharClass::Numbers => NUMBERS,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Punctuation => PUNCTUATION,
        }
    }

    pub const fn len(self) -> usize {
        self.chars().len()
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(&c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            CharClass::Numbers => "Numbers",
            CharClass::Lowercase => "Lowercase",
            CharClass::Uppercase => "Uppercase",
            CharClass::Punctuation => "Punctuation",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown character class: {0}")]
pub struct UnknownClass(pub String);

impl FromStr for CharClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numbers" | "digits" => Ok(CharClass::Numbers),
            "lower" | "lowercase" => Ok(CharClass::Lowercase),
            "upper" | "uppercase" => Ok(CharClass::Uppercase),
            "punct" | "punctuation" | "special" => Ok(CharClass::Punctuation),
            _ => Err(UnknownClass(s.to_string())),
        }
    }
}
