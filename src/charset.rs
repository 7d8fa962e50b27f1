//! Character classes and the pools built from them.
//!
//! Each class maps to a fixed string of candidate characters. A pool is the
//! concatenation of the enabled classes' strings, always in declaration
//! order, so the same set of classes yields the same pool.

use std::fmt;
use std::str::FromStr;

/// A named category of characters usable as a source pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// The constant characters this class contributes to a pool.
    pub fn charset(self) -> &'static str {
        CHARSETS[self.index()]
    }

    /// Label shown next to the class toggle.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Numbers => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

const CHARSETS: [&str; 4] = [
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!@#$%^&*()_+<>?",
];

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown character class '{0}' (expected upper, lower, numbers or symbols)")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "num" | "numbers" | "digits" => Ok(CharacterClass::Numbers),
            "sym" | "symbols" => Ok(CharacterClass::Symbols),
            _ => Err(UnknownClass(s.to_string())),
        }
    }
}

/// The set of enabled character classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    enabled: [bool; 4],
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self { enabled: [true; 4] }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.enabled[class.index()]
    }

    pub fn set(&mut self, class: CharacterClass, on: bool) {
        self.enabled[class.index()] = on;
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.set(class, true);
    }

    /// Flip a class and return its new state.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let on = !self.contains(class);
        self.set(class, on);
        on
    }

    pub fn is_empty(&self) -> bool {
        !self.enabled.iter().any(|on| *on)
    }

    /// Enabled classes in pool order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }

    /// Concatenate the enabled classes' characters.
    pub fn pool(&self) -> Vec<char> {
        self.iter().flat_map(|c| c.charset().chars()).collect()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        for class in iter {
            set.insert(class);
        }
        set
    }
}
