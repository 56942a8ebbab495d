// src/models.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::error::ConfigurationError;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIALS: &[u8] = b"!@#$%&_-?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Fixed iteration order used everywhere a class order matters.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIALS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    fn index(self) -> usize {
        match self {
            CharacterClass::Uppercase => 0,
            CharacterClass::Lowercase => 1,
            CharacterClass::Digit => 2,
            CharacterClass::Special => 3,
        }
    }

    // Plural noun used in prompts and feedback
    pub fn describe(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase letters",
            CharacterClass::Lowercase => "lowercase letters",
            CharacterClass::Digit => "numbers",
            CharacterClass::Special => "special characters",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "Uppercase"),
            CharacterClass::Lowercase => write!(f, "Lowercase"),
            CharacterClass::Digit => write!(f, "Digit"),
            CharacterClass::Special => write!(f, "Special"),
        }
    }
}

/// A subset of the four character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    enabled: [bool; 4],
}

impl ClassSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self { enabled: [true; 4] }
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.enabled[class.index()] = true;
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.enabled[class.index()] = false;
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.enabled[class.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    pub fn len(&self) -> usize {
        self.enabled.iter().filter(|e| **e).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    Class(CharacterClass),
    /// Any character from the enabled pool.
    Any,
}

impl TemplateToken {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(TemplateToken::Class(CharacterClass::Uppercase)),
            'L' => Some(TemplateToken::Class(CharacterClass::Lowercase)),
            'D' => Some(TemplateToken::Class(CharacterClass::Digit)),
            'S' => Some(TemplateToken::Class(CharacterClass::Special)),
            'X' => Some(TemplateToken::Any),
            _ => None,
        }
    }
}

/// Position-by-position class pattern, e.g. `UUULLLDDSXXXX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<TemplateToken>,
}

impl Template {
    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Advisory check: a template is considered weak when it is shorter than
    /// `min_length` or when its `X` tokens cannot stand in for every class it
    /// never names explicitly.
    pub fn coverage_warning(&self, min_length: usize) -> Option<String> {
        if self.len() < min_length {
            return Some(format!(
                "Template has {} positions; at least {} are recommended.",
                self.len(),
                min_length
            ));
        }

        let named: ClassSet = self
            .tokens
            .iter()
            .filter_map(|t| match t {
                TemplateToken::Class(c) => Some(*c),
                TemplateToken::Any => None,
            })
            .collect();
        let wildcards = self.tokens.iter().filter(|t| **t == TemplateToken::Any).count();
        let missing = CharacterClass::ALL.len() - named.len();

        if wildcards < missing {
            let names: Vec<String> = CharacterClass::ALL
                .into_iter()
                .filter(|c| !named.contains(*c))
                .map(|c| c.describe().to_string())
                .collect();
            Some(format!("Template never asks for {}.", names.join(", ")))
        } else {
            None
        }
    }
}

impl FromStr for Template {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = s.trim();
        if pattern.is_empty() {
            return Err(ConfigurationError::EmptyTemplate);
        }

        let tokens = pattern
            .chars()
            .enumerate()
            .map(|(i, c)| {
                TemplateToken::from_char(c).ok_or(ConfigurationError::UnknownTemplateToken {
                    token: c,
                    position: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Template { tokens })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            let c = match token {
                TemplateToken::Class(CharacterClass::Uppercase) => 'U',
                TemplateToken::Class(CharacterClass::Lowercase) => 'L',
                TemplateToken::Class(CharacterClass::Digit) => 'D',
                TemplateToken::Class(CharacterClass::Special) => 'S',
                TemplateToken::Any => 'X',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

// Raw password generation options, as collected from flags or prompts
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub length: Option<usize>,
    pub count: Option<usize>,
    pub exclude_uppercase: bool,
    pub exclude_lowercase: bool,
    pub exclude_numbers: bool,
    pub exclude_special: bool,
    pub template: Option<String>,
}

// What to do with the passwords once generated
#[derive(Debug, Clone, Default)]
pub struct DeliveryOptions {
    pub evaluate: bool,
    pub copy_to_clipboard: bool,
    pub animate: bool,
    pub matrix: bool,
    pub save_path: Option<PathBuf>,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "Weak"),
            StrengthTier::Moderate => write!(f, "Moderate"),
            StrengthTier::Strong => write!(f, "Strong"),
            StrengthTier::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
    pub class_count: usize,
    pub unique_chars: usize,
    pub score: u8,
    pub tier: StrengthTier,
    pub feedback: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint() {
        for c in (0u8..128).map(char::from) {
            let hits = CharacterClass::ALL.iter().filter(|class| class.contains(c)).count();
            assert!(hits <= 1, "{:?} belongs to {} classes", c, hits);
        }
    }

    #[test]
    fn class_set_iterates_in_fixed_order() {
        let set: ClassSet = [CharacterClass::Special, CharacterClass::Uppercase].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Uppercase, CharacterClass::Special]);
        assert_eq!(set.len(), 2);
        assert!(!ClassSet::all().is_empty());
        assert!(ClassSet::empty().is_empty());
    }

    #[test]
    fn parses_template_tokens() {
        let template: Template = "UUULLLDDSXXXX".parse().unwrap();
        assert_eq!(template.len(), 13);
        assert_eq!(template.tokens()[0], TemplateToken::Class(CharacterClass::Uppercase));
        assert_eq!(template.tokens()[8], TemplateToken::Class(CharacterClass::Special));
        assert_eq!(template.tokens()[12], TemplateToken::Any);
        assert_eq!(template.to_string(), "UUULLLDDSXXXX");
    }

    #[test]
    fn template_tokens_ignore_case_and_padding() {
        let template: Template = "ulDsx".parse().unwrap();
        assert_eq!(template.to_string(), "ULDSX");
        let padded: Template = "  UL  ".parse().unwrap();
        assert_eq!(padded.len(), 2);
    }

    #[test]
    fn rejects_unknown_and_empty_templates() {
        assert_eq!(
            "UUQ".parse::<Template>(),
            Err(ConfigurationError::UnknownTemplateToken { token: 'Q', position: 3 })
        );
        assert_eq!("   ".parse::<Template>(), Err(ConfigurationError::EmptyTemplate));
        assert_eq!("".parse::<Template>(), Err(ConfigurationError::EmptyTemplate));
    }

    #[test]
    fn coverage_warning_flags_weak_templates() {
        let short: Template = "ULDS".parse().unwrap();
        assert!(short.coverage_warning(12).is_some());

        let covered: Template = "UUULLLDDSXXX".parse().unwrap();
        assert!(covered.coverage_warning(12).is_none());

        let wildcards_fill_gap: Template = "UUUUUUUUUUXX".parse().unwrap();
        assert!(wildcards_fill_gap.coverage_warning(12).is_some());

        let enough_wildcards: Template = "UUUUUUUUUXXX".parse().unwrap();
        assert!(enough_wildcards.coverage_warning(12).is_none());
    }

    #[test]
    fn tier_display_matches_labels() {
        assert_eq!(StrengthTier::VeryStrong.to_string(), "Very Strong");
        assert!(StrengthTier::Weak < StrengthTier::Strong);
    }
}
