// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::config::GenerationConfig;
use crate::error::ConfigurationError;
use crate::models::{ClassSet, Template, TemplateToken};

/// Candidate characters for one generation run.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    classes: ClassSet,
    chars: Vec<u8>,
}

impl CharacterPool {
    pub fn new(classes: ClassSet) -> Result<Self, ConfigurationError> {
        if classes.is_empty() {
            return Err(ConfigurationError::NoClassesEnabled);
        }

        let mut chars = Vec::new();
        for class in classes.iter() {
            chars.extend_from_slice(class.chars());
        }

        Ok(Self { classes, chars })
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }
}

/// Password generator owning its randomness source.
///
/// Production code uses [`PasswordGenerator::from_entropy`]; tests inject a
/// seeded RNG through [`PasswordGenerator::with_rng`].
pub struct PasswordGenerator<R = ChaCha20Rng> {
    rng: R,
}

impl PasswordGenerator<ChaCha20Rng> {
    /// Seed a ChaCha20 stream from the operating system.
    pub fn from_entropy() -> Result<Self, rand::Error> {
        let rng = ChaCha20Rng::from_rng(OsRng)?;
        Ok(Self::with_rng(rng))
    }
}

impl<R: RngCore> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Generate `config.count()` independent passwords.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Vec<String>, ConfigurationError> {
        let pool = CharacterPool::new(config.classes())?;

        log::debug!(
            "Generating {} password(s) of length {} (classes: {:?}, template: {})",
            config.count(),
            config.length(),
            pool.classes().iter().collect::<Vec<_>>(),
            config.template().is_some()
        );

        let passwords = (0..config.count())
            .map(|_| match config.template() {
                Some(template) => self.generate_from_template(&pool, template),
                None => self.generate_password(&pool, config.length()),
            })
            .collect();

        Ok(passwords)
    }

    /// Sample `length` characters from the pool with at least one character
    /// of every enabled class, then shuffle.
    ///
    /// When `length` is smaller than the number of classes, only the first
    /// `length` classes (in fixed class order) are guaranteed.
    pub fn generate_password(&mut self, pool: &CharacterPool, length: usize) -> String {
        let mut password: Vec<u8> = Vec::with_capacity(length);

        for class in pool.classes().iter().take(length) {
            password.push(self.pick(class.chars()));
        }

        while password.len() < length {
            password.push(self.pick(pool.chars()));
        }

        password.shuffle(&mut self.rng);
        password.into_iter().map(char::from).collect()
    }

    /// One character per template token; `X` draws from the whole pool.
    pub fn generate_from_template(&mut self, pool: &CharacterPool, template: &Template) -> String {
        template
            .tokens()
            .iter()
            .map(|token| {
                let chars = match token {
                    TemplateToken::Class(class) => class.chars(),
                    TemplateToken::Any => pool.chars(),
                };
                char::from(self.pick(chars))
            })
            .collect()
    }

    // Callers only pass non-empty sets
    fn pick(&mut self, chars: &[u8]) -> u8 {
        chars[self.rng.gen_range(0..chars.len())]
    }
}
