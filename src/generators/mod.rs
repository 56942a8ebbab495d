// src/generators/mod.rs
pub mod config;
pub mod password;
pub mod strength;

pub use config::{GenerationConfig, ResolutionDefaults, MIN_PASSWORD_LENGTH};
pub use password::{CharacterPool, PasswordGenerator};
pub use strength::evaluate;
