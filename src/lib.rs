// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::error::{AppError, ConfigurationError};
pub use crate::generators::{evaluate, GenerationConfig, PasswordGenerator};
