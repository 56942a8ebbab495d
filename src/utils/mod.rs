// src/utils/mod.rs
mod format;
mod io;

pub use format::*;
pub use io::*;
