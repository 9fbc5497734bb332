// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
#![warn(rust_2018_idioms)]

pub mod data;
pub mod engine;
pub mod grid;
pub mod levels;
pub mod parser;
pub mod session;

use std::error::Error;

/// Source of level text, the seam between the engine and however levels are
/// packaged. Indices are 0-based; selection input is 1-based.
pub trait LoadLevel {
    fn load_level(&self, index: usize) -> Result<String, Box<dyn Error>>;

    /// Number of installed levels; `select_level` accepts `1..=level_count()`.
    fn level_count(&self) -> usize;
}
