//! Terminal output helpers.

pub mod output;

pub use output::{display_secret, rule};
