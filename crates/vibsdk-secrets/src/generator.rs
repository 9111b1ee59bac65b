//! Random string generation backed by the operating system CSPRNG.

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// The 62-character alphabet used for generated secrets.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random alphanumeric string of the given length.
///
/// Every character is drawn independently and uniformly from [`ALPHABET`].
/// The `Alphanumeric` distribution rejection-samples internally, so no
/// symbol is favored over another.
///
/// # Panics
///
/// Aborts the process if the operating system random source is unavailable.
/// There is no fallback to a weaker generator.
#[must_use]
pub fn alphanumeric(length: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
