//! Colored output for generated secrets.

use colored::Colorize;
use vibsdk_secrets::GeneratedSecret;

/// Width of the banner rule lines.
const RULE_WIDTH: usize = 50;

/// Print a labeled secret block: bold blue name, cyan description, green value.
pub fn display_secret(secret: &GeneratedSecret) {
    println!("\n{}", secret.name().as_str().blue().bold());
    println!("{}", secret.description().cyan());
    println!("{}", secret.value().green());
}

/// A horizontal rule matching the banner width.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
