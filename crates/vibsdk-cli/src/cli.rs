//! CLI structure and dispatch.

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "vibsdk-secrets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate deployment secrets for VibSDK", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        crate::commands::generate::execute()
    }
}
