//! Generate and display the VibSDK deployment secrets.

use anyhow::Result;
use colored::Colorize;
use vibsdk_secrets::{GeneratedSecret, SecretPlan};

use crate::ui;

pub fn execute() -> Result<()> {
    println!("\n{}", "🔐 VibSDK Secret Generator".yellow().bold());
    println!("{}\n", ui::rule().yellow());

    println!("Generating cryptographically secure secrets for your VibSDK deployment...\n");

    let plan = SecretPlan::deployment();
    let secrets = plan.generate()?;
    tracing::debug!("Generated {} secrets", secrets.len());

    for secret in &secrets {
        ui::display_secret(secret);
    }

    print_next_steps();
    print_env_format(&secrets);

    println!("\n{}\n", ui::rule().yellow());
    println!("{}\n", "✅ Secrets generated successfully!".green());

    print_security_reminder();

    Ok(())
}

fn print_next_steps() {
    println!("\n{}\n", "📋 Next Steps:".yellow().bold());
    println!("1. Copy the secrets above");
    println!("2. Add them to your deployment configuration:");
    println!(
        "   {}",
        "• For \"Deploy to Cloudflare\" button: Enter during deployment flow".cyan()
    );
    println!("   {}", "• For manual deployment: Add to .prod.vars file".cyan());
    println!("   {}", "• For local development: Add to .dev.vars file".cyan());
    println!("\n3. Keep these secrets secure and never commit them to version control");
}

fn print_env_format(secrets: &[GeneratedSecret]) {
    println!("\n{}\n", "📝 .env Format:".yellow().bold());

    for secret in secrets {
        println!("{}", secret.env_line().cyan());
    }
}

fn print_security_reminder() {
    println!("{}", "⚠️  Security Reminder:".yellow().bold());
    println!("{}", "• Store these secrets securely".yellow());
    println!("{}", "• Never commit them to version control".yellow());
    println!("{}", "• Use different secrets for dev and production".yellow());
    println!("{}\n", "• Rotate secrets regularly".yellow());
}
