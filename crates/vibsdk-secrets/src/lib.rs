//! # VibSDK Secrets
//!
//! Secret generation for VibSDK deployments.
//!
//! Provides:
//! - Random alphanumeric string generation backed by the operating system
//!   CSPRNG
//! - The fixed deployment secret plan (JWT signing key, webhook secret,
//!   secrets encryption key)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generator;
pub mod plan;

pub use plan::{GeneratedSecret, SecretPlan, SecretSpec};
