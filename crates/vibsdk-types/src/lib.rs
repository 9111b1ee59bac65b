//! # VibSDK Types
//!
//! Core types shared across the VibSDK secret generator crates.
//!
//! This crate provides:
//!
//! - A validated [`SecretName`] identifier for secret role labels
//! - The [`VibsdkError`] error type and [`Result`] alias
//!
//! ## Example
//!
//! ```
//! use vibsdk_types::SecretName;
//!
//! let name = SecretName::new("JWT_SECRET").unwrap();
//! assert_eq!(name.as_str(), "JWT_SECRET");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;

// Re-export common types for convenience
pub use errors::{Result, VibsdkError};
pub use identifiers::SecretName;
