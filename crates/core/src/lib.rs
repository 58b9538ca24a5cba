//! Parahash Core Library
//!
//! This crate provides the foundational utilities for the parahash CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management
//! - The hash representation shared by config and encoder

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, Overrides, Representation};
pub use error::{AppError, AppResult};
