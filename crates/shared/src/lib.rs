//! Shared types, errors, and configuration for Expensa.
//!
//! This crate provides common types used across all other crates:
//! - Typed integer IDs for the records served by the expense API
//! - Money with decimal precision and display rounding
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
