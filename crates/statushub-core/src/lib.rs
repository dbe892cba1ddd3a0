//! # statushub-core
//!
//! Shared foundation for StatusHub: configuration schemas, the unified
//! [`error::AppError`] type, and common domain types.

pub mod config;
pub mod error;
pub mod types;
