//! # Recap Common Library
//!
//! Shared code for the recap services:
//! - Error and result types
//! - TOML/environment configuration loading
//! - Logging configuration

pub mod config;
pub mod error;

pub use error::{Error, Result};
