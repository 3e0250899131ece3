//! Core types and utilities for the Muscadine Box price service
//!
//! This crate provides shared types used across all components:
//! - Asset and price snapshot types
//! - History query validation helpers
//! - Service configuration
//! - Error taxonomy

pub mod types;
pub mod history;
pub mod config;
pub mod errors;

pub use types::*;
pub use history::*;
pub use config::*;
pub use errors::*;
