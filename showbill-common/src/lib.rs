//! # Showbill Common Library
//!
//! Shared code for the Showbill booking directory:
//! - Database schema, models, and queries
//! - Configuration loading
//! - Error types
//! - Display formatting helpers

pub mod config;
pub mod db;
pub mod error;
pub mod human_time;

pub use error::{Error, Result};
