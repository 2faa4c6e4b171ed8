/// Domain module containing the mood journal data model
///
/// This module defines the core entities (MoodEntry, MoodLevel) and their
/// validation rules, plus the static display catalogs.

pub mod catalog;
pub mod entry;
pub mod types;

// Re-export public types for easy access
pub use catalog::*;
pub use entry::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid mood '{0}'. Valid options: Great, Good, Okay, Low, Bad")]
    InvalidMood(String),

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
