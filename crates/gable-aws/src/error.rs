//! Error types for gable-aws

use thiserror::Error;

/// Result type alias using gable-aws's error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while declaring the website stack
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration resolution or hostname validation failure
    #[error("Configuration error: {0}")]
    Config(#[from] gable_core::Error),

    /// Program assembly failure
    #[error("Declaration error: {0}")]
    Program(#[from] gable_engine::ProgramError),
}
