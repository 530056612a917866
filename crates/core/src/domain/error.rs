// Domain Error Types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Location has no parent directory: {}", .0.display())]
    InvalidLocation(PathBuf),

    #[error("Invalid process id: {0}")]
    InvalidProcessId(u32),

    #[error("Platform label must not be empty")]
    EmptyPlatform,
}

pub type Result<T> = std::result::Result<T, DomainError>;
