use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Student name must not be empty")]
    EmptyName,

    #[error("Duplicate student name: {0}")]
    DuplicateName(String),

    #[error("Marks out of range (0-100): {0}")]
    MarksOutOfRange(u8),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
