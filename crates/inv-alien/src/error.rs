use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlienError {
    #[error("requested {requested} aliens but only {available} names are available")]
    NotEnoughNames { requested: usize, available: usize },

    #[error("alien name {0:?} appears more than once")]
    DuplicateName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AlienResult<T> = Result<T, AlienError>;
