use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Library error: {0}")]
    Library(#[from] core_library::LibraryError),
}

impl CoreError {
    /// The update or delete targeted an entry that no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::Library(e) if e.is_not_found())
    }

    /// A required field was missing; the form should re-prompt.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::Library(e) if e.is_invalid_input())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
