use thiserror::Error;

use crate::hooks::HookError;

/// Errors that can occur during tokenization.
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A caller-supplied tokenizer or lemmatizer failed. The hook's own error
    /// is carried as-is and can be recovered with `downcast_ref`.
    #[error(transparent)]
    Hook(HookError),
}

impl TokenizeError {
    /// Returns the caller's hook error, if this failure came from one.
    pub fn hook_error(&self) -> Option<&HookError> {
        match self {
            TokenizeError::Hook(err) => Some(err),
            TokenizeError::InvalidConfig(_) => None,
        }
    }
}
