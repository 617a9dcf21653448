//! Secret acquisition. The source is chosen once at startup: either the
//! single command-line argument, or one non-echoing terminal read.

use thiserror::Error;

use crate::secret::Secret;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no secret provided; an empty password is not accepted")]
    EmptySecret,
    #[error("password prompt failed: {0}")]
    PromptFailed(String),
}

/// Where the plaintext secret comes from.
pub enum InputSource {
    /// Secret supplied as the single command-line argument.
    Argv(String),
    /// One non-echoing read from the controlling terminal.
    InteractivePrompt,
}

impl InputSource {
    /// Reads the secret exactly once. Empty input is rejected from either
    /// source so an accidental bare Enter never yields hashes of "".
    pub fn read_secret(self) -> Result<Secret, InputError> {
        let secret = match self {
            InputSource::Argv(value) => Secret::new(value),
            InputSource::InteractivePrompt => {
                let value = rpassword::prompt_password("Password: ")
                    .map_err(|e| InputError::PromptFailed(format!("{e}")))?;
                Secret::new(value)
            }
        };
        if secret.is_empty() {
            return Err(InputError::EmptySecret);
        }
        Ok(secret)
    }
}
