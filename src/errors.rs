use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Invalid pattern: {0}")]
    PatternError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("File read failed: {0}")]
    FileReadError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("Interactive input failed: {0}")]
    InputError(String),

    #[error("no files found matching the patterns")]
    NoMatches,

    #[error("no valid files found")]
    NoValidFiles,
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        PromptError::InputError(err.to_string())
    }
}
