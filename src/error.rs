use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Non-success HTTP status from one of the two endpoints
    #[error("API request failed: {0}")]
    ApiError(String),

    /// A payload arrived but did not have the expected shape
    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Raw mode or the alternate screen could not be set up
    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type RosterResult<T> = Result<T, RosterError>;

/// Attach a short description to a foreign error on its way up.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> RosterResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> RosterResult<T> {
        self.map_err(|e| RosterError::Unknown(format!("{}: {}", msg, e)))
    }
}

#[macro_export]
macro_rules! roster_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::RosterError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::RosterError::$error_type(format!($fmt, $($arg)*))
    };
}
