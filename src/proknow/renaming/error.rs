use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Error type covering the different failure cases that can occur while the
/// tool reads the workbook, talks to ProKnow, or synchronises rules.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Wrapper for IO failures such as reading files or the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a sheet does not follow the column-per-rule layout.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Two columns declare the same desired structure name.
    #[error("multiple columns detected with desired structure name '{value}'")]
    DuplicateRuleName { value: String },

    /// A name is used by more than one rule.
    #[error("found duplicate value '{value}'; already used by '{owner}'")]
    DuplicateValue { value: String, owner: String },

    /// Extraction failure annotated with the workbook it came from.
    #[error("failed to read rules in '{}' workbook: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: Box<SyncError>,
    },

    /// The operator declined the confirmation prompt.
    #[error("synchronization aborted")]
    UserAborted,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// ProKnow returned a non-2xx status code.
    #[error("ProKnow API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The credentials file could not be used to authenticate.
    #[error("invalid credentials file '{}': {reason}", path.display())]
    InvalidCredentials { path: PathBuf, reason: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl SyncError {
    /// Short operator-facing summary of the failure. The full message is
    /// available through [`detail`](Self::detail).
    pub fn headline(&self) -> String {
        match self {
            SyncError::Workbook { path, .. } => {
                format!("Failed to read rules in '{}' workbook", path.display())
            }
            SyncError::UserAborted => "Synchronization aborted".to_string(),
            SyncError::Transport(_) | SyncError::Api { .. } => {
                "Failed to communicate with ProKnow".to_string()
            }
            SyncError::InvalidCredentials { .. } => "Failed to load credentials".to_string(),
            other => other.to_string(),
        }
    }

    /// Additional context printed under the headline, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            SyncError::Workbook { source, .. } => Some(source.to_string()),
            SyncError::UserAborted => None,
            SyncError::Transport(_) | SyncError::Api { .. } | SyncError::InvalidCredentials { .. } => {
                Some(self.to_string())
            }
            _ => None,
        }
    }
}
