//! Failure taxonomy for a fetch run.
//!
//! Every step of the pipeline aborts the run on failure. Errors travel as
//! `anyhow::Error`; the variants below sit at the root of the chain so the
//! CLI can recover them with `downcast_ref` and pick an exit code.

use reqwest::StatusCode;

/// Errors that end a fetch run.
#[derive(Debug)]
pub enum FetchError {
    /// Wrong command-line usage
    Usage(String),
    /// No matching tag, asset, or extracted directory
    NotFound(String),
    /// Release listing could not be decoded
    Parse(String),
    /// Transport-level failure talking to the server
    Connection(String),
    /// Server answered with a non-success status
    Http { status: StatusCode, url: String },
    /// Archive could not be read or unpacked
    Extract(String),
    /// Rename target is already present
    AlreadyExists(String),
}

impl FetchError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            FetchError::Usage(_) => 1,
            FetchError::NotFound(_) => 2,
            FetchError::Parse(_) => 3,
            FetchError::Connection(_) => 4,
            FetchError::Http { .. } => 5,
            FetchError::Extract(_) => 6,
            FetchError::AlreadyExists(_) => 7,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Usage(msg) => write!(f, "{}", msg),
            FetchError::NotFound(msg) => write!(f, "Not found: {}", msg),
            FetchError::Parse(msg) => write!(f, "Failed to parse release listing: {}", msg),
            FetchError::Connection(msg) => write!(f, "Connection failed: {}", msg),
            FetchError::Http { status, url } => {
                write!(f, "HTTP {} from {}", status.as_u16(), url)
            }
            FetchError::Extract(msg) => write!(f, "Failed to extract archive: {}", msg),
            FetchError::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Finds the `FetchError` anywhere in an anyhow chain.
pub fn find_fetch_error(err: &anyhow::Error) -> Option<&FetchError> {
    err.chain().find_map(|cause| cause.downcast_ref::<FetchError>())
}

/// Exit code for an arbitrary pipeline error. Failures outside the
/// taxonomy (plain filesystem errors) exit with 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    find_fetch_error(err).map(FetchError::exit_code).unwrap_or(1)
}
