//! Classification of HTTP status codes into fetch failures.

use reqwest::{Response, StatusCode};

use crate::error::FetchError;

/// Passes successful responses through; anything else becomes `FetchError::Http`.
pub fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(FetchError::Http {
        status,
        url: response.url().to_string(),
    })
}

/// A short hint for statuses that usually have a known cause on GitHub.
pub fn status_hint(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            Some("the GitHub API rate limit may be exhausted; try again later")
        }
        StatusCode::NOT_FOUND => Some("the repository or asset URL does not exist"),
        StatusCode::UNAUTHORIZED => Some("the server rejected the request as unauthenticated"),
        s if s.is_server_error() => Some("the server is having trouble; re-run the job"),
        _ => None,
    }
}
