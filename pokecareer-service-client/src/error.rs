use thiserror::Error;

/// An error for a transport round trip to the career service that never
/// produced a response.
///
/// Callers recover by reloading the full career state from the service.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct NetworkError {
    msg: String,
}

impl NetworkError {
    pub fn new<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self { msg: msg.into() }
    }
}

/// An error for a request the career service rejected outright, such as a
/// missing auth token or malformed input.
///
/// Not recoverable automatically; local state is left untouched.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct RequestValidationError {
    msg: String,
}

impl RequestValidationError {
    pub fn new<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self { msg: msg.into() }
    }
}
