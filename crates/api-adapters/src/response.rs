//! JSON envelopes: `{"status": "success", "data": ...}` on success,
//! `{"status": "fail" | "error", "message": ...}` on failure.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Success<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> Success<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl Success<()> {
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Failure<'a> {
    status: &'static str,
    message: &'a str,
}

impl<'a> Failure<'a> {
    /// The client is at fault (4xx).
    pub fn fail(message: &'a str) -> Self {
        Self {
            status: "fail",
            message,
        }
    }

    /// The server is at fault (5xx).
    pub fn error(message: &'a str) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}
