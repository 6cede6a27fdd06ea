use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(_: env::VarError) -> Self {
        Self::env_var_error()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    pub fn env_var_error() -> Self {
        Self {
            code: 1,
            message: "environment variable error".into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self {
            code: 2,
            message: message.into(),
        }
    }

    pub fn reqwest_error(err: reqwest::Error) -> Self {
        tracing::warn!("request to directions provider failed: {}", err);

        Self {
            code: 3,
            message: "reqwest error".into(),
        }
    }

    pub fn upstream_error() -> Self {
        Self {
            code: 4,
            message: "upstream error".into(),
        }
    }

    pub fn unexpected_error() -> Self {
        Self {
            code: 5,
            message: "unexpected error".into(),
        }
    }

    pub fn invalid_input_error() -> Self {
        Self {
            code: 101,
            message: "invalid input".into(),
        }
    }

    pub fn no_route_error() -> Self {
        Self {
            code: 102,
            message: "no route found".into(),
        }
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_no_route_error(&self) -> bool {
        self.code == 102
    }

    pub fn is_internal(&self) -> bool {
        (1..=99).contains(&self.code)
    }
}
