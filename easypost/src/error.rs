use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EasyPostError {
    #[error("invalid timestamp {input:?}: {reason}")]
    Format { input: String, reason: String },

    #[error("failed to decode response body: {source}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Remote(#[from] ApiError),

    #[error("request cancelled: {0}")]
    Cancelled(CancelReason),

    #[error("end of pagination")]
    EndOfPagination,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Coarse classification of an [`EasyPostError`].
///
/// Callers compare kinds rather than matching on error values, so the
/// taxonomy can grow payloads without breaking `==` checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    Decode,
    Remote,
    Cancelled,
    EndOfPagination,
    Transport,
    Encode,
    Config,
    InvalidRequest,
}

impl EasyPostError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EasyPostError::Format { .. } => ErrorKind::Format,
            EasyPostError::Decode { .. } => ErrorKind::Decode,
            EasyPostError::Remote(_) => ErrorKind::Remote,
            EasyPostError::Cancelled(_) => ErrorKind::Cancelled,
            EasyPostError::EndOfPagination => ErrorKind::EndOfPagination,
            EasyPostError::Transport(_) => ErrorKind::Transport,
            EasyPostError::Encode(_) => ErrorKind::Encode,
            EasyPostError::Config(_) => ErrorKind::Config,
            EasyPostError::InvalidRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    /// The remote error payload, if the server rejected the call.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            EasyPostError::Remote(e) => Some(e),
            _ => None,
        }
    }
}

/// Why an in-flight call was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The caller's cancellation token fired.
    Cancelled,
    /// The per-call deadline elapsed.
    DeadlineExceeded,
}

impl std::fmt::Display for CancelReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelReason::Cancelled => write!(f, "cancelled by caller"),
            CancelReason::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

/// A validation problem attributed to a single input field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-2xx response from the API.
///
/// `code` is `None` when the body was not a recognisable error envelope; in
/// that case `message` holds the raw body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}{}: {message}", code_suffix(.code))]
pub struct ApiError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
    pub errors: Vec<FieldError>,
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" {c}")).unwrap_or_default()
}

/// Status-code classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteErrorKind {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    Conflict,
    Unprocessable,
    RateLimited,
    Server,
    Other,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Vec<FieldError>>,
}

#[derive(Deserialize)]
struct WrappedErrorBody {
    error: ErrorBody,
}

impl ApiError {
    /// Build an error from a non-2xx status and its raw body.
    ///
    /// Accepts the envelope either bare or nested under `"error"`. A body
    /// that is neither falls back to the raw text as the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<WrappedErrorBody>(body)
            .map(|w| w.error)
            .or_else(|_| serde_json::from_str::<ErrorBody>(body))
            .ok()
            .filter(|b| b.code.is_some() || b.message.is_some());

        match parsed {
            Some(b) => Self {
                status,
                code: b.code,
                message: b.message.unwrap_or_default(),
                errors: b.errors.unwrap_or_default(),
            },
            None => Self {
                status,
                code: None,
                message: body.to_string(),
                errors: Vec::new(),
            },
        }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        match self.status {
            400 => RemoteErrorKind::BadRequest,
            401 => RemoteErrorKind::Unauthorized,
            402 => RemoteErrorKind::PaymentRequired,
            403 => RemoteErrorKind::Forbidden,
            404 => RemoteErrorKind::NotFound,
            409 => RemoteErrorKind::Conflict,
            422 => RemoteErrorKind::Unprocessable,
            429 => RemoteErrorKind::RateLimited,
            500..=599 => RemoteErrorKind::Server,
            _ => RemoteErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == RemoteErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, EasyPostError>;
