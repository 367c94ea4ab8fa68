use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] easypost::EasyPostError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Api(e) if e.kind() == easypost::ErrorKind::Cancelled => 130,
            CliError::Api(e) if e.kind() == easypost::ErrorKind::Config => 2,
            _ => 1,
        }
    }
}
