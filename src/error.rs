use thiserror::Error;

/// Exit codes reported by the ftlconf binary
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL: i32 = 1;
    pub const USER_ERROR: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
}

#[derive(Error, Debug)]
pub enum FtlConfError {
    #[error("Invalid key '{0}': keys may not contain '=' or line breaks")]
    InvalidKey(String),

    #[error("Invalid value '{0}': values may not contain line breaks")]
    InvalidValue(String),

    #[error("FTL binary not found: {0}")]
    FtlBinaryNotFound(String),

    #[error("FTL --config exited with status {status}: {stderr}")]
    ConfigBackend { status: i32, stderr: String },

    #[error("FTL --config produced non-UTF-8 output")]
    ConfigOutputNotUtf8,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FtlConfError {
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors (bad key/value input)
            FtlConfError::InvalidKey(_) | FtlConfError::InvalidValue(_) => exit_codes::USER_ERROR,

            // Not found errors
            FtlConfError::FtlBinaryNotFound(_) => exit_codes::NOT_FOUND,

            // Internal errors
            FtlConfError::ConfigBackend { .. }
            | FtlConfError::ConfigOutputNotUtf8
            | FtlConfError::Io(_)
            | FtlConfError::Json(_) => exit_codes::INTERNAL,
        }
    }
}

pub type Result<T> = std::result::Result<T, FtlConfError>;
