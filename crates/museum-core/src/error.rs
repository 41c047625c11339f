//! Service error type
//!
//! Every failure a review or upload status call can hit is an [`AppError`]. The HTTP
//! layer never inspects variants directly; it asks [`ErrorMetadata`] how to render them.

use std::fmt::Write as _;

/// Level an error is logged at when it reaches the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Caller mistakes
    Debug,
    Warn,
    /// Failures on our side
    Error,
}

/// How an error presents itself to clients and to the logs
pub trait ErrorMetadata {
    fn http_status_code(&self) -> u16;

    /// Stable code clients can branch on, e.g. `SKIN_NOT_FOUND`
    fn error_code(&self) -> &'static str;

    /// Whether repeating the same request may succeed
    fn is_recoverable(&self) -> bool;

    fn suggested_action(&self) -> Option<&'static str>;

    fn client_message(&self) -> String;

    /// Sensitive errors never expose their details outside the process
    fn is_sensitive(&self) -> bool;

    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not find skin with md5 \"{0}\"")]
    SkinNotFound(String),

    /// A status column held a value this build does not know about
    #[error("Unrecognized {column} \"{value}\" in store")]
    UnknownStatus { column: &'static str, value: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{message}")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(format!("Validation error: {}", err))
    }
}

/// Rendering rules shared by every instance of a variant
struct Presentation {
    status: u16,
    code: &'static str,
    recoverable: bool,
    action: Option<&'static str>,
    sensitive: bool,
    level: LogLevel,
}

const CALLER_ERROR: Presentation = Presentation {
    status: 400,
    code: "INVALID_INPUT",
    recoverable: false,
    action: Some("Check the request body; upload ids must be positive integers"),
    sensitive: false,
    level: LogLevel::Debug,
};

const SKIN_NOT_FOUND: Presentation = Presentation {
    status: 404,
    code: "SKIN_NOT_FOUND",
    recoverable: false,
    action: Some("Check the md5; the skin may not have finished processing yet"),
    sensitive: false,
    level: LogLevel::Debug,
};

const UNAUTHORIZED: Presentation = Presentation {
    status: 401,
    code: "UNAUTHORIZED",
    recoverable: false,
    action: Some("Send a reviewer token or the master API key as a bearer credential"),
    sensitive: false,
    level: LogLevel::Debug,
};

const STORE_UNAVAILABLE: Presentation = Presentation {
    status: 503,
    code: "STORE_UNAVAILABLE",
    recoverable: true,
    action: Some("Retry after a short delay"),
    sensitive: true,
    level: LogLevel::Error,
};

const CORRUPT_STATUS: Presentation = Presentation {
    status: 500,
    code: "CORRUPT_STATUS",
    recoverable: false,
    action: None,
    sensitive: true,
    level: LogLevel::Error,
};

const INTERNAL: Presentation = Presentation {
    status: 500,
    code: "INTERNAL_ERROR",
    recoverable: true,
    action: Some("Retry after a short delay"),
    sensitive: true,
    level: LogLevel::Error,
};

impl AppError {
    fn presentation(&self) -> &'static Presentation {
        match self {
            AppError::Database(_) => &STORE_UNAVAILABLE,
            AppError::InvalidInput(_) => &CALLER_ERROR,
            AppError::SkinNotFound(_) => &SKIN_NOT_FOUND,
            AppError::UnknownStatus { .. } => &CORRUPT_STATUS,
            AppError::Internal(_) | AppError::InternalWithSource { .. } => &INTERNAL,
            AppError::Unauthorized(_) => &UNAUTHORIZED,
        }
    }

    /// Variant name, reported alongside details outside production
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::SkinNotFound(_) => "SkinNotFound",
            AppError::UnknownStatus { .. } => "UnknownStatus",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Internal",
            AppError::Unauthorized(_) => "Unauthorized",
        }
    }

    /// The error followed by its source chain, at most five causes deep
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();
        let mut causes = std::iter::successors(self.source(), |&err| err.source());
        for cause in causes.by_ref().take(5) {
            let _ = write!(details, "\n  Caused by: {}", cause);
        }
        if causes.next().is_some() {
            details.push_str("\n  ... (truncated)");
        }
        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        self.presentation().status
    }

    fn error_code(&self) -> &'static str {
        self.presentation().code
    }

    fn is_recoverable(&self) -> bool {
        self.presentation().recoverable
    }

    fn suggested_action(&self) -> Option<&'static str> {
        self.presentation().action
    }

    fn is_sensitive(&self) -> bool {
        self.presentation().sensitive
    }

    fn log_level(&self) -> LogLevel {
        self.presentation().level
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Skin store is unavailable".to_string(),
            AppError::UnknownStatus { .. }
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => "Internal server error".to_string(),
            AppError::SkinNotFound(_) => self.to_string(),
            AppError::InvalidInput(msg) | AppError::Unauthorized(msg) => msg.clone(),
        }
    }
}
