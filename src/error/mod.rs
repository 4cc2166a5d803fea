use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The error type for every fallible stage of the route pipeline
///
/// Join misses and non-numeric altitudes are deliberately absent: unmatched
/// rows are dropped and failed coercions become missing values.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Malformed {document} document: {message}")]
    MalformedInput {
        code: u16,
        document: String,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Cannot read {}: {message}", .path.display())]
    Io {
        code: u16,
        path: PathBuf,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Export to {} failed: {message}", .path.display())]
    Export {
        code: u16,
        path: PathBuf,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Chart error: {message}")]
    Chart {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl RouteError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed-input error for the named document
    pub fn malformed_input(
        code: u16,
        document: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            code,
            document: document.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an input read error, classified by the I/O error kind
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::INPUT_NOT_FOUND, "file not found"),
            ErrorKind::PermissionDenied => (ErrorCode::INPUT_PERMISSION_DENIED, "permission denied"),
            _ => (ErrorCode::INPUT_GENERIC, "read failed"),
        };

        Self::Io {
            code,
            path: path.to_path_buf(),
            message: message.to_string(),
            source: None,
        }
        .with_source(err)
    }

    /// Create an export error for the given output path
    pub fn export(code: u16, path: &Path, message: impl Into<String>) -> Self {
        Self::Export {
            code,
            path: path.to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a chart error
    pub fn chart(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Chart {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::MalformedInput { source: src, .. }
            | Self::Io { source: src, .. }
            | Self::Export { source: src, .. }
            | Self::Chart { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::MalformedInput { message, .. }
            | Self::Io { message, .. }
            | Self::Export { message, .. }
            | Self::Chart { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::MalformedInput { .. } | Self::Io { .. } => 3,
            Self::Export { .. } | Self::Chart { .. } => 4,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::MalformedInput { code, .. }
            | Self::Io { code, .. }
            | Self::Export { code, .. }
            | Self::Chart { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::MalformedInput {
                document, message, ..
            } => format!("The {} document is malformed: {}", document, message),
            Self::Io { path, message, .. } => {
                format!("Could not read {}: {}", path.display(), message)
            }
            Self::Export { path, message, .. } => {
                format!("Could not write {}: {}", path.display(), message)
            }
            Self::Chart { message, path, .. } => match path {
                Some(p) => format!("Chart {} could not be rendered: {}", p.display(), message),
                None => format!("Chart could not be rendered: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        use std::error::Error as _;

        let mut msg = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Type alias for Results using RouteError
pub type Result<T> = std::result::Result<T, RouteError>;
