//! Application error types using thiserror
//!
//! Error hierarchy:
//! - InputError: Console input that could not be gathered
//! - FeedError: Issues with package feed communication
//! - ExportError: Failures writing the package list files
//! - BatchError: Failures reading the deletion batch file

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Console input related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Package feed related errors
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Result export related errors
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Deletion batch related errors
    #[error(transparent)]
    Batch(#[from] BatchError),
}

impl AppError {
    /// Short category name shown in fatal error banners
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Input(e) => e.kind(),
            AppError::Feed(e) => e.kind(),
            AppError::Export(e) => e.kind(),
            AppError::Batch(e) => e.kind(),
        }
    }
}

/// Errors related to reading interactive input
#[derive(Error, Debug)]
pub enum InputError {
    /// The input stream closed before a valid value was supplied
    #[error("input ended before a valid value was entered")]
    EndOfInput,

    /// Reading from or writing to the console failed
    #[error("failed to access the console")]
    Console {
        #[source]
        source: std::io::Error,
    },

    /// A value passed validation but could not be converted
    #[error("invalid value '{value}': {message}")]
    InvalidValue { value: String, message: String },
}

/// Errors related to package feed communication
#[derive(Error, Debug)]
pub enum FeedError {
    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    /// A feed URL could not be built
    #[error("invalid feed URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The request failed before a response was received
    #[error("{kind} failure while requesting {url}: {message}")]
    Transport {
        url: String,
        kind: &'static str,
        message: String,
    },

    /// The feed answered with a non-success status
    #[error("feed returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The feed answered with a payload that could not be understood
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Errors related to writing the exported package list
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory does not exist
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Writing an output file failed
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the deletion batch file
#[derive(Error, Debug)]
pub enum BatchError {
    /// Reading the batch file failed
    #[error("failed to read package list {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for InputError {
    fn from(source: std::io::Error) -> Self {
        InputError::Console { source }
    }
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        AppError::Input(InputError::Console { source })
    }
}

impl InputError {
    /// Creates a new InvalidValue error
    pub fn invalid_value(value: impl Into<String>, message: impl Into<String>) -> Self {
        InputError::InvalidValue {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Short category name
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::EndOfInput => "end-of-input",
            InputError::Console { .. } => "console",
            InputError::InvalidValue { .. } => "invalid-input",
        }
    }
}

impl FeedError {
    /// Creates a new Transport error classified from a reqwest error
    pub fn transport(url: impl Into<String>, source: &reqwest::Error) -> Self {
        FeedError::Transport {
            url: url.into(),
            kind: transport_kind(source),
            message: source.to_string(),
        }
    }

    /// Creates a new Status error
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        FeedError::Status {
            url: url.into(),
            status,
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        FeedError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidUrl error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        FeedError::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Short category name
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::ClientBuild { .. } => "http-client",
            FeedError::InvalidUrl { .. } => "invalid-url",
            FeedError::Transport { kind, .. } => *kind,
            FeedError::Status { .. } => "http-status",
            FeedError::InvalidResponse { .. } => "invalid-response",
        }
    }
}

impl ExportError {
    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Write {
            path: path.into(),
            source,
        }
    }

    /// Short category name
    pub fn kind(&self) -> &'static str {
        match self {
            ExportError::DirectoryNotFound { .. } => "output-directory",
            ExportError::Write { .. } => "file-write",
        }
    }
}

impl BatchError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BatchError::Read {
            path: path.into(),
            source,
        }
    }

    /// Short category name
    pub fn kind(&self) -> &'static str {
        "batch-file-read"
    }
}

/// Classify a transport failure into a short category name
pub fn transport_kind(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_builder() {
        "builder"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else if error.is_request() {
        "request"
    } else {
        "transport"
    }
}
