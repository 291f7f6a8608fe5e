//! Error types for cumulus operations.
//!
//! This module defines [`CumulusError`], the primary error type used
//! throughout the application, the [`ErrorKind`] classification the runner
//! and commands use to decide between aborting, warning and continuing, and
//! a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Repository failures arrive as [`ApiError`] and keep their variant so
//!   commands can tell "not found" apart from everything else
//! - Precondition failures come from requirements and never reach a
//!   command's run step
//! - Use `anyhow::Error` (via `CumulusError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::api::ApiError;

/// Core error type for cumulus operations.
#[derive(Debug, Error)]
pub enum CumulusError {
    /// Arguments did not match the command's usage.
    #[error("Incorrect Usage: {message}")]
    Usage { message: String },

    /// No access token in the session.
    #[error("Not logged in. Use 'cumulus auth USERNAME PASSWORD' to log in.")]
    NotAuthenticated,

    /// No organization targeted.
    #[error("No org targeted, use 'cumulus target -o ORG' to target an org.")]
    NoOrganizationTargeted,

    /// No space targeted.
    #[error("No space targeted, use 'cumulus target -s SPACE' to target a space.")]
    NoSpaceTargeted,

    /// No API endpoint configured.
    #[error("No API endpoint set. Use 'cumulus api URL' to set an endpoint.")]
    NoApiEndpoint,

    /// Requested command is not in the registry.
    #[error("'{name}' is not a registered command. See 'cumulus help'")]
    UnknownCommand { name: String },

    /// A command asked for something its requirements or argument parse never produced.
    #[error("{what} was not resolved before running the command")]
    Unresolved { what: &'static str },

    /// Neither `CUMULUS_HOME` nor a home directory is available.
    #[error("Could not determine a home directory for the session file. Set CUMULUS_HOME or pass --config.")]
    NoHomeDirectory,

    /// Failed to parse the session file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Repository failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How a failure is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed arguments; always local.
    Usage,
    /// Not authenticated or not targeted; local state check.
    Precondition,
    /// Server confirmed absence of a named entity.
    NotFound,
    /// TLS trust failure; always paired with a remediation tip.
    TransportSecurity,
    /// Anything else; message passed through verbatim.
    Unclassified,
}

impl CumulusError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage { .. } | Self::UnknownCommand { .. } => ErrorKind::Usage,
            Self::NotAuthenticated
            | Self::NoOrganizationTargeted
            | Self::NoSpaceTargeted
            | Self::NoApiEndpoint => ErrorKind::Precondition,
            Self::Api(ApiError::ModelNotFound { .. }) => ErrorKind::NotFound,
            Self::Api(ApiError::InvalidSslCert { .. }) => ErrorKind::TransportSecurity,
            _ => ErrorKind::Unclassified,
        }
    }

    /// Remediation hint shown under the failure, if the kind has one.
    pub fn tip(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::TransportSecurity => Some(
                "TIP: Use 'cumulus api --skip-ssl-validation' to continue with an insecure API endpoint",
            ),
            _ => None,
        }
    }
}

/// Result type alias for cumulus operations.
pub type Result<T> = std::result::Result<T, CumulusError>;
