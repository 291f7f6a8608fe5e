//! Errors returned by repositories.

use thiserror::Error;

use crate::models::EntityKind;

/// Failure talking to the platform API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server confirmed that no entity with this name exists.
    #[error("{kind} {name} not found")]
    ModelNotFound { kind: EntityKind, name: String },

    /// TLS handshake rejected the server certificate.
    #[error("Received invalid SSL certificate from {url}: {reason}")]
    InvalidSslCert { url: String, reason: String },

    /// Non-success HTTP status, with the server's description when it sent one.
    #[error("Server error, status code: {status}, error code: {code}, message: {description}")]
    Http {
        status: u16,
        code: String,
        description: String,
    },

    /// Connection-level failure (DNS, refused connection, timeout).
    #[error("Error performing request: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::ModelNotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn invalid_ssl_cert(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSslCert {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModelNotFound { .. })
    }
}

/// Result alias for repository calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_kind_and_name() {
        let err = ApiError::not_found(EntityKind::Organization, "my-org");
        assert_eq!(err.to_string(), "Organization my-org not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_cert_displays_url() {
        let err = ApiError::invalid_ssl_cert("https://example.com", "self signed");
        let msg = err.to_string();
        assert!(msg.contains("Received invalid SSL certificate"));
        assert!(msg.contains("https://example.com"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn http_error_keeps_server_description() {
        let err = ApiError::Http {
            status: 400,
            code: "CF-OrganizationNameTaken".into(),
            description: "The organization name is taken: my-org".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("CF-OrganizationNameTaken"));
        assert!(msg.contains("The organization name is taken: my-org"));
    }
}
