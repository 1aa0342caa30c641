//! Error types for the gateway domain layer.
//!
//! This module defines two error types:
//!
//! - [`UpstreamError`] - Upstream REST transport/decode errors
//! - [`DomainError`] - Lookup and data-consistency errors
//!
//! Error conversion is automatic via `From` implementations, allowing `?`
//! to work across layer boundaries. Both upstream endpoints propagate
//! failures the same way: a failed fetch is always a typed error to the
//! caller, never silently degraded to an empty result.

use thiserror::Error;

// =============================================================================
// Upstream Errors
// =============================================================================

/// Upstream REST API errors.
///
/// These errors occur when fetching or decoding data from the
/// fantasy-league REST service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network-level failure (connect, read, TLS).
    #[error("Request to {endpoint} failed: {message}")]
    Transport {
        /// Endpoint that failed.
        endpoint: String,
        /// Error details.
        message: String,
    },

    /// Upstream answered with a non-success status code.
    #[error("Upstream returned {status} for {endpoint}")]
    Status {
        /// Endpoint that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body did not match the expected JSON shape.
    #[error("Failed to decode {endpoint} response: {message}")]
    Decode {
        /// Endpoint whose payload failed to decode.
        endpoint: String,
        /// Error details.
        message: String,
    },
}

// =============================================================================
// Domain Errors
// =============================================================================

/// Lookup and data-consistency errors.
///
/// These errors represent problems in the gateway's domain logic, such as
/// a related entity that the upstream roster does not contain.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No team with this id exists in the upstream roster.
    #[error("Team not found: {0}")]
    TeamNotFound(i32),

    /// Upstream fetch failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    // The conversion chain lets ? cross from the adapter into resolvers.
    #[test]
    fn test_error_conversion_chain() {
        let upstream_err = UpstreamError::Status {
            endpoint: "bootstrap-static".into(),
            status: 503,
        };
        let domain_err: DomainError = upstream_err.into();

        // The original endpoint and status are preserved
        assert!(domain_err.to_string().contains("bootstrap-static"));
        assert!(domain_err.to_string().contains("503"));
    }

    #[test]
    fn test_team_not_found_includes_id() {
        let err = DomainError::TeamNotFound(999);
        assert!(err.to_string().contains("999"));
    }
}
