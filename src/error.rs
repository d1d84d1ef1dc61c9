//! Error types for the authorization engine

use crate::types::{Action, Resource};
use http::StatusCode;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Authorization engine errors
///
/// [`AuthzError::Forbidden`] is the expected outcome of a denied request;
/// the other variants signal engine misuse or failure and are never part of
/// normal evaluation.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Request denied by policy
    #[error(transparent)]
    Forbidden(#[from] ForbiddenError),

    /// Malformed request input or scope resolution output
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Policy store failure during registration
    #[error("Policy store error: {0}")]
    Store(String),
}

impl AuthzError {
    /// HTTP status classification for transport layers. Denials map to
    /// `403 Forbidden`; everything else is an internal error.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthzError::Forbidden(e) => e.status(),
            AuthzError::InvalidRequest(_) | AuthzError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// A denied request: who was refused, on what, doing what, and why
///
/// Constructed only by the enforcer. Carries request identifiers and a
/// fixed reason; never the contents of any consulted policy or record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenError {
    /// Identity of the refused user
    pub user_id: Uuid,
    /// Resource the request was about
    pub resource: Resource,
    /// Action the request attempted
    pub action: Action,
    /// Denial reason, may be empty
    pub reason: String,
}

impl ForbiddenError {
    /// Create a new denial
    pub fn new(
        user_id: Uuid,
        resource: Resource,
        action: Action,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            resource,
            action,
            reason: reason.into(),
        }
    }

    /// HTTP status classification: always `403 Forbidden`
    pub fn status(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }
}

impl fmt::Display for ForbiddenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.reason.is_empty() {
            return write!(
                f,
                "forbidden: user {} cannot {} {} - {}",
                self.user_id, self.action, self.resource, self.reason
            );
        }
        write!(
            f,
            "forbidden: user {} cannot {} {}",
            self.user_id, self.action, self.resource
        )
    }
}

impl std::error::Error for ForbiddenError {}
