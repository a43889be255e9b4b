//! UserSource trait and the HTTP implementation.
//!
//! The panel only talks to [`UserSource`], which keeps the network out of
//! the controller and lets tests plug in canned sources.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{UserId, UserRecord};

/// Why a user could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the response could not be read.
    #[error("getUser network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("getUser {status}")]
    Request { status: u16 },

    /// The body was not a user record.
    #[error("getUser invalid response: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status carried by a request error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Request { status } => Some(*status),
            _ => None,
        }
    }
}

/// Something that can produce a user record for an identifier.
///
/// Exactly one outbound call per invocation; implementations do not
/// retry, time out, or cache.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch(&self, id: UserId) -> Result<UserRecord, FetchError>;
}
