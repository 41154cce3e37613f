//! The boundary between the directory and whatever holds the users.
//!
//! [`UserGateway`] is the whole capability set the directory relies on. Two
//! implementations exist and one is picked when the store is composed:
//! - [`HttpGateway`]: the remote users API over HTTP.
//! - [`InMemoryGateway`]: a local vector, used for demos and tests.
//!
//! Every failure, whatever its origin, comes back as a [`RequestError`] and is
//! announced once on the notification channel before it is returned.

mod memory;
mod remote;
pub mod seed;

use std::future::Future;

pub use memory::InMemoryGateway;
pub use remote::HttpGateway;

use crate::http::HttpError;
use crate::model::{CreateAck, PageResponse, UpdateAck, User, UserDraft};
use crate::notify::{Notification, Notifier};

/// Message used when a failed response carries no readable explanation.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The request never produced a response.
    Network,
    /// The collaborator answered with a non-success status.
    Status(u16),
    /// The requested record does not exist.
    NotFound,
    /// A success response whose body could not be understood.
    Decode,
}

/// The single error shape produced by gateways.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    kind: RequestErrorKind,
    message: String,
}

impl RequestError {
    pub fn new(kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::NotFound, message)
    }

    /// Maps a non-success status to an error, preferring the body's message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let kind = if status == 404 {
            RequestErrorKind::NotFound
        } else {
            RequestErrorKind::Status(status)
        };
        Self::new(
            kind,
            message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned()),
        )
    }

    pub fn kind(&self) -> RequestErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == RequestErrorKind::NotFound
    }
}

impl From<HttpError> for RequestError {
    fn from(err: HttpError) -> Self {
        Self::new(RequestErrorKind::Network, err.to_string())
    }
}

pub type GatewayResult<T> = Result<T, RequestError>;

/// Capability set over the user collection.
pub trait UserGateway: Clone + Send + Sync + 'static {
    /// One page of users, 1-based.
    fn list_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = GatewayResult<PageResponse>> + Send;

    fn get_one(&self, id: u64) -> impl Future<Output = GatewayResult<User>> + Send;

    fn create(&self, draft: &UserDraft) -> impl Future<Output = GatewayResult<CreateAck>> + Send;

    /// Merges the fields present in `draft` into the stored record.
    fn update(
        &self,
        id: u64,
        draft: &UserDraft,
    ) -> impl Future<Output = GatewayResult<UpdateAck>> + Send;

    fn delete(&self, id: u64) -> impl Future<Output = GatewayResult<()>> + Send;
}

/// Emits the failure notification for `result`, if any, and passes it through.
fn announce<T, N: Notifier>(notifier: &N, result: GatewayResult<T>) -> GatewayResult<T> {
    if let Err(err) = &result {
        log::error!("gateway request failed: {err}");
        notifier.notify(Notification::failure(err.message()));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_body_message() {
        let err = RequestError::from_status(400, Some("Missing password".to_owned()));
        assert_eq!(err.kind(), RequestErrorKind::Status(400));
        assert_eq!(err.to_string(), "Missing password");
    }

    #[test]
    fn test_from_status_falls_back_to_generic_message() {
        let err = RequestError::from_status(500, None);
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_404_is_not_found() {
        assert!(RequestError::from_status(404, None).is_not_found());
    }

    #[test]
    fn test_announce_notifies_only_on_failure() {
        let (notifier, receiver) = crate::ChannelNotifier::channel();

        let ok: GatewayResult<u8> = announce(&notifier, Ok(1));
        assert!(ok.is_ok());
        assert!(receiver.is_empty());

        let failed: GatewayResult<u8> = announce(&notifier, Err(RequestError::not_found("gone")));
        assert!(failed.is_err());
        let notes: Vec<_> = receiver.drain().collect();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].description, "gone");
        assert!(notes[0].is_destructive());
    }
}
