//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting or retrieving a user id and
//! queueing one-shot flash messages.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const FLASHES_KEY: &str = "flashes";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    ///
    /// The session is renewed first so a login never continues an
    /// anonymous session's identity.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.value())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current user id from the session, if present.
    ///
    /// A cookie holding an unreadable id is treated as logged out rather
    /// than failing the request.
    pub fn user_id(&self) -> Option<UserId> {
        match self.0.get::<i32>(USER_ID_KEY) {
            Ok(id) => id.map(UserId::new),
            Err(error) => {
                tracing::warn!(%error, "unreadable user id in session cookie");
                None
            }
        }
    }

    /// Drop the authenticated user while keeping queued flash messages.
    pub fn clear_user(&self) {
        self.0.remove(USER_ID_KEY);
    }

    /// Queue a one-shot message for the next rendered page.
    pub fn push_flash(&self, message: &str) -> Result<(), Error> {
        let mut flashes = self.peek_flashes();
        flashes.push(message.to_owned());
        self.0
            .insert(FLASHES_KEY, flashes)
            .map_err(|error| Error::internal(format!("failed to queue flash message: {error}")))
    }

    /// Remove and return every queued flash message.
    pub fn take_flashes(&self) -> Vec<String> {
        let flashes = self.peek_flashes();
        self.0.remove(FLASHES_KEY);
        flashes
    }

    fn peek_flashes(&self) -> Vec<String> {
        match self.0.get::<Vec<String>>(FLASHES_KEY) {
            Ok(Some(flashes)) => flashes,
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "unreadable flash queue in session cookie");
                Vec::new()
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
