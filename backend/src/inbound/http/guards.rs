//! Request guards gating handlers on session state.
//!
//! The guards are extractors, so a route declares its access rule in its
//! signature and the handler body never re-checks it:
//!
//! - [`Authenticated`] rejects anonymous requests with a flash message and
//!   a redirect to the login view.
//! - [`Anonymous`] redirects already-authenticated requests to the home
//!   view, keeping them off the login and registration forms.
//! - [`CurrentUser`] attaches the full account for the session's user id,
//!   or `None`; it never gates access by itself.

use std::fmt;

use actix_web::dev::Payload;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Flash shown when an anonymous request hits a guarded route.
pub const LOGIN_REQUIRED_MESSAGE: &str = "You must log in first.";

/// A `303 See Other` response to the given location.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Guard failure carrying the redirect target.
///
/// Implements [`ResponseError`] so a failed extraction becomes the redirect
/// itself rather than an error page.
#[derive(Debug, Clone, Copy)]
pub struct GuardRedirect {
    location: &'static str,
}

impl GuardRedirect {
    const fn to_login() -> Self {
        Self { location: "/login" }
    }

    const fn to_home() -> Self {
        Self { location: "/" }
    }
}

impl fmt::Display for GuardRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "redirecting to {}", self.location)
    }
}

impl ResponseError for GuardRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        see_other(self.location)
    }
}

/// Proof that the request carries a valid session.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated {
    /// The session's user id, for handlers that only need the identifier.
    pub user_id: UserId,
}

impl FromRequest for Authenticated {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session_fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = session_fut.await?;
            match session.user_id() {
                Some(user_id) => Ok(Self { user_id }),
                None => {
                    session.push_flash(LOGIN_REQUIRED_MESSAGE)?;
                    Err(GuardRedirect::to_login().into())
                }
            }
        })
    }
}

/// Proof that the request carries no session.
#[derive(Debug, Clone, Copy)]
pub struct Anonymous;

impl FromRequest for Anonymous {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session_fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = session_fut.await?;
            if session.user_id().is_some() {
                Err(GuardRedirect::to_home().into())
            } else {
                Ok(Self)
            }
        })
    }
}

/// The account behind the request's session, if any.
///
/// A session whose user id no longer resolves (for example after the store
/// was reset under a live cookie) attaches as `None` rather than failing.
pub struct CurrentUser(pub Option<User>);

fn map_lookup_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user lookup unavailable: {message}"))
        }
        other => Error::internal(format!("user lookup failed: {other}")),
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let session_fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = session_fut.await?;
            let Some(user_id) = session.user_id() else {
                return Ok(Self(None));
            };
            let state =
                state.ok_or_else(|| Error::internal("HttpState missing from app data"))?;
            let user = state
                .users
                .find_by_id(user_id)
                .await
                .map_err(map_lookup_error)?;
            if user.is_none() {
                tracing::warn!(%user_id, "session user id no longer resolves");
            }
            Ok(Self(user))
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use super::*;
    use crate::domain::ErrorCode;

    fn guarded_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::fixture()))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/private",
                web::get().to(|guard: Authenticated| async move {
                    HttpResponse::Ok().body(guard.user_id.to_string())
                }),
            )
            .route(
                "/public-only",
                web::get().to(|_guard: Anonymous| async { HttpResponse::Ok().finish() }),
            )
            .route(
                "/whoami",
                web::get().to(|user: CurrentUser| async move {
                    let body = user
                        .0
                        .map_or_else(|| "anonymous".to_owned(), |u| u.username().to_string());
                    HttpResponse::Ok().body(body)
                }),
            )
            .route(
                "/start",
                web::get().to(|session: SessionContext| async move {
                    session.persist_user(UserId::new(3))?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/flashes",
                web::get().to(|session: SessionContext| async move {
                    HttpResponse::Ok().body(session.take_flashes().join("|"))
                }),
            )
    }

    fn session_cookie(
        res: &actix_web::dev::ServiceResponse,
    ) -> actix_web::cookie::Cookie<'static> {
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned()
    }

    #[actix_web::test]
    async fn authenticated_redirects_anonymous_requests_to_login() {
        let app = test::init_service(guarded_app()).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/private").to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).expect("location"),
            "/login"
        );

        // The rejection queues the login-required flash for the next page.
        let cookie = session_cookie(&res);
        let flashes_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/flashes")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body = test::read_body(flashes_res).await;
        assert_eq!(body, LOGIN_REQUIRED_MESSAGE);
    }

    #[actix_web::test]
    async fn authenticated_passes_sessions_through() {
        let app = test::init_service(guarded_app()).await;
        let start =
            test::call_service(&app, test::TestRequest::get().uri("/start").to_request()).await;
        let cookie = session_cookie(&start);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/private")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "3");
    }

    #[actix_web::test]
    async fn anonymous_redirects_authenticated_requests_home() {
        let app = test::init_service(guarded_app()).await;
        let start =
            test::call_service(&app, test::TestRequest::get().uri("/start").to_request()).await;
        let cookie = session_cookie(&start);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/public-only")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).expect("location"), "/");
    }

    #[actix_web::test]
    async fn anonymous_passes_fresh_requests_through() {
        let app = test::init_service(guarded_app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/public-only").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn current_user_attaches_none_without_session() {
        let app = test::init_service(guarded_app()).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "anonymous");
    }

    #[actix_web::test]
    async fn current_user_attaches_none_for_stale_session_ids() {
        // The fixture repository finds nothing, mimicking a store reset
        // under a live cookie.
        let app = test::init_service(guarded_app()).await;
        let start =
            test::call_service(&app, test::TestRequest::get().uri("/start").to_request()).await;
        let cookie = session_cookie(&start);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, "anonymous");
    }

    #[std::prelude::v1::test]
    fn lookup_connection_errors_surface_as_service_unavailable() {
        let err = map_lookup_error(UserPersistenceError::connection("pool exhausted"));
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
