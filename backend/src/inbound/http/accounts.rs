//! Account handlers: registration, login, and logout.
//!
//! ```text
//! GET  /login     anonymous only; login form view
//! POST /login     anonymous only; authenticate and start a session
//! GET  /logout    logged-in only; end the session
//! GET  /register  anonymous only; registration form view
//! POST /register  anonymous only; create an account and start a session
//! ```
//!
//! Expected failures (bad input, taken username, wrong credentials) are
//! queued as flash messages and answered with a redirect back to the form,
//! so the browser lands on a re-rendered page with the message visible.
//! Only store failures propagate as error responses.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Credentials, Error, ErrorCode};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guards::{Anonymous, Authenticated, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Flash shown after a successful login.
pub const LOGGED_IN_MESSAGE: &str = "You have logged in successfully.";

/// Flash shown after an explicit logout.
pub const LOGGED_OUT_MESSAGE: &str = "You have logged out successfully.";

/// Flash shown after a successful registration.
pub const REGISTERED_MESSAGE: &str = "You have created an account successfully.";

/// Form body shared by the login and registration endpoints.
///
/// Fields default to empty when absent so a missing field reaches
/// credential validation instead of failing form extraction.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CredentialsForm {
    /// Account name.
    #[serde(default)]
    pub username: String,
    /// Plaintext password; hashed before anything is stored.
    #[serde(default)]
    pub password: String,
}

/// View model for the login and registration forms.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthFormView {
    /// Messages queued by a previous request, drained on render.
    pub flashes: Vec<String>,
}

/// Queue a flash and answer with a redirect to the given location.
fn flash_and_redirect(
    session: &SessionContext,
    message: &str,
    location: &str,
) -> ApiResult<HttpResponse> {
    session.push_flash(message)?;
    Ok(see_other(location))
}

/// Render the login form.
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login form view", body = AuthFormView),
        (status = 303, description = "Already logged in; redirected home")
    ),
    tags = ["accounts"],
    operation_id = "loginForm",
    security([])
)]
#[get("/login")]
pub async fn login_form(
    _guard: Anonymous,
    session: SessionContext,
) -> ApiResult<web::Json<AuthFormView>> {
    Ok(web::Json(AuthFormView {
        flashes: session.take_flashes(),
    }))
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect home on success, back to the form with a flash otherwise"),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    _guard: Anonymous,
    session: SessionContext,
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let credentials = match Credentials::try_from_parts(&form.username, &form.password) {
        Ok(credentials) => credentials,
        Err(err) => return flash_and_redirect(&session, &err.to_string(), "/login"),
    };

    match state.accounts.authenticate(&credentials).await {
        Ok(user) => {
            session.persist_user(user.id())?;
            flash_and_redirect(&session, LOGGED_IN_MESSAGE, "/")
        }
        // A generic message regardless of which credential was wrong.
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            flash_and_redirect(&session, err.message(), "/login")
        }
        Err(err) => Err(err),
    }
}

/// End the current session.
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Session ended; redirected home with a flash")
    ),
    tags = ["accounts"],
    operation_id = "logout"
)]
#[get("/logout")]
pub async fn logout(guard: Authenticated, session: SessionContext) -> ApiResult<HttpResponse> {
    session.clear_user();
    tracing::info!(user_id = %guard.user_id, "session ended");
    flash_and_redirect(&session, LOGGED_OUT_MESSAGE, "/")
}

/// Render the registration form.
#[utoipa::path(
    get,
    path = "/register",
    responses(
        (status = 200, description = "Registration form view", body = AuthFormView),
        (status = 303, description = "Already logged in; redirected home")
    ),
    tags = ["accounts"],
    operation_id = "registerForm",
    security([])
)]
#[get("/register")]
pub async fn register_form(
    _guard: Anonymous,
    session: SessionContext,
) -> ApiResult<web::Json<AuthFormView>> {
    Ok(web::Json(AuthFormView {
        flashes: session.take_flashes(),
    }))
}

/// Create an account and establish a session.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect home on success, back to the form with a flash otherwise"),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    _guard: Anonymous,
    session: SessionContext,
    state: web::Data<HttpState>,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let credentials = match Credentials::try_from_parts(&form.username, &form.password) {
        Ok(credentials) => credentials,
        Err(err) => return flash_and_redirect(&session, &err.to_string(), "/register"),
    };

    match state.accounts.register(&credentials).await {
        Ok(user) => {
            session.persist_user(user.id())?;
            flash_and_redirect(&session, REGISTERED_MESSAGE, "/")
        }
        Err(err) if err.code() == ErrorCode::Conflict => {
            flash_and_redirect(&session, err.message(), "/register")
        }
        Err(err) => Err(err),
    }
}
