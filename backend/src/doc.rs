//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the HTTP surface:
//! account endpoints, catalogue views, and health probes, plus the session
//! cookie security scheme. Swagger UI serves the document in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Course, CourseDetail, CourseId, Error, ErrorCode, Lesson, LessonDetail, LessonId, LessonOption,
    OptionId, UserId,
};
use crate::inbound::http::accounts::{AuthFormView, CredentialsForm};
use crate::inbound::http::catalogue::{
    CourseDetailView, CourseListView, HomeView, LessonDetailView, UserView,
};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login or POST /register.",
            ))),
        );
    }
}

/// OpenAPI document for the HTTP API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Aula backend API",
        description = "Session-authenticated course browsing, account management, and health probes.",
        license(
            name = "ISC",
            url = "https://opensource.org/licenses/ISC"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::catalogue::home,
        crate::inbound::http::catalogue::list_courses,
        crate::inbound::http::catalogue::course_detail,
        crate::inbound::http::catalogue::lesson_detail,
        crate::inbound::http::accounts::login_form,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::accounts::register_form,
        crate::inbound::http::accounts::register,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        UserId,
        UserView,
        CredentialsForm,
        AuthFormView,
        HomeView,
        Course,
        CourseId,
        Lesson,
        LessonId,
        LessonOption,
        OptionId,
        CourseDetail,
        LessonDetail,
        CourseListView,
        CourseDetailView,
        LessonDetailView,
    )),
    tags(
        (name = "accounts", description = "Registration, login, and logout"),
        (name = "catalogue", description = "Course and lesson browsing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document references real routes.

    use utoipa::OpenApi;

    use super::*;

    #[test]
    fn document_lists_every_learner_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/login",
            "/logout",
            "/register",
            "/courses",
            "/courses/{course_id}",
            "/lessons/{lesson_id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn document_registers_the_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
