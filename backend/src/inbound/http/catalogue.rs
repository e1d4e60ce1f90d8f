//! Catalogue handlers: home page, course listing, course and lesson detail.
//!
//! Every view carries the current account (when one is attached) and the
//! flash messages queued by earlier requests. The listing and detail pages
//! require a session; the home page renders for everyone. A course or
//! lesson id that resolves to nothing queues a flash and redirects home
//! rather than answering 404, so browsing stale links lands the learner
//! back on a working page.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::CatalogueRepositoryError;
use crate::domain::{Course, CourseDetail, CourseId, Error, LessonDetail, LessonId, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guards::{Authenticated, CurrentUser, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Flash shown when a course id resolves to nothing.
pub const COURSE_NOT_FOUND_MESSAGE: &str = "Course not found.";

/// Flash shown when a lesson id resolves to nothing.
pub const LESSON_NOT_FOUND_MESSAGE: &str = "Lesson not found.";

/// The current account as rendered in views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Store identifier.
    pub id: UserId,
    /// Account name.
    pub username: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            username: user.username().as_str().to_owned(),
        }
    }
}

/// View model for the home page.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// The current account, absent for anonymous visitors.
    pub user: Option<UserView>,
    /// Messages queued by a previous request, drained on render.
    pub flashes: Vec<String>,
}

/// View model for the course listing page.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseListView {
    /// The current account.
    pub user: Option<UserView>,
    /// Messages queued by a previous request, drained on render.
    pub flashes: Vec<String>,
    /// Every course, in ascending id order.
    pub courses: Vec<Course>,
}

/// View model for a course page.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailView {
    /// The current account.
    pub user: Option<UserView>,
    /// Messages queued by a previous request, drained on render.
    pub flashes: Vec<String>,
    /// The course and its lessons.
    #[serde(flatten)]
    pub detail: CourseDetail,
}

/// View model for a lesson page.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonDetailView {
    /// The current account.
    pub user: Option<UserView>,
    /// Messages queued by a previous request, drained on render.
    pub flashes: Vec<String>,
    /// The lesson and its options.
    #[serde(flatten)]
    pub detail: LessonDetail,
}

fn map_catalogue_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("catalogue unavailable: {message}"))
        }
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue read failed: {message}"))
        }
    }
}

/// Render the home page.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home view", body = HomeView)),
    tags = ["catalogue"],
    operation_id = "home",
    security([])
)]
#[get("/")]
pub async fn home(user: CurrentUser, session: SessionContext) -> ApiResult<web::Json<HomeView>> {
    Ok(web::Json(HomeView {
        user: user.0.map(UserView::from),
        flashes: session.take_flashes(),
    }))
}

/// List every course.
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "Course listing view", body = CourseListView),
        (status = 303, description = "No session; redirected to login"),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(
    _guard: Authenticated,
    user: CurrentUser,
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CourseListView>> {
    let courses = state
        .catalogue
        .list_courses()
        .await
        .map_err(map_catalogue_error)?;
    Ok(web::Json(CourseListView {
        user: user.0.map(UserView::from),
        flashes: session.take_flashes(),
        courses,
    }))
}

/// Render one course and its lessons.
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(("course_id" = i32, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course view", body = CourseDetailView),
        (status = 303, description = "No session or unknown course; redirected"),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "courseDetail"
)]
#[get("/courses/{course_id}")]
pub async fn course_detail(
    _guard: Authenticated,
    user: CurrentUser,
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = CourseId::new(path.into_inner());
    let Some(detail) = state
        .catalogue
        .find_course(id)
        .await
        .map_err(map_catalogue_error)?
    else {
        tracing::debug!(course_id = %id, "unknown course requested");
        session.push_flash(COURSE_NOT_FOUND_MESSAGE)?;
        return Ok(see_other("/"));
    };
    Ok(HttpResponse::Ok().json(CourseDetailView {
        user: user.0.map(UserView::from),
        flashes: session.take_flashes(),
        detail,
    }))
}

/// Render one lesson and its options.
#[utoipa::path(
    get,
    path = "/lessons/{lesson_id}",
    params(("lesson_id" = i32, Path, description = "Lesson identifier")),
    responses(
        (status = 200, description = "Lesson view", body = LessonDetailView),
        (status = 303, description = "No session or unknown lesson; redirected"),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "lessonDetail"
)]
#[get("/lessons/{lesson_id}")]
pub async fn lesson_detail(
    _guard: Authenticated,
    user: CurrentUser,
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = LessonId::new(path.into_inner());
    let Some(detail) = state
        .catalogue
        .find_lesson(id)
        .await
        .map_err(map_catalogue_error)?
    else {
        tracing::debug!(lesson_id = %id, "unknown lesson requested");
        session.push_flash(LESSON_NOT_FOUND_MESSAGE)?;
        return Ok(see_other("/"));
    };
    Ok(HttpResponse::Ok().json(LessonDetailView {
        user: user.0.map(UserView::from),
        flashes: session.take_flashes(),
        detail,
    }))
}
