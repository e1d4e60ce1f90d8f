//! Route registration shared by the server and integration tests.
//!
//! ```text
//! GET  /                    home view
//! GET  /login               login form
//! POST /login               authenticate
//! GET  /logout              end the session
//! GET  /register            registration form
//! POST /register            create an account
//! GET  /courses             course listing
//! GET  /courses/{course_id} course detail
//! GET  /lessons/{lesson_id} lesson detail
//! ```
//!
//! The health probes are registered separately so they sit outside the
//! session middleware.

use actix_web::web;

use crate::inbound::http::{accounts, catalogue};

/// Register every learner-facing endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(catalogue::home)
        .service(accounts::login_form)
        .service(accounts::login)
        .service(accounts::logout)
        .service(accounts::register_form)
        .service(accounts::register)
        .service(catalogue::list_courses)
        .service(catalogue::course_detail)
        .service(catalogue::lesson_detail);
}
