//! HTTP inbound adapter exposing the learner-facing endpoints.

pub mod accounts;
pub mod catalogue;
pub mod error;
pub mod guards;
pub mod health;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
