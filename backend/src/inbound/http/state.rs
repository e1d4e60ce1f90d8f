//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountService, CatalogueRepository, FixtureAccountService, FixtureCatalogueRepository,
    FixtureUserRepository, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration and login use-cases.
    pub accounts: Arc<dyn AccountService>,
    /// User lookups for attaching the current account to a request.
    pub users: Arc<dyn UserRepository>,
    /// Read-only catalogue queries.
    pub catalogue: Arc<dyn CatalogueRepository>,
}

impl HttpState {
    /// Construct state from its port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use aula_backend::domain::ports::{
    ///     FixtureAccountService, FixtureCatalogueRepository, FixtureUserRepository,
    /// };
    /// use aula_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureAccountService),
    ///     Arc::new(FixtureUserRepository),
    ///     Arc::new(FixtureCatalogueRepository),
    /// );
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn new(
        accounts: Arc<dyn AccountService>,
        users: Arc<dyn UserRepository>,
        catalogue: Arc<dyn CatalogueRepository>,
    ) -> Self {
        Self {
            accounts,
            users,
            catalogue,
        }
    }

    /// State wired entirely with fixtures, for tests that exercise routing
    /// and guards rather than persistence.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new(
            Arc::new(FixtureAccountService),
            Arc::new(FixtureUserRepository),
            Arc::new(FixtureCatalogueRepository),
        )
    }
}
