//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod catalogue_repository;
mod seed_repository;
mod user_repository;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::{
    AccountService, FixtureAccountService, INCORRECT_CREDENTIALS_MESSAGE, USERNAME_TAKEN_MESSAGE,
};
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{
    CatalogueRepository, CatalogueRepositoryError, FixtureCatalogueRepository,
};
#[cfg(test)]
pub use seed_repository::{FixtureSeedRepository, MockSeedRepository};
pub use seed_repository::{SeedRepository, SeedRepositoryError, SeedingResult};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, NewUser, UserPersistenceError, UserRepository};
