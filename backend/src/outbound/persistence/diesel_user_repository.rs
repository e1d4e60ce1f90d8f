//! SQLite-backed user account adapter.
//!
//! Uniqueness of usernames is delegated to the store's unique index rather
//! than a check-then-insert sequence, so two racing registrations cannot
//! both commit: the loser's insert fails and is reported as a duplicate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::ports::{NewUser, UserPersistenceError, UserRepository};
use crate::domain::user::{User, UserId, Username};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, RunError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository over the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool and query failures to domain persistence errors.
fn map_run_error(error: RunError) -> UserPersistenceError {
    match error {
        RunError::Pool(err) => UserPersistenceError::connection(err.to_string()),
        RunError::Query(err) => UserPersistenceError::query(err.to_string()),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let username = user.username.as_str().to_owned();
        let password_hash = user.password_hash.as_str().to_owned();
        let row = self
            .pool
            .run(move |conn| {
                diesel::insert_into(users::table)
                    .values(NewUserRow {
                        username: &username,
                        password_hash: &password_hash,
                    })
                    .returning(UserRow::as_returning())
                    .get_result(conn)
            })
            .await
            .map_err(|err| match err {
                RunError::Query(DieselError::DatabaseError(
                    DatabaseErrorKind::UniqueViolation,
                    _,
                )) => UserPersistenceError::duplicate_username(user.username.as_str()),
                other => map_run_error(other),
            })?;
        row.into_domain().map_err(UserPersistenceError::query)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let name = username.as_str().to_owned();
        let row = self
            .pool
            .run(move |conn| {
                users::table
                    .filter(users::username.eq(name))
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_run_error)?;
        row.map(|row| row.into_domain().map_err(UserPersistenceError::query))
            .transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let row = self
            .pool
            .run(move |conn| {
                users::table
                    .find(id.value())
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_run_error)?;
        row.map(|row| row.into_domain().map_err(UserPersistenceError::query))
            .transpose()
    }
}
