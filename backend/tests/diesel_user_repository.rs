//! Integration tests for `DieselUserRepository` against a real SQLite store.
//!
//! These verify the port contract end to end: inserted accounts come back
//! with store-assigned identifiers, lookups round-trip, and the store's
//! uniqueness constraint surfaces as `DuplicateUsername`.

use std::sync::Arc;

use aula_backend::domain::ports::{AccountService, NewUser, UserPersistenceError, UserRepository};
use aula_backend::domain::{
    Credentials, ErrorCode, PasswordAccountService, PasswordHash, UserId, Username,
};
use aula_backend::outbound::persistence::DieselUserRepository;
use rstest::rstest;

mod support;

fn new_user(name: &str, password: &str) -> NewUser {
    NewUser {
        username: Username::new(name).expect("valid username"),
        password_hash: PasswordHash::derive(password).expect("derivation"),
    }
}

#[rstest]
#[tokio::test]
async fn inserted_accounts_round_trip_through_lookups() {
    let store = support::migrated_store();
    let repo = DieselUserRepository::new(store.pool.clone());

    let inserted = repo.insert(new_user("ana", "lapicera")).await.expect("insert");
    assert_eq!(inserted.id(), UserId::new(1));
    assert_eq!(inserted.username().as_str(), "ana");

    let by_name = repo
        .find_by_username(&Username::new("ana").expect("valid username"))
        .await
        .expect("lookup")
        .expect("account present");
    assert_eq!(by_name.id(), inserted.id());

    let by_id = repo
        .find_by_id(inserted.id())
        .await
        .expect("lookup")
        .expect("account present");
    assert_eq!(by_id.username().as_str(), "ana");
}

#[rstest]
#[tokio::test]
async fn lookups_find_nothing_in_an_empty_store() {
    let store = support::migrated_store();
    let repo = DieselUserRepository::new(store.pool.clone());

    let by_name = repo
        .find_by_username(&Username::new("nadie").expect("valid username"))
        .await
        .expect("lookup");
    let by_id = repo.find_by_id(UserId::new(42)).await.expect("lookup");
    assert!(by_name.is_none());
    assert!(by_id.is_none());
}

#[rstest]
#[tokio::test]
async fn the_store_rejects_duplicate_usernames() {
    let store = support::migrated_store();
    let repo = DieselUserRepository::new(store.pool.clone());

    repo.insert(new_user("ana", "lapicera")).await.expect("first insert");
    let err = repo
        .insert(new_user("ana", "tiza"))
        .await
        .expect_err("second insert");
    assert!(matches!(
        err,
        UserPersistenceError::DuplicateUsername { username } if username == "ana"
    ));
}

#[rstest]
#[tokio::test]
async fn accounts_register_and_authenticate_end_to_end() {
    let store = support::migrated_store();
    let repo = Arc::new(DieselUserRepository::new(store.pool.clone()));
    let service = PasswordAccountService::new(repo);

    let credentials = Credentials::try_from_parts("bruno", "tiza").expect("credentials shape");
    let registered = service.register(&credentials).await.expect("registration");

    let authenticated = service
        .authenticate(&credentials)
        .await
        .expect("authentication");
    assert_eq!(authenticated.id(), registered.id());

    let wrong = Credentials::try_from_parts("bruno", "lapicera").expect("credentials shape");
    let err = service
        .authenticate(&wrong)
        .await
        .expect_err("wrong password");
    assert_eq!(err.code(), ErrorCode::Unauthorized);
}
