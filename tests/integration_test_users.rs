mod common;

use chrono::{TimeZone, Utc};
use common::TestApp;
use user_management_backend::domain::models::user::{User, UserRole};
use user_management_backend::error::AppError;

fn seed_user(username: &str, role: UserRole, company_id: i64) -> User {
    User::new(
        username.to_string(),
        format!("hash-{}", username),
        role,
        company_id,
        "seed".to_string(),
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_add_then_get_by_id_round_trips() {
    let app = TestApp::new().await;
    let service = &app.state.user_service;

    let mut alice = User::new(
        "alice".to_string(),
        "h1".to_string(),
        UserRole::Admin,
        7,
        "seed".to_string(),
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    );

    service.add_user(&mut alice).await.unwrap();
    assert!(alice.id > 0, "insert must populate the identity value");

    let fetched = service.get_user_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(fetched, alice);
    assert_eq!(fetched.role, UserRole::Admin);
    assert_eq!(fetched.company_id, 7);
    assert!(fetched.modified_by.is_none());
    assert!(fetched.modified_date.is_none());
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let app = TestApp::new().await;

    let result = app.state.user_service.get_user_by_id(9999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_by_username() {
    let app = TestApp::new().await;
    let service = &app.state.user_service;

    let mut bob = seed_user("bob", UserRole::User, 3);
    service.add_user(&mut bob).await.unwrap();

    let fetched = service.get_user_by_username("bob").await.unwrap().unwrap();
    assert_eq!(fetched, bob);

    let missing = service.get_user_by_username("nobody").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_users_by_company_id_returns_exact_set() {
    let app = TestApp::new().await;
    let service = &app.state.user_service;

    let mut a = seed_user("carol", UserRole::Admin, 7);
    let mut b = seed_user("dave", UserRole::User, 7);
    let mut other = seed_user("erin", UserRole::User, 8);
    service.add_user(&mut a).await.unwrap();
    service.add_user(&mut b).await.unwrap();
    service.add_user(&mut other).await.unwrap();

    let mut company_7 = service.get_users_by_company_id(7).await.unwrap();
    company_7.sort_by_key(|u| u.id);
    assert_eq!(company_7, vec![a, b]);

    let empty = service.get_users_by_company_id(42).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_update_replaces_mutable_fields_only() {
    let app = TestApp::new().await;
    let service = &app.state.user_service;

    let mut user = seed_user("frank", UserRole::User, 2);
    service.add_user(&mut user).await.unwrap();

    let mut updated = user.clone();
    updated.username = "frank2".to_string();
    updated.password_hash = "h2".to_string();
    updated.role = UserRole::Admin;
    updated.company_id = 5;
    updated.modified_by = Some("admin".to_string());
    updated.modified_date = Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());

    service.update_user(&updated).await.unwrap();

    let fetched = service.get_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.created_by, user.created_by);
    assert_eq!(fetched.created_date, user.created_date);
}

#[tokio::test]
async fn test_delete_then_get_returns_none() {
    let app = TestApp::new().await;
    let service = &app.state.user_service;

    let mut user = seed_user("grace", UserRole::User, 1);
    service.add_user(&mut user).await.unwrap();

    service.delete_user(user.id).await.unwrap();

    let fetched = service.get_user_by_id(user.id).await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_update_and_delete_on_missing_id_are_noops() {
    let app = TestApp::new().await;
    let service = &app.state.user_service;

    let mut ghost = seed_user("ghost", UserRole::User, 1);
    ghost.id = 12345;
    ghost.modified_by = Some("admin".to_string());
    ghost.modified_date = Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());

    service.update_user(&ghost).await.unwrap();
    service.delete_user(12345).await.unwrap();

    assert!(service.get_user_by_id(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unrecognized_stored_role_is_a_data_integrity_error() {
    let app = TestApp::new().await;

    sqlx::query(
        "INSERT INTO Users (Username, Password, Role, CompanyId, CreatedBy, CreatedDate) \
         VALUES ('mallory', 'h', 'Superuser', 1, 'seed', '2024-01-15T10:00:00+00:00')",
    )
    .execute(&app.pool)
    .await
    .unwrap();

    let err = app
        .state
        .user_service
        .get_user_by_username("mallory")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DataIntegrity(_)));
}
