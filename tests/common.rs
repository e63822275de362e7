use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use user_management_backend::{
    config::Config,
    domain::services::user_service::UserService,
    infra::repositories::sqlite_user_repo::SqliteUserRepo,
    state::AppState,
};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            max_connections: 1,
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let state = AppState {
            config,
            user_repo: user_repo.clone(),
            user_service: Arc::new(UserService::new(user_repo)),
        };

        Self {
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
