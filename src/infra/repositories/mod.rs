pub mod postgres_user_repo;
pub mod sqlite_user_repo;
