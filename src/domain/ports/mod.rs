use crate::domain::models::user::User;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn get_by_company_id(&self, company_id: i64) -> Result<Vec<User>, AppError>;
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    // Populates user.id from the database identity; failure leaves it unchanged.
    async fn add(&self, user: &mut User) -> Result<(), AppError>;
    async fn update(&self, user: &User) -> Result<(), AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
