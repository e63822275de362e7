use std::sync::Arc;

use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use tracing::{error, info};

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        info!(id, "Service: Getting user by ID");
        self.repo.get_by_id(id).await.map_err(|e| {
            error!(id, "Service: Error getting user by ID: {}", e);
            e
        })
    }

    pub async fn get_users_by_company_id(&self, company_id: i64) -> Result<Vec<User>, AppError> {
        info!(company_id, "Service: Getting users by company ID");
        self.repo.get_by_company_id(company_id).await.map_err(|e| {
            error!(company_id, "Service: Error getting users by company ID: {}", e);
            e
        })
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        info!(username, "Service: Getting user by username");
        self.repo.get_by_username(username).await.map_err(|e| {
            error!(username, "Service: Error getting user by username: {}", e);
            e
        })
    }

    pub async fn add_user(&self, user: &mut User) -> Result<(), AppError> {
        info!(username = %user.username, "Service: Adding user");
        let username = user.username.clone();
        self.repo.add(user).await.map_err(|e| {
            error!(username, "Service: Error adding user: {}", e);
            e
        })
    }

    pub async fn update_user(&self, user: &User) -> Result<(), AppError> {
        info!(id = user.id, "Service: Updating user");
        self.repo.update(user).await.map_err(|e| {
            error!(id = user.id, "Service: Error updating user: {}", e);
            e
        })
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        info!(id, "Service: Deleting user");
        self.repo.delete(id).await.map_err(|e| {
            error!(id, "Service: Error deleting user: {}", e);
            e
        })
    }
}
