use crate::domain::{
    models::user::{User, UserRow},
    ports::UserRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, info};

// Password is stored under a different name than the entity field carries;
// the alias in the column list is mandatory, FromRow will not match it.
const USER_COLUMNS: &str =
    "Id, Username, Password AS PasswordHash, Role, CompanyId, CreatedBy, CreatedDate, ModifiedBy, ModifiedDate";

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn get_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        info!(id, "Getting user by ID");
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM Users WHERE Id = ?",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(id, "Error getting user by ID: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(User::try_from).transpose().map_err(|e| {
            error!(id, "Error getting user by ID: {}", e);
            e
        })
    }

    async fn get_by_company_id(&self, company_id: i64) -> Result<Vec<User>, AppError> {
        info!(company_id, "Getting users by company ID");
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM Users WHERE CompanyId = ?",
            USER_COLUMNS
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(company_id, "Error getting users by company ID: {:?}", e);
            AppError::Database(e)
        })?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(company_id, "Error getting users by company ID: {}", e);
                e
            })
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        info!(username, "Getting user by username");
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM Users WHERE Username = ?",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(username, "Error getting user by username: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(User::try_from).transpose().map_err(|e| {
            error!(username, "Error getting user by username: {}", e);
            e
        })
    }

    async fn add(&self, user: &mut User) -> Result<(), AppError> {
        info!(username = %user.username, "Adding user");
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO Users (Username, Password, Role, CompanyId, CreatedBy, CreatedDate) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING Id",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.company_id)
        .bind(&user.created_by)
        .bind(user.created_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(username = %user.username, "Error adding user: {:?}", e);
            AppError::Database(e)
        })?;

        user.id = id;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), AppError> {
        info!(id = user.id, "Updating user");
        sqlx::query(
            "UPDATE Users \
             SET Username = ?, Password = ?, Role = ?, CompanyId = ?, ModifiedBy = ?, ModifiedDate = ? \
             WHERE Id = ?",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.company_id)
        .bind(&user.modified_by)
        .bind(user.modified_date)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(id = user.id, "Error updating user: {:?}", e);
            AppError::Database(e)
        })?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        info!(id, "Deleting user");
        sqlx::query("DELETE FROM Users WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(id, "Error deleting user: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}
