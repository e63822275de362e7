use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(UserRole::Admin),
            "User" => Ok(UserRole::User),
            other => Err(AppError::DataIntegrity(format!(
                "Unrecognized user role in storage: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub company_id: i64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub modified_by: Option<String>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        username: String,
        password_hash: String,
        role: UserRole,
        company_id: i64,
        created_by: String,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            username,
            password_hash,
            role,
            company_id,
            created_by,
            created_date,
            modified_by: None,
            modified_date: None,
        }
    }
}

// Role arrives as text; parsed in the TryFrom below so corrupt values
// surface as AppError::DataIntegrity instead of a decode failure.
#[derive(FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub company_id: i64,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub modified_by: Option<String>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            role: row.role.parse()?,
            company_id: row.company_id,
            created_by: row.created_by,
            created_date: row.created_date,
            modified_by: row.modified_by,
            modified_date: row.modified_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_string_form() {
        for role in [UserRole::Admin, UserRole::User] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_role_text_is_a_data_integrity_error() {
        let err = "Superuser".parse::<UserRole>().unwrap_err();
        assert!(matches!(err, AppError::DataIntegrity(_)));
    }
}
