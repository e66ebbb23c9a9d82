use crate::models::user::{NewUser, UserRecord};
use rusqlite::{params, ErrorCode, OptionalExtension};
use shared::store::{SqliteStore, StoreError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(i64),
    UsernameTaken,
}

pub struct UserStore {
    sqlite: Arc<SqliteStore>,
}

impl UserStore {
    pub fn new(sqlite: Arc<SqliteStore>) -> Self {
        Self { sqlite }
    }

    pub fn get_user(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        self.sqlite.query_row(
            "SELECT user_id, name, username, password, gender FROM user WHERE username = ?",
            params![username],
            |row| {
                Ok(UserRecord {
                    user_id: row.get(0)?,
                    name: row.get(1)?,
                    username: row.get(2)?,
                    password: row.get(3)?,
                    gender: row.get(4)?,
                })
            },
        )
    }

    pub fn get_user_id(&self, username: &str) -> Result<Option<i64>, StoreError> {
        self.sqlite.query_row(
            "SELECT user_id FROM user WHERE username = ?",
            params![username],
            |row| row.get(0),
        )
    }

    /// Inserts a user unless the username is already registered. The lookup
    /// and the insert share one transaction.
    pub fn create_user(&self, user: &NewUser) -> Result<CreateUserOutcome, StoreError> {
        let result = self.sqlite.transaction(|tx| {
            let existing: Option<i64> = tx
                .query_row(
                    "SELECT user_id FROM user WHERE username = ?",
                    params![user.username],
                    |row| row.get(0),
                )
                .optional()?;
            if existing.is_some() {
                return Ok(CreateUserOutcome::UsernameTaken);
            }

            tx.execute(
                "INSERT INTO user (name, username, password, gender) VALUES (?, ?, ?, ?)",
                params![user.name, user.username, user.password_hash, user.gender],
            )?;
            Ok(CreateUserOutcome::Created(tx.last_insert_rowid()))
        });

        match result {
            Err(StoreError::Sqlite(rusqlite::Error::SqliteFailure(err, _)))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Ok(CreateUserOutcome::UsernameTaken)
            }
            other => other,
        }
    }
}
