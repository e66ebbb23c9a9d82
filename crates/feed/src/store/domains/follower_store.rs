use crate::models::user::ProfileName;
use rusqlite::params;
use shared::store::{SqliteStore, StoreError};
use std::sync::Arc;

pub struct FollowerStore {
    sqlite: Arc<SqliteStore>,
}

impl FollowerStore {
    pub fn new(sqlite: Arc<SqliteStore>) -> Self {
        Self { sqlite }
    }

    /// Records that `follower_user_id` follows `following_user_id`.
    #[cfg(test)]
    pub fn follow(&self, follower_user_id: i64, following_user_id: i64) -> Result<(), StoreError> {
        self.sqlite.execute(
            "INSERT INTO follower (follower_user_id, following_user_id) VALUES (?, ?)",
            params![follower_user_id, following_user_id],
        )?;
        Ok(())
    }

    /// Names of the accounts `user_id` follows.
    pub fn following(&self, user_id: i64) -> Result<Vec<ProfileName>, StoreError> {
        self.sqlite.query_all(
            "SELECT user.name
             FROM user
             INNER JOIN follower ON user.user_id = follower.following_user_id
             WHERE follower.follower_user_id = ?
             ORDER BY follower.follower_id",
            params![user_id],
            |row| Ok(ProfileName { name: row.get(0)? }),
        )
    }

    /// Names of the accounts following `user_id`.
    pub fn followers(&self, user_id: i64) -> Result<Vec<ProfileName>, StoreError> {
        self.sqlite.query_all(
            "SELECT user.name
             FROM user
             INNER JOIN follower ON user.user_id = follower.follower_user_id
             WHERE follower.following_user_id = ?
             ORDER BY follower.follower_id",
            params![user_id],
            |row| Ok(ProfileName { name: row.get(0)? }),
        )
    }
}
