use shared::store::{SqliteStore, StoreError};

// Matches the layout of twitterClone.db; a no-op against an existing file.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    gender TEXT
);
CREATE TABLE IF NOT EXISTS follower (
    follower_id INTEGER PRIMARY KEY AUTOINCREMENT,
    follower_user_id INTEGER NOT NULL,
    following_user_id INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS tweet (
    tweet_id INTEGER PRIMARY KEY AUTOINCREMENT,
    tweet TEXT,
    user_id INTEGER NOT NULL,
    date_time DATETIME
);
CREATE TABLE IF NOT EXISTS reply (
    reply_id INTEGER PRIMARY KEY AUTOINCREMENT,
    tweet_id INTEGER NOT NULL,
    reply TEXT,
    user_id INTEGER NOT NULL,
    date_time DATETIME
);
CREATE TABLE IF NOT EXISTS "like" (
    like_id INTEGER PRIMARY KEY AUTOINCREMENT,
    tweet_id INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    date_time DATETIME
);
"#;

pub fn apply_schema(store: &SqliteStore) -> Result<(), StoreError> {
    store.execute_batch(SCHEMA)
}
