use shared::store::{SqliteStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS state (
    state_id INTEGER PRIMARY KEY AUTOINCREMENT,
    state_name TEXT NOT NULL,
    population INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS district (
    district_id INTEGER PRIMARY KEY AUTOINCREMENT,
    district_name TEXT,
    state_id INTEGER,
    cases INTEGER,
    cured INTEGER,
    active INTEGER,
    deaths INTEGER
);
"#;

/// Creates the `state` and `district` tables when they are missing.
pub fn apply_schema(store: &SqliteStore) -> Result<(), StoreError> {
    store.execute_batch(SCHEMA)
}
