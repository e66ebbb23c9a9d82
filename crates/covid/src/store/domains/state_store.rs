use crate::models::state::{State, StateName, StateStats};
use rusqlite::{params, Row};
use shared::store::{SqliteStore, StoreError};
use std::sync::Arc;

fn state_from_row(row: &Row<'_>) -> rusqlite::Result<State> {
    Ok(State {
        state_id: row.get(0)?,
        state_name: row.get(1)?,
        population: row.get(2)?,
    })
}

pub struct StateStore {
    sqlite: Arc<SqliteStore>,
}

impl StateStore {
    pub fn new(sqlite: Arc<SqliteStore>) -> Self {
        Self { sqlite }
    }

    pub fn list(&self) -> Result<Vec<State>, StoreError> {
        self.sqlite.query_all(
            "SELECT state_id, state_name, population FROM state ORDER BY state_id",
            [],
            state_from_row,
        )
    }

    pub fn get(&self, state_id: i64) -> Result<Option<State>, StoreError> {
        self.sqlite.query_row(
            "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
            params![state_id],
            state_from_row,
        )
    }

    /// Sums the counters of every district in the state. A state without
    /// districts (or an unknown id) reports zeros.
    pub fn stats(&self, state_id: i64) -> Result<StateStats, StoreError> {
        let stats = self.sqlite.query_row(
            "SELECT COALESCE(SUM(cases), 0),
                    COALESCE(SUM(cured), 0),
                    COALESCE(SUM(active), 0),
                    COALESCE(SUM(deaths), 0)
             FROM district
             WHERE state_id = ?",
            params![state_id],
            |row| {
                Ok(StateStats {
                    total_cases: row.get(0)?,
                    total_cured: row.get(1)?,
                    total_active: row.get(2)?,
                    total_deaths: row.get(3)?,
                })
            },
        )?;
        Ok(stats.unwrap_or_default())
    }

    /// Name of the state owning `district_id`.
    pub fn name_for_district(&self, district_id: i64) -> Result<Option<StateName>, StoreError> {
        self.sqlite.query_row(
            "SELECT state.state_name
             FROM state
             INNER JOIN district ON state.state_id = district.state_id
             WHERE district.district_id = ?",
            params![district_id],
            |row| {
                Ok(StateName {
                    state_name: row.get(0)?,
                })
            },
        )
    }

    #[cfg(test)]
    pub fn insert(&self, state_name: &str, population: i64) -> Result<i64, StoreError> {
        self.sqlite.transaction(|tx| {
            tx.execute(
                "INSERT INTO state (state_name, population) VALUES (?, ?)",
                params![state_name, population],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }
}
