use crate::models::district::{District, DistrictInput};
use rusqlite::params;
use shared::store::{SqliteStore, StoreError};
use std::sync::Arc;

pub struct DistrictStore {
    sqlite: Arc<SqliteStore>,
}

impl DistrictStore {
    pub fn new(sqlite: Arc<SqliteStore>) -> Self {
        Self { sqlite }
    }

    /// Inserts a district and returns its new id.
    pub fn create(&self, district: &DistrictInput) -> Result<i64, StoreError> {
        self.sqlite.transaction(|tx| {
            tx.execute(
                "INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    district.district_name,
                    district.state_id,
                    district.cases,
                    district.cured,
                    district.active,
                    district.deaths
                ],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }

    pub fn get(&self, district_id: i64) -> Result<Option<District>, StoreError> {
        self.sqlite.query_row(
            "SELECT district_id, district_name, state_id, cases, cured, active, deaths
             FROM district
             WHERE district_id = ?",
            params![district_id],
            |row| {
                Ok(District {
                    district_id: row.get(0)?,
                    district_name: row.get(1)?,
                    state_id: row.get(2)?,
                    cases: row.get(3)?,
                    cured: row.get(4)?,
                    active: row.get(5)?,
                    deaths: row.get(6)?,
                })
            },
        )
    }

    /// Overwrites every field of the district. Returns the number of rows
    /// touched, zero when the id is unknown.
    pub fn replace(&self, district_id: i64, district: &DistrictInput) -> Result<usize, StoreError> {
        self.sqlite.execute(
            "UPDATE district
             SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
             WHERE district_id = ?",
            params![
                district.district_name,
                district.state_id,
                district.cases,
                district.cured,
                district.active,
                district.deaths,
                district_id
            ],
        )
    }

    pub fn delete(&self, district_id: i64) -> Result<usize, StoreError> {
        self.sqlite.execute(
            "DELETE FROM district WHERE district_id = ?",
            params![district_id],
        )
    }
}
