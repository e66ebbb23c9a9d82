use crate::store::domains::district_store::DistrictStore;
use crate::store::domains::state_store::StateStore;
use shared::store::SqliteStore;
use std::sync::Arc;

pub struct StoreContext {
    pub state_store: Arc<StateStore>,
    pub district_store: Arc<DistrictStore>,
    pub sqlite: Arc<SqliteStore>,
}

impl StoreContext {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self {
            state_store: Arc::new(StateStore::new(store.clone())),
            district_store: Arc::new(DistrictStore::new(store.clone())),
            sqlite: store,
        }
    }
}
