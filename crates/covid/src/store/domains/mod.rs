pub(crate) mod district_store;
pub(crate) mod state_store;
