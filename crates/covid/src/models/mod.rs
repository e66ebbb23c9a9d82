pub(crate) mod district;
pub(crate) mod state;
