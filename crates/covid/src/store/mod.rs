pub(crate) mod core;
pub(crate) mod domains;
pub(crate) mod schema;
