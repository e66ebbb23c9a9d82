pub(crate) mod error;
pub(crate) mod routes;
pub(crate) mod server;
