mod api;
mod cli;
mod models;
mod store;

pub use api::server::start_server;
pub use cli::Cli;
pub use store::core::StoreContext;
pub use store::schema::apply_schema;
