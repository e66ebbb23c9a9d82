pub mod security;
pub mod store;
pub mod utils;
