use crate::api::server::start_server;
use crate::store::core::StoreContext;
use crate::store::schema::apply_schema;
use clap::Parser;
use log::{error, info};
use shared::store::SqliteStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(name = "covid", about = "COVID-19 state and district statistics service")]
pub struct Cli {
    /// Bind address
    #[arg(long, env = "COVID_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port
    #[arg(short = 'p', long, env = "COVID_PORT", default_value = "3000")]
    pub port: u16,

    /// SQLite database file
    #[arg(short = 'd', long, env = "COVID_DATABASE_PATH", default_value = "covid19India.db")]
    pub database_path: PathBuf,

    /// Log level
    #[arg(short = 'l', long, env = "COVID_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub async fn run(self, cancellation_token: CancellationToken) -> anyhow::Result<()> {
        let store = match SqliteStore::open(&self.database_path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!("DB ERROR {}: {e}", self.database_path.display());
                std::process::exit(1);
            }
        };
        apply_schema(&store)?;
        info!("Database ready at {}", self.database_path.display());

        let store_context = Arc::new(StoreContext::new(store));
        start_server(&self.host, self.port, store_context, cancellation_token).await
    }
}
