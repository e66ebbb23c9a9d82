use crate::api::server::start_server;
use crate::store::core::StoreContext;
use crate::store::schema::apply_schema;
use clap::Parser;
use log::{error, info};
use shared::security::token::TokenSigner;
use shared::store::SqliteStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(name = "feed", about = "Social feed REST service")]
pub struct Cli {
    /// Bind address
    #[arg(long, env = "FEED_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port
    #[arg(short = 'p', long, env = "FEED_PORT", default_value = "3000")]
    pub port: u16,

    /// SQLite database file
    #[arg(short = 'd', long, env = "FEED_DATABASE_PATH", default_value = "twitterClone.db")]
    pub database_path: PathBuf,

    /// Secret used to sign and verify bearer tokens
    #[arg(long, env = "FEED_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Lifetime of issued tokens in seconds
    #[arg(long, env = "FEED_TOKEN_TTL_SECS", default_value = "86400")]
    pub token_ttl_secs: u64,

    /// Log level
    #[arg(short = 'l', long, env = "FEED_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub async fn run(self, cancellation_token: CancellationToken) -> anyhow::Result<()> {
        if self.jwt_secret.trim().is_empty() {
            anyhow::bail!("jwt secret must not be empty");
        }

        let store = match SqliteStore::open(&self.database_path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!(
                    "Failed to open database {}: {e}",
                    self.database_path.display()
                );
                std::process::exit(1);
            }
        };
        apply_schema(&store)?;
        info!("Database ready at {}", self.database_path.display());

        let store_context = Arc::new(StoreContext::new(store));
        let tokens = Arc::new(TokenSigner::new(&self.jwt_secret, self.token_ttl_secs));

        start_server(
            &self.host,
            self.port,
            store_context,
            tokens,
            cancellation_token,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["feed", "--jwt-secret", "s3cret"]).unwrap();
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.database_path, PathBuf::from("twitterClone.db"));
        assert_eq!(cli.token_ttl_secs, 86400);
    }

    #[test]
    fn test_secret_is_required() {
        std::env::remove_var("FEED_JWT_SECRET");
        assert!(Cli::try_parse_from(["feed"]).is_err());
    }
}
