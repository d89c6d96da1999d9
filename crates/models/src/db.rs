use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tracing::info;

use configs::DatabaseConfig;

/// Connect to the document store and confirm it answers a `ping`.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Database> {
    let mut options = ClientOptions::parse(cfg.url.as_str()).await?;
    options.app_name = Some("recipe-keeper".to_string());
    options.connect_timeout = Some(cfg.connect_timeout());
    options.server_selection_timeout = Some(cfg.connect_timeout());

    let client = Client::with_options(options)?;
    let db = client.database(&cfg.name);
    ping(&db).await?;
    info!(database = %cfg.name, "connected to document store");
    Ok(db)
}

pub async fn ping(db: &Database) -> anyhow::Result<()> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
