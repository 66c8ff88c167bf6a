use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the posts table if it is missing")]
    Init,

    #[command(about = "Check that the database answers")]
    Health,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config::config().database).await?;

    let result = match cmd {
        DbCommands::Init => DatabaseManager::ensure_schema(&pool).await.map(|_| "schema ready"),
        DbCommands::Health => DatabaseManager::health_check(&pool).await.map(|_| "database ok"),
    };
    pool.close().await;

    let status = result?;
    match output_format {
        OutputFormat::Json => println!("{}", json!({ "status": status })),
        OutputFormat::Text => println!("{}", status),
    }
    Ok(())
}
