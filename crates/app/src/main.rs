use clap::Parser;
use migration::{Migrator, MigratorTrait};
use server::JwtService;

mod settings;

#[derive(Debug, Parser)]
#[command(name = "freedom", about = "Personal finance bookkeeping API")]
struct Cli {
    /// Settings file, without extension.
    #[arg(long, env = "FREEDOM_SETTINGS", default_value = "settings")]
    settings: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "freedom={level},server={level},ledger={level},migration={level}",
            level = settings.app.level
        ))
        .init();

    let db = connect(&settings.database).await?;
    let ledger = ledger::Ledger::builder().database(db).build().await?;
    let expiry = settings.jwt.expiry()?;
    let jwt = JwtService::new(
        settings.jwt.secret.as_bytes(),
        settings.jwt.issuer,
        settings.jwt.audience,
        expiry,
    );

    let listener = tokio::net::TcpListener::bind(settings.server.address()).await?;
    server::run_with_listener(ledger, jwt, listener).await?;

    Ok(())
}

async fn connect(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(config.connection_url()).await?;
    Migrator::up(&database, None).await?;
    tracing::info!("database ready");
    Ok(database)
}
