use clap::{Parser, Subcommand};
use config::{Config, Environment, File};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

#[derive(Debug, Parser)]
#[command(name = "migration", about = "Manage the freedom database schema")]
struct Cli {
    /// Database url. Falls back to `database.url` from the settings file.
    #[arg(long, env = "FREEDOM__DATABASE__URL")]
    database_url: Option<String>,

    /// Settings file, without extension.
    #[arg(long, env = "FREEDOM_SETTINGS", default_value = "settings")]
    settings: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending migrations.
    Up {
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations, all of them unless `--steps` is given.
    Down {
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Drop every table and apply all migrations again.
    Fresh,
    /// Show which migrations are applied.
    Status,
}

fn database_url(cli: &Cli) -> Result<String, config::ConfigError> {
    if let Some(url) = &cli.database_url {
        return Ok(url.clone());
    }
    Config::builder()
        .set_default("database.url", "sqlite:./freedom.db?mode=rwc")?
        .add_source(File::with_name(&cli.settings).required(false))
        .add_source(Environment::with_prefix("FREEDOM").separator("__"))
        .build()?
        .get_string("database.url")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let url = database_url(&cli)?;
    if url == "memory" {
        return Err("an in-memory database is migrated by the server on startup".into());
    }

    let db = Database::connect(&url).await?;

    match cli.command.unwrap_or(Command::Up { steps: None }) {
        Command::Up { steps } => migration::Migrator::up(&db, steps).await?,
        Command::Down { steps } => migration::Migrator::down(&db, steps).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        let cli = Cli::parse_from([
            "migration",
            "--database-url",
            "mysql://root@localhost/freedom",
            "status",
        ]);
        assert_eq!(database_url(&cli).unwrap(), "mysql://root@localhost/freedom");
        assert!(matches!(cli.command, Some(Command::Status)));
    }

    #[test]
    fn down_accepts_steps() {
        let cli = Cli::parse_from(["migration", "down", "--steps", "2"]);
        assert!(matches!(cli.command, Some(Command::Down { steps: Some(2) })));
    }
}
