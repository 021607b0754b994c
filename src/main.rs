use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use festapp_application::{prelude as flows, sqlite};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about = "festapp: event backend with demo cloning", long_about = None)]
struct Cli {
    /// Configuration file (default: festapp.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server
    Serve {
        /// Allow requests from any origin
        #[arg(long)]
        enable_cors: bool,
    },
    /// Clone an event with all its rows for another user
    Clone {
        #[arg(value_name = "SOURCE_EVENT_ID")]
        source_event_id: i64,
        #[arg(value_name = "TARGET_USER_ID")]
        target_user_id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(cli.config_file.as_ref())?;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;

    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match cli.command {
        Command::Serve { enable_cors } => {
            let enable_cors = enable_cors || cfg.webserver.enable_cors;
            festapp_webserver::run(connections, enable_cors, env!("CARGO_PKG_VERSION")).await;
        }
        Command::Clone {
            source_event_id,
            target_user_id,
        } => {
            let new_event_id =
                flows::clone_event_for_user(&connections, source_event_id, target_user_id)?;
            println!("{new_event_id}");
        }
    }
    Ok(())
}
