use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tiket_client::TicketApi;
use tiket_infrastructure::{ConfigService, FileSessionStore};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "tiket")]
#[command(about = "Tiket - admin console for the GuardSquare support-ticketing API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        username: String,
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Browse and inspect tickets
    Tickets {
        #[command(subcommand)]
        action: commands::tickets::TicketAction,
    },
    /// List customers from the reference endpoint
    Customers {
        /// Search by name, application, product, or expiry
        #[arg(long)]
        query: Option<String>,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Administer user accounts
    Users {
        #[command(subcommand)]
        action: commands::users::UserAction,
    },
    /// Update your own profile or password
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Generate a per-customer ticket report
    Report(commands::report::ReportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ConfigService::new()?.load_or_init()?;
    let store = Arc::new(FileSessionStore::new()?);
    let api = Arc::new(TicketApi::new(&config, store));

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&api, &username, &password).await?
        }
        Commands::Logout => commands::auth::logout(&api)?,
        Commands::Whoami => commands::auth::whoami(&api)?,
        Commands::Tickets { action } => commands::tickets::run(&api, action).await?,
        Commands::Customers { query, page } => {
            commands::customers::run(&api, query.as_deref(), page).await?
        }
        Commands::Users { action } => commands::users::run(api.clone(), action).await?,
        Commands::Profile { action } => commands::profile::run(&api, action).await?,
        Commands::Report(args) => commands::report::run(api.clone(), args).await?,
    }

    Ok(())
}
