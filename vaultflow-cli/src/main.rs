//! VaultFlow CLI - inspect the access model and drive the demo session.
//!
//! ```bash
//! vaultflow permissions viewer
//! vaultflow login accountant@vaultflow.com
//! vaultflow gate approve:transactions
//! vaultflow switch viewer
//! ```
//!
//! The selected role is kept in a JSON file (`--store`, default
//! `.vaultflow/session.json`) so it survives between invocations.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vaultflow_core::rbac::Role;

#[derive(Parser)]
#[command(name = "vaultflow", about = "VaultFlow access control tool", version)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "vaultflow.toml")]
    config: PathBuf,

    /// Role store file, overrides the configured one
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List roles with their labels and levels
    Roles,
    /// List permissions, optionally only those granted to a role
    Permissions { role: Option<Role> },
    /// Check whether a role holds a permission token
    Check { role: Role, permission: String },
    /// Check whether a role may open a route
    Route {
        role: Role,
        /// Allowed role, repeatable; none means open to all
        #[arg(long = "allow")]
        allowed: Vec<Role>,
    },
    /// Show the sidebar a role would see
    Nav { role: Option<Role> },
    /// Evaluate a permission gate against the current session
    Gate { permission: String },
    /// Sign in with the demo identity provider
    Login {
        identifier: String,
        #[arg(long, default_value = "demo")]
        password: String,
    },
    /// Switch the demo session to another role
    Switch { role: Role },
    /// Show the current session
    Whoami,
    /// End the current session
    Logout,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = commands::load_config(&cli.config, cli.store)?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    vaultflow_core::logging::init_logging(&config.logging)?;
    log::debug!("Loaded configuration from {}", cli.config.display());

    let output = match cli.command {
        Commands::Roles => commands::inspect::roles(),
        Commands::Permissions { role } => commands::inspect::permissions(role),
        Commands::Check { role, permission } => commands::inspect::check(role, &permission),
        Commands::Route { role, allowed } => commands::inspect::route(role, &allowed),
        Commands::Nav { role } => commands::inspect::nav(role),
        Commands::Gate { permission } => commands::session::gate(&config, &permission).await?,
        Commands::Login { identifier, password } => {
            commands::session::login(&config, &identifier, &password).await?
        }
        Commands::Switch { role } => commands::session::switch(&config, role)?,
        Commands::Whoami => commands::session::whoami(&config).await?,
        Commands::Logout => commands::session::logout(&config).await?,
    };

    println!("{}", output);
    Ok(())
}
