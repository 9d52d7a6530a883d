//! Grocery CLI - grocery lists in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{auth, best_sellers, bought, demo, lists, products, seed, status};

/// Environment variable holding the log filter
const LOG_ENV: &str = "GROCERY_LOG";

/// Grocery - grocery lists in your terminal
#[derive(Parser)]
#[command(name = "grocery", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a summary of the stored data
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which clients bought a product
    Bought {
        /// Product ID (prints an empty report when omitted)
        product_id: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank products by amount put on grocery lists
    BestSellers {
        /// Number of products to show
        #[arg(long, default_value_t = 5)]
        top: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List grocery lists
    Lists {
        /// Only lists owned by this client
        #[arg(long)]
        client: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List products
    Products {
        /// Only products without stock
        #[arg(long)]
        out_of_stock: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an email address and password
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long, env = "GROCERY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a salted hash for a password
    HashPassword {
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Copy the demo data set into the database
    Seed,

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status { json } => status::run(json),
        Commands::Bought { product_id, json } => bought::run(product_id, json),
        Commands::BestSellers { top, json } => best_sellers::run(top, json),
        Commands::Lists { client, json } => lists::run(client, json),
        Commands::Products { out_of_stock, json } => products::run(out_of_stock, json),
        Commands::Login { email, password, json } => auth::run_login(&email, password, json),
        Commands::HashPassword { password } => auth::run_hash(password),
        Commands::Seed => seed::run(),
        Commands::Demo { command } => demo::run(command),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bought_product_id_is_optional() {
        let cli = Cli::try_parse_from(["grocery", "bought"]).unwrap();
        assert!(matches!(cli.command, Commands::Bought { product_id: None, .. }));

        let cli = Cli::try_parse_from(["grocery", "bought", "3", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Bought { product_id: Some(3), json: true }
        ));
    }

    #[test]
    fn test_best_sellers_default_top() {
        let cli = Cli::try_parse_from(["grocery", "best-sellers"]).unwrap();
        assert!(matches!(cli.command, Commands::BestSellers { top: 5, .. }));
    }
}
