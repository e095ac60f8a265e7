//! Tamarind CLI - Local data inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Register a local account and sign in
//! tam-cli account register -n "Ada Lovelace" -e ada@example.com -p "correct horse"
//!
//! # Save a card for the dummy checkout flow
//! tam-cli payments add-card --number 4111111111111111 --cardholder "Ada Lovelace"
//!
//! # Browse the bundled menu
//! tam-cli menu list --category Burgers
//!
//! # Inspect a raw stored record
//! tam-cli store get auth_users
//! ```
//!
//! # Commands
//!
//! - `account` - Register, sign in/out, show the current session
//! - `payments` - Manage saved payment methods
//! - `menu` - Browse the bundled menu catalog
//! - `store` - Inspect or remove raw records

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use tamarind_client::AppState;
use tamarind_client::config::ClientConfig;

mod commands;

#[derive(Parser)]
#[command(name = "tam-cli")]
#[command(author, version, about = "Tamarind CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Manage saved payment methods
    Payments {
        #[command(subcommand)]
        action: PaymentsAction,
    },
    /// Browse the menu catalog
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Inspect raw stored records
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Register a new account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (min 8 characters)
        #[arg(short, long)]
        password: String,
    },
    /// Sign in to an existing account
    SignIn {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out of the current session
    SignOut,
    /// Show the current session, if any
    Whoami,
}

#[derive(Subcommand)]
enum PaymentsAction {
    /// Save a card (only the last four digits are kept)
    AddCard {
        /// Card number
        #[arg(long)]
        number: String,

        /// Name on the card
        #[arg(long)]
        cardholder: Option<String>,
    },
    /// Save a UPI handle
    AddUpi {
        /// Provider: `gpay`, `phonepe` or `upi`
        #[arg(long)]
        provider: String,

        /// UPI ID (e.g. name@bank)
        #[arg(long)]
        upi_id: Option<String>,
    },
    /// Save a wallet
    AddWallet {
        /// Wallet kind: `amazonpay`
        #[arg(long)]
        wallet: String,
    },
    /// List saved methods, newest first
    List,
    /// Remove a method by ID
    Remove {
        /// The method ID (e.g. card_1724790000000_0)
        id: String,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// List menu items
    List {
        /// Restrict to one category (ID or name; `all` for no filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum StoreAction {
    /// Print the raw JSON stored under a key
    Get {
        /// Record key (e.g. auth_users, payment_methods)
        key: String,
    },
    /// Remove the record stored under a key
    Remove {
        /// Record key
        key: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::load()?;
    let state = AppState::new(config).await?;

    match cli.command {
        Commands::Account { action } => match action {
            AccountAction::Register {
                name,
                email,
                password,
            } => commands::account::register(&state, &name, &email, &password).await?,
            AccountAction::SignIn { email, password } => {
                commands::account::sign_in(&state, &email, &password).await?;
            }
            AccountAction::SignOut => commands::account::sign_out(&state).await?,
            AccountAction::Whoami => commands::account::whoami(&state).await?,
        },
        Commands::Payments { action } => match action {
            PaymentsAction::AddCard { number, cardholder } => {
                commands::payments::add_card(&state, &number, cardholder.as_deref()).await?;
            }
            PaymentsAction::AddUpi { provider, upi_id } => {
                commands::payments::add_upi(&state, &provider, upi_id.as_deref()).await?;
            }
            PaymentsAction::AddWallet { wallet } => {
                commands::payments::add_wallet(&state, &wallet).await?;
            }
            PaymentsAction::List => commands::payments::list(&state).await?,
            PaymentsAction::Remove { id } => commands::payments::remove(&state, &id).await?,
        },
        Commands::Menu { action } => match action {
            MenuAction::List { category, search } => {
                commands::menu::list(&state, category, search).await?;
            }
            MenuAction::Categories => commands::menu::categories(&state).await?,
        },
        Commands::Store { action } => match action {
            StoreAction::Get { key } => commands::store::get(&state, &key).await?,
            StoreAction::Remove { key } => commands::store::remove(&state, &key).await?,
        },
    }

    Ok(())
}
