//! Clementine CLI - Catalog administration over the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Obtain a bearer token
//! clementine login -e admin@example.com -p secret
//!
//! # List the catalog
//! clementine products list
//! clementine categories list
//!
//! # Mutations
//! clementine products toggle 3
//! clementine categories create -n "Summer Sale"
//! clementine orders set-status 12 shipped
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Base URL of the commerce backend
//! - `ADMIN_API_TOKEN` - Bearer token (printed by `login`)
//!
//! # Commands
//!
//! - `login` - Authenticate and print a bearer token
//! - `products` - List, toggle and delete products
//! - `categories` - Manage the category tree
//! - `attributes` - Manage attribute axes and their values
//! - `orders` - List orders, change status, download receipts
//! - `users` - List customer accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

use clementine_core::OrderStatus;

mod commands;

#[derive(Parser)]
#[command(name = "clementine")]
#[command(author, version, about = "Clementine catalog administration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate against the backend and print a bearer token
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the category tree
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage attribute axes and their values
    Attributes {
        #[command(subcommand)]
        action: AttributeAction,
    },
    /// Inspect and progress orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// List customer accounts
    Users,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products with their variants
    List,
    /// Flip a product's active flag
    Toggle {
        /// Product ID
        id: i32,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List the category tree
    List,
    /// Create a category (slug derived from the name unless given)
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Explicit slug; derived from the name when omitted
        #[arg(short, long)]
        slug: Option<String>,

        /// Parent category ID for a child category
        #[arg(short, long)]
        parent: Option<i32>,
    },
    /// Flip a category's active flag
    Toggle {
        /// Category ID
        id: i32,
    },
    /// Delete a category (rejected while products remain in it)
    Delete {
        /// Category ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum AttributeAction {
    /// List attribute axes
    List,
    /// Create an attribute axis
    Create {
        /// Axis name (e.g. "Material")
        #[arg(short, long)]
        name: String,
    },
    /// List the values on one axis
    Values {
        /// Attribute ID
        id: i32,
    },
    /// Add a value to an axis
    AddValue {
        /// Attribute ID
        #[arg(short, long)]
        attribute: i32,

        /// The value to add (e.g. "Linen")
        #[arg(short, long)]
        value: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List all orders
    List,
    /// Show one order with its line items
    Show {
        /// Order ID
        id: i32,
    },
    /// Move an order to a new status
    SetStatus {
        /// Order ID
        id: i32,

        /// Target status
        status: StatusArg,
    },
    /// Download an order receipt as PDF
    Receipt {
        /// Order ID
        id: i32,

        /// Output file path
        #[arg(short, long, default_value = "receipt.pdf")]
        out: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl From<StatusArg> for OrderStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => Self::Pending,
            StatusArg::Paid => Self::Paid,
            StatusArg::Shipped => Self::Shipped,
            StatusArg::Delivered => Self::Delivered,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&email, &password).await?;
        }
        Commands::Products { action } => match action {
            ProductAction::List => commands::products::list().await?,
            ProductAction::Toggle { id } => commands::products::toggle(id).await?,
            ProductAction::Delete { id } => commands::products::delete(id).await?,
        },
        Commands::Categories { action } => match action {
            CategoryAction::List => commands::categories::list().await?,
            CategoryAction::Create { name, slug, parent } => {
                commands::categories::create(&name, slug.as_deref(), parent).await?;
            }
            CategoryAction::Toggle { id } => commands::categories::toggle(id).await?,
            CategoryAction::Delete { id } => commands::categories::delete(id).await?,
        },
        Commands::Attributes { action } => match action {
            AttributeAction::List => commands::attributes::list().await?,
            AttributeAction::Create { name } => commands::attributes::create(&name).await?,
            AttributeAction::Values { id } => commands::attributes::values(id).await?,
            AttributeAction::AddValue { attribute, value } => {
                commands::attributes::add_value(attribute, &value).await?;
            }
        },
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list().await?,
            OrderAction::Show { id } => commands::orders::show(id).await?,
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(id, status.into()).await?;
            }
            OrderAction::Receipt { id, out } => commands::orders::receipt(id, &out).await?,
        },
        Commands::Users => commands::users::list().await?,
    }
    Ok(())
}
