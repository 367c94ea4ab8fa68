use clap::{Args, Parser, Subcommand};

/// easypost-cli: inspect an EasyPost account from the terminal.
///
/// The API key is read from `EASYPOST_API_KEY` (a `.env` file is honoured).
#[derive(Parser, Debug)]
#[command(name = "easypost-cli", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Override the API base URL (default: EASYPOST_API_URL or production)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds; 0 disables it
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Output as JSON lines instead of TSV
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List addresses, newest first
    Addresses(PageArgs),

    /// List shipments, newest first
    Shipments(ShipmentsArgs),

    /// Fetch one address by ID
    Address {
        /// Address ID (adr_...)
        id: String,
    },

    /// Run delivery verification on an existing address
    Verify {
        /// Address ID (adr_...)
        id: String,
    },

    /// Show the primary and secondary payment methods
    PaymentMethods,
}

/// Paging controls shared by the list commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Items per page
    #[arg(long, default_value_t = 20)]
    pub page_size: u32,

    /// Maximum number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: u32,
}

#[derive(Args, Debug, Clone)]
pub struct ShipmentsArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only purchased (true) or unpurchased (false) shipments
    #[arg(long)]
    pub purchased: Option<bool>,
}
