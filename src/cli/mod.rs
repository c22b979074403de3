//! CLI command definitions and handlers

use clap::{CommandFactory, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod bonus;
pub mod context;
pub mod init;
pub mod org;
pub mod status;
pub mod user;

pub use context::CommandContext;

use crate::client::models::{Category, Role};

/// Dobrodon CLI - companion for the Dobrodon volunteer loyalty platform
#[derive(Parser, Debug)]
#[command(name = "dobrodon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "DOBRODON_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override API base URL
    #[arg(long, global = true, env = "DOBRODON_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "DOBRODON_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DOBRODON_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Dobrodon configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Browse and search partner organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage platform users
    #[command(subcommand)]
    User(UserCommands),

    /// View volunteer bonus history
    #[command(subcommand)]
    Bonus(BonusCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Partner organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List partner organizations
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            dobrodon org list                        # Whole directory\n  \
            dobrodon org list --category food        # Server-side category filter\n  \
            dobrodon org list --search кафе          # Narrow by name substring\n  \
            dobrodon org list --format json | jq '.data'"
    )]
    List {
        /// Category to fetch (all, food, health, clothing)
        #[arg(long, short = 'c', default_value = "all")]
        category: Category,

        /// Narrow results by name substring (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Interactively search the directory (type to filter, :q to quit)
    #[command(after_help = "\
Type a search term and press Enter to narrow the list.
Commands inside the browser:
  :c <category>   switch category (all, food, health, clothing)
  :q              quit")]
    Browse {
        /// Category to start with
        #[arg(long, short = 'c', default_value = "all")]
        category: Category,
    },
}

/// User management subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List platform users
    List,

    /// Show a single user
    Get {
        /// User ID
        id: i64,
    },

    /// Update a user's name, email or role
    #[command(after_help = "EXAMPLES:\n  \
            dobrodon user set 7 --name \"Иван Иванов\"\n  \
            dobrodon user set 7 --role organization\n  \
            dobrodon user set 7 --email new@example.com --role volunteer")]
    Set {
        /// User ID
        id: i64,

        /// New full name
        #[arg(long)]
        name: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// New role (admin, organization, volunteer)
        #[arg(long)]
        role: Option<Role>,
    },
}

/// Bonus history subcommands
#[derive(Subcommand, Debug)]
pub enum BonusCommands {
    /// List QR bonus usage history
    History {
        /// Volunteer email (defaults to the configured one)
        #[arg(long)]
        email: Option<String>,
    },
}

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags into a single unit so handler signatures
/// stay small. Precedence for the API URL: CLI flag > env var > config
/// file.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// API base URL override (bypasses config file)
    pub api_url: Option<String>,

    /// Custom config file path (defaults to ~/.dobrodon/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_url: cli.api_url.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get the config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

/// Print static shell completions to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "dobrodon", &mut std::io::stdout());
}

/// Spinner shown while a fetch is in flight.
pub(crate) fn spinner(message: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
