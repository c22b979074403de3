//! Dobrodon CLI - companion for the Dobrodon volunteer loyalty platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod directory;
mod error;
mod models;
mod output;

use cli::{BonusCommands, Cli, Commands, GlobalOptions, OrgCommands, UserCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("dobrodon version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::print_completions(shell);
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List { category, search } => {
                cli::org::list(&opts, category, search.as_deref()).await
            }
            OrgCommands::Browse { category } => cli::org::browse(&opts, category).await,
        },
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::List => cli::user::list(&opts).await,
            UserCommands::Get { id } => cli::user::get(&opts, id).await,
            UserCommands::Set {
                id,
                name,
                email,
                role,
            } => cli::user::set(&opts, id, name, email, role).await,
        },
        Commands::Bonus(bonus_cmd) => match bonus_cmd {
            BonusCommands::History { email } => cli::bonus::history(&opts, email.as_deref()).await,
        },
    }
}

/// Initialize env_logger; `--debug` forces debug level over RUST_LOG.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
