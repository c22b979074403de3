//! Configuration status display

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command: show where the config lives and what is set.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = match opts.config_ref() {
        Some(p) => p.to_string(),
        None => Config::default_path()?.display().to_string(),
    };

    println!("{}", "Конфигурация".bold());
    println!();
    println!("  Файл: {}", path);

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => {
            println!();
            println!(
                "  {} Файл не найден. Выполните `dobrodon init`.",
                "!".yellow()
            );
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let api_url = opts.api_url.clone().or(config.api_url);

    print_entry("Адрес API", api_url.as_deref());
    print_entry("Email", config.email.as_deref());
    println!(
        "  Токен:     {}",
        if config.token.is_some() {
            "задан".green().to_string()
        } else {
            "не задан".yellow().to_string()
        }
    );
    if let Some(format) = config.preferences.format.as_deref() {
        print_entry("Формат", Some(format));
    }

    Ok(())
}

fn print_entry(label: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("  {}: {}", label, value),
        None => println!("  {}: {}", label, "не задан".yellow()),
    }
}
