//! Interactive configuration setup

use colored::Colorize;
use dialoguer::{Input, Password};

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Default platform API base URL
const DEFAULT_API_URL: &str = "https://api.dobrodon.ru";

/// Run the init command: prompt for the API URL, volunteer email, and an
/// optional access token, then write the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    // Prefill prompts from an existing config, if any.
    let existing = Config::load_at(opts.config_ref()).unwrap_or_default();

    println!("{}", "Настройка Dobrodon CLI".bold());
    println!();

    let api_url: String = Input::new()
        .with_prompt("Адрес API")
        .default(
            existing
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )
        .interact_text()?;

    let email: String = Input::new()
        .with_prompt("Email волонтёра (пусто — пропустить)")
        .allow_empty(true)
        .default(existing.email.unwrap_or_default())
        .interact_text()?;

    let token: String = Password::new()
        .with_prompt("Токен доступа (пусто — пропустить)")
        .allow_empty_password(true)
        .interact()?;

    let config = Config {
        api_url: Some(api_url.trim_end_matches('/').to_string()),
        email: (!email.is_empty()).then_some(email),
        // An empty token keeps whatever was stored before.
        token: if token.is_empty() {
            existing.token
        } else {
            Some(token)
        },
        preferences: existing.preferences,
    };

    config.save_at(opts.config_ref())?;

    let path = match opts.config_ref() {
        Some(p) => p.to_string(),
        None => Config::default_path()?.display().to_string(),
    };
    println!();
    println!("{} Конфигурация сохранена: {}", "✓".green(), path);

    Ok(())
}
