//! User administration command implementations

use colored::Colorize;
use log::debug;

use crate::cli::{spinner, CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::{PersonUpdate, Role};
use crate::client::PeopleApi;
use crate::error::{Error, Result};
use crate::models::display::PersonDisplay;
use crate::output::{json, Formattable};

/// Run the user list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let pb = spinner("Загрузка пользователей...");
    let people = ctx.client.list_people().await;
    pb.finish_and_clear();
    let people = people?;

    debug!("fetched {} people", people.len());

    let display: Vec<PersonDisplay> = people.into_iter().map(PersonDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the user get command
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let pb = spinner("Загрузка пользователя...");
    let person = ctx.client.get_person(id).await;
    pb.finish_and_clear();
    let person = person?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Пользователь".bold());
            println!();
            println!("  ID:    {}", person.id);
            println!("  Имя:   {}", person.full_name);
            println!("  Email: {}", person.email);
            println!("  Роль:  {}", person.role.label());
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&person)?);
        }
    }

    Ok(())
}

/// Run the user set command.
///
/// The update endpoint expects the complete field set, so unspecified
/// fields are carried over from the current record.
pub async fn set(
    opts: &GlobalOptions,
    id: i64,
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
) -> Result<()> {
    if name.is_none() && email.is_none() && role.is_none() {
        return Err(Error::Other(
            "Nothing to update: pass at least one of --name, --email, --role".to_string(),
        ));
    }

    let ctx = CommandContext::new(opts)?;

    let pb = spinner("Загрузка пользователя...");
    let current = ctx.client.get_person(id).await;
    pb.finish_and_clear();
    let current = current?;

    let update = PersonUpdate {
        id,
        new_full_name: name.unwrap_or(current.full_name),
        new_email: email.unwrap_or(current.email),
        new_role: role.unwrap_or(current.role),
    };

    let pb = spinner("Сохранение изменений...");
    let response = ctx.client.update_person(update).await;
    pb.finish_and_clear();
    let response = response?;

    println!("{} {}", "✓".green(), response.message);

    Ok(())
}
