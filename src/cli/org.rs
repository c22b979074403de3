//! Partner organization command implementations

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{spinner, CommandContext, GlobalOptions};
use crate::client::models::{Category, Organization};
use crate::client::DirectoryApi;
use crate::directory::{apply_filter, DirectoryView, Phase, DEBOUNCE_INTERVAL};
use crate::error::Result;
use crate::models::display::OrgDisplay;
use crate::output::Formattable;

/// Run the org list command.
///
/// The category narrows server-side; the search term narrows the fetched
/// batch locally, same as the interactive browser.
pub async fn list(opts: &GlobalOptions, category: Category, search: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let pb = spinner("Загрузка организаций...");
    let orgs = ctx.client.list_organizations(category).await;
    pb.finish_and_clear();
    let orgs = orgs?;

    debug!("fetched {} organizations", orgs.len());

    let orgs = match search {
        Some(term) => apply_filter(term, &orgs, category),
        None => orgs,
    };

    let display: Vec<OrgDisplay> = orgs.into_iter().map(OrgDisplay::from).collect();
    display.print(ctx.format)
}

/// Run the interactive directory browser.
///
/// Every entered line becomes the new search term (debounced through the
/// same 300 ms quiet interval the view always uses); `:c <category>`
/// switches category, `:q` quits.
pub async fn browse(opts: &GlobalOptions, category: Category) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client: Arc<dyn DirectoryApi> = ctx.client.clone();
    let view = DirectoryView::new(client);

    view.load_category(category).await;
    render(&view).await;

    println!();
    println!(
        "{}",
        "Введите текст для поиска по названию, :c <категория> для смены категории, :q для выхода."
            .dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();

        if line == ":q" {
            break;
        }

        if let Some(rest) = line.strip_prefix(":c ") {
            match rest.trim().parse::<Category>() {
                Ok(category) => {
                    view.load_category(category).await;
                    render(&view).await;
                }
                Err(err) => println!("{}", err.red()),
            }
            continue;
        }

        view.set_search_term(line).await;

        // Let the quiet interval elapse so the pass has run.
        tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(50)).await;
        render(&view).await;
    }

    Ok(())
}

/// Render the view's current state to stdout.
async fn render(view: &DirectoryView) {
    match view.phase().await {
        Phase::Loading => println!("{}", "Загрузка...".dimmed()),
        Phase::Failed(msg) => println!("{}", msg.red()),
        Phase::Ready => {
            let visible = view.visible().await;
            print_orgs(&visible);

            let term = view.search_term().await;
            let summary = if term.is_empty() {
                format!("{}: {} организаций", view.category().await, visible.len())
            } else {
                format!(
                    "{}, поиск \"{}\": {} организаций",
                    view.category().await,
                    term,
                    visible.len()
                )
            };
            println!("{}", summary.dimmed());
        }
    }
}

fn print_orgs(orgs: &[Organization]) {
    let display: Vec<OrgDisplay> = orgs.iter().map(OrgDisplay::from).collect();
    println!("{}", crate::output::table::format_table(&display));
}
