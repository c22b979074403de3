//! Bonus history command implementations

use log::debug;

use crate::cli::{spinner, CommandContext, GlobalOptions};
use crate::client::BonusApi;
use crate::error::Result;
use crate::models::display::BonusDisplay;
use crate::output::Formattable;

/// Run the bonus history command.
///
/// The email defaults to the configured volunteer email.
pub async fn history(opts: &GlobalOptions, email: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let email = match email {
        Some(email) => email.to_string(),
        None => ctx.config.require_email()?.to_string(),
    };

    let pb = spinner("Загрузка истории бонусов...");
    let history = ctx.client.qr_history(&email).await;
    pb.finish_and_clear();
    let history = history?;

    debug!("fetched {} bonus records for {}", history.len(), email);

    let display: Vec<BonusDisplay> = history.into_iter().map(BonusDisplay::from).collect();
    display.print(ctx.format)
}
