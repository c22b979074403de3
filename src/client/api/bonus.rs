//! Bonus API trait for volunteer history

use async_trait::async_trait;

use crate::client::models::BonusRecord;
use crate::error::Result;

/// Volunteer bonus history operations
#[async_trait]
pub trait BonusApi: Send + Sync {
    /// List QR bonus usage records for a volunteer email
    async fn qr_history(&self, email: &str) -> Result<Vec<BonusRecord>>;
}
