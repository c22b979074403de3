//! Bonus history models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One QR bonus usage record from `GET /user-qr-history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRecord {
    /// Record ID
    pub id: i64,

    /// Where the bonus was used
    pub used_location: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// Whether the bonus has been redeemed
    pub used: bool,

    /// Rating awarded for the visit
    pub rating: i64,
}

impl BonusRecord {
    /// Points spent for this record (the portal's rating × 10 rule).
    pub fn points_spent(&self) -> i64 {
        self.rating * 10
    }
}
