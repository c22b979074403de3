//! Bonus history display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::BonusRecord;

/// Bonus record display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BonusDisplay {
    /// Record ID
    #[tabled(rename = "ID")]
    pub id: i64,

    /// Where the bonus was used
    #[tabled(rename = "ОРГАНИЗАЦИЯ")]
    pub location: String,

    /// Record date (YYYY-MM-DD)
    #[tabled(rename = "ДАТА")]
    pub date: String,

    /// Redemption status text
    #[tabled(rename = "СТАТУС")]
    pub status: String,

    /// Points spent (rating × 10)
    #[tabled(rename = "БАЛЛЫ")]
    pub points_spent: i64,
}

impl From<BonusRecord> for BonusDisplay {
    fn from(record: BonusRecord) -> Self {
        Self {
            id: record.id,
            date: record.created_at.format("%Y-%m-%d").to_string(),
            status: if record.used {
                "Использовано".to_string()
            } else {
                "Не использовано".to_string()
            },
            points_spent: record.points_spent(),
            location: record.used_location,
        }
    }
}
