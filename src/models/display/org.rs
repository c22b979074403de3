//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Organization;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organization ID
    #[tabled(rename = "ID")]
    pub id: i64,

    /// Organization name
    #[tabled(rename = "НАЗВАНИЕ")]
    pub name: String,

    /// Category label
    #[tabled(rename = "КАТЕГОРИЯ")]
    pub category: String,

    /// Street address
    #[tabled(rename = "АДРЕС")]
    pub address: String,

    /// Contact phone
    #[tabled(rename = "ТЕЛЕФОН")]
    pub phone: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            category: org.category,
            address: org.address,
            phone: org.phone,
        }
    }
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            category: org.category.clone(),
            address: org.address.clone(),
            phone: org.phone.clone(),
        }
    }
}
