//! Person display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Person;

/// Person display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PersonDisplay {
    /// User ID
    #[tabled(rename = "ID")]
    pub id: i64,

    /// Full name
    #[tabled(rename = "ПОЛЬЗОВАТЕЛЬ")]
    pub full_name: String,

    /// Account email
    #[tabled(rename = "EMAIL")]
    pub email: String,

    /// Role label
    #[tabled(rename = "РОЛЬ")]
    pub role: String,
}

impl From<Person> for PersonDisplay {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            full_name: person.full_name,
            email: person.email,
            role: person.role.label(),
        }
    }
}
