//! Platform user models

use serde::{Deserialize, Serialize};

/// Platform user as returned by `GET /people`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// User ID
    pub id: i64,

    /// Full display name
    pub full_name: String,

    /// Account email
    pub email: String,

    /// Account role
    pub role: Role,
}

/// Account role, numeric on the wire.
///
/// Unknown numbers are preserved as `Other` so one odd row does not fail
/// a whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Role {
    Admin,
    Organization,
    Volunteer,
    Other(u8),
}

impl Role {
    /// Human-readable label, matching the portal's rendering.
    pub fn label(self) -> String {
        match self {
            Role::Admin => "Администратор".to_string(),
            Role::Organization => "Организация".to_string(),
            Role::Volunteer => "Волонтер".to_string(),
            Role::Other(n) => format!("Роль {}", n),
        }
    }
}

impl From<u8> for Role {
    fn from(n: u8) -> Self {
        match n {
            0 => Role::Admin,
            1 => Role::Organization,
            2 => Role::Volunteer,
            other => Role::Other(other),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => 0,
            Role::Organization => 1,
            Role::Volunteer => 2,
            Role::Other(n) => n,
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "organization" => Ok(Role::Organization),
            "volunteer" => Ok(Role::Volunteer),
            other => other
                .parse::<u8>()
                .map(Role::from)
                .map_err(|_| format!("unknown role '{}' (expected admin, organization, volunteer or a number)", other)),
        }
    }
}

/// Request body for `POST /update-person`.
///
/// The portal's edit form always posts the complete field set, so partial
/// CLI updates are merged against the current record before sending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonUpdate {
    /// ID of the user being updated
    pub id: i64,

    /// Replacement full name
    pub new_full_name: String,

    /// Replacement email
    pub new_email: String,

    /// Replacement role
    pub new_role: Role,
}

/// Response body of `POST /update-person`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Server confirmation message
    pub message: String,
}
