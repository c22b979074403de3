//! Partner organization models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Partner organization resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: i64,

    /// Organization name
    pub name: String,

    /// Tax identification number
    pub inn: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Street address
    pub address: String,

    /// Free-form description
    pub description: String,

    /// Category label as the server reports it (e.g. "Питание")
    pub category: String,
}

/// Partner directory category.
///
/// The platform API speaks Russian labels; `All` means "no server-side
/// filter" and is never sent as a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// All categories (no filter)
    #[default]
    All,
    /// "Питание"
    Food,
    /// "Здоровье"
    Health,
    /// "Одежда"
    Clothing,
}

impl Category {
    /// The label the platform uses for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Все",
            Category::Food => "Питание",
            Category::Health => "Здоровье",
            Category::Clothing => "Одежда",
        }
    }

    /// The `?category=` query value, if this category filters server-side.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            other => Some(other.label()),
        }
    }

    /// Whether an organization's category label belongs to this category.
    pub fn matches(self, category_label: &str) -> bool {
        match self {
            Category::All => true,
            other => category_label == other.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts both the CLI spelling ("food") and the platform label
    /// ("Питание").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "Все" => Ok(Category::All),
            "food" | "Питание" => Ok(Category::Food),
            "health" | "Здоровье" => Ok(Category::Health),
            "clothing" | "Одежда" => Ok(Category::Clothing),
            other => Err(format!(
                "unknown category '{}' (expected all, food, health or clothing)",
                other
            )),
        }
    }
}
