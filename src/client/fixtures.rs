//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use chrono::{DateTime, Utc};

use super::models::{BonusRecord, Category, Organization, Person, Role};

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
///
/// # Example
/// ```ignore
/// let org = OrganizationBuilder::new(1)
///     .name("Кафе Солнышко")
///     .category(Category::Food)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    id: i64,
    name: String,
    inn: String,
    email: String,
    phone: String,
    address: String,
    description: String,
    category: String,
}

impl OrganizationBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Организация {}", id),
            inn: format!("77{:08}", id),
            email: format!("org{}@example.com", id),
            phone: "+7 900 000-00-00".to_string(),
            address: "ул. Ленина, 1".to_string(),
            description: "Партнёр программы".to_string(),
            category: Category::Food.label().to_string(),
        }
    }

    /// Set the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category.label().to_string();
        self
    }

    /// Set a raw category label (for labels outside the known set).
    pub fn category_label(mut self, label: impl Into<String>) -> Self {
        self.category = label.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Build the Organization.
    pub fn build(self) -> Organization {
        Organization {
            id: self.id,
            name: self.name,
            inn: self.inn,
            email: self.email,
            phone: self.phone,
            address: self.address,
            description: self.description,
            category: self.category,
        }
    }
}

// ============================================================================
// PersonBuilder
// ============================================================================

/// Builder for creating test Person instances.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    id: i64,
    full_name: String,
    email: String,
    role: Role,
}

impl PersonBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            full_name: format!("Пользователь {}", id),
            email: format!("user{}@example.com", id),
            role: Role::Volunteer,
        }
    }

    /// Set the full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Set the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Build the Person.
    pub fn build(self) -> Person {
        Person {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            role: self.role,
        }
    }
}

// ============================================================================
// BonusRecordBuilder
// ============================================================================

/// Builder for creating test BonusRecord instances.
#[derive(Debug, Clone)]
pub struct BonusRecordBuilder {
    id: i64,
    used_location: String,
    created_at: DateTime<Utc>,
    used: bool,
    rating: i64,
}

impl BonusRecordBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            used_location: "Кафе Солнышко".to_string(),
            created_at: DateTime::from_timestamp(1_740_000_000, 0)
                .expect("valid fixture timestamp"),
            used: false,
            rating: 5,
        }
    }

    /// Set the location.
    pub fn used_location(mut self, location: impl Into<String>) -> Self {
        self.used_location = location.into();
        self
    }

    /// Mark the record as redeemed.
    pub fn used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    /// Set the rating.
    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    /// Build the BonusRecord.
    pub fn build(self) -> BonusRecord {
        BonusRecord {
            id: self.id,
            used_location: self.used_location,
            created_at: self.created_at,
            used: self.used,
            rating: self.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_builder_defaults() {
        let org = OrganizationBuilder::new(5).build();
        assert_eq!(org.id, 5);
        assert_eq!(org.category, "Питание");
        assert!(!org.name.is_empty());
    }

    #[test]
    fn test_person_builder_defaults() {
        let person = PersonBuilder::new(2).build();
        assert_eq!(person.id, 2);
        assert_eq!(person.role, Role::Volunteer);
    }

    #[test]
    fn test_bonus_record_builder() {
        let record = BonusRecordBuilder::new(1).rating(3).used(true).build();
        assert_eq!(record.points_spent(), 30);
        assert!(record.used);
    }
}
