//! Mock Dobrodon API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{BonusApi, DirectoryApi, PeopleApi};
use super::models::{
    BonusRecord, Category, Organization, Person, PersonUpdate, UpdateResponse,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
/// `list_organizations` emulates the server-side category filter over the
/// configured organization set.
///
/// # Example
/// ```ignore
/// let mock = MockDobrodonClient::new()
///     .with_orgs(vec![OrganizationBuilder::new(1).build()])
///     .await;
///
/// let orgs = mock.list_organizations(Category::All).await?;
/// assert_eq!(orgs.len(), 1);
/// ```
pub struct MockDobrodonClient {
    /// Organizations served by list_organizations (pre-filter)
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// People served by list_people / get_person
    people: Arc<Mutex<Vec<Person>>>,
    /// Bonus records served by qr_history
    bonus_records: Arc<Mutex<Vec<BonusRecord>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Artificial response latency per category label
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockDobrodonClient {
    fn default() -> Self {
        Self {
            orgs: Arc::new(Mutex::new(Vec::new())),
            people: Arc::new(Mutex::new(Vec::new())),
            bonus_records: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            delays: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub list_people: usize,
    pub get_person: usize,
    pub update_person: usize,
    pub qr_history: usize,
}

impl MockDobrodonClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations served by list_organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure people served by list_people / get_person.
    pub async fn with_people(self, people: Vec<Person>) -> Self {
        *self.people.lock().await = people;
        self
    }

    /// Configure bonus records served by qr_history.
    pub async fn with_bonus_records(self, records: Vec<BonusRecord>) -> Self {
        *self.bonus_records.lock().await = records;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Delay responses for one category, so tests can control the order
    /// in which overlapping fetches resolve.
    pub async fn with_delay(self, category: Category, delay: Duration) -> Self {
        self.delays
            .lock()
            .await
            .insert(category.label().to_string(), delay);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryApi for MockDobrodonClient {
    async fn list_organizations(&self, category: Category) -> Result<Vec<Organization>> {
        let delay = self
            .delays
            .lock()
            .await
            .get(category.label())
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_organizations += 1;
        drop(counts);

        let orgs = self.orgs.lock().await;
        Ok(orgs
            .iter()
            .filter(|org| category.matches(&org.category))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PeopleApi for MockDobrodonClient {
    async fn list_people(&self) -> Result<Vec<Person>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_people += 1;
        drop(counts);

        Ok(self.people.lock().await.clone())
    }

    async fn get_person(&self, person_id: i64) -> Result<Person> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.get_person += 1;
        drop(counts);

        let people = self.people.lock().await;
        people
            .iter()
            .find(|p| p.id == person_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Person {}", person_id)).into())
    }

    async fn update_person(&self, update: PersonUpdate) -> Result<UpdateResponse> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.update_person += 1;
        drop(counts);

        let mut people = self.people.lock().await;
        let person = people
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| ApiError::NotFound(format!("Person {}", update.id)))?;

        person.full_name = update.new_full_name;
        person.email = update.new_email;
        person.role = update.new_role;

        Ok(UpdateResponse {
            message: "Изменения сохранены".to_string(),
        })
    }
}

#[async_trait]
impl BonusApi for MockDobrodonClient {
    async fn qr_history(&self, _email: &str) -> Result<Vec<BonusRecord>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.qr_history += 1;
        drop(counts);

        Ok(self.bonus_records.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{OrganizationBuilder, PersonBuilder};
    use crate::client::models::Role;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockDobrodonClient::new();

        let orgs = mock.list_organizations(Category::All).await.unwrap();
        assert!(orgs.is_empty());

        let people = mock.list_people().await.unwrap();
        assert!(people.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_filters_by_category() {
        let mock = MockDobrodonClient::new()
            .with_orgs(vec![
                OrganizationBuilder::new(1).category(Category::Food).build(),
                OrganizationBuilder::new(2).category(Category::Health).build(),
            ])
            .await;

        let all = mock.list_organizations(Category::All).await.unwrap();
        assert_eq!(all.len(), 2);

        let food = mock.list_organizations(Category::Food).await.unwrap();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].id, 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockDobrodonClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        let result = mock.list_organizations(Category::All).await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.list_organizations(Category::All).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_get_person() {
        let mock = MockDobrodonClient::new()
            .with_people(vec![PersonBuilder::new(3).full_name("Иван").build()])
            .await;

        let person = mock.get_person(3).await.unwrap();
        assert_eq!(person.full_name, "Иван");

        let missing = mock.get_person(99).await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_update_person_applies_changes() {
        let mock = MockDobrodonClient::new()
            .with_people(vec![PersonBuilder::new(3).build()])
            .await;

        mock.update_person(PersonUpdate {
            id: 3,
            new_full_name: "Новое Имя".to_string(),
            new_email: "new@example.com".to_string(),
            new_role: Role::Organization,
        })
        .await
        .unwrap();

        let person = mock.get_person(3).await.unwrap();
        assert_eq!(person.full_name, "Новое Имя");
        assert_eq!(person.role, Role::Organization);
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockDobrodonClient::new();

        mock.list_organizations(Category::All).await.unwrap();
        mock.list_organizations(Category::Food).await.unwrap();
        mock.list_people().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_organizations, 2);
        assert_eq!(counts.list_people, 1);
        assert_eq!(counts.qr_history, 0);
    }
}
