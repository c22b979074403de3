//! People API trait for user administration

use async_trait::async_trait;

use crate::client::models::{Person, PersonUpdate, UpdateResponse};
use crate::error::Result;

/// User administration operations
#[async_trait]
pub trait PeopleApi: Send + Sync {
    /// List all platform users
    async fn list_people(&self) -> Result<Vec<Person>>;

    /// Fetch a single user by id.
    ///
    /// The endpoint answers point lookups with a one-element array; an
    /// empty array maps to `ApiError::NotFound`.
    async fn get_person(&self, person_id: i64) -> Result<Person>;

    /// Update a user's name, email and role (bearer-token authorized)
    async fn update_person(&self, update: PersonUpdate) -> Result<UpdateResponse>;
}
