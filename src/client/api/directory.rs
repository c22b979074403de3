//! Directory API trait for the partner organization listing

use async_trait::async_trait;

use crate::client::models::{Category, Organization};
use crate::error::Result;

/// Partner directory operations
///
/// One read-only endpoint: the whole directory, optionally narrowed
/// server-side by category. The API returns the complete array at once;
/// there is no pagination.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List partner organizations for a category.
    ///
    /// `Category::All` fetches the unfiltered directory.
    async fn list_organizations(&self, category: Category) -> Result<Vec<Organization>>;
}
