//! Partner directory search filter
//!
//! [`DirectoryView`] owns the batch of organizations fetched for the
//! currently selected category and narrows it as the user types, without
//! re-issuing a request per keystroke. Category changes fetch from the
//! server; search term changes only re-filter the held batch, debounced
//! behind a 300 ms quiet interval.

mod debounce;

pub use debounce::Debouncer;

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::RwLock;

use crate::client::models::{Category, Organization};
use crate::client::DirectoryApi;

/// Quiet interval before a typed search term is applied
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

/// What the view is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A fetch is in flight
    Loading,
    /// The batch is loaded and filterable
    Ready,
    /// The last fetch failed; the batch is empty
    Failed(String),
}

struct DirectoryState {
    category: Category,
    search_term: String,
    batch: Vec<Organization>,
    visible: Vec<Organization>,
    phase: Phase,
    // Fetch tag; a completion bearing an older value is stale.
    generation: u64,
}

/// The directory search filter component.
///
/// All state lives behind one lock; renders and writes never interleave
/// mid-update. The debounce timer is a single slot, so no two filter
/// passes can race, and dropping the view cancels any pending pass.
pub struct DirectoryView {
    client: Arc<dyn DirectoryApi>,
    state: Arc<RwLock<DirectoryState>>,
    debounce: Debouncer,
}

impl DirectoryView {
    /// Create a view over the given client with the standard 300 ms
    /// debounce interval.
    pub fn new(client: Arc<dyn DirectoryApi>) -> Self {
        Self::with_debounce_interval(client, DEBOUNCE_INTERVAL)
    }

    /// Create a view with a custom debounce interval.
    pub fn with_debounce_interval(client: Arc<dyn DirectoryApi>, interval: Duration) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(DirectoryState {
                category: Category::All,
                search_term: String::new(),
                batch: Vec::new(),
                visible: Vec::new(),
                phase: Phase::Ready,
                generation: 0,
            })),
            debounce: Debouncer::new(interval),
        }
    }

    /// Select a category and fetch its organizations.
    ///
    /// The search term is cleared and the new batch becomes the visible
    /// set unfiltered. A response that arrives after a newer
    /// `load_category` call has started is discarded, so rapid category
    /// switches can never render a stale batch. On failure the view
    /// enters [`Phase::Failed`] with an empty batch; the next successful
    /// load clears it.
    pub async fn load_category(&self, category: Category) {
        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.category = category;
            state.search_term.clear();
            state.batch.clear();
            state.visible.clear();
            state.phase = Phase::Loading;
            state.generation
        };

        // A pending filter pass belongs to the previous batch.
        self.debounce.cancel().await;

        debug!("fetching organizations for category {}", category);
        let result = self.client.list_organizations(category).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            debug!("discarding stale response for category {}", category);
            return;
        }

        match result {
            Ok(batch) => {
                debug!("loaded {} organizations", batch.len());
                state.visible = batch.clone();
                state.batch = batch;
                state.phase = Phase::Ready;
            }
            Err(err) => {
                state.batch.clear();
                state.visible.clear();
                state.phase = Phase::Failed(err.to_string());
            }
        }
    }

    /// Record a new search term and schedule a debounced filter pass.
    ///
    /// The pass runs once the input has been quiet for the debounce
    /// interval; earlier pending passes are cancelled. No network I/O
    /// happens here, whatever the term.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        {
            let mut state = self.state.write().await;
            state.search_term = term.clone();
        }

        let state = Arc::clone(&self.state);
        self.debounce
            .schedule(async move {
                let mut state = state.write().await;
                let visible = apply_filter(&term, &state.batch, state.category);
                state.visible = visible;
            })
            .await;
    }

    /// The organizations currently visible.
    pub async fn visible(&self) -> Vec<Organization> {
        self.state.read().await.visible.clone()
    }

    /// The current phase.
    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase.clone()
    }

    /// The currently selected category.
    pub async fn category(&self) -> Category {
        self.state.read().await.category
    }

    /// The last entered search term.
    pub async fn search_term(&self) -> String {
        self.state.read().await.search_term.clone()
    }
}

/// Filter `batch` down to organizations whose name contains `term`
/// (case-insensitively) and whose category matches `category`.
///
/// Pure: `batch` is not mutated and relative order is preserved.
pub fn apply_filter(term: &str, batch: &[Organization], category: Category) -> Vec<Organization> {
    let needle = term.to_lowercase();
    batch
        .iter()
        .filter(|org| {
            org.name.to_lowercase().contains(&needle) && category.matches(&org.category)
        })
        .cloned()
        .collect()
}
