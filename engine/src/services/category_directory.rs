use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use tokio::sync::RwLock;

use crate::error::QuizError;
use crate::metrics::CATEGORY_DIRECTORY_OPS_TOTAL;
use crate::models::{CategoriesResponse, Category};
use crate::services::AppState;

/// Process-wide category list with an explicit cache: fetched once and
/// kept until `refresh()` (or until the configured max age lapses).
/// Fetch failures surface as typed errors so callers can tell "the API
/// has no categories" apart from "the API is down". The one exception:
/// a failed refresh falls back to the previous snapshot when one
/// exists, since a stale selector beats a broken one.
pub struct CategoryDirectory {
    http: Client,
    endpoint: String,
    max_age: Option<Duration>,
    cache: RwLock<Option<Snapshot>>,
}

struct Snapshot {
    categories: Vec<Category>,
    fetched_at: DateTime<Utc>,
}

impl CategoryDirectory {
    pub fn new(state: &AppState) -> Self {
        Self {
            http: state.http.clone(),
            endpoint: state.endpoint("api_category.php"),
            max_age: state
                .config
                .category_cache_max_age_secs
                .map(Duration::seconds),
            cache: RwLock::new(None),
        }
    }

    /// The category list, served from cache while fresh.
    pub async fn categories(&self) -> Result<Vec<Category>, QuizError> {
        {
            let cache = self.cache.read().await;
            if let Some(snapshot) = cache.as_ref() {
                if self.is_fresh(snapshot) {
                    CATEGORY_DIRECTORY_OPS_TOTAL
                        .with_label_values(&["hit"])
                        .inc();
                    tracing::debug!(
                        categories = snapshot.categories.len(),
                        "serving categories from cache"
                    );
                    return Ok(snapshot.categories.clone());
                }
            }
        }

        CATEGORY_DIRECTORY_OPS_TOTAL
            .with_label_values(&["miss"])
            .inc();
        self.refresh().await
    }

    /// Drops the cached snapshot and refetches. A failed refetch falls
    /// back to the stale snapshot if there is one.
    pub async fn refresh(&self) -> Result<Vec<Category>, QuizError> {
        CATEGORY_DIRECTORY_OPS_TOTAL
            .with_label_values(&["refresh"])
            .inc();

        match self.fetch().await {
            Ok(categories) => {
                let mut cache = self.cache.write().await;
                *cache = Some(Snapshot {
                    categories: categories.clone(),
                    fetched_at: Utc::now(),
                });
                tracing::info!(categories = categories.len(), "category list refreshed");
                Ok(categories)
            }
            Err(err) => {
                CATEGORY_DIRECTORY_OPS_TOTAL
                    .with_label_values(&["error"])
                    .inc();
                tracing::warn!(error = %err, "failed to fetch categories");

                let cache = self.cache.read().await;
                if let Some(snapshot) = cache.as_ref() {
                    tracing::warn!(
                        age_secs = (Utc::now() - snapshot.fetched_at).num_seconds(),
                        "serving stale category snapshot"
                    );
                    return Ok(snapshot.categories.clone());
                }
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Category>, QuizError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(QuizError::CategoryFetch)?;
        let body: CategoriesResponse = response
            .json()
            .await
            .map_err(QuizError::CategoryFetch)?;
        Ok(body.trivia_categories)
    }

    fn is_fresh(&self, snapshot: &Snapshot) -> bool {
        match self.max_age {
            // No max age configured: fetch once per process.
            None => true,
            Some(max_age) => Utc::now() - snapshot.fetched_at <= max_age,
        }
    }
}
