//! Dobrodon API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{BonusRecord, Category, Organization, Person, PersonUpdate, UpdateResponse};
use super::{BonusApi, DirectoryApi, PeopleApi};
use crate::error::{ApiError, Result};

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Rate limit: 6 requests per second
const RATE_LIMIT_PER_SECOND: u32 = 6;

/// Dobrodon API client
pub struct DobrodonClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl DobrodonClient {
    /// Create a new Dobrodon API client.
    ///
    /// `token` is only needed for mutating endpoints; read-only listings
    /// work without it.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            rate_limiter,
        })
    }

    /// GET `path` with optional query pairs and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode(response).await
    }

    /// POST a JSON `body` to `path` with the bearer token attached.
    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthorized)?;

        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::decode(response).await
    }

    /// Map the response status and decode a JSON body on success.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimit.into()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl DirectoryApi for DobrodonClient {
    async fn list_organizations(&self, category: Category) -> Result<Vec<Organization>> {
        match category.query_value() {
            Some(label) => {
                self.get_json("/organizations", &[("category", label)])
                    .await
            }
            None => self.get_json("/organizations", &[]).await,
        }
    }
}

#[async_trait]
impl PeopleApi for DobrodonClient {
    async fn list_people(&self) -> Result<Vec<Person>> {
        self.get_json("/people", &[]).await
    }

    async fn get_person(&self, person_id: i64) -> Result<Person> {
        let id = person_id.to_string();
        let people: Vec<Person> = self.get_json("/people", &[("person_id", &id)]).await?;

        people
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("Person {}", person_id)).into())
    }

    async fn update_person(&self, update: PersonUpdate) -> Result<UpdateResponse> {
        self.post_json("/update-person", &update).await
    }
}

#[async_trait]
impl BonusApi for DobrodonClient {
    async fn qr_history(&self, email: &str) -> Result<Vec<BonusRecord>> {
        self.get_json("/user-qr-history", &[("email", email)]).await
    }
}
