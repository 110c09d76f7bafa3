//! HTTP client for the workation REST collection.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::WORKATIONS_PATH;
use crate::domain::types::WorkationId;
use crate::domain::workation::{NewWorkation, Workation};
use crate::dto::api::ErrorResponse;
use crate::dto::query::ListingQuery;
use crate::pagination::Page;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Validation,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {message}")]
    NotFound { message: String },

    /// The backend rejected the payload or query.
    #[error("validation failed ({status}): {message}")]
    Validation {
        status: u16,
        message: String,
        errors: Vec<String>,
    },

    /// Any other non-2xx response.
    #[error("HTTP {status} {status_text}")]
    Transport { status: u16, status_text: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
            ApiError::Validation { status, .. } | ApiError::Transport { status, .. } => {
                Some(*status)
            }
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::NotFound { .. } => ApiErrorKind::NotFound,
            ApiError::Validation { .. } => ApiErrorKind::Validation,
            ApiError::Network(_) | ApiError::Transport { .. } | ApiError::Decode(_) => {
                ApiErrorKind::Transport
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The five operations on the workation collection.
///
/// Each call is single-shot: one request, one result, no retry and no cache.
#[allow(async_fn_in_trait)]
pub trait WorkationApi {
    async fn list(&self, query: &ListingQuery) -> ApiResult<Page<Workation>>;
    async fn get_by_id(&self, id: WorkationId) -> ApiResult<Workation>;
    async fn create(&self, workation: &NewWorkation) -> ApiResult<Workation>;
    async fn update(&self, id: WorkationId, workation: &NewWorkation) -> ApiResult<Workation>;
    async fn delete(&self, id: WorkationId) -> ApiResult<()>;
}

/// [`WorkationApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWorkationApi {
    client: Client,
    collection_url: String,
}

impl Default for HttpWorkationApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpWorkationApi {
    /// Creates a client for the backend at `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            collection_url: format!("{}{WORKATIONS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: WorkationId) -> String {
        format!("{}/{id}", self.collection_url)
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turns a non-2xx response into the matching [`ApiError`].
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let body = response.text().await.unwrap_or_default();
    let error_body = serde_json::from_str::<ErrorResponse>(&body).ok();

    let error = match status {
        StatusCode::NOT_FOUND => ApiError::NotFound {
            message: error_body.map(|body| body.message).unwrap_or(status_text),
        },
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let (message, errors) = match error_body {
                Some(body) => (body.message, body.errors.unwrap_or_default()),
                None => (status_text, Vec::new()),
            };
            ApiError::Validation {
                status: status.as_u16(),
                message,
                errors,
            }
        }
        _ => ApiError::Transport {
            status: status.as_u16(),
            status_text,
        },
    };

    Err(error)
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl WorkationApi for HttpWorkationApi {
    async fn list(&self, query: &ListingQuery) -> ApiResult<Page<Workation>> {
        log::debug!("GET {} {query:?}", self.collection_url);
        let response = self
            .client
            .get(&self.collection_url)
            .query(&query.to_params())
            .send()
            .await
            .map_err(network_error)?;

        parse_response(response).await
    }

    async fn get_by_id(&self, id: WorkationId) -> ApiResult<Workation> {
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(network_error)?;

        parse_response(response).await
    }

    async fn create(&self, workation: &NewWorkation) -> ApiResult<Workation> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(workation)
            .send()
            .await
            .map_err(network_error)?;

        parse_response(response).await
    }

    async fn update(&self, id: WorkationId, workation: &NewWorkation) -> ApiResult<Workation> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(workation)
            .send()
            .await
            .map_err(network_error)?;

        parse_response(response).await
    }

    async fn delete(&self, id: WorkationId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response).await.map(|_| ())
    }
}
