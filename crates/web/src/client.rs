//! HTTP client for the catalog API.
//!
//! [`CatalogApi`] is what the pages depend on; [`HttpCatalogClient`] talks to
//! a running `shelf-api` with [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shelf_core::types::ItemId;
use shelf_core::CatalogEntity;

/// Errors from the catalog API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Catalog API error ({status}): {message}")]
    Api {
        status: u16,
        /// The `error` field of the JSON body, or the raw body.
        message: String,
    },
}

/// The catalog operations the pages use, one call per HTTP route.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /api/{slug}`
    async fn list<E: CatalogEntity>(&self) -> Result<Vec<E>, ClientError>;

    /// `GET /api/{slug}/{id}`
    async fn get<E: CatalogEntity>(&self, id: ItemId) -> Result<E, ClientError>;

    /// `POST /api/{slug}`
    async fn create<E: CatalogEntity>(&self, draft: &E::Draft) -> Result<E, ClientError>;

    /// `PATCH /api/{slug}/{id}`
    async fn update<E: CatalogEntity>(&self, id: ItemId, patch: &E::Patch)
        -> Result<E, ClientError>;

    /// `PUT /api/{slug}` with `{ id }`; soft delete.
    async fn delete<E: CatalogEntity>(&self, id: ItemId) -> Result<E, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// * `base_url` - scheme and authority of the API, e.g.
    ///   `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn collection_url<E: CatalogEntity>(&self) -> String {
        format!("{}{}", self.base_url, E::KIND.api_path())
    }

    fn item_url<E: CatalogEntity>(&self, id: ItemId) -> String {
        format!("{}/{id}", self.collection_url::<E>())
    }

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// `error` field of the JSON body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list<E: CatalogEntity>(&self) -> Result<Vec<E>, ClientError> {
        let response = self.client.get(self.collection_url::<E>()).send().await?;
        Self::parse_response(response).await
    }

    async fn get<E: CatalogEntity>(&self, id: ItemId) -> Result<E, ClientError> {
        let response = self.client.get(self.item_url::<E>(id)).send().await?;
        Self::parse_response(response).await
    }

    async fn create<E: CatalogEntity>(&self, draft: &E::Draft) -> Result<E, ClientError> {
        let response = self
            .client
            .post(self.collection_url::<E>())
            .json(draft)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update<E: CatalogEntity>(
        &self,
        id: ItemId,
        patch: &E::Patch,
    ) -> Result<E, ClientError> {
        let response = self
            .client
            .patch(self.item_url::<E>(id))
            .json(patch)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete<E: CatalogEntity>(&self, id: ItemId) -> Result<E, ClientError> {
        let response = self
            .client
            .put(self.collection_url::<E>())
            .json(&serde_json::json!({ "id": id }))
            .send()
            .await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::{Book, Movie};

    use super::*;

    #[test]
    fn urls_follow_the_kind() {
        let client = HttpCatalogClient::new("http://localhost:3000/");
        let id = ItemId::nil();
        assert_eq!(
            client.collection_url::<Movie>(),
            "http://localhost:3000/api/movie"
        );
        assert_eq!(
            client.item_url::<Book>(id),
            format!("http://localhost:3000/api/book/{id}")
        );
    }
}
