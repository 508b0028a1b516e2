use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Book, BookDraft};

/// The remote book collection as the application sees it.
///
/// The store talks to this seam only, so tests can substitute a double
/// without a network.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Fetch the full current collection.
    async fn list(&self) -> Result<Vec<Book>, ApiError>;

    /// Create a record from the draft fields; returns the server's record.
    async fn create(&self, draft: &BookDraft) -> Result<Book, ApiError>;

    /// Replace the fields of an existing record.
    async fn update(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError>;

    /// Delete a record. The response body carries nothing of interest.
    async fn remove(&self, id: &str) -> Result<(), ApiError>;
}

/// reqwest-backed client for the `/books` REST endpoints.
///
/// No timeout and no cancellation: a dispatched request runs to completion,
/// and callers that stop awaiting simply discard the result.
pub struct BooksApi {
    http: reqwest::Client,
    base_url: String,
}

impl BooksApi {
    /// Create a client against the service root, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client wrapping an existing reqwest `Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

/// Pass successful responses through; turn the rest into `ApiError::Rejected`,
/// probing the body for an optional JSON `message` field.
async fn reject_on_error(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        });

    tracing::debug!(
        status = status.as_u16(),
        has_message = message.is_some(),
        "server rejected request"
    );

    Err(ApiError::rejected(status.as_u16(), message))
}

#[async_trait]
impl RemoteCollection for BooksApi {
    async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.http.get(self.books_url()).send().await?;
        let books = reject_on_error(response).await?.json::<Vec<Book>>().await?;
        tracing::debug!(count = books.len(), "fetched collection");
        Ok(books)
    }

    async fn create(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let response = self.http.post(self.books_url()).json(draft).send().await?;
        let book = reject_on_error(response).await?.json::<Book>().await?;
        tracing::debug!(id = %book.id, "created record");
        Ok(book)
    }

    async fn update(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        let response = self.http.put(self.book_url(id)).json(draft).send().await?;
        let book = reject_on_error(response).await?.json::<Book>().await?;
        tracing::debug!(id = %book.id, "updated record");
        Ok(book)
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.book_url(id)).send().await?;
        reject_on_error(response).await?;
        tracing::debug!(%id, "deleted record");
        Ok(())
    }
}
