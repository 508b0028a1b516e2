use std::sync::Arc;

use lumina_client::models::{Book, BookDraft};
use lumina_client::{ApiError, RemoteCollection};

/// Locally held, server-synchronized copy of the book collection.
///
/// The sequence is wholesale-replaced after every successful mutation; it is
/// never patched from the client's own view of a mutation result. Server
/// order is preserved as-is.
pub struct CollectionStore {
    remote: Arc<dyn RemoteCollection>,
    books: Vec<Book>,
}

impl CollectionStore {
    pub fn new(remote: Arc<dyn RemoteCollection>) -> Self {
        Self {
            remote,
            books: Vec::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Replace the local sequence with the server's full collection.
    ///
    /// On transport or server failure the previous list is retained and the
    /// failure goes to the diagnostic channel only; callers see nothing.
    pub async fn refresh(&mut self) {
        match self.remote.list().await {
            Ok(books) => {
                self.books = books;
            }
            Err(error) => {
                tracing::warn!(%error, "collection refresh failed; keeping previous records");
            }
        }
    }

    pub async fn create(&mut self, draft: &BookDraft) -> Result<(), ApiError> {
        self.remote.create(draft).await?;
        self.resync().await;
        Ok(())
    }

    pub async fn update(&mut self, id: &str, draft: &BookDraft) -> Result<(), ApiError> {
        self.remote.update(id, draft).await?;
        self.resync().await;
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.remote.remove(id).await?;
        self.resync().await;
        Ok(())
    }

    /// Every successful mutation funnels through here: the server's list
    /// after the operation is the only source of truth.
    async fn resync(&mut self) {
        self.refresh().await;
    }
}
