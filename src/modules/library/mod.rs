pub mod projection;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use lumina_client::models::Book;
use lumina_client::{ApiError, RemoteCollection};

use session::{DraftField, EditingSession, SessionMode};
use store::CollectionStore;

pub const BOOK_ADDED_MESSAGE: &str = "New book added!";
pub const BOOK_UPDATED_MESSAGE: &str = "Book updated successfully!";
pub const BOOK_REMOVED_MESSAGE: &str = "Book removed.";

/// Receives transient success notifications. How long they stay visible is a
/// presentation concern.
pub trait Notifier: Send + Sync {
    fn publish(&self, message: &str);
}

/// Yes/no decision point guarding record removal.
pub trait RemovalGate: Send + Sync {
    fn confirm_removal(&self) -> bool;
}

/// Single owner of the application state.
///
/// The store and the session are mutated only through the operations below;
/// the view layer renders from read accessors and never touches state
/// directly. All triggers are serialized through `&mut self`, so no two
/// logical operations ever overlap.
pub struct LibraryController {
    store: CollectionStore,
    session: EditingSession,
    notifier: Arc<dyn Notifier>,
    gate: Arc<dyn RemovalGate>,
}

impl LibraryController {
    pub fn new(
        remote: Arc<dyn RemoteCollection>,
        gate: Arc<dyn RemovalGate>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store: CollectionStore::new(remote),
            session: EditingSession::new(),
            notifier,
            gate,
        }
    }

    /// The mount-time fetch: load the collection once at startup.
    pub async fn startup(&mut self) {
        self.store.refresh().await;
    }

    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    /// The search-filtered view of the collection.
    pub fn visible_books<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        projection::search(self.store.books(), term)
    }

    /// Enter editing for a stored record. Unknown ids are a no-op: only
    /// rendered records can be edited.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.store.books().iter().find(|book| book.id == id) {
            Some(book) => {
                self.session.start_edit(book);
                true
            }
            None => {
                tracing::debug!(%id, "edit requested for unknown record");
                false
            }
        }
    }

    pub fn edit_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.session.update_field(field, value);
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Dispatch the draft to create or update depending on the session mode.
    ///
    /// On success the session returns to `Creating` with an empty draft and a
    /// notification is published. On failure the session is left untouched so
    /// the user can correct the input and retry.
    pub async fn submit(&mut self) -> Result<(), ApiError> {
        let draft = self.session.draft().clone();
        match self.session.mode().clone() {
            SessionMode::Creating => {
                self.store.create(&draft).await?;
                self.session.start_create();
                self.notifier.publish(BOOK_ADDED_MESSAGE);
            }
            SessionMode::Editing { target } => {
                self.store.update(&target, &draft).await?;
                self.session.start_create();
                self.notifier.publish(BOOK_UPDATED_MESSAGE);
            }
        }
        Ok(())
    }

    /// Remove a record behind the confirmation gate.
    ///
    /// The session is reset before the gate is consulted, whether or not the
    /// record being removed is the current edit target: an edit must never
    /// stay pointed at a record that may be about to disappear. A declined
    /// gate means no network call and no store change; `Ok(false)`.
    pub async fn delete(&mut self, id: &str) -> Result<bool, ApiError> {
        self.session.start_create();
        if !self.gate.confirm_removal() {
            tracing::debug!(%id, "removal declined at the gate");
            return Ok(false);
        }
        self.store.delete(id).await?;
        self.notifier.publish(BOOK_REMOVED_MESSAGE);
        Ok(true)
    }
}
