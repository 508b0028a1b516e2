//! Test doubles shared by the library module's unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use lumina_client::models::{Book, BookDraft};
use lumina_client::{ApiError, RemoteCollection};

use super::{Notifier, RemovalGate};

pub(crate) fn book(id: &str, title: &str, author: &str, year: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        published_year: year.to_string(),
    }
}

pub(crate) fn draft(title: &str, author: &str, year: &str) -> BookDraft {
    BookDraft {
        title: title.to_string(),
        author: author.to_string(),
        published_year: year.to_string(),
    }
}

/// In-memory stand-in for the remote service. A scripted failure makes every
/// call answer with the given rejection until cleared.
pub(crate) struct FakeRemote {
    pub books: Mutex<Vec<Book>>,
    pub list_calls: AtomicUsize,
    pub remove_calls: AtomicUsize,
    next_id: AtomicUsize,
    failure: Mutex<Option<(u16, Option<String>)>>,
}

impl FakeRemote {
    pub fn seeded(books: Vec<Book>) -> Self {
        let next_id = books.len() + 1;
        Self {
            books: Mutex::new(books),
            list_calls: AtomicUsize::new(0),
            remove_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(next_id),
            failure: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, status: u16, message: Option<&str>) {
        *self.failure.lock().unwrap() = Some((status, message.map(str::to_owned)));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn snapshot(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.failure.lock().unwrap().clone() {
            Some((status, message)) => Err(ApiError::rejected(status, message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RemoteCollection for FakeRemote {
    async fn list(&self) -> Result<Vec<Book>, ApiError> {
        self.check()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    async fn create(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let book = Book {
            id: id.to_string(),
            title: draft.title.clone(),
            author: draft.author.clone(),
            published_year: draft.published_year.clone(),
        };
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        self.check()?;
        let mut books = self.books.lock().unwrap();
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| ApiError::rejected(404, Some("Book not found".to_string())))?;
        book.title = draft.title.clone();
        book.author = draft.author.clone();
        book.published_year = draft.published_year.clone();
        Ok(book.clone())
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.check()?;
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        self.books.lock().unwrap().retain(|book| book.id != id);
        Ok(())
    }
}

/// Collects published notifications for assertions.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn publish(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Removal gate with a scripted answer.
pub(crate) struct ScriptedGate {
    answer: bool,
    pub asked: AtomicUsize,
}

impl ScriptedGate {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            asked: AtomicUsize::new(0),
        }
    }
}

impl RemovalGate for ScriptedGate {
    fn confirm_removal(&self) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
