use serde::{Deserialize, Deserializer, Serialize};

/// A book record as held by the remote collection.
///
/// The `id` is assigned by the server and never minted locally; records
/// without one exist only as drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier, opaque to the client.
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub title: String,
    pub author: String,
    /// Integer-valued text as entered by the user; not range-checked.
    #[serde(deserialize_with = "lenient_string")]
    pub published_year: String,
}

/// The editable fields of a book, pending submission.
///
/// Serializes to the `{title, author, published_year}` body the create and
/// update endpoints expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "lenient_string")]
    #[serde(default)]
    pub published_year: String,
}

impl BookDraft {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.published_year.is_empty()
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            published_year: book.published_year.clone(),
        }
    }
}

/// Accepts a JSON string or number and normalizes to the string form.
///
/// Upstream servers disagree on whether ids and years are numeric; the
/// client treats both as opaque text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Number(i64),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => text,
        Lenient::Number(number) => number.to_string(),
    })
}
