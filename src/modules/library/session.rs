use lumina_client::models::{Book, BookDraft};

/// Whether the form targets a new record or an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Creating,
    Editing {
        /// Id of the record whose fields were copied into the draft.
        target: String,
    },
}

/// One editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
    PublishedYear,
}

/// Transient state of the create/edit form.
///
/// Long-lived for the application's lifetime; there is no terminal state.
/// Starts in `Creating` with an empty draft and always returns there after a
/// successful submit, an explicit cancel, or any delete trigger.
#[derive(Debug, Default)]
pub struct EditingSession {
    mode: SessionMode,
    draft: BookDraft,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, SessionMode::Editing { .. })
    }

    /// Reset to `Creating` with an empty draft.
    pub fn start_create(&mut self) {
        self.mode = SessionMode::Creating;
        self.draft = BookDraft::default();
    }

    /// Enter `Editing` for the given record, copying its editable fields into
    /// the draft. Re-entrant: the last copy wins, nothing is merged.
    pub fn start_edit(&mut self, book: &Book) {
        self.mode = SessionMode::Editing {
            target: book.id.clone(),
        };
        self.draft = BookDraft::from(book);
    }

    /// Overwrite a single draft field. No validation; the boundary form is
    /// responsible for requiring non-empty input.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Author => self.draft.author = value,
            DraftField::PublishedYear => self.draft.published_year = value,
        }
    }

    /// Equivalent to `start_create`.
    pub fn cancel(&mut self) {
        self.start_create();
    }
}
