use super::NoteKind;
use thiserror::Error;

/// Reasons a note draft cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("No drawing created")]
    EmptyDrawing,

    #[error("Add a title for the drawing")]
    MissingTitle,

    #[error("Add a title or write something")]
    EmptyText,

    #[error("User is not signed in")]
    NotSignedIn,

    #[error("Cannot save a {draft} draft into a {note} note")]
    KindMismatch { draft: NoteKind, note: NoteKind },
}
