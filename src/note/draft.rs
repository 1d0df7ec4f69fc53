use super::{Note, NoteError, NoteKind};
use crate::draw::Stroke;
use chrono::{DateTime, Utc};

/// Drawing being edited, before it is saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingDraft {
    pub title: String,
    pub strokes: Vec<Stroke>,
}

impl DrawingDraft {
    pub fn new(title: impl Into<String>, strokes: Vec<Stroke>) -> Self {
        Self {
            title: title.into(),
            strokes,
        }
    }

    /// Checks the draft can be saved: it needs ink and a non-blank title.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.strokes.is_empty() {
            return Err(NoteError::EmptyDrawing);
        }
        if self.title.trim().is_empty() {
            return Err(NoteError::MissingTitle);
        }
        Ok(())
    }

    /// Whether closing the editor would discard ink.
    pub fn has_unsaved_content(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Builds a new drawing note owned by `uid`.
    pub fn into_note(self, uid: &str, now: DateTime<Utc>) -> Result<Note, NoteError> {
        self.validate()?;
        if uid.is_empty() {
            return Err(NoteError::NotSignedIn);
        }
        Ok(Note {
            id: None,
            uid: uid.to_string(),
            kind: NoteKind::Drawing,
            title: self.title.trim().to_string(),
            text: None,
            strokes: Some(self.strokes),
            created_at: now,
            updated_at: None,
        })
    }

    /// Writes the draft back into an existing drawing note.
    pub fn apply_to(self, note: &mut Note, now: DateTime<Utc>) -> Result<(), NoteError> {
        self.validate()?;
        if note.kind != NoteKind::Drawing {
            return Err(NoteError::KindMismatch {
                draft: NoteKind::Drawing,
                note: note.kind,
            });
        }
        note.title = self.title.trim().to_string();
        note.strokes = Some(self.strokes);
        note.updated_at = Some(now);
        Ok(())
    }
}

/// Text note being edited, before it is saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDraft {
    pub title: String,
    pub body: String,
}

impl TextDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A text note needs a title or a body.
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.has_unsaved_content() {
            Ok(())
        } else {
            Err(NoteError::EmptyText)
        }
    }

    pub fn has_unsaved_content(&self) -> bool {
        !self.title.trim().is_empty() || !self.body.trim().is_empty()
    }

    /// Builds a new text note owned by `uid`.
    pub fn into_note(self, uid: &str, now: DateTime<Utc>) -> Result<Note, NoteError> {
        self.validate()?;
        if uid.is_empty() {
            return Err(NoteError::NotSignedIn);
        }
        Ok(Note {
            id: None,
            uid: uid.to_string(),
            kind: NoteKind::Text,
            title: self.title.trim().to_string(),
            text: Some(self.body.trim().to_string()),
            strokes: None,
            created_at: now,
            updated_at: None,
        })
    }

    /// Writes the draft back into an existing text note.
    pub fn apply_to(self, note: &mut Note, now: DateTime<Utc>) -> Result<(), NoteError> {
        self.validate()?;
        if note.kind != NoteKind::Text {
            return Err(NoteError::KindMismatch {
                draft: NoteKind::Text,
                note: note.kind,
            });
        }
        note.title = self.title.trim().to_string();
        note.text = Some(self.body.trim().to_string());
        note.updated_at = Some(now);
        Ok(())
    }
}
