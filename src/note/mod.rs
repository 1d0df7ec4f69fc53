//! Note records and the rules for saving drafts into them.
//!
//! A note is either a text note or a drawing. Drawings carry the stroke list
//! produced by the stroke editor; the storage collaborator keeps it as-is.

mod draft;
mod error;

pub use draft::{DrawingDraft, TextDraft};
pub use error::NoteError;

use crate::draw::Stroke;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a note holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Text,
    Drawing,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Drawing => f.write_str("drawing"),
        }
    }
}

/// A stored note as exchanged with the note store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned identifier (absent until first saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner's user id
    pub uid: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
    #[serde(default)]
    pub title: String,
    /// Body of a text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ink of a drawing note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Stroke>>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Strokes to seed the editor with when reopening this note.
    ///
    /// Text notes and drawings without stored strokes yield an empty list.
    pub fn drawing_strokes(&self) -> Vec<Stroke> {
        match (self.kind, &self.strokes) {
            (NoteKind::Drawing, Some(strokes)) => strokes.clone(),
            _ => Vec::new(),
        }
    }

    /// Draft for editing this note in the drawing editor.
    pub fn to_drawing_draft(&self) -> DrawingDraft {
        DrawingDraft {
            title: self.title.clone(),
            strokes: self.drawing_strokes(),
        }
    }
}

/// Orders notes newest first by creation time.
pub fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
