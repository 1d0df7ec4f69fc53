//! Input mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How pointer gestures are interpreted.
///
/// The mode is read on every event, so switching in the middle of a gesture
/// takes effect from the next event onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Pointer movement lays down ink (default)
    #[default]
    Draw,
    /// Pointer movement removes ink under the eraser footprint
    Erase,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Erase => "erase",
        }
    }
}

/// Error returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input mode '{0}' (expected draw or erase)")]
pub struct ParseInputModeError(String);

impl std::str::FromStr for InputMode {
    type Err = ParseInputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draw" | "pen" => Ok(Self::Draw),
            "erase" | "eraser" => Ok(Self::Erase),
            _ => Err(ParseInputModeError(s.to_string())),
        }
    }
}
