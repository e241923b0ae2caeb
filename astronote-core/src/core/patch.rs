//! Three-state partial updates for optional record fields.
//!
//! Store mutators take patch structs whose optional fields use [`Patch`]
//! rather than `Option<Option<T>>`: an update that never touched a field
//! (`Keep`) is distinct from one that explicitly cleared it (`Clear`).

use serde::{Deserialize, Serialize};

/// A partial update to a single optional field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Patch<T> {
    /// Leave the stored value unchanged.
    #[default]
    Keep,
    /// Set the stored value to none.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> Patch<T> {
    /// Returns `true` when applying this patch would not change anything.
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Resolves the patch against the currently stored value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }
}
