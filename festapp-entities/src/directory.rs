use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub id         : RowId,
    pub project_id : RowId,
    pub event_id   : RowId,
    /// Parent directory or [`UNSET_ID`] for a root directory.
    pub parent_id  : RowId,
    /// Pindrop that marks this directory on the map.
    pub map_id     : RowId,
    pub name       : String,
    pub position   : i64,
}

impl Directory {
    pub fn is_root(&self) -> bool {
        !is_set(self.parent_id)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryEntry {
    pub id              : RowId,
    pub directory_id    : RowId,
    pub event_id        : RowId,
    /// Parent entry or [`UNSET_ID`] for a root entry.
    pub parent_entry_id : RowId,
    pub title           : String,
    pub body            : Option<String>,
    pub image_url       : Option<String>,
}

impl DirectoryEntry {
    pub fn is_root(&self) -> bool {
        !is_set(self.parent_entry_id)
    }
}
