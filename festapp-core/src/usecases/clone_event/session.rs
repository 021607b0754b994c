use std::collections::BTreeMap;

use crate::entities::*;

/// Old to new row ids of all rows copied by one clone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdMap {
    families: BTreeMap<Family, BTreeMap<RowId, RowId>>,
}

impl IdMap {
    pub fn insert(&mut self, family: Family, old_id: RowId, new_id: RowId) {
        let replaced = self
            .families
            .entry(family)
            .or_default()
            .insert(old_id, new_id);
        debug_assert!(replaced.is_none(), "{family} {old_id} cloned twice");
    }

    pub fn get(&self, family: Family, old_id: RowId) -> Option<RowId> {
        self.families
            .get(&family)
            .and_then(|ids| ids.get(&old_id))
            .copied()
    }

    pub fn len(&self, family: Family) -> usize {
        self.families.get(&family).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.families.values().all(BTreeMap::is_empty)
    }

    /// All `(old, new)` pairs of a family, ordered by the old id.
    pub fn pairs(&self, family: Family) -> impl Iterator<Item = (RowId, RowId)> + '_ {
        self.families
            .get(&family)
            .into_iter()
            .flat_map(|ids| ids.iter().map(|(old, new)| (*old, *new)))
    }
}

/// What happens to a reference whose target has not been cloned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Reset the column to [`UNSET_ID`], i.e. turn the row into a root.
    Reset,
    /// Keep the value that has been copied from the source row.
    Keep,
}

/// A column whose value can only be resolved after all rows of the
/// referenced family have been cloned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Reference {
    DirectoryParent,
    DirectoryMap,
    DirectoryEntryParent,
    NewsItemDirectoryEntry,
}

impl Reference {
    /// Order in which the second pass resolves references.
    pub const ALL: [Reference; 4] = [
        Self::DirectoryParent,
        Self::DirectoryMap,
        Self::DirectoryEntryParent,
        Self::NewsItemDirectoryEntry,
    ];

    pub const fn owner(self) -> Family {
        match self {
            Self::DirectoryParent | Self::DirectoryMap => Family::Directory,
            Self::DirectoryEntryParent => Family::DirectoryEntry,
            Self::NewsItemDirectoryEntry => Family::NewsItem,
        }
    }

    pub const fn target(self) -> Family {
        match self {
            Self::DirectoryParent => Family::Directory,
            Self::DirectoryMap => Family::Pindrop,
            Self::DirectoryEntryParent | Self::NewsItemDirectoryEntry => Family::DirectoryEntry,
        }
    }

    pub const fn column(self) -> &'static str {
        match self {
            Self::DirectoryParent => "parent_id",
            Self::DirectoryMap => "map_id",
            Self::DirectoryEntryParent => "parent_entry_id",
            Self::NewsItemDirectoryEntry => "directory_entry_id",
        }
    }

    // TODO: Decide whether unresolved map pins should be reset like
    // parents once the product owners have confirmed the intended behavior.
    pub const fn orphan_policy(self) -> OrphanPolicy {
        match self {
            Self::DirectoryMap => OrphanPolicy::Keep,
            _ => OrphanPolicy::Reset,
        }
    }
}

/// A copied row that still holds the old id of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReference {
    pub reference: Reference,
    /// New id of the copied row.
    pub row_id: RowId,
    /// Value of the column in the source row.
    pub old_target_id: RowId,
}

/// A reference of a copied row whose target has no copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub family: Family,
    pub row_id: RowId,
    pub column: &'static str,
    pub old_target_id: RowId,
    pub policy: OrphanPolicy,
}

/// Mutable state of a single clone operation.
#[derive(Debug)]
pub struct CloneSession {
    pub source_event_id: RowId,
    pub target_user_id: RowId,
    pub new_event_id: RowId,
    pub id_map: IdMap,
    pub pending: Vec<PendingReference>,
    pub dangling: Vec<DanglingReference>,
}

impl CloneSession {
    pub fn new(source_event_id: RowId, target_user_id: RowId) -> Self {
        Self {
            source_event_id,
            target_user_id,
            new_event_id: UNSET_ID,
            id_map: IdMap::default(),
            pending: vec![],
            dangling: vec![],
        }
    }

    pub fn defer(&mut self, reference: Reference, row_id: RowId, old_target_id: RowId) {
        self.pending.push(PendingReference {
            reference,
            row_id,
            old_target_id,
        });
    }

    pub(super) fn pending_of(
        &self,
        reference: Reference,
    ) -> impl Iterator<Item = PendingReference> + '_ {
        self.pending
            .iter()
            .filter(move |p| p.reference == reference)
            .copied()
    }
}

/// The result of a successful clone.
#[derive(Debug, Clone)]
pub struct ClonedEvent {
    pub event_id: RowId,
    pub id_map: IdMap,
    pub dangling: Vec<DanglingReference>,
}

impl From<CloneSession> for ClonedEvent {
    fn from(from: CloneSession) -> Self {
        let CloneSession {
            new_event_id,
            id_map,
            dangling,
            ..
        } = from;
        Self {
            event_id: new_event_id,
            id_map,
            dangling,
        }
    }
}
