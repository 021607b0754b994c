use crate::id::*;

/// Counter of app installations.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Install {
    pub id         : RowId,
    pub event_id   : RowId,
    pub count      : i64,
    /// Unix timestamp in seconds.
    pub updated_at : i64,
}
