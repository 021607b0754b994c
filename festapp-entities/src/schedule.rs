use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub id         : RowId,
    pub event_id   : RowId,
    /// Optional project this slot belongs to.
    pub project_id : RowId,
    pub title      : String,
    // Both time stamps are unix timestamps in seconds
    pub starts_at  : i64,
    pub ends_at    : Option<i64>,
}
