use crate::id::*;

/// A scavenger hunt.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hunt {
    pub id         : RowId,
    pub project_id : RowId,
    pub event_id   : RowId,
    pub title      : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HuntItem {
    pub id       : RowId,
    pub hunt_id  : RowId,
    pub event_id : RowId,
    pub title    : String,
    /// Payload of the QR code that has to be scanned.
    pub code     : String,
    pub points   : i64,
}
