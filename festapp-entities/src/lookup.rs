use crate::id::*;

/// A key/value pair of an event.
///
/// Unlike all other rows a lookup is identified by its semantic
/// key together with the event it belongs to.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    pub id       : String,
    pub event_id : RowId,
    pub value    : String,
}
