use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub id       : RowId,
    pub event_id : RowId,
    pub name     : String,
    /// The kind of module, e.g. `directory`, `hunt` or `shop`.
    pub kind     : String,
    pub position : i64,
}
