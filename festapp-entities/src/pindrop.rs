use crate::id::*;

/// A pin on the map of a project.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pindrop {
    pub id         : RowId,
    pub project_id : RowId,
    pub event_id   : RowId,
    pub title      : String,
    pub lat        : f64,
    pub lng        : f64,
}
