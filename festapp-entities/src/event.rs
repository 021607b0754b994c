use crate::id::*;

/// The top level tenant: one festival/app instance.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id          : RowId,
    /// The owning user.
    pub user_id     : RowId,
    pub name        : String,
    /// Public access token of the event app.
    pub token       : String,
    pub description : Option<String>,
    /// Unix timestamp in seconds.
    pub created_at  : i64,
}
