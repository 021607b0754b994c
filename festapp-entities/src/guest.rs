use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guest {
    pub id         : RowId,
    pub event_id   : RowId,
    pub first_name : String,
    pub last_name  : Option<String>,
    pub email      : String,
    /// Personal access token of the guest.
    pub token      : String,
}
