use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Poll {
    pub id         : RowId,
    pub project_id : RowId,
    pub event_id   : RowId,
    pub question   : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollItem {
    pub id       : RowId,
    pub poll_id  : RowId,
    pub event_id : RowId,
    pub answer   : String,
    pub votes    : i64,
}
