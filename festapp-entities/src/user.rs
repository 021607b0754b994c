use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id    : RowId,
    pub email : String,
    pub name  : String,
}
