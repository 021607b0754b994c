use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct News {
    pub id         : RowId,
    pub project_id : RowId,
    pub event_id   : RowId,
    pub title      : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsItem {
    pub id                 : RowId,
    pub news_id            : RowId,
    pub event_id           : RowId,
    pub project_id         : RowId,
    /// Optional link to a directory entry.
    pub directory_entry_id : RowId,
    pub title              : String,
    pub body               : Option<String>,
    /// Unix timestamp in seconds.
    pub published_at       : i64,
}
