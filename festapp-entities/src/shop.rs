use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shop {
    pub id         : RowId,
    pub project_id : RowId,
    pub event_id   : RowId,
    pub name       : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopItem {
    pub id          : RowId,
    pub shop_id     : RowId,
    pub event_id    : RowId,
    pub name        : String,
    pub price_cents : i64,
}
