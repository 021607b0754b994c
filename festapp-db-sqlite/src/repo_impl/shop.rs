use super::*;

impl ShopRepo for DbConnection<'_> {
    fn create_shop(&self, shop: &Shop) -> Result<RowId> {
        create_shop(&mut self.conn.borrow_mut(), shop)
    }
    fn shops_of_project(&self, project_id: RowId) -> Result<Vec<Shop>> {
        shops_of_project(&mut self.conn.borrow_mut(), project_id)
    }
    fn create_shop_item(&self, item: &ShopItem) -> Result<RowId> {
        create_shop_item(&mut self.conn.borrow_mut(), item)
    }
    fn items_of_shop(&self, shop_id: RowId) -> Result<Vec<ShopItem>> {
        items_of_shop(&mut self.conn.borrow_mut(), shop_id)
    }
}

fn create_shop(conn: &mut SqliteConnection, shop: &Shop) -> Result<RowId> {
    let new_shop = models::NewShop {
        project_id: shop.project_id,
        event_id: shop.event_id,
        name: &shop.name,
    };
    diesel::insert_into(schema::shops::table)
        .values(&new_shop)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn shops_of_project(conn: &mut SqliteConnection, project_id: RowId) -> Result<Vec<Shop>> {
    use schema::shops::dsl;
    Ok(schema::shops::table
        .filter(dsl::project_id.eq(project_id))
        .order_by(dsl::id)
        .load::<models::Shop>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::Shop { id, project_id, event_id, name }| Shop {
            id,
            project_id,
            event_id,
            name,
        })
        .collect())
}

fn create_shop_item(conn: &mut SqliteConnection, item: &ShopItem) -> Result<RowId> {
    let new_item = models::NewShopItem {
        shop_id: item.shop_id,
        event_id: item.event_id,
        name: &item.name,
        price_cents: item.price_cents,
    };
    diesel::insert_into(schema::shop_items::table)
        .values(&new_item)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn items_of_shop(conn: &mut SqliteConnection, shop_id: RowId) -> Result<Vec<ShopItem>> {
    use schema::shop_items::dsl;
    Ok(schema::shop_items::table
        .filter(dsl::shop_id.eq(shop_id))
        .order_by(dsl::id)
        .load::<models::ShopItem>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::ShopItem {
                 id,
                 shop_id,
                 event_id,
                 name,
                 price_cents,
             }| ShopItem {
                id,
                shop_id,
                event_id,
                name,
                price_cents,
            },
        )
        .collect())
}
