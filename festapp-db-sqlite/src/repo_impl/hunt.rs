use super::*;

impl HuntRepo for DbConnection<'_> {
    fn create_hunt(&self, hunt: &Hunt) -> Result<RowId> {
        create_hunt(&mut self.conn.borrow_mut(), hunt)
    }
    fn hunts_of_project(&self, project_id: RowId) -> Result<Vec<Hunt>> {
        hunts_of_project(&mut self.conn.borrow_mut(), project_id)
    }
    fn create_hunt_item(&self, item: &HuntItem) -> Result<RowId> {
        create_hunt_item(&mut self.conn.borrow_mut(), item)
    }
    fn items_of_hunt(&self, hunt_id: RowId) -> Result<Vec<HuntItem>> {
        items_of_hunt(&mut self.conn.borrow_mut(), hunt_id)
    }
}

fn create_hunt(conn: &mut SqliteConnection, hunt: &Hunt) -> Result<RowId> {
    let new_hunt = models::NewHunt {
        project_id: hunt.project_id,
        event_id: hunt.event_id,
        title: &hunt.title,
    };
    diesel::insert_into(schema::hunts::table)
        .values(&new_hunt)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn hunts_of_project(conn: &mut SqliteConnection, project_id: RowId) -> Result<Vec<Hunt>> {
    use schema::hunts::dsl;
    Ok(schema::hunts::table
        .filter(dsl::project_id.eq(project_id))
        .order_by(dsl::id)
        .load::<models::Hunt>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::Hunt { id, project_id, event_id, title }| Hunt {
            id,
            project_id,
            event_id,
            title,
        })
        .collect())
}

fn create_hunt_item(conn: &mut SqliteConnection, item: &HuntItem) -> Result<RowId> {
    let new_item = models::NewHuntItem {
        hunt_id: item.hunt_id,
        event_id: item.event_id,
        title: &item.title,
        code: &item.code,
        points: item.points,
    };
    diesel::insert_into(schema::hunt_items::table)
        .values(&new_item)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn items_of_hunt(conn: &mut SqliteConnection, hunt_id: RowId) -> Result<Vec<HuntItem>> {
    use schema::hunt_items::dsl;
    Ok(schema::hunt_items::table
        .filter(dsl::hunt_id.eq(hunt_id))
        .order_by(dsl::id)
        .load::<models::HuntItem>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::HuntItem {
                 id,
                 hunt_id,
                 event_id,
                 title,
                 code,
                 points,
             }| HuntItem {
                id,
                hunt_id,
                event_id,
                title,
                code,
                points,
            },
        )
        .collect())
}
