use super::*;

impl EventRepo for DbConnection<'_> {
    fn create_event(&self, event: &Event) -> Result<RowId> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn get_event(&self, id: RowId) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
}

fn create_event(conn: &mut SqliteConnection, event: &Event) -> Result<RowId> {
    let new_event = models::NewEvent {
        user_id: event.user_id,
        name: &event.name,
        token: &event.token,
        description: event.description.as_deref(),
        created_at: event.created_at,
    };
    diesel::insert_into(schema::events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn get_event(conn: &mut SqliteConnection, id: RowId) -> Result<Event> {
    use schema::events::dsl;
    Ok(schema::events::table
        .filter(dsl::id.eq(id))
        .first::<models::Event>(conn)
        .map_err(from_diesel_err)?
        .into())
}

impl From<models::Event> for Event {
    fn from(from: models::Event) -> Self {
        let models::Event {
            id,
            user_id,
            name,
            token,
            description,
            created_at,
        } = from;
        Self {
            id,
            user_id,
            name,
            token,
            description,
            created_at,
        }
    }
}
