use super::*;

impl GuestRepo for DbConnection<'_> {
    fn create_guest(&self, guest: &Guest) -> Result<RowId> {
        create_guest(&mut self.conn.borrow_mut(), guest)
    }
    fn guests_of_event(&self, event_id: RowId) -> Result<Vec<Guest>> {
        guests_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_guest(conn: &mut SqliteConnection, guest: &Guest) -> Result<RowId> {
    let new_guest = models::NewGuest {
        event_id: guest.event_id,
        first_name: &guest.first_name,
        last_name: guest.last_name.as_deref(),
        email: &guest.email,
        token: &guest.token,
    };
    diesel::insert_into(schema::guests::table)
        .values(&new_guest)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn guests_of_event(conn: &mut SqliteConnection, event_id: RowId) -> Result<Vec<Guest>> {
    use schema::guests::dsl;
    Ok(schema::guests::table
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::id)
        .load::<models::Guest>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::Guest {
                 id,
                 event_id,
                 first_name,
                 last_name,
                 email,
                 token,
             }| Guest {
                id,
                event_id,
                first_name,
                last_name,
                email,
                token,
            },
        )
        .collect())
}
