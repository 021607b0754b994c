use super::*;

impl LookupRepo for DbConnection<'_> {
    fn create_lookup(&self, lookup: &Lookup) -> Result<()> {
        create_lookup(&mut self.conn.borrow_mut(), lookup)
    }
    fn lookups_of_event(&self, event_id: RowId) -> Result<Vec<Lookup>> {
        lookups_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_lookup(conn: &mut SqliteConnection, lookup: &Lookup) -> Result<()> {
    let new_lookup = models::Lookup {
        id: lookup.id.clone(),
        event_id: lookup.event_id,
        value: lookup.value.clone(),
    };
    diesel::insert_into(schema::lookups::table)
        .values(&new_lookup)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn lookups_of_event(conn: &mut SqliteConnection, event_id: RowId) -> Result<Vec<Lookup>> {
    use schema::lookups::dsl;
    Ok(schema::lookups::table
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::id)
        .load::<models::Lookup>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::Lookup { id, event_id, value }| Lookup {
            id,
            event_id,
            value,
        })
        .collect())
}
