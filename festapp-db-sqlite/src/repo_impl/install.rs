use super::*;

impl InstallRepo for DbConnection<'_> {
    fn create_install(&self, install: &Install) -> Result<RowId> {
        create_install(&mut self.conn.borrow_mut(), install)
    }
    fn installs_of_event(&self, event_id: RowId) -> Result<Vec<Install>> {
        installs_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn increment_installs(&self, event_id: RowId, updated_at: i64) -> Result<usize> {
        increment_installs(&mut self.conn.borrow_mut(), event_id, updated_at)
    }
}

fn create_install(conn: &mut SqliteConnection, install: &Install) -> Result<RowId> {
    let new_install = models::NewInstall {
        event_id: install.event_id,
        count: install.count,
        updated_at: install.updated_at,
    };
    diesel::insert_into(schema::installs::table)
        .values(&new_install)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn installs_of_event(conn: &mut SqliteConnection, event_id: RowId) -> Result<Vec<Install>> {
    use schema::installs::dsl;
    Ok(schema::installs::table
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::id)
        .load::<models::Install>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::Install {
                 id,
                 event_id,
                 count,
                 updated_at,
             }| Install {
                id,
                event_id,
                count,
                updated_at,
            },
        )
        .collect())
}

fn increment_installs(
    conn: &mut SqliteConnection,
    event_id: RowId,
    updated_at: i64,
) -> Result<usize> {
    use schema::installs::dsl;
    diesel::update(schema::installs::table.filter(dsl::event_id.eq(event_id)))
        .set((dsl::count.eq(dsl::count + 1), dsl::updated_at.eq(updated_at)))
        .execute(conn)
        .map_err(from_diesel_err)
}
