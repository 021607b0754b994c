use super::*;

impl PindropRepo for DbConnection<'_> {
    fn create_pindrop(&self, pindrop: &Pindrop) -> Result<RowId> {
        create_pindrop(&mut self.conn.borrow_mut(), pindrop)
    }
    fn pindrops_of_project(&self, project_id: RowId) -> Result<Vec<Pindrop>> {
        pindrops_of_project(&mut self.conn.borrow_mut(), project_id)
    }
}

fn create_pindrop(conn: &mut SqliteConnection, pindrop: &Pindrop) -> Result<RowId> {
    let new_pindrop = models::NewPindrop {
        project_id: pindrop.project_id,
        event_id: pindrop.event_id,
        title: &pindrop.title,
        lat: pindrop.lat,
        lng: pindrop.lng,
    };
    diesel::insert_into(schema::pindrops::table)
        .values(&new_pindrop)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn pindrops_of_project(conn: &mut SqliteConnection, project_id: RowId) -> Result<Vec<Pindrop>> {
    use schema::pindrops::dsl;
    Ok(schema::pindrops::table
        .filter(dsl::project_id.eq(project_id))
        .order_by(dsl::id)
        .load::<models::Pindrop>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl From<models::Pindrop> for Pindrop {
    fn from(from: models::Pindrop) -> Self {
        let models::Pindrop {
            id,
            project_id,
            event_id,
            title,
            lat,
            lng,
        } = from;
        Self {
            id,
            project_id,
            event_id,
            title,
            lat,
            lng,
        }
    }
}
