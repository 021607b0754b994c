use super::*;

impl ProjectRepo for DbConnection<'_> {
    fn create_project(&self, project: &Project) -> Result<RowId> {
        create_project(&mut self.conn.borrow_mut(), project)
    }
    fn projects_of_event(&self, event_id: RowId) -> Result<Vec<Project>> {
        projects_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_project(conn: &mut SqliteConnection, project: &Project) -> Result<RowId> {
    let new_project = models::NewProject {
        event_id: project.event_id,
        name: &project.name,
        kind: &project.kind,
        position: project.position,
    };
    diesel::insert_into(schema::projects::table)
        .values(&new_project)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn projects_of_event(conn: &mut SqliteConnection, event_id: RowId) -> Result<Vec<Project>> {
    use schema::projects::dsl;
    Ok(schema::projects::table
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::id)
        .load::<models::Project>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl From<models::Project> for Project {
    fn from(from: models::Project) -> Self {
        let models::Project {
            id,
            event_id,
            name,
            kind,
            position,
        } = from;
        Self {
            id,
            event_id,
            name,
            kind,
            position,
        }
    }
}
