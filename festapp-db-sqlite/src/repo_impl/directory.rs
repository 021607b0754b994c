use super::*;

impl DirectoryRepo for DbConnection<'_> {
    fn create_directory(&self, directory: &Directory) -> Result<RowId> {
        create_directory(&mut self.conn.borrow_mut(), directory)
    }
    fn directories_of_project(&self, project_id: RowId) -> Result<Vec<Directory>> {
        directories_of_project(&mut self.conn.borrow_mut(), project_id)
    }
    fn set_directory_parent(&self, id: RowId, parent_id: RowId) -> Result<()> {
        set_directory_parent(&mut self.conn.borrow_mut(), id, parent_id)
    }
    fn set_directory_map(&self, id: RowId, map_id: RowId) -> Result<()> {
        set_directory_map(&mut self.conn.borrow_mut(), id, map_id)
    }
}

impl DirectoryEntryRepo for DbConnection<'_> {
    fn create_directory_entry(&self, entry: &DirectoryEntry) -> Result<RowId> {
        create_directory_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn entries_of_directory(&self, directory_id: RowId) -> Result<Vec<DirectoryEntry>> {
        entries_of_directory(&mut self.conn.borrow_mut(), directory_id)
    }
    fn set_directory_entry_parent(&self, id: RowId, parent_entry_id: RowId) -> Result<()> {
        set_directory_entry_parent(&mut self.conn.borrow_mut(), id, parent_entry_id)
    }
}

fn create_directory(conn: &mut SqliteConnection, directory: &Directory) -> Result<RowId> {
    let new_directory = models::NewDirectory {
        project_id: directory.project_id,
        event_id: directory.event_id,
        parent_id: directory.parent_id,
        map_id: directory.map_id,
        name: &directory.name,
        position: directory.position,
    };
    diesel::insert_into(schema::directories::table)
        .values(&new_directory)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn directories_of_project(
    conn: &mut SqliteConnection,
    project_id: RowId,
) -> Result<Vec<Directory>> {
    use schema::directories::dsl;
    Ok(schema::directories::table
        .filter(dsl::project_id.eq(project_id))
        .order_by(dsl::id)
        .load::<models::Directory>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn set_directory_parent(conn: &mut SqliteConnection, id: RowId, parent_id: RowId) -> Result<()> {
    use schema::directories::dsl;
    let count = diesel::update(schema::directories::table.filter(dsl::id.eq(id)))
        .set(dsl::parent_id.eq(parent_id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

fn set_directory_map(conn: &mut SqliteConnection, id: RowId, map_id: RowId) -> Result<()> {
    use schema::directories::dsl;
    let count = diesel::update(schema::directories::table.filter(dsl::id.eq(id)))
        .set(dsl::map_id.eq(map_id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

fn create_directory_entry(conn: &mut SqliteConnection, entry: &DirectoryEntry) -> Result<RowId> {
    let new_entry = models::NewDirectoryEntry {
        directory_id: entry.directory_id,
        event_id: entry.event_id,
        parent_entry_id: entry.parent_entry_id,
        title: &entry.title,
        body: entry.body.as_deref(),
        image_url: entry.image_url.as_deref(),
    };
    diesel::insert_into(schema::directory_entries::table)
        .values(&new_entry)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn entries_of_directory(
    conn: &mut SqliteConnection,
    directory_id: RowId,
) -> Result<Vec<DirectoryEntry>> {
    use schema::directory_entries::dsl;
    Ok(schema::directory_entries::table
        .filter(dsl::directory_id.eq(directory_id))
        .order_by(dsl::id)
        .load::<models::DirectoryEntry>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn set_directory_entry_parent(
    conn: &mut SqliteConnection,
    id: RowId,
    parent_entry_id: RowId,
) -> Result<()> {
    use schema::directory_entries::dsl;
    let count = diesel::update(schema::directory_entries::table.filter(dsl::id.eq(id)))
        .set(dsl::parent_entry_id.eq(parent_entry_id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

impl From<models::Directory> for Directory {
    fn from(from: models::Directory) -> Self {
        let models::Directory {
            id,
            project_id,
            event_id,
            parent_id,
            map_id,
            name,
            position,
        } = from;
        Self {
            id,
            project_id,
            event_id,
            parent_id,
            map_id,
            name,
            position,
        }
    }
}

impl From<models::DirectoryEntry> for DirectoryEntry {
    fn from(from: models::DirectoryEntry) -> Self {
        let models::DirectoryEntry {
            id,
            directory_id,
            event_id,
            parent_entry_id,
            title,
            body,
            image_url,
        } = from;
        Self {
            id,
            directory_id,
            event_id,
            parent_entry_id,
            title,
            body,
            image_url,
        }
    }
}
