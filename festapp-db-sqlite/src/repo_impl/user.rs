use super::*;

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<RowId> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: RowId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<RowId> {
    let new_user = models::NewUser {
        email: &user.email,
        name: &user.name,
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn get_user(conn: &mut SqliteConnection, id: RowId) -> Result<User> {
    use schema::users::dsl;
    Ok(schema::users::table
        .filter(dsl::id.eq(id))
        .first::<models::User>(conn)
        .map_err(from_diesel_err)?
        .into())
}

impl From<models::User> for User {
    fn from(from: models::User) -> Self {
        let models::User { id, email, name } = from;
        Self { id, email, name }
    }
}
