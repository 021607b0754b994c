use super::*;

impl NewsRepo for DbConnection<'_> {
    fn create_news(&self, news: &News) -> Result<RowId> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn news_of_project(&self, project_id: RowId) -> Result<Vec<News>> {
        news_of_project(&mut self.conn.borrow_mut(), project_id)
    }
    fn create_news_item(&self, item: &NewsItem) -> Result<RowId> {
        create_news_item(&mut self.conn.borrow_mut(), item)
    }
    fn items_of_news(&self, news_id: RowId) -> Result<Vec<NewsItem>> {
        items_of_news(&mut self.conn.borrow_mut(), news_id)
    }
    fn set_news_item_directory_entry(&self, id: RowId, directory_entry_id: RowId) -> Result<()> {
        set_news_item_directory_entry(&mut self.conn.borrow_mut(), id, directory_entry_id)
    }
}

fn create_news(conn: &mut SqliteConnection, news: &News) -> Result<RowId> {
    let new_news = models::NewNews {
        project_id: news.project_id,
        event_id: news.event_id,
        title: &news.title,
    };
    diesel::insert_into(schema::news::table)
        .values(&new_news)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn news_of_project(conn: &mut SqliteConnection, project_id: RowId) -> Result<Vec<News>> {
    use schema::news::dsl;
    Ok(schema::news::table
        .filter(dsl::project_id.eq(project_id))
        .order_by(dsl::id)
        .load::<models::News>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::News { id, project_id, event_id, title }| News {
            id,
            project_id,
            event_id,
            title,
        })
        .collect())
}

fn create_news_item(conn: &mut SqliteConnection, item: &NewsItem) -> Result<RowId> {
    let new_item = models::NewNewsItem {
        news_id: item.news_id,
        event_id: item.event_id,
        project_id: item.project_id,
        directory_entry_id: item.directory_entry_id,
        title: &item.title,
        body: item.body.as_deref(),
        published_at: item.published_at,
    };
    diesel::insert_into(schema::news_items::table)
        .values(&new_item)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn items_of_news(conn: &mut SqliteConnection, news_id: RowId) -> Result<Vec<NewsItem>> {
    use schema::news_items::dsl;
    Ok(schema::news_items::table
        .filter(dsl::news_id.eq(news_id))
        .order_by(dsl::id)
        .load::<models::NewsItem>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn set_news_item_directory_entry(
    conn: &mut SqliteConnection,
    id: RowId,
    directory_entry_id: RowId,
) -> Result<()> {
    use schema::news_items::dsl;
    let count = diesel::update(schema::news_items::table.filter(dsl::id.eq(id)))
        .set(dsl::directory_entry_id.eq(directory_entry_id))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

impl From<models::NewsItem> for NewsItem {
    fn from(from: models::NewsItem) -> Self {
        let models::NewsItem {
            id,
            news_id,
            event_id,
            project_id,
            directory_entry_id,
            title,
            body,
            published_at,
        } = from;
        Self {
            id,
            news_id,
            event_id,
            project_id,
            directory_entry_id,
            title,
            body,
            published_at,
        }
    }
}
