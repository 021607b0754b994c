use super::*;

impl FamilyStats for DbReadOnly<'_> {
    fn count_rows_of_event(&self, family: Family, event_id: RowId) -> Result<usize> {
        count_rows_of_event(&mut self.conn.borrow_mut(), family, event_id)
    }
}

impl FamilyStats for DbConnection<'_> {
    fn count_rows_of_event(&self, family: Family, event_id: RowId) -> Result<usize> {
        count_rows_of_event(&mut self.conn.borrow_mut(), family, event_id)
    }
}

fn count_rows_of_event(
    conn: &mut SqliteConnection,
    family: Family,
    event_id: RowId,
) -> Result<usize> {
    use schema::*;
    let count = match family {
        Family::Event => events::table
            .filter(events::id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Project => projects::table
            .filter(projects::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Pindrop => pindrops::table
            .filter(pindrops::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Directory => directories::table
            .filter(directories::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::DirectoryEntry => directory_entries::table
            .filter(directory_entries::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Hunt => hunts::table
            .filter(hunts::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::HuntItem => hunt_items::table
            .filter(hunt_items::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::News => news::table
            .filter(news::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::NewsItem => news_items::table
            .filter(news_items::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Poll => polls::table
            .filter(polls::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::PollItem => poll_items::table
            .filter(poll_items::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Shop => shops::table
            .filter(shops::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::ShopItem => shop_items::table
            .filter(shop_items::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Schedule => schedules::table
            .filter(schedules::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Guest => guests::table
            .filter(guests::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Install => installs::table
            .filter(installs::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
        Family::Lookup => lookups::table
            .filter(lookups::event_id.eq(event_id))
            .count()
            .get_result::<i64>(conn),
    }
    .map_err(from_diesel_err)?;
    Ok(count as usize)
}
