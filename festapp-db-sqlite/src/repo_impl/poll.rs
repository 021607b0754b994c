use super::*;

impl PollRepo for DbConnection<'_> {
    fn create_poll(&self, poll: &Poll) -> Result<RowId> {
        create_poll(&mut self.conn.borrow_mut(), poll)
    }
    fn polls_of_project(&self, project_id: RowId) -> Result<Vec<Poll>> {
        polls_of_project(&mut self.conn.borrow_mut(), project_id)
    }
    fn create_poll_item(&self, item: &PollItem) -> Result<RowId> {
        create_poll_item(&mut self.conn.borrow_mut(), item)
    }
    fn items_of_poll(&self, poll_id: RowId) -> Result<Vec<PollItem>> {
        items_of_poll(&mut self.conn.borrow_mut(), poll_id)
    }
}

fn create_poll(conn: &mut SqliteConnection, poll: &Poll) -> Result<RowId> {
    let new_poll = models::NewPoll {
        project_id: poll.project_id,
        event_id: poll.event_id,
        question: &poll.question,
    };
    diesel::insert_into(schema::polls::table)
        .values(&new_poll)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn polls_of_project(conn: &mut SqliteConnection, project_id: RowId) -> Result<Vec<Poll>> {
    use schema::polls::dsl;
    Ok(schema::polls::table
        .filter(dsl::project_id.eq(project_id))
        .order_by(dsl::id)
        .load::<models::Poll>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::Poll {
                 id,
                 project_id,
                 event_id,
                 question,
             }| Poll {
                id,
                project_id,
                event_id,
                question,
            },
        )
        .collect())
}

fn create_poll_item(conn: &mut SqliteConnection, item: &PollItem) -> Result<RowId> {
    let new_item = models::NewPollItem {
        poll_id: item.poll_id,
        event_id: item.event_id,
        answer: &item.answer,
        votes: item.votes,
    };
    diesel::insert_into(schema::poll_items::table)
        .values(&new_item)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn items_of_poll(conn: &mut SqliteConnection, poll_id: RowId) -> Result<Vec<PollItem>> {
    use schema::poll_items::dsl;
    Ok(schema::poll_items::table
        .filter(dsl::poll_id.eq(poll_id))
        .order_by(dsl::id)
        .load::<models::PollItem>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::PollItem {
                 id,
                 poll_id,
                 event_id,
                 answer,
                 votes,
             }| PollItem {
                id,
                poll_id,
                event_id,
                answer,
                votes,
            },
        )
        .collect())
}
