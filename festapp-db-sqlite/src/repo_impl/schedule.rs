use super::*;

impl ScheduleRepo for DbConnection<'_> {
    fn create_schedule(&self, schedule: &Schedule) -> Result<RowId> {
        create_schedule(&mut self.conn.borrow_mut(), schedule)
    }
    fn schedules_of_event(&self, event_id: RowId) -> Result<Vec<Schedule>> {
        schedules_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_schedule(conn: &mut SqliteConnection, schedule: &Schedule) -> Result<RowId> {
    let new_schedule = models::NewSchedule {
        event_id: schedule.event_id,
        project_id: schedule.project_id,
        title: &schedule.title,
        starts_at: schedule.starts_at,
        ends_at: schedule.ends_at,
    };
    diesel::insert_into(schema::schedules::table)
        .values(&new_schedule)
        .execute(conn)
        .map_err(from_diesel_err)?;
    resolve_last_insert_rowid(conn)
}

fn schedules_of_event(conn: &mut SqliteConnection, event_id: RowId) -> Result<Vec<Schedule>> {
    use schema::schedules::dsl;
    Ok(schema::schedules::table
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::id)
        .load::<models::Schedule>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::Schedule {
                 id,
                 event_id,
                 project_id,
                 title,
                 starts_at,
                 ends_at,
             }| Schedule {
                id,
                event_id,
                project_id,
                title,
                starts_at,
                ends_at,
            },
        )
        .collect())
}
