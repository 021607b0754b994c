use super::*;

pub fn record_install(connections: &sqlite::Connections, event_id: RowId) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::record_install(conn, event_id).map_err(|err| {
            debug!("Failed to record install of event {event_id}: {err}");
            err
        })
    })?)
}
