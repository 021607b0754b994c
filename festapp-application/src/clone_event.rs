use super::*;

/// Clones an event for another user within a single transaction.
///
/// Returns the id of the new event.
pub fn clone_event_for_user(
    connections: &sqlite::Connections,
    source_event_id: RowId,
    target_user_id: RowId,
) -> Result<RowId> {
    let cloned = connections.exclusive()?.transaction(|conn| {
        usecases::clone_event_for_user(conn, source_event_id, target_user_id).map_err(|err| {
            warn!("Failed to clone event {source_event_id} for user {target_user_id}: {err}");
            err
        })
    })?;
    if !cloned.dangling.is_empty() {
        warn!(
            "Cloned event {source_event_id} as {} with {} unresolved reference(s)",
            cloned.event_id,
            cloned.dangling.len()
        );
    }
    info!(
        "Cloned event {source_event_id} as {} for user {target_user_id}",
        cloned.event_id
    );
    Ok(cloned.event_id)
}
