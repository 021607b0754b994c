//! Deep copy of the complete object graph of an event.
//!
//! The copy is done in two passes. The first pass walks the graph
//! top-down and inserts a copy of every row, rewriting all scope
//! references (event, project, parent container) that are already
//! known. Columns that may point to rows that have not been copied
//! yet are inserted with their old value and recorded as pending.
//! The second pass resolves all pending references through the
//! id map once every row of the event has been copied.

use strum::IntoEnumIterator;

use super::prelude::*;
use crate::util::demo::demo_name;

mod event_scoped;
mod first_pass;
mod fixup;
mod session;

pub use self::session::*;

/// Clones an event with all its rows for another user.
///
/// All reads and writes must be executed within a single transaction
/// of `repo`. The store will contain partially copied rows when this
/// function fails and the transaction must then be rolled back.
pub fn clone_event_for_user<R>(
    repo: &R,
    source_event_id: RowId,
    target_user_id: RowId,
) -> Result<ClonedEvent>
where
    R: Db,
{
    log::info!(
        "Starting event clone: source event {source_event_id}, target user {target_user_id}"
    );
    repo.get_user(target_user_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        _ => Error::Repo(err),
    })?;

    let mut session = CloneSession::new(source_event_id, target_user_id);

    clone_event(repo, &mut session)?;
    first_pass::clone_projects(repo, &mut session)?;

    // All rows that might be referenced by pending
    // references exist now.
    let dangling = fixup::resolve_references(repo, &session)?;
    session.dangling.extend(dangling);

    event_scoped::clone_schedules(repo, &mut session)?;
    event_scoped::clone_guests(repo, &mut session, &mut rand::thread_rng())?;
    event_scoped::clone_installs(repo, &mut session)?;
    event_scoped::clone_lookups(repo, &mut session)?;

    log_summary(repo, &session)?;
    log::info!(
        "Event clone complete: new event {} for user {target_user_id}",
        session.new_event_id
    );
    Ok(session.into())
}

fn clone_event<R>(repo: &R, session: &mut CloneSession) -> Result<()>
where
    R: EventRepo,
{
    let source = repo
        .get_event(session.source_event_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::EventDoesNotExist,
            _ => Error::Repo(err),
        })?;
    let old_id = source.id;
    let new_event = Event {
        id: UNSET_ID,
        user_id: session.target_user_id,
        name: demo_name(&source.name),
        ..source
    };
    let new_id = repo.create_event(&new_event)?;
    session.new_event_id = new_id;
    session.id_map.insert(Family::Event, old_id, new_id);
    log::info!(
        "Cloned event: {old_id} -> {new_id} (user {}, name \"{}\")",
        new_event.user_id,
        new_event.name
    );
    Ok(())
}

fn log_summary<R>(repo: &R, session: &CloneSession) -> Result<()>
where
    R: FamilyStats,
{
    for family in Family::iter() {
        let source = repo.count_rows_of_event(family, session.source_event_id)?;
        let cloned = repo.count_rows_of_event(family, session.new_event_id)?;
        if source == cloned {
            log::info!("Cloned {cloned} {family} rows");
        } else {
            log::warn!("Cloned {cloned} of {source} {family} rows");
        }
    }
    for dangling in &session.dangling {
        log::warn!(
            "Unresolved reference: {} {}.{} pointed to {} ({:?})",
            dangling.family,
            dangling.row_id,
            dangling.column,
            dangling.old_target_id,
            dangling.policy,
        );
    }
    Ok(())
}

/// Records the copy of a row in the id map and the audit log.
fn record_clone(session: &mut CloneSession, family: Family, old_id: RowId, new_id: RowId) {
    session.id_map.insert(family, old_id, new_id);
    log::info!(
        "Cloned {family}: {old_id} -> {new_id} (event {})",
        session.new_event_id
    );
}

#[cfg(test)]
mod tests;
