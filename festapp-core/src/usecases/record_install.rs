use super::prelude::*;
use crate::util::time::unix_now;

/// Counts another installation of the app of an event.
pub fn record_install<R>(repo: &R, event_id: RowId) -> Result<()>
where
    R: InstallRepo,
{
    let updated_at = unix_now();
    let count = repo.increment_installs(event_id, updated_at)?;
    if count == 0 {
        log::debug!("No installs of event {event_id} found");
        return Err(Error::Repo(RepoError::NotFound));
    }
    log::debug!("Incremented {count} install counter(s) of event {event_id}");
    Ok(())
}
