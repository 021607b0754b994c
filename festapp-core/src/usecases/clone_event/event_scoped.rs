use rand::Rng;

use super::*;
use crate::util::demo::{demo_email, similar_token};

pub(super) fn clone_schedules<R>(repo: &R, session: &mut CloneSession) -> Result<()>
where
    R: ScheduleRepo,
{
    let schedules = repo.schedules_of_event(session.source_event_id)?;
    log::info!(
        "Cloning {} schedules of event {}",
        schedules.len(),
        session.source_event_id
    );
    for schedule in schedules {
        let old_id = schedule.id;
        let old_project_id = schedule.project_id;
        let new_project_id = session.id_map.get(Family::Project, old_project_id);
        let new_id = repo.create_schedule(&Schedule {
            id: UNSET_ID,
            event_id: session.new_event_id,
            project_id: new_project_id.unwrap_or(old_project_id),
            ..schedule
        })?;
        record_clone(session, Family::Schedule, old_id, new_id);
        if is_set(old_project_id) && new_project_id.is_none() {
            log::warn!(
                "schedule {new_id}: project_id refers to project {old_project_id} that has not been cloned"
            );
            session.dangling.push(DanglingReference {
                family: Family::Schedule,
                row_id: new_id,
                column: "project_id",
                old_target_id: old_project_id,
                policy: OrphanPolicy::Keep,
            });
        }
    }
    Ok(())
}

pub(super) fn clone_guests<R, G>(repo: &R, session: &mut CloneSession, rng: &mut G) -> Result<()>
where
    R: GuestRepo,
    G: Rng + ?Sized,
{
    let guests = repo.guests_of_event(session.source_event_id)?;
    log::info!(
        "Cloning {} guests of event {}",
        guests.len(),
        session.source_event_id
    );
    for guest in guests {
        let old_id = guest.id;
        let new_guest = Guest {
            id: UNSET_ID,
            event_id: session.new_event_id,
            first_name: demo_name(&guest.first_name),
            email: demo_email(&guest.email),
            token: similar_token(rng, &guest.token),
            ..guest
        };
        let new_id = repo.create_guest(&new_guest)?;
        record_clone(session, Family::Guest, old_id, new_id);
        log::info!(
            "Cloned guest {new_id}: name \"{}\", email \"{}\"",
            new_guest.first_name,
            new_guest.email
        );
    }
    Ok(())
}

pub(super) fn clone_installs<R>(repo: &R, session: &mut CloneSession) -> Result<()>
where
    R: InstallRepo,
{
    let installs = repo.installs_of_event(session.source_event_id)?;
    log::info!(
        "Cloning {} installs of event {}",
        installs.len(),
        session.source_event_id
    );
    for install in installs {
        let old_id = install.id;
        let new_id = repo.create_install(&Install {
            id: UNSET_ID,
            event_id: session.new_event_id,
            ..install
        })?;
        record_clone(session, Family::Install, old_id, new_id);
    }
    Ok(())
}

pub(super) fn clone_lookups<R>(repo: &R, session: &mut CloneSession) -> Result<()>
where
    R: LookupRepo,
{
    let lookups = repo.lookups_of_event(session.source_event_id)?;
    log::info!(
        "Cloning {} lookups of event {}",
        lookups.len(),
        session.source_event_id
    );
    for lookup in lookups {
        // Lookups keep their key
        let new_lookup = Lookup {
            event_id: session.new_event_id,
            ..lookup
        };
        repo.create_lookup(&new_lookup)?;
        log::info!(
            "Cloned lookup: '{}' (event {})",
            new_lookup.id,
            session.new_event_id
        );
    }
    Ok(())
}
