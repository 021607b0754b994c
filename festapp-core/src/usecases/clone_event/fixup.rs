use super::*;

/// Rewrites all pending references of a clone session.
///
/// New values are always derived from the old ids that have been
/// captured during the first pass and not from the current content
/// of the store. Resolving the same session again leads to the same
/// result.
pub(super) fn resolve_references<R>(
    repo: &R,
    session: &CloneSession,
) -> Result<Vec<DanglingReference>>
where
    R: DirectoryRepo + DirectoryEntryRepo + NewsRepo,
{
    let mut dangling = vec![];
    for reference in Reference::ALL {
        let owner = reference.owner();
        let target = reference.target();
        log::info!(
            "Second pass: resolving {owner}.{} -> {target}",
            reference.column()
        );
        log::debug!(
            "{target} id mapping (old, new): {:?}",
            session.id_map.pairs(target).collect::<Vec<_>>()
        );
        for pending in session.pending_of(reference) {
            if let Some(orphan) = resolve(repo, &session.id_map, pending)? {
                dangling.push(orphan);
            }
        }
    }
    Ok(dangling)
}

fn resolve<R>(
    repo: &R,
    id_map: &IdMap,
    pending: PendingReference,
) -> Result<Option<DanglingReference>>
where
    R: DirectoryRepo + DirectoryEntryRepo + NewsRepo,
{
    let PendingReference {
        reference,
        row_id,
        old_target_id,
    } = pending;
    let owner = reference.owner();
    let column = reference.column();
    let policy = reference.orphan_policy();

    let new_target_id = id_map.get(reference.target(), old_target_id);
    let value = match (new_target_id, policy) {
        (Some(new_target_id), _) => {
            log::info!("Updating {owner} {row_id}: {column} {old_target_id} -> {new_target_id}");
            Some(new_target_id)
        }
        (None, OrphanPolicy::Reset) => {
            log::info!("Updating {owner} {row_id}: {column} {old_target_id} -> {UNSET_ID}");
            Some(UNSET_ID)
        }
        (None, OrphanPolicy::Keep) => {
            log::info!("Keeping {owner} {row_id}: {column} {old_target_id} has no mapping");
            None
        }
    };
    if let Some(value) = value {
        update(repo, reference, row_id, value)?;
    }

    if new_target_id.is_some() || !is_set(old_target_id) {
        return Ok(None);
    }
    log::warn!(
        "{owner} {row_id}: {column} refers to {} {old_target_id} that has not been cloned",
        reference.target()
    );
    Ok(Some(DanglingReference {
        family: owner,
        row_id,
        column,
        old_target_id,
        policy,
    }))
}

fn update<R>(repo: &R, reference: Reference, row_id: RowId, value: RowId) -> Result<()>
where
    R: DirectoryRepo + DirectoryEntryRepo + NewsRepo,
{
    match reference {
        Reference::DirectoryParent => repo.set_directory_parent(row_id, value)?,
        Reference::DirectoryMap => repo.set_directory_map(row_id, value)?,
        Reference::DirectoryEntryParent => repo.set_directory_entry_parent(row_id, value)?,
        Reference::NewsItemDirectoryEntry => repo.set_news_item_directory_entry(row_id, value)?,
    }
    Ok(())
}
