use super::*;

/// Old and new id of a container row.
#[derive(Debug, Clone, Copy)]
struct Scope {
    old_id: RowId,
    new_id: RowId,
}

pub(super) fn clone_projects<R>(repo: &R, session: &mut CloneSession) -> Result<()>
where
    R: ProjectRepo
        + PindropRepo
        + DirectoryRepo
        + DirectoryEntryRepo
        + HuntRepo
        + NewsRepo
        + PollRepo
        + ShopRepo,
{
    let projects = repo.projects_of_event(session.source_event_id)?;
    log::info!(
        "Cloning {} projects of event {}",
        projects.len(),
        session.source_event_id
    );
    for project in projects {
        let old_id = project.id;
        let new_id = repo.create_project(&Project {
            id: UNSET_ID,
            event_id: session.new_event_id,
            ..project
        })?;
        record_clone(session, Family::Project, old_id, new_id);

        let project = Scope { old_id, new_id };
        // Directories refer to the pindrops of their project
        clone_pindrops(repo, session, project)?;
        clone_directories(repo, session, project)?;
        clone_hunts(repo, session, project)?;
        clone_news(repo, session, project)?;
        clone_polls(repo, session, project)?;
        clone_shops(repo, session, project)?;
    }
    Ok(())
}

fn clone_pindrops<R>(repo: &R, session: &mut CloneSession, project: Scope) -> Result<()>
where
    R: PindropRepo,
{
    let pindrops = repo.pindrops_of_project(project.old_id)?;
    log::info!(
        "Cloning {} pindrops of project {}",
        pindrops.len(),
        project.old_id
    );
    for pindrop in pindrops {
        let old_id = pindrop.id;
        let new_id = repo.create_pindrop(&Pindrop {
            id: UNSET_ID,
            project_id: project.new_id,
            event_id: session.new_event_id,
            ..pindrop
        })?;
        record_clone(session, Family::Pindrop, old_id, new_id);
    }
    Ok(())
}

fn clone_directories<R>(repo: &R, session: &mut CloneSession, project: Scope) -> Result<()>
where
    R: DirectoryRepo + DirectoryEntryRepo,
{
    let directories = repo.directories_of_project(project.old_id)?;
    log::info!(
        "Cloning {} directories of project {}",
        directories.len(),
        project.old_id
    );
    for directory in directories {
        let old_id = directory.id;
        let old_parent_id = directory.parent_id;
        let old_map_id = directory.map_id;
        // Parent and map pin are inserted with their old
        // values and resolved by the second pass.
        let new_id = repo.create_directory(&Directory {
            id: UNSET_ID,
            project_id: project.new_id,
            event_id: session.new_event_id,
            ..directory
        })?;
        record_clone(session, Family::Directory, old_id, new_id);
        session.defer(Reference::DirectoryParent, new_id, old_parent_id);
        if is_set(old_map_id) {
            session.defer(Reference::DirectoryMap, new_id, old_map_id);
        }

        clone_directory_entries(repo, session, Scope { old_id, new_id })?;
    }
    Ok(())
}

fn clone_directory_entries<R>(repo: &R, session: &mut CloneSession, directory: Scope) -> Result<()>
where
    R: DirectoryEntryRepo,
{
    let entries = repo.entries_of_directory(directory.old_id)?;
    log::info!(
        "Cloning {} entries of directory {}",
        entries.len(),
        directory.old_id
    );
    for entry in entries {
        let old_id = entry.id;
        let old_parent_entry_id = entry.parent_entry_id;
        let new_id = repo.create_directory_entry(&DirectoryEntry {
            id: UNSET_ID,
            directory_id: directory.new_id,
            event_id: session.new_event_id,
            ..entry
        })?;
        record_clone(session, Family::DirectoryEntry, old_id, new_id);
        session.defer(Reference::DirectoryEntryParent, new_id, old_parent_entry_id);
    }
    Ok(())
}

fn clone_hunts<R>(repo: &R, session: &mut CloneSession, project: Scope) -> Result<()>
where
    R: HuntRepo,
{
    let hunts = repo.hunts_of_project(project.old_id)?;
    log::info!("Cloning {} hunts of project {}", hunts.len(), project.old_id);
    for hunt in hunts {
        let old_id = hunt.id;
        let new_id = repo.create_hunt(&Hunt {
            id: UNSET_ID,
            project_id: project.new_id,
            event_id: session.new_event_id,
            ..hunt
        })?;
        record_clone(session, Family::Hunt, old_id, new_id);

        let hunt = Scope { old_id, new_id };
        for item in repo.items_of_hunt(hunt.old_id)? {
            let old_id = item.id;
            let new_id = repo.create_hunt_item(&HuntItem {
                id: UNSET_ID,
                hunt_id: hunt.new_id,
                event_id: session.new_event_id,
                ..item
            })?;
            record_clone(session, Family::HuntItem, old_id, new_id);
        }
    }
    Ok(())
}

fn clone_news<R>(repo: &R, session: &mut CloneSession, project: Scope) -> Result<()>
where
    R: NewsRepo,
{
    let news = repo.news_of_project(project.old_id)?;
    log::info!("Cloning {} news of project {}", news.len(), project.old_id);
    for news in news {
        let old_id = news.id;
        let new_id = repo.create_news(&News {
            id: UNSET_ID,
            project_id: project.new_id,
            event_id: session.new_event_id,
            ..news
        })?;
        record_clone(session, Family::News, old_id, new_id);

        clone_news_items(repo, session, project, Scope { old_id, new_id })?;
    }
    Ok(())
}

fn clone_news_items<R>(
    repo: &R,
    session: &mut CloneSession,
    project: Scope,
    news: Scope,
) -> Result<()>
where
    R: NewsRepo,
{
    let items = repo.items_of_news(news.old_id)?;
    log::info!("Cloning {} items of news {}", items.len(), news.old_id);
    for item in items {
        let old_id = item.id;
        let old_directory_entry_id = item.directory_entry_id;
        let new_id = repo.create_news_item(&NewsItem {
            id: UNSET_ID,
            news_id: news.new_id,
            event_id: session.new_event_id,
            project_id: project.new_id,
            ..item
        })?;
        record_clone(session, Family::NewsItem, old_id, new_id);
        session.defer(
            Reference::NewsItemDirectoryEntry,
            new_id,
            old_directory_entry_id,
        );
    }
    Ok(())
}

fn clone_polls<R>(repo: &R, session: &mut CloneSession, project: Scope) -> Result<()>
where
    R: PollRepo,
{
    let polls = repo.polls_of_project(project.old_id)?;
    log::info!("Cloning {} polls of project {}", polls.len(), project.old_id);
    for poll in polls {
        let old_id = poll.id;
        let new_id = repo.create_poll(&Poll {
            id: UNSET_ID,
            project_id: project.new_id,
            event_id: session.new_event_id,
            ..poll
        })?;
        record_clone(session, Family::Poll, old_id, new_id);

        let poll = Scope { old_id, new_id };
        for item in repo.items_of_poll(poll.old_id)? {
            let old_id = item.id;
            let new_id = repo.create_poll_item(&PollItem {
                id: UNSET_ID,
                poll_id: poll.new_id,
                event_id: session.new_event_id,
                ..item
            })?;
            record_clone(session, Family::PollItem, old_id, new_id);
        }
    }
    Ok(())
}

fn clone_shops<R>(repo: &R, session: &mut CloneSession, project: Scope) -> Result<()>
where
    R: ShopRepo,
{
    let shops = repo.shops_of_project(project.old_id)?;
    log::info!("Cloning {} shops of project {}", shops.len(), project.old_id);
    for shop in shops {
        let old_id = shop.id;
        let new_id = repo.create_shop(&Shop {
            id: UNSET_ID,
            project_id: project.new_id,
            event_id: session.new_event_id,
            ..shop
        })?;
        record_clone(session, Family::Shop, old_id, new_id);

        let shop = Scope { old_id, new_id };
        for item in repo.items_of_shop(shop.old_id)? {
            let old_id = item.id;
            let new_id = repo.create_shop_item(&ShopItem {
                id: UNSET_ID,
                shop_id: shop.new_id,
                event_id: session.new_event_id,
                ..item
            })?;
            record_clone(session, Family::ShopItem, old_id, new_id);
        }
    }
    Ok(())
}
