use strum::IntoEnumIterator;

use super::{super::tests::MockDb, *};
use crate::fixtures::*;

fn seeded_db() -> (MockDb, DemoEvent) {
    let db = MockDb::default();
    let demo = seed_demo_event(&db).unwrap();
    (db, demo)
}

fn count_all(db: &MockDb, event_id: RowId) -> Vec<(Family, usize)> {
    Family::iter()
        .map(|f| (f, db.count_rows_of_event(f, event_id).unwrap()))
        .collect()
}

fn new_id(cloned: &ClonedEvent, family: Family, old_id: RowId) -> RowId {
    cloned.id_map.get(family, old_id).unwrap()
}

fn directory(db: &MockDb, id: RowId) -> Directory {
    db.directories
        .borrow()
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .unwrap()
}

fn directory_entry(db: &MockDb, id: RowId) -> DirectoryEntry {
    db.directory_entries
        .borrow()
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .unwrap()
}

fn news_item(db: &MockDb, id: RowId) -> NewsItem {
    db.news_items
        .borrow()
        .iter()
        .find(|n| n.id == id)
        .cloned()
        .unwrap()
}

fn schedule(db: &MockDb, id: RowId) -> Schedule {
    db.schedules
        .borrow()
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .unwrap()
}

#[test]
fn clone_all_rows_of_an_event() {
    let (db, demo) = seeded_db();
    let source_counts = count_all(&db, demo.event_id);

    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();

    assert_ne!(demo.event_id, cloned.event_id);
    assert_eq!(source_counts, count_all(&db, cloned.event_id));
    assert_eq!(source_counts, count_all(&db, demo.event_id));
    for (family, count) in source_counts {
        if family != Family::Lookup {
            assert_eq!(count, cloned.id_map.len(family), "{family}");
        }
    }
}

#[test]
fn mark_the_new_event_as_demo() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    let source = db.get_event(demo.event_id).unwrap();
    let event = db.get_event(cloned.event_id).unwrap();
    assert_eq!("Summer Fest Demo", event.name);
    assert_eq!(demo.target_user_id, event.user_id);
    assert_eq!(source.token, event.token);
    assert_eq!(source.description, event.description);
    assert_eq!("Summer Fest", source.name);
    assert_eq!(demo.owner_id, source.user_id);
}

#[test]
fn never_refer_to_rows_of_the_source_event() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    let new_projects: Vec<_> = cloned.id_map.pairs(Family::Project).map(|(_, n)| n).collect();
    let new_dirs: Vec<_> = cloned.id_map.pairs(Family::Directory).map(|(_, n)| n).collect();
    let new_entries: Vec<_> = cloned
        .id_map
        .pairs(Family::DirectoryEntry)
        .map(|(_, n)| n)
        .collect();

    let projects = db.projects_of_event(cloned.event_id).unwrap();
    assert_eq!(2, projects.len());
    for project in projects {
        for d in db.directories_of_project(project.id).unwrap() {
            assert_eq!(cloned.event_id, d.event_id);
            assert!(d.is_root() || new_dirs.contains(&d.parent_id));
            for e in db.entries_of_directory(d.id).unwrap() {
                assert_eq!(cloned.event_id, e.event_id);
                assert!(e.is_root() || new_entries.contains(&e.parent_entry_id));
            }
        }
        for news in db.news_of_project(project.id).unwrap() {
            assert_eq!(cloned.event_id, news.event_id);
            for item in db.items_of_news(news.id).unwrap() {
                assert_eq!(project.id, item.project_id);
                assert!(
                    item.directory_entry_id == UNSET_ID
                        || new_entries.contains(&item.directory_entry_id)
                );
            }
        }
        for p in db.pindrops_of_project(project.id).unwrap() {
            assert_eq!(cloned.event_id, p.event_id);
        }
        for hunt in db.hunts_of_project(project.id).unwrap() {
            for item in db.items_of_hunt(hunt.id).unwrap() {
                assert_eq!(cloned.event_id, item.event_id);
            }
        }
        for poll in db.polls_of_project(project.id).unwrap() {
            for item in db.items_of_poll(poll.id).unwrap() {
                assert_eq!(cloned.event_id, item.event_id);
            }
        }
        for shop in db.shops_of_project(project.id).unwrap() {
            for item in db.items_of_shop(shop.id).unwrap() {
                assert_eq!(cloned.event_id, item.event_id);
            }
        }
    }
    for schedule in db.schedules_of_event(cloned.event_id).unwrap() {
        assert!(
            schedule.project_id == UNSET_ID
                || schedule.project_id == MISSING_PROJECT_ID
                || new_projects.contains(&schedule.project_id)
        );
    }
}

#[test]
fn preserve_directory_hierarchy() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();

    let root = new_id(&cloned, Family::Directory, demo.root_directory_id);
    let child = directory(&db, new_id(&cloned, Family::Directory, demo.child_directory_id));
    let foreign_child = directory(
        &db,
        new_id(&cloned, Family::Directory, demo.foreign_child_directory_id),
    );
    assert!(directory(&db, root).is_root());
    assert_eq!(root, child.parent_id);
    assert_eq!(root, foreign_child.parent_id);
    assert_eq!(
        new_id(&cloned, Family::Project, demo.guide_project_id),
        foreign_child.project_id
    );

    let orphan = directory(&db, new_id(&cloned, Family::Directory, demo.orphan_directory_id));
    assert!(orphan.is_root());
    assert_eq!(
        MISSING_DIRECTORY_ID,
        directory(&db, demo.orphan_directory_id).parent_id
    );
}

#[test]
fn preserve_entry_hierarchy_and_news_links() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();

    let root_entry = new_id(&cloned, Family::DirectoryEntry, demo.root_entry_id);
    let child_entry = new_id(&cloned, Family::DirectoryEntry, demo.child_entry_id);
    assert_eq!(root_entry, directory_entry(&db, child_entry).parent_entry_id);
    assert_eq!(
        new_id(&cloned, Family::Directory, demo.child_directory_id),
        directory_entry(&db, child_entry).directory_id
    );
    let orphan_entry = new_id(&cloned, Family::DirectoryEntry, demo.orphan_entry_id);
    assert!(directory_entry(&db, orphan_entry).is_root());

    let linked = news_item(&db, new_id(&cloned, Family::NewsItem, demo.linked_news_item_id));
    assert_eq!(child_entry, linked.directory_entry_id);
    let unlinked = news_item(
        &db,
        new_id(&cloned, Family::NewsItem, demo.unlinked_news_item_id),
    );
    assert_eq!(UNSET_ID, unlinked.directory_entry_id);
    assert_eq!(Some("at noon".to_string()), unlinked.body);
    let orphan = news_item(&db, new_id(&cloned, Family::NewsItem, demo.orphan_news_item_id));
    assert_eq!(UNSET_ID, orphan.directory_entry_id);
}

#[test]
fn keep_unresolved_map_pins() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();

    let root = directory(&db, new_id(&cloned, Family::Directory, demo.root_directory_id));
    assert_eq!(new_id(&cloned, Family::Pindrop, demo.pindrop_id), root.map_id);

    let orphan_id = new_id(&cloned, Family::Directory, demo.orphan_directory_id);
    assert_eq!(MISSING_PINDROP_ID, directory(&db, orphan_id).map_id);
    assert!(cloned.dangling.contains(&DanglingReference {
        family: Family::Directory,
        row_id: orphan_id,
        column: "map_id",
        old_target_id: MISSING_PINDROP_ID,
        policy: OrphanPolicy::Keep,
    }));

    let child = new_id(&cloned, Family::Directory, demo.child_directory_id);
    assert_eq!(UNSET_ID, directory(&db, child).map_id);
}

#[test]
fn report_all_unresolved_references() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    let mut dangling: Vec<_> = cloned
        .dangling
        .iter()
        .map(|d| (d.family, d.column, d.old_target_id, d.policy))
        .collect();
    dangling.sort_by_key(|d| d.1);
    assert_eq!(
        vec![
            (
                Family::NewsItem,
                "directory_entry_id",
                MISSING_ENTRY_ID,
                OrphanPolicy::Reset
            ),
            (Family::Directory, "map_id", MISSING_PINDROP_ID, OrphanPolicy::Keep),
            (
                Family::DirectoryEntry,
                "parent_entry_id",
                MISSING_ENTRY_ID,
                OrphanPolicy::Reset
            ),
            (
                Family::Directory,
                "parent_id",
                MISSING_DIRECTORY_ID,
                OrphanPolicy::Reset
            ),
            (Family::Schedule, "project_id", MISSING_PROJECT_ID, OrphanPolicy::Keep),
        ],
        dangling
    );
}

#[test]
fn remap_schedule_projects() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();

    let concert = schedule(&db, new_id(&cloned, Family::Schedule, demo.project_schedule_id));
    assert_eq!(
        new_id(&cloned, Family::Project, demo.map_project_id),
        concert.project_id
    );
    assert_eq!(Some(1_700_007_200), concert.ends_at);
    let opening = schedule(&db, new_id(&cloned, Family::Schedule, demo.event_schedule_id));
    assert_eq!(UNSET_ID, opening.project_id);
    let cancelled = schedule(&db, new_id(&cloned, Family::Schedule, demo.orphan_schedule_id));
    assert_eq!(MISSING_PROJECT_ID, cancelled.project_id);
    assert_eq!(cloned.event_id, cancelled.event_id);
}

#[test]
fn mark_guests_as_demo_guests() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    let guests = db.guests_of_event(cloned.event_id).unwrap();
    assert_eq!(2, guests.len());

    let alice = guests.iter().find(|g| g.first_name == "Alice Demo").unwrap();
    assert_eq!("alice-demo@example.com", alice.email);
    assert_eq!(Some("Smith".to_string()), alice.last_name);
    assert_eq!(ALICE_TOKEN.len(), alice.token.len());
    assert_ne!(ALICE_TOKEN, alice.token);
    assert!(alice.token.chars().all(|c| c.is_ascii_alphanumeric()));

    let bob = guests.iter().find(|g| g.first_name == "Bob Demo").unwrap();
    assert_eq!("bob-demo", bob.email);
    assert_eq!(6, bob.token.len());

    let source = db.guests_of_event(demo.event_id).unwrap();
    assert_eq!("Alice", source[0].first_name);
    assert_eq!(ALICE_TOKEN, source[0].token);
}

#[test]
fn copy_installs_and_lookups() {
    let (db, demo) = seeded_db();
    let cloned = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();

    let installs = db.installs_of_event(cloned.event_id).unwrap();
    assert_eq!(1, installs.len());
    assert_eq!(5, installs[0].count);
    assert_eq!(1_700_000_000, installs[0].updated_at);

    let mut lookups = db.lookups_of_event(cloned.event_id).unwrap();
    lookups.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(
        vec![("theme", "dark"), ("welcome", "Hello")],
        lookups
            .iter()
            .map(|l| (l.id.as_str(), l.value.as_str()))
            .collect::<Vec<_>>()
    );
    assert_eq!(2, db.lookups_of_event(demo.event_id).unwrap().len());
}

#[test]
fn leave_other_events_untouched() {
    let (db, demo) = seeded_db();
    let before = count_all(&db, demo.other_event_id);
    clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    assert_eq!(before, count_all(&db, demo.other_event_id));
    assert_eq!(
        "Brrr",
        db.lookups_of_event(demo.other_event_id).unwrap()[0].value
    );
}

#[test]
fn clone_the_same_event_twice() {
    let (db, demo) = seeded_db();
    let first = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    let second = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    assert_ne!(first.event_id, second.event_id);
    assert_eq!(
        count_all(&db, first.event_id),
        count_all(&db, second.event_id)
    );
    for (old, new) in first.id_map.pairs(Family::Directory) {
        assert_ne!(Some(new), second.id_map.get(Family::Directory, old));
    }
}

#[test]
fn clone_a_clone() {
    let (db, demo) = seeded_db();
    let first = clone_event_for_user(&db, demo.event_id, demo.target_user_id).unwrap();
    let second = clone_event_for_user(&db, first.event_id, demo.owner_id).unwrap();
    assert_eq!(
        "Summer Fest Demo Demo",
        db.get_event(second.event_id).unwrap().name
    );
    assert_eq!(
        count_all(&db, demo.event_id),
        count_all(&db, second.event_id)
    );
}

#[test]
fn resolve_references_twice() {
    let (db, demo) = seeded_db();
    let mut session = CloneSession::new(demo.event_id, demo.target_user_id);
    clone_event(&db, &mut session).unwrap();
    first_pass::clone_projects(&db, &mut session).unwrap();

    let first = fixup::resolve_references(&db, &session).unwrap();
    let directories = db.directories.borrow().clone();
    let entries = db.directory_entries.borrow().clone();
    let news_items = db.news_items.borrow().clone();

    let second = fixup::resolve_references(&db, &session).unwrap();
    assert_eq!(first, second);
    assert_eq!(directories, *db.directories.borrow());
    assert_eq!(entries, *db.directory_entries.borrow());
    assert_eq!(news_items, *db.news_items.borrow());
}

#[test]
fn hold_old_ids_until_resolved() {
    let (db, demo) = seeded_db();
    let mut session = CloneSession::new(demo.event_id, demo.target_user_id);
    clone_event(&db, &mut session).unwrap();
    first_pass::clone_projects(&db, &mut session).unwrap();

    let child = session
        .id_map
        .get(Family::Directory, demo.child_directory_id)
        .unwrap();
    assert_eq!(demo.root_directory_id, directory(&db, child).parent_id);
    assert!(session
        .pending_of(Reference::DirectoryParent)
        .any(|p| p.row_id == child && p.old_target_id == demo.root_directory_id));
    // Directories without a pin are not pending
    assert_eq!(2, session.pending_of(Reference::DirectoryMap).count());
}

#[test]
fn fail_on_missing_event() {
    let (db, demo) = seeded_db();
    let events = db.events.borrow().len();
    assert!(matches!(
        clone_event_for_user(&db, 4711, demo.target_user_id),
        Err(Error::EventDoesNotExist)
    ));
    assert_eq!(events, db.events.borrow().len());
}

#[test]
fn fail_on_missing_user() {
    let (db, demo) = seeded_db();
    let events = db.events.borrow().len();
    assert!(matches!(
        clone_event_for_user(&db, demo.event_id, 4711),
        Err(Error::UserDoesNotExist)
    ));
    assert_eq!(events, db.events.borrow().len());
}

#[test]
fn propagate_store_failures() {
    let (db, demo) = seeded_db();
    db.broken_family.set(Some(Family::Guest));
    assert!(matches!(
        clone_event_for_user(&db, demo.event_id, demo.target_user_id),
        Err(Error::Repo(RepoError::Other(_)))
    ));
}

#[test]
fn clone_an_empty_event() {
    let db = MockDb::default();
    let user_id = db.create_user(&User::default()).unwrap();
    let event_id = db
        .create_event(&Event {
            user_id,
            name: "Empty".into(),
            ..Default::default()
        })
        .unwrap();
    let cloned = clone_event_for_user(&db, event_id, user_id).unwrap();
    assert_eq!("Empty Demo", db.get_event(cloned.event_id).unwrap().name);
    assert!(cloned.dangling.is_empty());
    assert_eq!(1, cloned.id_map.len(Family::Event));
    assert_eq!(0, cloned.id_map.len(Family::Project));
}
