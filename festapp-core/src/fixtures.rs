//! Seed data shared by the tests of all store implementations.

use festapp_entities::builders::Builder;

use crate::{db::Db, entities::*, repositories::Error};

/// Ids of the rows created by [`seed_demo_event`].
#[rustfmt::skip]
#[derive(Debug, Clone, Copy)]
pub struct DemoEvent {
    pub owner_id                   : RowId,
    pub target_user_id             : RowId,
    pub event_id                   : RowId,
    pub other_event_id             : RowId,
    pub map_project_id             : RowId,
    pub guide_project_id           : RowId,
    pub pindrop_id                 : RowId,
    /// Root directory, pinned to `pindrop_id`.
    pub root_directory_id          : RowId,
    /// Child of `root_directory_id` that has been created first.
    pub child_directory_id         : RowId,
    /// Child of `root_directory_id` within the guide project.
    pub foreign_child_directory_id : RowId,
    /// Parent and map pin refer to rows that do not exist.
    pub orphan_directory_id        : RowId,
    pub root_entry_id              : RowId,
    pub child_entry_id             : RowId,
    pub orphan_entry_id            : RowId,
    /// Links `child_entry_id`.
    pub linked_news_item_id        : RowId,
    pub unlinked_news_item_id      : RowId,
    pub orphan_news_item_id        : RowId,
    pub project_schedule_id        : RowId,
    pub event_schedule_id          : RowId,
    pub orphan_schedule_id         : RowId,
}

/// Ids that are never assigned to any row of the demo data.
pub const MISSING_DIRECTORY_ID: RowId = 9_001;
pub const MISSING_PINDROP_ID: RowId = 9_002;
pub const MISSING_ENTRY_ID: RowId = 9_003;
pub const MISSING_PROJECT_ID: RowId = 9_004;

pub const ALICE_TOKEN: &str = "q8Xr2LmN5vTz0KbW7yHc4JfD1sGp9AeU";

/// Creates an event that covers every family and all kinds
/// of references between its rows.
pub fn seed_demo_event<R: Db>(db: &R) -> Result<DemoEvent, Error> {
    let owner_id = db.create_user(&User {
        email: "owner@example.com".into(),
        name: "Owner".into(),
        ..Default::default()
    })?;
    let target_user_id = db.create_user(&User {
        email: "demo@example.com".into(),
        name: "Demo".into(),
        ..Default::default()
    })?;

    let event_id = db.create_event(
        &Event::build()
            .user_id(owner_id)
            .name("Summer Fest")
            .token("sf2024")
            .description(Some("Open air"))
            .finish(),
    )?;

    let map_project_id = db.create_project(&Project {
        event_id,
        name: "Map".into(),
        kind: "map".into(),
        position: 1,
        ..Default::default()
    })?;
    let guide_project_id = db.create_project(&Project {
        event_id,
        name: "Guide".into(),
        kind: "directory".into(),
        position: 2,
        ..Default::default()
    })?;

    let pindrop_id = db.create_pindrop(&Pindrop {
        project_id: map_project_id,
        event_id,
        title: "Main stage".into(),
        lat: 48.137,
        lng: 11.575,
        ..Default::default()
    })?;

    // The child is created before its parent
    let child_directory_id = db.create_directory(
        &Directory::build()
            .project_id(map_project_id)
            .event_id(event_id)
            .name("Food")
            .finish(),
    )?;
    let root_directory_id = db.create_directory(
        &Directory::build()
            .project_id(map_project_id)
            .event_id(event_id)
            .map_id(pindrop_id)
            .name("Areas")
            .finish(),
    )?;
    db.set_directory_parent(child_directory_id, root_directory_id)?;
    let foreign_child_directory_id = db.create_directory(
        &Directory::build()
            .project_id(guide_project_id)
            .event_id(event_id)
            .parent_id(root_directory_id)
            .name("Drinks")
            .finish(),
    )?;
    let orphan_directory_id = db.create_directory(
        &Directory::build()
            .project_id(map_project_id)
            .event_id(event_id)
            .parent_id(MISSING_DIRECTORY_ID)
            .map_id(MISSING_PINDROP_ID)
            .name("Lost")
            .finish(),
    )?;

    let root_entry_id = db.create_directory_entry(
        &DirectoryEntry::build()
            .directory_id(root_directory_id)
            .event_id(event_id)
            .title("Burgers")
            .finish(),
    )?;
    let child_entry_id = db.create_directory_entry(
        &DirectoryEntry::build()
            .directory_id(child_directory_id)
            .event_id(event_id)
            .parent_entry_id(root_entry_id)
            .title("Veggie burgers")
            .finish(),
    )?;
    let orphan_entry_id = db.create_directory_entry(
        &DirectoryEntry::build()
            .directory_id(foreign_child_directory_id)
            .event_id(event_id)
            .parent_entry_id(MISSING_ENTRY_ID)
            .title("Lemonade")
            .finish(),
    )?;

    let hunt_id = db.create_hunt(&Hunt {
        project_id: guide_project_id,
        event_id,
        title: "Treasure hunt".into(),
        ..Default::default()
    })?;
    for (i, code) in ["A1", "B2"].into_iter().enumerate() {
        db.create_hunt_item(&HuntItem {
            hunt_id,
            event_id,
            title: format!("Station {}", i + 1),
            code: code.into(),
            points: 10,
            ..Default::default()
        })?;
    }

    let news_id = db.create_news(&News {
        project_id: guide_project_id,
        event_id,
        title: "Updates".into(),
        ..Default::default()
    })?;
    let news_item = NewsItem {
        news_id,
        event_id,
        project_id: guide_project_id,
        published_at: 1_700_000_000,
        ..Default::default()
    };
    let linked_news_item_id = db.create_news_item(&NewsItem {
        directory_entry_id: child_entry_id,
        title: "Try the veggie burgers".into(),
        ..news_item.clone()
    })?;
    let unlinked_news_item_id = db.create_news_item(&NewsItem {
        title: "Gates open".into(),
        body: Some("at noon".into()),
        ..news_item.clone()
    })?;
    let orphan_news_item_id = db.create_news_item(&NewsItem {
        directory_entry_id: MISSING_ENTRY_ID,
        title: "Sold out".into(),
        ..news_item
    })?;

    let poll_id = db.create_poll(&Poll {
        project_id: guide_project_id,
        event_id,
        question: "Best band?".into(),
        ..Default::default()
    })?;
    for answer in ["The Loud", "The Quiet"] {
        db.create_poll_item(&PollItem {
            poll_id,
            event_id,
            answer: answer.into(),
            votes: 3,
            ..Default::default()
        })?;
    }

    let shop_id = db.create_shop(&Shop {
        project_id: map_project_id,
        event_id,
        name: "Merch".into(),
        ..Default::default()
    })?;
    db.create_shop_item(&ShopItem {
        shop_id,
        event_id,
        name: "T-Shirt".into(),
        price_cents: 2_000,
        ..Default::default()
    })?;

    let schedule = Schedule {
        event_id,
        starts_at: 1_700_003_600,
        ..Default::default()
    };
    let project_schedule_id = db.create_schedule(&Schedule {
        project_id: map_project_id,
        title: "Concert".into(),
        ends_at: Some(1_700_007_200),
        ..schedule.clone()
    })?;
    let event_schedule_id = db.create_schedule(&Schedule {
        title: "Opening".into(),
        ..schedule.clone()
    })?;
    let orphan_schedule_id = db.create_schedule(&Schedule {
        project_id: MISSING_PROJECT_ID,
        title: "Cancelled".into(),
        ..schedule
    })?;

    db.create_guest(
        &Guest::build()
            .event_id(event_id)
            .first_name("Alice")
            .last_name(Some("Smith"))
            .email("alice@example.com")
            .token(ALICE_TOKEN)
            .finish(),
    )?;
    db.create_guest(
        &Guest::build()
            .event_id(event_id)
            .first_name("Bob")
            .email("bob")
            .token("abc123")
            .finish(),
    )?;

    db.create_install(&Install {
        event_id,
        count: 5,
        updated_at: 1_700_000_000,
        ..Default::default()
    })?;

    for (id, value) in [("welcome", "Hello"), ("theme", "dark")] {
        db.create_lookup(&Lookup {
            id: id.into(),
            event_id,
            value: value.into(),
        })?;
    }

    // Unrelated rows that must never be touched
    let other_event_id = db.create_event(
        &Event::build()
            .user_id(owner_id)
            .name("Winter Fest")
            .token("wf")
            .finish(),
    )?;
    let other_project_id = db.create_project(&Project {
        event_id: other_event_id,
        name: "Map".into(),
        kind: "map".into(),
        ..Default::default()
    })?;
    db.create_directory(
        &Directory::build()
            .project_id(other_project_id)
            .event_id(other_event_id)
            .name("Areas")
            .finish(),
    )?;
    db.create_lookup(&Lookup {
        id: "welcome".into(),
        event_id: other_event_id,
        value: "Brrr".into(),
    })?;

    Ok(DemoEvent {
        owner_id,
        target_user_id,
        event_id,
        other_event_id,
        map_project_id,
        guide_project_id,
        pindrop_id,
        root_directory_id,
        child_directory_id,
        foreign_child_directory_id,
        orphan_directory_id,
        root_entry_id,
        child_entry_id,
        orphan_entry_id,
        linked_news_item_id,
        unlinked_news_item_id,
        orphan_news_item_id,
        project_schedule_id,
        event_schedule_id,
        orphan_schedule_id,
    })
}
