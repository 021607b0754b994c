use std::cell::{Cell, RefCell};

use anyhow::anyhow;

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> RowId;
    fn set_key(&mut self, id: RowId);
}

trait Scoped {
    fn event_id(&self) -> RowId;
}

macro_rules! impl_key_and_scope {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                fn key(&self) -> RowId {
                    self.id
                }
                fn set_key(&mut self, id: RowId) {
                    self.id = id;
                }
            }
            impl Scoped for $t {
                fn event_id(&self) -> RowId {
                    self.event_id
                }
            }
        )*
    };
}

impl_key_and_scope!(
    Project,
    Pindrop,
    Directory,
    DirectoryEntry,
    Hunt,
    HuntItem,
    News,
    NewsItem,
    Poll,
    PollItem,
    Shop,
    ShopItem,
    Schedule,
    Guest,
    Install
);

impl Key for Event {
    fn key(&self) -> RowId {
        self.id
    }
    fn set_key(&mut self, id: RowId) {
        self.id = id;
    }
}

impl Key for User {
    fn key(&self) -> RowId {
        self.id
    }
    fn set_key(&mut self, id: RowId) {
        self.id = id;
    }
}

impl Scoped for Lookup {
    fn event_id(&self) -> RowId {
        self.event_id
    }
}

/// In-memory store with auto-incremented row ids starting at 1.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub events: RefCell<Vec<Event>>,
    pub projects: RefCell<Vec<Project>>,
    pub pindrops: RefCell<Vec<Pindrop>>,
    pub directories: RefCell<Vec<Directory>>,
    pub directory_entries: RefCell<Vec<DirectoryEntry>>,
    pub hunts: RefCell<Vec<Hunt>>,
    pub hunt_items: RefCell<Vec<HuntItem>>,
    pub news: RefCell<Vec<News>>,
    pub news_items: RefCell<Vec<NewsItem>>,
    pub polls: RefCell<Vec<Poll>>,
    pub poll_items: RefCell<Vec<PollItem>>,
    pub shops: RefCell<Vec<Shop>>,
    pub shop_items: RefCell<Vec<ShopItem>>,
    pub schedules: RefCell<Vec<Schedule>>,
    pub guests: RefCell<Vec<Guest>>,
    pub installs: RefCell<Vec<Install>>,
    pub lookups: RefCell<Vec<Lookup>>,
    /// Inserts into this family fail.
    pub broken_family: Cell<Option<Family>>,
}

impl MockDb {
    fn check_insert(&self, family: Family) -> RepoResult<()> {
        if self.broken_family.get() == Some(family) {
            return Err(anyhow!("Failed to insert {family}").into());
        }
        Ok(())
    }
}

fn insert<T: Key + Clone>(table: &RefCell<Vec<T>>, row: &T) -> RepoResult<RowId> {
    let mut rows = table.borrow_mut();
    let id = rows.iter().map(Key::key).max().unwrap_or(UNSET_ID) + 1;
    let mut row = row.clone();
    row.set_key(id);
    rows.push(row);
    Ok(id)
}

fn get<T: Key + Clone>(table: &RefCell<Vec<T>>, id: RowId) -> RepoResult<T> {
    table
        .borrow()
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn update<T: Key>(table: &RefCell<Vec<T>>, id: RowId, f: impl FnOnce(&mut T)) -> RepoResult<()> {
    let mut rows = table.borrow_mut();
    let row = rows
        .iter_mut()
        .find(|x| x.key() == id)
        .ok_or(RepoError::NotFound)?;
    f(row);
    Ok(())
}

fn filter<T: Clone>(table: &RefCell<Vec<T>>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    table.borrow().iter().filter(|x| pred(*x)).cloned().collect()
}

fn count_of_event<T: Scoped>(table: &RefCell<Vec<T>>, event_id: RowId) -> usize {
    table
        .borrow()
        .iter()
        .filter(|x| x.event_id() == event_id)
        .count()
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<RowId> {
        insert(&self.users, user)
    }
    fn get_user(&self, id: RowId) -> RepoResult<User> {
        get(&self.users, id)
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: &Event) -> RepoResult<RowId> {
        self.check_insert(Family::Event)?;
        insert(&self.events, event)
    }
    fn get_event(&self, id: RowId) -> RepoResult<Event> {
        get(&self.events, id)
    }
}

impl ProjectRepo for MockDb {
    fn create_project(&self, project: &Project) -> RepoResult<RowId> {
        self.check_insert(Family::Project)?;
        insert(&self.projects, project)
    }
    fn projects_of_event(&self, event_id: RowId) -> RepoResult<Vec<Project>> {
        Ok(filter(&self.projects, |x| x.event_id == event_id))
    }
}

impl PindropRepo for MockDb {
    fn create_pindrop(&self, pindrop: &Pindrop) -> RepoResult<RowId> {
        self.check_insert(Family::Pindrop)?;
        insert(&self.pindrops, pindrop)
    }
    fn pindrops_of_project(&self, project_id: RowId) -> RepoResult<Vec<Pindrop>> {
        Ok(filter(&self.pindrops, |x| x.project_id == project_id))
    }
}

impl DirectoryRepo for MockDb {
    fn create_directory(&self, directory: &Directory) -> RepoResult<RowId> {
        self.check_insert(Family::Directory)?;
        insert(&self.directories, directory)
    }
    fn directories_of_project(&self, project_id: RowId) -> RepoResult<Vec<Directory>> {
        Ok(filter(&self.directories, |x| x.project_id == project_id))
    }
    fn set_directory_parent(&self, id: RowId, parent_id: RowId) -> RepoResult<()> {
        update(&self.directories, id, |x| x.parent_id = parent_id)
    }
    fn set_directory_map(&self, id: RowId, map_id: RowId) -> RepoResult<()> {
        update(&self.directories, id, |x| x.map_id = map_id)
    }
}

impl DirectoryEntryRepo for MockDb {
    fn create_directory_entry(&self, entry: &DirectoryEntry) -> RepoResult<RowId> {
        self.check_insert(Family::DirectoryEntry)?;
        insert(&self.directory_entries, entry)
    }
    fn entries_of_directory(&self, directory_id: RowId) -> RepoResult<Vec<DirectoryEntry>> {
        Ok(filter(&self.directory_entries, |x| {
            x.directory_id == directory_id
        }))
    }
    fn set_directory_entry_parent(&self, id: RowId, parent_entry_id: RowId) -> RepoResult<()> {
        update(&self.directory_entries, id, |x| {
            x.parent_entry_id = parent_entry_id
        })
    }
}

impl HuntRepo for MockDb {
    fn create_hunt(&self, hunt: &Hunt) -> RepoResult<RowId> {
        self.check_insert(Family::Hunt)?;
        insert(&self.hunts, hunt)
    }
    fn hunts_of_project(&self, project_id: RowId) -> RepoResult<Vec<Hunt>> {
        Ok(filter(&self.hunts, |x| x.project_id == project_id))
    }
    fn create_hunt_item(&self, item: &HuntItem) -> RepoResult<RowId> {
        self.check_insert(Family::HuntItem)?;
        insert(&self.hunt_items, item)
    }
    fn items_of_hunt(&self, hunt_id: RowId) -> RepoResult<Vec<HuntItem>> {
        Ok(filter(&self.hunt_items, |x| x.hunt_id == hunt_id))
    }
}

impl NewsRepo for MockDb {
    fn create_news(&self, news: &News) -> RepoResult<RowId> {
        self.check_insert(Family::News)?;
        insert(&self.news, news)
    }
    fn news_of_project(&self, project_id: RowId) -> RepoResult<Vec<News>> {
        Ok(filter(&self.news, |x| x.project_id == project_id))
    }
    fn create_news_item(&self, item: &NewsItem) -> RepoResult<RowId> {
        self.check_insert(Family::NewsItem)?;
        insert(&self.news_items, item)
    }
    fn items_of_news(&self, news_id: RowId) -> RepoResult<Vec<NewsItem>> {
        Ok(filter(&self.news_items, |x| x.news_id == news_id))
    }
    fn set_news_item_directory_entry(&self, id: RowId, directory_entry_id: RowId) -> RepoResult<()> {
        update(&self.news_items, id, |x| {
            x.directory_entry_id = directory_entry_id
        })
    }
}

impl PollRepo for MockDb {
    fn create_poll(&self, poll: &Poll) -> RepoResult<RowId> {
        self.check_insert(Family::Poll)?;
        insert(&self.polls, poll)
    }
    fn polls_of_project(&self, project_id: RowId) -> RepoResult<Vec<Poll>> {
        Ok(filter(&self.polls, |x| x.project_id == project_id))
    }
    fn create_poll_item(&self, item: &PollItem) -> RepoResult<RowId> {
        self.check_insert(Family::PollItem)?;
        insert(&self.poll_items, item)
    }
    fn items_of_poll(&self, poll_id: RowId) -> RepoResult<Vec<PollItem>> {
        Ok(filter(&self.poll_items, |x| x.poll_id == poll_id))
    }
}

impl ShopRepo for MockDb {
    fn create_shop(&self, shop: &Shop) -> RepoResult<RowId> {
        self.check_insert(Family::Shop)?;
        insert(&self.shops, shop)
    }
    fn shops_of_project(&self, project_id: RowId) -> RepoResult<Vec<Shop>> {
        Ok(filter(&self.shops, |x| x.project_id == project_id))
    }
    fn create_shop_item(&self, item: &ShopItem) -> RepoResult<RowId> {
        self.check_insert(Family::ShopItem)?;
        insert(&self.shop_items, item)
    }
    fn items_of_shop(&self, shop_id: RowId) -> RepoResult<Vec<ShopItem>> {
        Ok(filter(&self.shop_items, |x| x.shop_id == shop_id))
    }
}

impl ScheduleRepo for MockDb {
    fn create_schedule(&self, schedule: &Schedule) -> RepoResult<RowId> {
        self.check_insert(Family::Schedule)?;
        insert(&self.schedules, schedule)
    }
    fn schedules_of_event(&self, event_id: RowId) -> RepoResult<Vec<Schedule>> {
        Ok(filter(&self.schedules, |x| x.event_id == event_id))
    }
}

impl GuestRepo for MockDb {
    fn create_guest(&self, guest: &Guest) -> RepoResult<RowId> {
        self.check_insert(Family::Guest)?;
        insert(&self.guests, guest)
    }
    fn guests_of_event(&self, event_id: RowId) -> RepoResult<Vec<Guest>> {
        Ok(filter(&self.guests, |x| x.event_id == event_id))
    }
}

impl InstallRepo for MockDb {
    fn create_install(&self, install: &Install) -> RepoResult<RowId> {
        self.check_insert(Family::Install)?;
        insert(&self.installs, install)
    }
    fn installs_of_event(&self, event_id: RowId) -> RepoResult<Vec<Install>> {
        Ok(filter(&self.installs, |x| x.event_id == event_id))
    }
    fn increment_installs(&self, event_id: RowId, updated_at: i64) -> RepoResult<usize> {
        let mut count = 0;
        for install in self
            .installs
            .borrow_mut()
            .iter_mut()
            .filter(|x| x.event_id == event_id)
        {
            install.count += 1;
            install.updated_at = updated_at;
            count += 1;
        }
        Ok(count)
    }
}

impl LookupRepo for MockDb {
    fn create_lookup(&self, lookup: &Lookup) -> RepoResult<()> {
        self.check_insert(Family::Lookup)?;
        let mut lookups = self.lookups.borrow_mut();
        if lookups
            .iter()
            .any(|x| x.id == lookup.id && x.event_id == lookup.event_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        lookups.push(lookup.clone());
        Ok(())
    }
    fn lookups_of_event(&self, event_id: RowId) -> RepoResult<Vec<Lookup>> {
        Ok(filter(&self.lookups, |x| x.event_id == event_id))
    }
}

impl FamilyStats for MockDb {
    fn count_rows_of_event(&self, family: Family, event_id: RowId) -> RepoResult<usize> {
        let count = match family {
            Family::Event => self
                .events
                .borrow()
                .iter()
                .filter(|x| x.id == event_id)
                .count(),
            Family::Project => count_of_event(&self.projects, event_id),
            Family::Pindrop => count_of_event(&self.pindrops, event_id),
            Family::Directory => count_of_event(&self.directories, event_id),
            Family::DirectoryEntry => count_of_event(&self.directory_entries, event_id),
            Family::Hunt => count_of_event(&self.hunts, event_id),
            Family::HuntItem => count_of_event(&self.hunt_items, event_id),
            Family::News => count_of_event(&self.news, event_id),
            Family::NewsItem => count_of_event(&self.news_items, event_id),
            Family::Poll => count_of_event(&self.polls, event_id),
            Family::PollItem => count_of_event(&self.poll_items, event_id),
            Family::Shop => count_of_event(&self.shops, event_id),
            Family::ShopItem => count_of_event(&self.shop_items, event_id),
            Family::Schedule => count_of_event(&self.schedules, event_id),
            Family::Guest => count_of_event(&self.guests, event_id),
            Family::Install => count_of_event(&self.installs, event_id),
            Family::Lookup => count_of_event(&self.lookups, event_id),
        };
        Ok(count)
    }
}
