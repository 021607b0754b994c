// Low-level database access traits.
// Each repository is responsible for a single entity family and
// its child rows. Related entities are only referenced by their
// row id and never loaded by another repository.
//
// Insert operations ignore the `id` of the given entity and
// return the id that has been assigned by the store. The only
// exception are lookups that are keyed by their semantic id.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<RowId>;
    fn get_user(&self, id: RowId) -> Result<User>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<RowId>;
    fn get_event(&self, id: RowId) -> Result<Event>;
}

pub trait ProjectRepo {
    fn create_project(&self, project: &Project) -> Result<RowId>;
    fn projects_of_event(&self, event_id: RowId) -> Result<Vec<Project>>;
}

pub trait PindropRepo {
    fn create_pindrop(&self, pindrop: &Pindrop) -> Result<RowId>;
    fn pindrops_of_project(&self, project_id: RowId) -> Result<Vec<Pindrop>>;
}

pub trait DirectoryRepo {
    fn create_directory(&self, directory: &Directory) -> Result<RowId>;
    fn directories_of_project(&self, project_id: RowId) -> Result<Vec<Directory>>;
    fn set_directory_parent(&self, id: RowId, parent_id: RowId) -> Result<()>;
    fn set_directory_map(&self, id: RowId, map_id: RowId) -> Result<()>;
}

pub trait DirectoryEntryRepo {
    fn create_directory_entry(&self, entry: &DirectoryEntry) -> Result<RowId>;
    fn entries_of_directory(&self, directory_id: RowId) -> Result<Vec<DirectoryEntry>>;
    fn set_directory_entry_parent(&self, id: RowId, parent_entry_id: RowId) -> Result<()>;
}

pub trait HuntRepo {
    fn create_hunt(&self, hunt: &Hunt) -> Result<RowId>;
    fn hunts_of_project(&self, project_id: RowId) -> Result<Vec<Hunt>>;

    fn create_hunt_item(&self, item: &HuntItem) -> Result<RowId>;
    fn items_of_hunt(&self, hunt_id: RowId) -> Result<Vec<HuntItem>>;
}

pub trait NewsRepo {
    fn create_news(&self, news: &News) -> Result<RowId>;
    fn news_of_project(&self, project_id: RowId) -> Result<Vec<News>>;

    fn create_news_item(&self, item: &NewsItem) -> Result<RowId>;
    fn items_of_news(&self, news_id: RowId) -> Result<Vec<NewsItem>>;
    fn set_news_item_directory_entry(&self, id: RowId, directory_entry_id: RowId) -> Result<()>;
}

pub trait PollRepo {
    fn create_poll(&self, poll: &Poll) -> Result<RowId>;
    fn polls_of_project(&self, project_id: RowId) -> Result<Vec<Poll>>;

    fn create_poll_item(&self, item: &PollItem) -> Result<RowId>;
    fn items_of_poll(&self, poll_id: RowId) -> Result<Vec<PollItem>>;
}

pub trait ShopRepo {
    fn create_shop(&self, shop: &Shop) -> Result<RowId>;
    fn shops_of_project(&self, project_id: RowId) -> Result<Vec<Shop>>;

    fn create_shop_item(&self, item: &ShopItem) -> Result<RowId>;
    fn items_of_shop(&self, shop_id: RowId) -> Result<Vec<ShopItem>>;
}

pub trait ScheduleRepo {
    fn create_schedule(&self, schedule: &Schedule) -> Result<RowId>;
    fn schedules_of_event(&self, event_id: RowId) -> Result<Vec<Schedule>>;
}

pub trait GuestRepo {
    fn create_guest(&self, guest: &Guest) -> Result<RowId>;
    fn guests_of_event(&self, event_id: RowId) -> Result<Vec<Guest>>;
}

pub trait InstallRepo {
    fn create_install(&self, install: &Install) -> Result<RowId>;
    fn installs_of_event(&self, event_id: RowId) -> Result<Vec<Install>>;
    /// Increments the counters of all installs of an event and
    /// returns the number of affected rows.
    fn increment_installs(&self, event_id: RowId, updated_at: i64) -> Result<usize>;
}

pub trait LookupRepo {
    fn create_lookup(&self, lookup: &Lookup) -> Result<()>;
    fn lookups_of_event(&self, event_id: RowId) -> Result<Vec<Lookup>>;
}

pub trait FamilyStats {
    /// Counts the rows of a family that belong to an event.
    ///
    /// For [`Family::Event`] the result is either 0 or 1.
    fn count_rows_of_event(&self, family: Family, event_id: RowId) -> Result<usize>;
}
