use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// A table whose rows are cloned as a unit.
///
/// The variants are listed in the order in which a clone
/// of an event visits them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Family {
    Event,
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
    Install,
    Lookup,
}
