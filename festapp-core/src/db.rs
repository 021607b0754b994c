use crate::repositories::*;

/// The complete store contract of an event graph.
pub trait Db:
    UserRepo
    + EventRepo
    + ProjectRepo
    + PindropRepo
    + DirectoryRepo
    + DirectoryEntryRepo
    + HuntRepo
    + NewsRepo
    + PollRepo
    + ShopRepo
    + ScheduleRepo
    + GuestRepo
    + InstallRepo
    + LookupRepo
    + FamilyStats
{
}

impl<T> Db for T where
    T: UserRepo
        + EventRepo
        + ProjectRepo
        + PindropRepo
        + DirectoryRepo
        + DirectoryEntryRepo
        + HuntRepo
        + NewsRepo
        + PollRepo
        + ShopRepo
        + ScheduleRepo
        + GuestRepo
        + InstallRepo
        + LookupRepo
        + FamilyStats
{
}
