#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent<'a> {
    pub user_id: i64,
    pub name: &'a str,
    pub token: &'a str,
    pub description: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Event {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub token: String,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = projects)]
pub struct NewProject<'a> {
    pub event_id: i64,
    pub name: &'a str,
    pub kind: &'a str,
    pub position: i64,
}

#[derive(Queryable)]
pub struct Project {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub kind: String,
    pub position: i64,
}

#[derive(Insertable)]
#[diesel(table_name = pindrops)]
pub struct NewPindrop<'a> {
    pub project_id: i64,
    pub event_id: i64,
    pub title: &'a str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Queryable)]
pub struct Pindrop {
    pub id: i64,
    pub project_id: i64,
    pub event_id: i64,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Insertable)]
#[diesel(table_name = directories)]
pub struct NewDirectory<'a> {
    pub project_id: i64,
    pub event_id: i64,
    pub parent_id: i64,
    pub map_id: i64,
    pub name: &'a str,
    pub position: i64,
}

#[derive(Queryable)]
pub struct Directory {
    pub id: i64,
    pub project_id: i64,
    pub event_id: i64,
    pub parent_id: i64,
    pub map_id: i64,
    pub name: String,
    pub position: i64,
}

#[derive(Insertable)]
#[diesel(table_name = directory_entries)]
pub struct NewDirectoryEntry<'a> {
    pub directory_id: i64,
    pub event_id: i64,
    pub parent_entry_id: i64,
    pub title: &'a str,
    pub body: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct DirectoryEntry {
    pub id: i64,
    pub directory_id: i64,
    pub event_id: i64,
    pub parent_entry_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = hunts)]
pub struct NewHunt<'a> {
    pub project_id: i64,
    pub event_id: i64,
    pub title: &'a str,
}

#[derive(Queryable)]
pub struct Hunt {
    pub id: i64,
    pub project_id: i64,
    pub event_id: i64,
    pub title: String,
}

#[derive(Insertable)]
#[diesel(table_name = hunt_items)]
pub struct NewHuntItem<'a> {
    pub hunt_id: i64,
    pub event_id: i64,
    pub title: &'a str,
    pub code: &'a str,
    pub points: i64,
}

#[derive(Queryable)]
pub struct HuntItem {
    pub id: i64,
    pub hunt_id: i64,
    pub event_id: i64,
    pub title: String,
    pub code: String,
    pub points: i64,
}

#[derive(Insertable)]
#[diesel(table_name = news)]
pub struct NewNews<'a> {
    pub project_id: i64,
    pub event_id: i64,
    pub title: &'a str,
}

#[derive(Queryable)]
pub struct News {
    pub id: i64,
    pub project_id: i64,
    pub event_id: i64,
    pub title: String,
}

#[derive(Insertable)]
#[diesel(table_name = news_items)]
pub struct NewNewsItem<'a> {
    pub news_id: i64,
    pub event_id: i64,
    pub project_id: i64,
    pub directory_entry_id: i64,
    pub title: &'a str,
    pub body: Option<&'a str>,
    pub published_at: i64,
}

#[derive(Queryable)]
pub struct NewsItem {
    pub id: i64,
    pub news_id: i64,
    pub event_id: i64,
    pub project_id: i64,
    pub directory_entry_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub published_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = polls)]
pub struct NewPoll<'a> {
    pub project_id: i64,
    pub event_id: i64,
    pub question: &'a str,
}

#[derive(Queryable)]
pub struct Poll {
    pub id: i64,
    pub project_id: i64,
    pub event_id: i64,
    pub question: String,
}

#[derive(Insertable)]
#[diesel(table_name = poll_items)]
pub struct NewPollItem<'a> {
    pub poll_id: i64,
    pub event_id: i64,
    pub answer: &'a str,
    pub votes: i64,
}

#[derive(Queryable)]
pub struct PollItem {
    pub id: i64,
    pub poll_id: i64,
    pub event_id: i64,
    pub answer: String,
    pub votes: i64,
}

#[derive(Insertable)]
#[diesel(table_name = shops)]
pub struct NewShop<'a> {
    pub project_id: i64,
    pub event_id: i64,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct Shop {
    pub id: i64,
    pub project_id: i64,
    pub event_id: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = shop_items)]
pub struct NewShopItem<'a> {
    pub shop_id: i64,
    pub event_id: i64,
    pub name: &'a str,
    pub price_cents: i64,
}

#[derive(Queryable)]
pub struct ShopItem {
    pub id: i64,
    pub shop_id: i64,
    pub event_id: i64,
    pub name: String,
    pub price_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = schedules)]
pub struct NewSchedule<'a> {
    pub event_id: i64,
    pub project_id: i64,
    pub title: &'a str,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
}

#[derive(Queryable)]
pub struct Schedule {
    pub id: i64,
    pub event_id: i64,
    pub project_id: i64,
    pub title: String,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = guests)]
pub struct NewGuest<'a> {
    pub event_id: i64,
    pub first_name: &'a str,
    pub last_name: Option<&'a str>,
    pub email: &'a str,
    pub token: &'a str,
}

#[derive(Queryable)]
pub struct Guest {
    pub id: i64,
    pub event_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub token: String,
}

#[derive(Insertable)]
#[diesel(table_name = installs)]
pub struct NewInstall {
    pub event_id: i64,
    pub count: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct Install {
    pub id: i64,
    pub event_id: i64,
    pub count: i64,
    pub updated_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = lookups)]
pub struct Lookup {
    pub id: String,
    pub event_id: i64,
    pub value: String,
}
