#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = location)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub lng: f64,
    pub lat: f64,
    pub enabled: bool,
}

#[derive(Queryable)]
pub struct Location {
    pub rowid: i64,
    pub id: String,
    pub lng: f64,
    pub lat: f64,
    pub enabled: bool,
}

#[derive(Insertable)]
#[diesel(table_name = location_address)]
pub struct NewLocationAddress<'a> {
    pub parent_rowid: i64,
    pub position: i32,
    pub address: &'a str,
}

#[derive(Queryable)]
pub struct LocationAddress {
    pub parent_rowid: i64,
    pub position: i32,
    pub address: String,
}

#[derive(Insertable)]
#[diesel(table_name = location_name)]
pub struct NewLocationName<'a> {
    pub parent_rowid: i64,
    pub position: i32,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct LocationName {
    pub parent_rowid: i64,
    pub position: i32,
    pub name: String,
}
