use crate::{entities::*, repositories::*};
use neogeo_entities::builders::Builder;
use std::{cell::RefCell, result};

pub mod prelude {
    pub use super::MockDb;
    pub use crate::{entities::*, repositories::*, usecases, RepoError};
    pub use neogeo_entities::builders::*;
}

type RepoResult<T> = result::Result<T, Error>;

/// In-memory store that mimics the behavior of the database.
#[derive(Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
}

fn matches_name(location: &Location, name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    location
        .names
        .iter()
        .any(|n| n.to_ascii_lowercase().contains(&name))
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: Location) -> RepoResult<()> {
        if self
            .locations
            .borrow()
            .iter()
            .any(|l| l.id == location.id)
        {
            return Err(Error::AlreadyExists);
        }
        self.locations.borrow_mut().push(location);
        Ok(())
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let existing = locations
            .iter_mut()
            .find(|l| l.id == location.id)
            .ok_or(Error::NotFound)?;
        *existing = location.clone();
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.locations.borrow().clone())
    }

    fn count_locations(&self) -> RepoResult<usize> {
        Ok(self.locations.borrow().len())
    }

    fn query_locations(&self, query: &LocationQuery) -> RepoResult<Vec<Location>> {
        let LocationQuery {
            enabled,
            name,
            bbox,
        } = query;
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| enabled.map(|enabled| l.enabled == enabled).unwrap_or(true))
            .filter(|l| name.map(|name| matches_name(l, name)).unwrap_or(true))
            .filter(|l| match (bbox, l.pos()) {
                (Some(bbox), Ok(pos)) => bbox.contains_point(pos),
                (Some(_), Err(_)) => false,
                (None, _) => true,
            })
            .cloned()
            .collect())
    }
}

#[test]
fn query_without_filters() {
    let db = MockDb::default();
    db.create_location(Location::build().id("a").enabled(false).finish())
        .unwrap();
    let query = LocationQuery::default();
    assert!(query.is_empty());
    assert_eq!(1, db.query_locations(&query).unwrap().len());
}

#[test]
fn reject_duplicate_ids() {
    let db = MockDb::default();
    db.create_location(Location::build().id("a").finish()).unwrap();
    assert!(matches!(
        db.create_location(Location::build().id("a").finish()),
        Err(Error::AlreadyExists)
    ));
}
