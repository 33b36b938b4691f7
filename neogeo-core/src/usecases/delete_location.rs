use super::prelude::*;

/// Soft delete: The location is disabled but kept in the store.
pub fn delete_location<R: LocationRepo>(repo: &R, id: &str) -> Result<()> {
    let mut location = repo.get_location(id)?;
    if !location.enabled {
        log::debug!("Location {id} has already been disabled");
        return Ok(());
    }
    location.enabled = false;
    repo.update_location(&location)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn delete_disables_location() {
        let db = MockDb::default();
        let location = Location::build()
            .id("x")
            .names(vec!["foo"])
            .enabled(true)
            .finish();
        db.create_location(location.clone()).unwrap();
        usecases::delete_location(&db, "x").unwrap();
        let loaded = db.get_location("x").unwrap();
        assert!(!loaded.enabled);
        assert_eq!(location.names, loaded.names);
        assert_eq!(location.addresses, loaded.addresses);
        assert_eq!(location.point, loaded.point);
    }

    #[test]
    fn delete_twice() {
        let db = MockDb::default();
        db.create_location(Location::build().id("x").finish()).unwrap();
        usecases::delete_location(&db, "x").unwrap();
        usecases::delete_location(&db, "x").unwrap();
        assert!(!db.get_location("x").unwrap().enabled);
        assert_eq!(1, db.count_locations().unwrap());
    }

    #[test]
    fn delete_unknown_location() {
        let db = MockDb::default();
        assert!(matches!(
            usecases::delete_location(&db, "x"),
            Err(usecases::Error::Repo(RepoError::NotFound))
        ));
    }
}
