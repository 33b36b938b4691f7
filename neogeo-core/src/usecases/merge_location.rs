use super::prelude::*;

/// Only the given fields will be overwritten, all other
/// fields keep their current value.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub addresses : Option<Vec<String>>,
    pub names     : Option<Vec<String>>,
    pub point     : Option<GeoPoint>,
    pub enabled   : Option<bool>,
}

impl LocationPatch {
    pub fn is_empty(&self) -> bool {
        let Self {
            addresses,
            names,
            point,
            enabled,
        } = self;
        addresses.is_none() && names.is_none() && point.is_none() && enabled.is_none()
    }
}

pub fn merge_location<R: LocationRepo>(repo: &R, id: &str, patch: LocationPatch) -> Result<Location> {
    if let Some(point) = patch.point {
        point.to_map_point()?;
    }
    let mut location = repo.get_location(id)?;
    if patch.is_empty() {
        log::debug!("Nothing to merge into location {id}");
        return Ok(location);
    }
    let LocationPatch {
        addresses,
        names,
        point,
        enabled,
    } = patch;
    if let Some(addresses) = addresses {
        location.addresses = addresses;
    }
    if let Some(names) = names {
        location.names = names;
    }
    if let Some(point) = point {
        location.point = point;
    }
    if let Some(enabled) = enabled {
        location.enabled = enabled;
    }
    repo.update_location(&location)?;
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn create_ibirapuera(db: &MockDb) -> Location {
        let location = Location::build()
            .id("ibira")
            .addresses(vec!["Avenida Pedro Álvares Cabral"])
            .names(vec!["Parque Ibirapuera", "Ibira"])
            .pos(-46.6576336, -23.5874162)
            .enabled(true)
            .finish();
        db.create_location(location.clone()).unwrap();
        location
    }

    #[test]
    fn merge_single_field() {
        let db = MockDb::default();
        let before = create_ibirapuera(&db);
        let patch = usecases::LocationPatch {
            addresses: Some(vec!["Av Pedro Álvares Cabral".into()]),
            ..Default::default()
        };
        usecases::merge_location(&db, "ibira", patch).unwrap();
        let after = db.get_location("ibira").unwrap();
        assert_eq!(vec!["Av Pedro Álvares Cabral"], after.addresses);
        assert_eq!(before.names, after.names);
        assert_eq!(before.point, after.point);
        assert_eq!(before.enabled, after.enabled);
    }

    #[test]
    fn merge_flag_and_point() {
        let db = MockDb::default();
        let before = create_ibirapuera(&db);
        let patch = usecases::LocationPatch {
            point: Some(GeoPoint::new(10.0, 20.0)),
            enabled: Some(false),
            ..Default::default()
        };
        let merged = usecases::merge_location(&db, "ibira", patch).unwrap();
        assert_eq!(merged, db.get_location("ibira").unwrap());
        assert_eq!(before.addresses, merged.addresses);
        assert_eq!(before.names, merged.names);
        assert_eq!(GeoPoint::new(10.0, 20.0), merged.point);
        assert!(!merged.enabled);
    }

    #[test]
    fn merge_empty_patch() {
        let db = MockDb::default();
        let before = create_ibirapuera(&db);
        let patch = usecases::LocationPatch::default();
        assert!(patch.is_empty());
        let merged = usecases::merge_location(&db, "ibira", patch).unwrap();
        assert_eq!(before, merged);
    }

    #[test]
    fn merge_invalid_point() {
        let db = MockDb::default();
        let before = create_ibirapuera(&db);
        let patch = usecases::LocationPatch {
            point: Some(GeoPoint::new(200.0, 0.0)),
            ..Default::default()
        };
        assert!(matches!(
            usecases::merge_location(&db, "ibira", patch),
            Err(usecases::Error::InvalidPosition(_))
        ));
        assert_eq!(before, db.get_location("ibira").unwrap());
    }

    #[test]
    fn merge_into_unknown_location() {
        let db = MockDb::default();
        let patch = usecases::LocationPatch {
            enabled: Some(true),
            ..Default::default()
        };
        assert!(matches!(
            usecases::merge_location(&db, "unknown", patch),
            Err(usecases::Error::Repo(RepoError::NotFound))
        ));
    }
}
