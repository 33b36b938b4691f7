use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub addresses : Vec<String>,
    pub names     : Vec<String>,
    pub point     : GeoPoint,
    pub enabled   : bool,
}

pub fn create_location<R: LocationRepo>(repo: &R, new_location: NewLocation) -> Result<Location> {
    let NewLocation {
        addresses,
        names,
        point,
        enabled,
    } = new_location;
    // Reject points that could never be found by a proximity search
    let pos = point.to_map_point()?;
    let location = Location {
        id: Id::new(),
        addresses,
        names,
        point,
        enabled,
    };
    log::debug!("Creating new location {} at {}", location.id, pos);
    repo.create_location(location.clone())?;
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn ibirapuera() -> usecases::NewLocation {
        usecases::NewLocation {
            addresses: vec!["Avenida Pedro Álvares Cabral".into()],
            names: vec![
                "Parque Ibirapuera".into(),
                "parque".into(),
                "ibirapuera".into(),
                "Pq Ibirapuera".into(),
                "Ibira".into(),
            ],
            point: GeoPoint::new(-23.5874162, -46.6576336),
            enabled: true,
        }
    }

    #[test]
    fn create_and_read_back() {
        let db = MockDb::default();
        let new_location = ibirapuera();
        let created = usecases::create_location(&db, new_location.clone()).unwrap();
        assert!(created.id.is_valid());
        let loaded = usecases::get_location(&db, created.id.as_str()).unwrap();
        assert_eq!(created, loaded);
        assert_eq!(new_location.addresses, loaded.addresses);
        assert_eq!(new_location.names, loaded.names);
        assert_eq!(new_location.point, loaded.point);
        assert!(loaded.enabled);
    }

    #[test]
    fn every_location_gets_a_new_id() {
        let db = MockDb::default();
        let a = usecases::create_location(&db, ibirapuera()).unwrap();
        let b = usecases::create_location(&db, ibirapuera()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(2, db.count_locations().unwrap());
    }

    #[test]
    fn create_with_empty_collections() {
        let db = MockDb::default();
        let new_location = usecases::NewLocation {
            addresses: vec![],
            names: vec![],
            point: GeoPoint::new(0.0, 0.0),
            enabled: false,
        };
        let created = usecases::create_location(&db, new_location).unwrap();
        assert!(created.addresses.is_empty());
        assert!(created.names.is_empty());
        assert!(!created.enabled);
    }

    #[test]
    fn reject_invalid_position() {
        let db = MockDb::default();
        let mut new_location = ibirapuera();
        new_location.point = GeoPoint::new(0.0, 95.0);
        assert!(matches!(
            usecases::create_location(&db, new_location),
            Err(usecases::Error::InvalidPosition(_))
        ));
        assert_eq!(0, db.count_locations().unwrap());
    }
}
