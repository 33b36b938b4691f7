pub use neogeo_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_location(from: NewLocation) -> usecases::NewLocation {
        let NewLocation {
            addresses,
            names,
            location,
            enabled,
        } = from;
        usecases::NewLocation {
            addresses,
            names,
            point: location.into(),
            enabled,
        }
    }

    pub fn location_patch(from: LocationPatch) -> usecases::LocationPatch {
        let LocationPatch {
            addresses,
            names,
            location,
            enabled,
        } = from;
        usecases::LocationPatch {
            addresses,
            names,
            point: location.map(Into::into),
            enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entities::GeoPoint;

    #[test]
    fn patch_without_point() {
        let patch = from_json::location_patch(LocationPatch {
            enabled: Some(false),
            ..Default::default()
        });
        assert!(patch.point.is_none());
        assert_eq!(Some(false), patch.enabled);
        assert!(patch.addresses.is_none());
    }

    #[test]
    fn keep_axis_order_of_point() {
        let new_location = from_json::new_location(NewLocation {
            addresses: vec![],
            names: vec!["foo".into()],
            location: Point { x: 13.4, y: 52.5 },
            enabled: true,
        });
        assert_eq!(GeoPoint::new(13.4, 52.5), new_location.point);
    }
}
