pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{id::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn addresses(mut self, addresses: Vec<impl Into<String>>) -> Self {
            self.location.addresses = addresses.into_iter().map(Into::into).collect();
            self
        }
        pub fn names(mut self, names: Vec<impl Into<String>>) -> Self {
            self.location.names = names.into_iter().map(Into::into).collect();
            self
        }
        /// Latitude and longitude in degrees
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.location.point = GeoPoint::new(lng, lat);
            self
        }
        pub fn enabled(mut self, enabled: bool) -> Self {
            self.location.enabled = enabled;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> Self::Build {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    addresses: vec![],
                    names: vec![],
                    point: GeoPoint::new(0.0, 0.0),
                    enabled: true,
                },
            }
        }
    }
}
