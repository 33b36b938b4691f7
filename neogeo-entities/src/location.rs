use crate::{geo::*, id::*};

/// Type discriminator of a GeoJSON point.
pub const POINT_TYPE: &str = "Point";

/// A point in GeoJSON axis order.
///
/// `x` is the longitude and `y` the latitude, both in degrees.
/// The raw values are kept as supplied so that they are returned
/// unaltered when reading a location back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_map_point(self) -> Result<MapPoint, CoordError> {
        MapPoint::try_from_lat_lng_deg(self.y, self.x)
    }
}

impl From<MapPoint> for GeoPoint {
    fn from(from: MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self::new(lng, lat)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id        : Id,
    pub addresses : Vec<String>,
    pub names     : Vec<String>,
    pub point     : GeoPoint,
    pub enabled   : bool,
}

impl Location {
    pub fn pos(&self) -> Result<MapPoint, CoordError> {
        self.point.to_map_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geojson_axis_order() {
        let point = GeoPoint::new(-23.5874162, -46.6576336);
        let pos = point.to_map_point().unwrap();
        assert_eq!(-46.6576336, pos.lat().to_deg());
        assert_eq!(-23.5874162, pos.lng().to_deg());
        assert_eq!(point, GeoPoint::from(pos));
    }

    #[test]
    fn latitude_out_of_range() {
        // The latitude is the second coordinate
        assert!(GeoPoint::new(120.0, 45.0).to_map_point().is_ok());
        assert!(GeoPoint::new(45.0, 120.0).to_map_point().is_err());
    }
}
