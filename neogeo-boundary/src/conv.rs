use super::*;
use neogeo_entities as e;

impl From<e::location::GeoPoint> for Point {
    fn from(from: e::location::GeoPoint) -> Self {
        let e::location::GeoPoint { x, y } = from;
        Self { x, y }
    }
}

impl From<Point> for e::location::GeoPoint {
    fn from(from: Point) -> Self {
        let Point { x, y } = from;
        Self::new(x, y)
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            addresses,
            names,
            point,
            enabled,
        } = from;
        Self {
            id: id.into(),
            addresses,
            names,
            location: point.into(),
            enabled,
        }
    }
}
