use std::f64::consts::{FRAC_PI_2, PI};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
}

/// Latitude in degrees, always within [-90, 90].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    fn from_rad_clamped(rad: f64) -> Self {
        Self(rad.to_degrees().clamp(Self::DEG_MIN, Self::DEG_MAX))
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

impl std::fmt::Display for LatCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Longitude in degrees, always within [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    fn from_rad_clamped(rad: f64) -> Self {
        Self(rad.to_degrees().clamp(Self::DEG_MIN, Self::DEG_MAX))
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

impl std::fmt::Display for LngCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A validated geographical position on the surface of the earth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordError> {
        let (lat, lng) = (lat.into(), lng.into());
        let lat = LatCoord::try_from_deg(lat).ok_or(CoordError::Latitude(lat))?;
        let lng = LngCoord::try_from_deg(lng).ok_or(CoordError::Longitude(lng))?;
        Ok(Self::new(lat, lng))
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    /// Saturates at the largest finite value instead of overflowing.
    pub fn from_kilometers(kilometers: f64) -> Self {
        let meters = kilometers * 1000.0;
        if kilometers.is_finite() {
            Self(meters.clamp(f64::MIN, f64::MAX))
        } else {
            Self(meters)
        }
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1000.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom))
    }
}

/// Bounding box on a (flat) map.
///
/// If the longitude of the south-west corner is greater than the
/// longitude of the north-east corner the box wraps around the
/// antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest bounding box that contains all points within
    /// the given great-circle distance around the center.
    pub fn centered_around(center: MapPoint, radius: Distance) -> Self {
        debug_assert!(radius.is_valid());
        let delta_rad = radius.to_meters() / MEAN_EARTH_RADIUS.to_meters();
        let (lat_rad, lng_rad) = center.to_lat_lng_rad();
        let min_lat_rad = lat_rad - delta_rad;
        let max_lat_rad = lat_rad + delta_rad;
        let sw_lat = LatCoord::from_rad_clamped(min_lat_rad);
        let ne_lat = LatCoord::from_rad_clamped(max_lat_rad);
        if min_lat_rad <= -FRAC_PI_2 || max_lat_rad >= FRAC_PI_2 {
            // A pole is covered, i.e. all longitudes are reachable
            return Self::new(
                MapPoint::new(sw_lat, LngCoord::min()),
                MapPoint::new(ne_lat, LngCoord::max()),
            );
        }
        let delta_lng_rad = (delta_rad.sin() / lat_rad.cos()).asin();
        let mut min_lng_rad = lng_rad - delta_lng_rad;
        if min_lng_rad < -PI {
            min_lng_rad += 2.0 * PI;
        }
        let mut max_lng_rad = lng_rad + delta_lng_rad;
        if max_lng_rad > PI {
            max_lng_rad -= 2.0 * PI;
        }
        Self::new(
            MapPoint::new(sw_lat, LngCoord::from_rad_clamped(min_lng_rad)),
            MapPoint::new(ne_lat, LngCoord::from_rad_clamped(max_lng_rad)),
        )
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn wraps_antimeridian(&self) -> bool {
        self.sw.lng() > self.ne.lng()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.wraps_antimeridian() {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        } else {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        }
    }
}

impl std::fmt::Display for MapBbox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn pt(lat: f64, lng: f64) -> MapPoint {
        MapPoint::try_from_lat_lng_deg(lat, lng).unwrap()
    }

    #[test]
    fn coordinate_ranges() {
        assert!(LatCoord::try_from_deg(-90).is_some());
        assert!(LatCoord::try_from_deg(90).is_some());
        assert!(LatCoord::try_from_deg(-90.000001).is_none());
        assert!(LatCoord::try_from_deg(90.000001).is_none());
        assert!(LatCoord::try_from_deg(f64::NAN).is_none());
        assert!(LngCoord::try_from_deg(-180).is_some());
        assert!(LngCoord::try_from_deg(180).is_some());
        assert!(LngCoord::try_from_deg(180.000001).is_none());
        assert!(LngCoord::try_from_deg(f64::INFINITY).is_none());
    }

    #[test]
    fn invalid_point() {
        assert_eq!(
            Err(CoordError::Latitude(91.0)),
            MapPoint::try_from_lat_lng_deg(91.0, 0.0)
        );
        assert_eq!(
            Err(CoordError::Longitude(-181.0)),
            MapPoint::try_from_lat_lng_deg(0.0, -181.0)
        );
    }

    #[test]
    fn point_keeps_degrees() {
        let p = pt(-46.6576336, -23.5874162);
        assert_eq!((-46.6576336, -23.5874162), p.to_lat_lng_deg());
    }

    #[test]
    fn distance() {
        let p1 = pt(0.0, 0.0);
        let p2 = pt(-90.0, 0.0);
        let d = MapPoint::distance(p1, p2);
        assert!((d.to_meters() - MEAN_EARTH_RADIUS.to_meters() * FRAC_PI_2).abs() < 0.001);
        assert_eq!(Distance::from_meters(0.0), MapPoint::distance(p1, p1));
    }

    #[test]
    fn real_distance() {
        let stuttgart = pt(48.7755, 9.1827);
        let mannheim = pt(49.4836, 8.4630);
        let d = MapPoint::distance(stuttgart, mannheim);
        assert!(d.to_kilometers() > 94.0);
        assert!(d.to_kilometers() < 96.0);
    }

    #[test]
    fn distance_units() {
        let d = Distance::from_kilometers(1.5);
        assert_eq!(1500.0, d.to_meters());
        assert_eq!(1.5, d.to_kilometers());
        assert!(d.is_valid());
        assert!(!Distance::from_meters(-1.0).is_valid());
        assert!(!Distance::from_meters(f64::NAN).is_valid());
    }

    #[test]
    fn huge_distances_in_kilometers_stay_finite() {
        let d = Distance::from_kilometers(1e306);
        assert!(d.is_valid());
        assert_eq!(f64::MAX, d.to_meters());
        assert!(!Distance::from_kilometers(f64::INFINITY).is_valid());
        assert!(!Distance::from_kilometers(f64::NAN).is_valid());
    }

    #[test]
    fn bbox_contains_points() {
        let bbox = MapBbox::new(pt(-10.0, -10.0), pt(10.0, 10.0));
        assert!(!bbox.wraps_antimeridian());
        assert!(bbox.contains_point(pt(0.0, 0.0)));
        assert!(bbox.contains_point(pt(10.0, -10.0)));
        assert!(!bbox.contains_point(pt(11.0, 0.0)));
        assert!(!bbox.contains_point(pt(0.0, -11.0)));
    }

    #[test]
    fn bbox_across_antimeridian() {
        let bbox = MapBbox::new(pt(-10.0, 170.0), pt(10.0, -170.0));
        assert!(bbox.wraps_antimeridian());
        assert!(bbox.contains_point(pt(0.0, 175.0)));
        assert!(bbox.contains_point(pt(0.0, -175.0)));
        assert!(bbox.contains_point(pt(0.0, 180.0)));
        assert!(!bbox.contains_point(pt(0.0, 0.0)));
    }

    #[test]
    fn bbox_centered_around_point() {
        let center = pt(48.0, 9.0);
        let radius = Distance::from_kilometers(10.0);
        let bbox = MapBbox::centered_around(center, radius);
        assert!(bbox.contains_point(center));
        // Points on the radius in every direction
        for bearing in [0.0_f64, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            let p = destination(center, bearing, Distance::from_kilometers(9.999));
            assert!(bbox.contains_point(p), "{p} not in {bbox}");
        }
        assert!(!bbox.contains_point(pt(48.2, 9.0)));
        assert!(!bbox.contains_point(pt(48.0, 9.2)));
    }

    #[test]
    fn bbox_centered_around_antimeridian() {
        let center = pt(0.0, 179.99);
        let bbox = MapBbox::centered_around(center, Distance::from_kilometers(5.0));
        assert!(bbox.wraps_antimeridian());
        assert!(bbox.contains_point(pt(0.0, -179.99)));
        assert!(!bbox.contains_point(pt(0.0, 0.0)));
    }

    #[test]
    fn bbox_centered_around_pole() {
        let center = pt(89.99, 0.0);
        let bbox = MapBbox::centered_around(center, Distance::from_kilometers(5.0));
        assert_eq!(LngCoord::min(), bbox.south_west().lng());
        assert_eq!(LngCoord::max(), bbox.north_east().lng());
        assert_eq!(90.0, bbox.north_east().lat().to_deg());
        assert!(bbox.contains_point(pt(89.99, 180.0)));
    }

    // Destination point given a start point, a bearing and a distance
    fn destination(start: MapPoint, bearing_deg: f64, distance: Distance) -> MapPoint {
        let (lat1, lng1) = start.to_lat_lng_rad();
        let bearing = bearing_deg.to_radians();
        let delta = distance.to_meters() / MEAN_EARTH_RADIUS.to_meters();
        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
        let lng2 = lng1
            + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());
        pt(lat2.to_degrees(), lng2.to_degrees())
    }
}
