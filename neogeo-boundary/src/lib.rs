use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id        : String,
    pub addresses : Vec<String>,
    pub names     : Vec<String>,
    pub location  : Point,
    pub enabled   : bool,
}

/// Request body for creating or replacing a location.
///
/// Missing collections are empty and a missing flag is `false`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewLocation {
    #[serde(default, alias = "addressess")]
    pub addresses : Vec<String>,
    #[serde(default)]
    pub names     : Vec<String>,
    pub location  : Point,
    #[serde(default)]
    pub enabled   : bool,
}

/// Request body for partially updating a location.
///
/// Only fields that are present (and not `null`) are applied.
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationPatch {
    #[serde(default, alias = "addressess", skip_serializing_if = "Option::is_none")]
    pub addresses : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names     : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location  : Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled   : Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointType {
    Point,
}

/// A GeoJSON point: `x` is the longitude and `y` the latitude.
///
/// Serialized with both the `x`/`y` fields and the GeoJSON
/// `coordinates` array. Either of them is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonPoint", into = "GeoJsonPoint")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    #[error("missing coordinates of point")]
    MissingCoordinates,
    #[error("conflicting coordinates of point")]
    ConflictingCoordinates,
}

#[derive(Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: PointType,
    x: Option<f64>,
    y: Option<f64>,
    coordinates: Option<[f64; 2]>,
}

impl TryFrom<GeoJsonPoint> for Point {
    type Error = PointError;
    fn try_from(from: GeoJsonPoint) -> Result<Self, Self::Error> {
        let GeoJsonPoint {
            kind: PointType::Point,
            x,
            y,
            coordinates,
        } = from;
        match (coordinates, x, y) {
            (Some([cx, cy]), x, y) => {
                if x.is_some_and(|x| x != cx) || y.is_some_and(|y| y != cy) {
                    return Err(PointError::ConflictingCoordinates);
                }
                Ok(Self { x: cx, y: cy })
            }
            (None, Some(x), Some(y)) => Ok(Self { x, y }),
            (None, _, _) => Err(PointError::MissingCoordinates),
        }
    }
}

impl From<Point> for GeoJsonPoint {
    fn from(from: Point) -> Self {
        let Point { x, y } = from;
        Self {
            kind: PointType::Point,
            x: Some(x),
            y: Some(y),
            coordinates: Some([x, y]),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: false,
        }
    }

    pub fn templated(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: true,
        }
    }
}

/// Discovery document of the root resource.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Index {
    #[serde(rename = "_links")]
    pub links: IndexLinks,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct IndexLinks {
    pub locations: Link,
    pub search: Link,
}

/// Available searches of the locations collection.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Searches {
    #[serde(rename = "_links")]
    pub links: SearchLinks,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchLinks {
    #[serde(rename = "findByName")]
    pub find_by_name: Link,
    #[serde(rename = "findByLocationNearAndEnabled")]
    pub find_by_location_near_and_enabled: Link,
    #[serde(rename = "self")]
    pub self_: Link,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// Error message.
    pub message: String,
}
