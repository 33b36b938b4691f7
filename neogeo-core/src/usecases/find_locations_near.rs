use super::prelude::*;

// Compensates rounding errors when calculating the bounding box.
const BBOX_MARGIN: Distance = Distance::from_meters(1.0);

/// Find all enabled locations within the given distance
/// around a center point, nearest first.
pub fn find_locations_near_and_enabled<R: LocationRepo>(
    repo: &R,
    latitude: f64,
    longitude: f64,
    max_distance: Distance,
) -> Result<Vec<Location>> {
    let center = MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
    if !max_distance.is_valid() {
        return Err(Error::InvalidDistance);
    }
    let bbox = MapBbox::centered_around(
        center,
        Distance::from_meters(max_distance.to_meters() + BBOX_MARGIN.to_meters()),
    );
    log::debug!(
        "Searching for enabled locations within {} km around {center} (bbox = {bbox})",
        max_distance.to_kilometers()
    );
    let query = LocationQuery {
        enabled: Some(true),
        bbox: Some(bbox),
        ..Default::default()
    };
    let candidates = repo.query_locations(&query)?;
    let mut nearby: Vec<_> = candidates
        .into_iter()
        .filter_map(|location| {
            let pos = match location.pos() {
                Ok(pos) => pos,
                Err(err) => {
                    log::warn!("Ignoring location {} with {}", location.id, err);
                    return None;
                }
            };
            let distance = MapPoint::distance(center, pos);
            (distance <= max_distance).then_some((distance, location))
        })
        .collect();
    // Stable sort: Equidistant locations keep their order of creation
    nearby.sort_by(|(lhs, _), (rhs, _)| lhs.to_meters().total_cmp(&rhs.to_meters()));
    Ok(nearby.into_iter().map(|(_, location)| location).collect())
}
