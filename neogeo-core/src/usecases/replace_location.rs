use super::{create_location::NewLocation, prelude::*};

/// Overwrite all fields of an existing location.
///
/// Nothing is merged, i.e. collections that are empty in the
/// replacement will also be empty afterwards.
pub fn replace_location<R: LocationRepo>(
    repo: &R,
    id: &str,
    replacement: NewLocation,
) -> Result<Location> {
    let NewLocation {
        addresses,
        names,
        point,
        enabled,
    } = replacement;
    point.to_map_point()?;
    let old = repo.get_location(id)?;
    let location = Location {
        id: old.id,
        addresses,
        names,
        point,
        enabled,
    };
    repo.update_location(&location)?;
    Ok(location)
}
