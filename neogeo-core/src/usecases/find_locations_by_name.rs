use super::prelude::*;

/// Find all locations with a name that contains the given
/// text, ignoring (ASCII) case.
///
/// A blank text doesn't match anything.
pub fn find_locations_by_name<R: LocationRepo>(repo: &R, name: &str) -> Result<Vec<Location>> {
    if name.trim().is_empty() {
        log::debug!("Ignoring search for a blank name");
        return Ok(vec![]);
    }
    let query = LocationQuery {
        name: Some(name),
        ..Default::default()
    };
    Ok(repo.query_locations(&query)?)
}
