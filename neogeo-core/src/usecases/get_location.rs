use super::prelude::*;

pub fn get_location<R: LocationRepo>(repo: &R, id: &str) -> Result<Location> {
    Ok(repo.get_location(id)?)
}

pub fn load_all_locations<R: LocationRepo>(repo: &R) -> Result<Vec<Location>> {
    Ok(repo.all_locations()?)
}
