// Low-level database access traits.
// A repository only stores and loads entities, it never
// interprets or changes the values of their fields.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default, Clone)]
pub struct LocationQuery<'a> {
    // enabled = None: Don't filter by the enabled flag
    pub enabled: Option<bool>,
    // Case-insensitive substring of at least one of the names
    pub name: Option<&'a str>,
    // Only a coarse pre-selection, the bounding box may
    // contain more locations than the caller is interested in
    pub bbox: Option<MapBbox>,
}

impl LocationQuery<'_> {
    pub fn is_empty(&self) -> bool {
        let Self {
            enabled,
            name,
            bbox,
        } = self;
        enabled.is_none() && name.is_none() && bbox.is_none()
    }
}

pub trait LocationRepo {
    fn create_location(&self, location: Location) -> Result<()>;

    // Overwrites all fields of an existing location
    fn update_location(&self, location: &Location) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn count_locations(&self) -> Result<usize>;

    // Every matching location is returned only once, in the order of creation
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>>;
}
