mod create_location;
mod delete_location;
mod error;
mod find_locations_by_name;
mod find_locations_near;
mod get_location;
mod merge_location;
mod replace_location;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_location::*, delete_location::*, error::Error, find_locations_by_name::*,
    find_locations_near::*, get_location::*, merge_location::*, replace_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
