//! Business rules of the neogeo location registry.
//!
//! The store is only accessed through the traits in [`repositories`],
//! all field-level semantics live in [`usecases`].

pub mod entities {
    pub use neogeo_entities::{geo::*, id::*, location::*};
}

pub mod repositories;
pub mod usecases;

pub use repositories::Error as RepoError;
