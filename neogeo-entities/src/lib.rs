#![deny(missing_debug_implementations)]

//! # neogeo-entities
//!
//! Reusable, agnostic domain entities for the neogeo location registry.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod location;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
