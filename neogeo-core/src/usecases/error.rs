use crate::{entities::CoordError, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position: {0}")]
    InvalidPosition(#[from] CoordError),
    #[error("Invalid distance")]
    InvalidDistance,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
