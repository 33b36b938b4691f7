use super::json_error_response;
use anyhow::anyhow;
pub use neogeo_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] ParameterError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn bad_request(err: anyhow::Error) -> Self {
        Self::OtherWithStatus(err, Status::BadRequest)
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::bad_request(anyhow!(err)),
            JsonError::Parse(_str, err) => Self::bad_request(anyhow!(err)),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        ParameterError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => match err {
                ParameterError::InvalidPosition(_) | ParameterError::InvalidDistance => {
                    debug!("Rejected request: {err}");
                    json_error_response(req, &err, Status::BadRequest)
                }
                ParameterError::Repo(RepoError::NotFound) => {
                    debug!("Rejected request: {err}");
                    json_error_response(req, &err, Status::NotFound)
                }
                ParameterError::Repo(_) => {
                    error!("Error: {err}");
                    json_error_response(req, &err, Status::InternalServerError)
                }
            },
            Error::OtherWithStatus(err, status) => {
                debug!("Rejected request: {err}");
                json_error_response(req, &err, status)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
