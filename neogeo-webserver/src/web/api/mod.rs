use std::{fmt::Display, result};

use neogeo_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    patch, post, put,
    response::{self, status::Created, Responder},
    routes, Route,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases},
    web::sqlite,
};

mod error;
mod locations;
mod search;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   discovery   --- //
        util::get_index,
        // ---   locations   --- //
        locations::get_locations,
        locations::post_location,
        locations::get_location,
        locations::put_location,
        locations::patch_location,
        locations::delete_location,
        // ---   search   --- //
        search::get_searches,
        search::get_find_by_name,
        search::get_find_by_location_near_and_enabled,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
