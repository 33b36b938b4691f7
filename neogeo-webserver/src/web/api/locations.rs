use super::*;

fn location_path(id: &str) -> String {
    format!("/locations/{id}")
}

#[get("/locations")]
pub fn get_locations(db: sqlite::Connections) -> Result<Vec<json::Location>> {
    let locations = usecases::load_all_locations(&db.shared()?)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[post("/locations", data = "<new_location>")]
pub fn post_location(
    db: sqlite::Connections,
    base_url: BaseUrl,
    new_location: JsonResult<json::NewLocation>,
) -> result::Result<Created<Json<json::Location>>, ApiError> {
    let new_location = from_json::new_location(new_location?.into_inner());
    let location = usecases::create_location(&db.exclusive()?, new_location)?;
    let url = base_url.join(&location_path(location.id.as_str()));
    info!("Created location {}", location.id);
    Ok(Created::new(url).body(Json(location.into())))
}

#[get("/locations/<id>")]
pub fn get_location(db: sqlite::Connections, id: &str) -> Result<json::Location> {
    let location = usecases::get_location(&db.shared()?, id)?;
    Ok(Json(location.into()))
}

#[put("/locations/<id>", data = "<location>")]
pub fn put_location(
    db: sqlite::Connections,
    id: &str,
    location: JsonResult<json::NewLocation>,
) -> StatusResult {
    let new_location = from_json::new_location(location?.into_inner());
    db.exclusive()?
        .transaction(|conn| usecases::replace_location(conn, id, new_location))?;
    Ok(Status::NoContent)
}

#[patch("/locations/<id>", data = "<patch>")]
pub fn patch_location(
    db: sqlite::Connections,
    id: &str,
    patch: JsonResult<json::LocationPatch>,
) -> StatusResult {
    let patch = from_json::location_patch(patch?.into_inner());
    db.exclusive()?
        .transaction(|conn| usecases::merge_location(conn, id, patch))?;
    Ok(Status::NoContent)
}

#[delete("/locations/<id>")]
pub fn delete_location(db: sqlite::Connections, id: &str) -> StatusResult {
    db.exclusive()?
        .transaction(|conn| usecases::delete_location(conn, id))?;
    info!("Disabled location {id}");
    Ok(Status::NoContent)
}
