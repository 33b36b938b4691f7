use super::*;
use anyhow::anyhow;

fn required_param(name: &str, value: Option<f64>) -> result::Result<f64, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(anyhow!("Missing or invalid parameter '{name}'")))
}

#[get("/locations/search")]
pub fn get_searches(base_url: BaseUrl) -> Json<json::Searches> {
    Json(json::Searches {
        links: json::SearchLinks {
            find_by_name: json::Link::templated(
                base_url.join("/locations/search/findByName{?name}"),
            ),
            find_by_location_near_and_enabled: json::Link::templated(base_url.join(
                "/locations/search/findByLocationNearAndEnabled{?latitude,longitude,distance}",
            )),
            self_: json::Link::new(base_url.join("/locations/search")),
        },
    })
}

#[get("/locations/search/findByName?<name>")]
pub fn get_find_by_name(
    db: sqlite::Connections,
    name: Option<String>,
) -> Result<Vec<json::Location>> {
    let name = name.unwrap_or_default();
    let locations = usecases::find_locations_by_name(&db.shared()?, &name)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

/// The distance is given in kilometers.
#[get("/locations/search/findByLocationNearAndEnabled?<latitude>&<longitude>&<distance>")]
pub fn get_find_by_location_near_and_enabled(
    db: sqlite::Connections,
    latitude: Option<f64>,
    longitude: Option<f64>,
    distance: Option<f64>,
) -> Result<Vec<json::Location>> {
    let latitude = required_param("latitude", latitude)?;
    let longitude = required_param("longitude", longitude)?;
    let max_distance = Distance::from_kilometers(required_param("distance", distance)?);
    let locations = usecases::find_locations_near_and_enabled(
        &db.shared()?,
        latitude,
        longitude,
        max_distance,
    )?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}
