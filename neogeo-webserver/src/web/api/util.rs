use super::*;

#[get("/")]
pub fn get_index(base_url: BaseUrl) -> Json<json::Index> {
    Json(json::Index {
        links: json::IndexLinks {
            locations: json::Link::new(base_url.join("/locations")),
            search: json::Link::new(base_url.join("/locations/search")),
        },
    })
}
