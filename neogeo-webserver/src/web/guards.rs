use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::Cfg;

const FALLBACK_BASE_URL: &str = "http://localhost";

/// Scheme and authority for building absolute resource URLs,
/// without a trailing slash.
#[derive(Debug, Clone)]
pub struct BaseUrl(String);

impl BaseUrl {
    fn new(url: &str) -> Self {
        Self(url.trim_end_matches('/').to_owned())
    }

    pub fn join(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'));
        format!("{}{path}", self.0)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BaseUrl {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cfg = try_outcome!(request.guard::<&State<Cfg>>().await);
        if let Some(url) = &cfg.public_base_url {
            return Outcome::Success(Self::new(url));
        }
        let base_url = match request.host() {
            Some(host) => Self::new(&format!("http://{host}")),
            None => Self::new(FALLBACK_BASE_URL),
        };
        Outcome::Success(base_url)
    }
}
