use crate::routes::{health, movies};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "marquee-server",
    description = "Movie catalog API: listing, ratings, reviews and search",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(movies::MoviesApi::openapi());
    root
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = get_docs();
        for path in [
            "/health",
            "/api/movies",
            "/api/movies/search",
            "/api/movies/{id}",
            "/api/movies/{id}/rate",
            "/api/movies/{id}/review",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
