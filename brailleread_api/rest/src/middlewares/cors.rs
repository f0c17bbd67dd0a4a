use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::RestServerCorsConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    config: &RestServerCorsConfig,
) -> impl FnOnce(Router<S>) -> Router<S> {
    let allow_origin = match config {
        RestServerCorsConfig::Any => AllowOrigin::any(),
        RestServerCorsConfig::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    let layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    |router| router.layer(layer)
}
