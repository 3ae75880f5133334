//! CORS middleware configuration

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates the CORS middleware.
///
/// Permissive by default so mobile clients and local tooling can reach the
/// endpoints; set `ALLOWED_ORIGINS` (comma-separated) to restrict origins
/// in production.
pub fn create_cors() -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    match env::var("ALLOWED_ORIGINS") {
        Ok(origins) => origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        Err(_) => cors.allow_any_origin(),
    }
}
