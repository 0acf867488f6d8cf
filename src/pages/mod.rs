//! All page endpoint setup

use axum::Router;
use axum::routing::get;
use axum::routing::post;

pub use request::Form;
pub use request::PathParameters;
pub use response::Error;

mod cruises;
mod destinations;
mod info_requests;
mod request;
mod response;
mod site;
mod views;

/// Get the Axum router for all pages
pub fn router() -> Router {
    Router::new()
        .route("/", get(site::index))
        .route("/about", get(site::about))
        .route("/destinations", get(destinations::list))
        .route("/destination/{destination}", get(destinations::detail))
        .route("/cruise/{cruise}", get(cruises::detail))
        .route("/info_request", get(info_requests::form))
        .route("/info_request", post(info_requests::create))
}
