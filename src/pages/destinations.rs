//! Destination pages
//!
//! The list of all destinations and the destination detail page

use axum::Extension;
use axum::response::Html;

use crate::database::Database;
use crate::destinations::Destination;

use super::Error;
use super::PathParameters;
use super::views;

/// List all destinations
pub async fn list(Extension(database): Extension<Database>) -> Result<Html<String>, Error> {
    let destinations = database
        .find_all_destinations()
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Html(views::destinations(&destinations)))
}

/// Show a single destination with the cruises that visit it
///
/// The related cruises are fetched with an explicit query, nothing is
/// loaded lazily
pub async fn detail(
    Extension(database): Extension<Database>,
    PathParameters(destination_id): PathParameters<i64>,
) -> Result<Html<String>, Error> {
    let destination = fetch_destination(&database, destination_id).await?;

    let cruises = database
        .find_cruises_by_destination(&destination)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Html(views::destination_detail(&destination, &cruises)))
}

/// Fetch destination from the database
async fn fetch_destination(database: &Database, destination_id: i64) -> Result<Destination, Error> {
    database
        .find_single_destination_by_id(destination_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Destination not found")), Ok)
}
