//! Cruise pages

use axum::Extension;
use axum::response::Html;

use crate::cruises::Cruise;
use crate::database::Database;

use super::Error;
use super::PathParameters;
use super::views;

/// Show a single cruise with the destinations it visits
pub async fn detail(
    Extension(database): Extension<Database>,
    PathParameters(cruise_id): PathParameters<i64>,
) -> Result<Html<String>, Error> {
    let cruise = fetch_cruise(&database, cruise_id).await?;

    let destinations = database
        .find_destinations_by_cruise(&cruise)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Html(views::cruise_detail(&cruise, &destinations)))
}

/// Fetch cruise from the database
async fn fetch_cruise(database: &Database, cruise_id: i64) -> Result<Cruise, Error> {
    database
        .find_single_cruise_by_id(cruise_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Cruise not found")), Ok)
}
