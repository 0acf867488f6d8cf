//! Info request pages
//!
//! The form to request more information about a cruise, and the submission
//! handler persisting the request

use axum::Extension;
use axum::extract::Query;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::Html;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use crate::database::CreateInfoRequestValues;
use crate::database::Database;

use super::Error;
use super::Form;
use super::views;

/// Characters percent-encoded in the confirmation message query value
///
/// Query sub-delims stay literal, spaces are turned into `+` afterwards
const MESSAGE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Query parameters of the info request form page
#[derive(Debug, Deserialize)]
pub struct InfoRequestQuery {
    /// Confirmation message to echo into the page
    message: Option<String>,
}

/// Show the info request form
///
/// All cruises are listed for the selection list
pub async fn form(
    Extension(database): Extension<Database>,
    Query(query): Query<InfoRequestQuery>,
) -> Result<Html<String>, Error> {
    let cruises = database
        .find_all_cruises()
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Html(views::info_request(&cruises, query.message.as_deref())))
}

/// Info request form
///
/// Fields to create an info request with
#[derive(Debug, Deserialize)]
pub struct CreateInfoRequestForm {
    /// Name of the customer
    name: String,

    /// Email address to send more information to
    email: String,

    /// Free text notes
    notes: String,

    /// The cruise the customer wants to hear about
    cruise_id: i64,
}

/// Create an info request based on the [`CreateInfoRequestForm`](CreateInfoRequestForm) form
///
/// No validation beyond what the storage constraints enforce, an unknown
/// cruise surfaces as a generic server error
///
/// On success redirects back to the form with a confirmation message
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateInfoRequestForm>,
) -> Result<(StatusCode, HeaderMap), Error> {
    let values = CreateInfoRequestValues {
        name: &form.name,
        email: &form.email,
        notes: &form.notes,
        cruise_id: form.cruise_id,
    };

    let info_request = database
        .create_info_request(&values)
        .await
        .map_err(Error::internal_server_error)?;

    tracing::debug!(
        "Created info request {} for cruise {}",
        info_request.id,
        info_request.cruise_id
    );

    let message = format!(
        "Thank you, {}! We will email you when we have more information!",
        form.name
    );

    let mut headers = HeaderMap::new();

    headers.insert(
        LOCATION,
        HeaderValue::from_str(&format!("/info_request?message={}", encode_message(&message)))
            .map_err(Error::internal_server_error)?,
    );

    Ok((StatusCode::FOUND, headers))
}

/// Encode the confirmation message for use as a query value
///
/// Spaces are encoded as `+`
fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, MESSAGE)
        .to_string()
        .replace(' ', "+")
}
