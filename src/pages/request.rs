//! Page request helpers

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::extract::Path;
use axum::extract::Request;
use axum::extract::rejection::FormRejection;
use axum::extract::rejection::PathRejection;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::Error;

fn parse_form<F>(form: Result<axum::extract::Form<F>, FormRejection>) -> Result<F, Error> {
    match form {
        Ok(axum::extract::Form(form)) => Ok(form),
        Err(err) => match err {
            FormRejection::InvalidFormContentType(_err) => Err(Error::bad_request(
                "Missing `application/x-www-form-urlencoded` content type",
            )),
            FormRejection::FailedToDeserializeForm(err) => Err(Error::bad_request(err)),
            FormRejection::FailedToDeserializeFormBody(err) => Err(Error::bad_request(err)),
            err => Err(Error::bad_request(err)),
        },
    }
}

/// Wrapper for the form extractor
///
/// Failures render an error page instead of a plain text rejection
pub struct Form<F>(pub F);

impl<S, F> FromRequest<S> for Form<F>
where
    S: Send + Sync,
    F: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = axum::extract::Form::<F>::from_request(req, state).await;

        parse_form(form).map(Form)
    }
}

fn parse_path<P>(path: Result<Path<P>, PathRejection>) -> Result<P, Error> {
    match path {
        Ok(Path(path)) => Ok(path),
        Err(err) => match err {
            PathRejection::FailedToDeserializePathParams(err) => {
                Err(Error::bad_request(format!("Invalid path parameter: {err}")))
            }
            PathRejection::MissingPathParams(err) => {
                Err(Error::bad_request(format!("Missing path parameter: {err}")))
            }
            err => Err(Error::bad_request(err)),
        },
    }
}

/// Wrapper for the path extractor
///
/// Failures render an error page instead of a plain text rejection
pub struct PathParameters<P>(pub P);

impl<S, P> FromRequestParts<S> for PathParameters<P>
where
    S: Send + Sync,
    P: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = Path::<P>::from_request_parts(parts, state).await;

        parse_path(path).map(PathParameters)
    }
}
