use axum::Router;
use axum::body::Body;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::http::header::LOCATION;
use http_body_util::BodyExt;
use tower::Service;

use crate::database::Database;
use crate::database::DatabaseConfig;
use crate::seeder;
use crate::seeder::SeedFields;
use crate::seeder::SeedRecord;
use crate::setup_app;

/// Setup the ReleCloud app over the test pool
pub async fn setup_test_app(pool: sqlx::PgPool) -> Router {
    setup_app(DatabaseConfig::ExistingConnection(pool))
        .await
        .unwrap()
}

/// Database handle over the test pool
pub async fn setup_test_database(pool: sqlx::PgPool) -> Database {
    Database::from_config(DatabaseConfig::ExistingConnection(pool)).await
}

/// Build a destination seed record
pub fn destination_record(pk: i64, name: &str, description: &str) -> SeedRecord {
    SeedRecord {
        model: "relecloud.destination".to_string(),
        pk,
        fields: SeedFields {
            name: name.to_string(),
            subtitle: None,
            description: Some(description.to_string()),
            destinations: Vec::new(),
        },
    }
}

/// Build a cruise seed record referencing destinations
pub fn cruise_record(pk: i64, name: &str, destinations: &[i64]) -> SeedRecord {
    SeedRecord {
        model: "relecloud.cruise".to_string(),
        pk,
        fields: SeedFields {
            name: name.to_string(),
            subtitle: None,
            description: None,
            destinations: destinations.to_vec(),
        },
    }
}

/// Seed the sample data used by the page tests
///
/// Two destinations and one cruise visiting both
pub async fn seed_sample_data(database: &Database) {
    let records = vec![
        destination_record(1, "The Sun", "A hot destination"),
        destination_record(2, "Earth", "A blue destination"),
        cruise_record(1, "The Sun and Earth", &[1, 2]),
    ];

    seeder::seed_records(database, &records).await.unwrap();
}

pub async fn get_page(app: &mut Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();

    let status_code = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8_lossy(&body[..]).to_string();

    (status_code, body)
}

pub async fn submit_info_request(
    app: &mut Router,
    name: &str,
    email: &str,
    notes: &str,
    cruise_id: i64,
) -> (StatusCode, Option<String>) {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .append_pair("email", email)
        .append_pair("notes", notes)
        .append_pair("cruise_id", &cruise_id.to_string())
        .finish();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/info_request")
        .header(CONTENT_TYPE, mime::APPLICATION_WWW_FORM_URLENCODED.as_ref())
        .body(Body::from(body))
        .unwrap();

    let response = app.call(request).await.unwrap();

    let status_code = response.status();

    let location = response.headers().get(LOCATION);
    let location = location.map(|header| header.to_str().unwrap().to_string());

    (status_code, location)
}
