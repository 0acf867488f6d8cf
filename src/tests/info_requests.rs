use axum::http::StatusCode;

use crate::info_requests::InfoRequest;
use crate::tests::helper;

#[sqlx::test]
async fn test_info_request_form(pool: sqlx::PgPool) {
    let database = helper::setup_test_database(pool.clone()).await;
    helper::seed_sample_data(&database).await;

    let mut app = helper::setup_test_app(pool).await;

    let (status_code, body) = helper::get_page(&mut app, "/info_request").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("Request Info"));

    // every cruise is selectable
    assert!(body.contains("The Sun and Earth"));
}

#[sqlx::test]
async fn test_info_request_form_with_message(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    let (status_code, body) =
        helper::get_page(&mut app, "/info_request?message=Thank+you,+Amanda!").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("Thank you, Amanda!"));
}

#[sqlx::test]
async fn test_info_request_form_escapes_message(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    let (status_code, body) =
        helper::get_page(&mut app, "/info_request?message=%3Cscript%3E").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}

#[sqlx::test]
async fn test_create_info_request(pool: sqlx::PgPool) {
    let database = helper::setup_test_database(pool.clone()).await;
    helper::seed_sample_data(&database).await;

    let mut app = helper::setup_test_app(pool.clone()).await;

    let (status_code, location) = helper::submit_info_request(
        &mut app,
        "Amanda Valdez",
        "michellewatson@gmail.com",
        "Please send me more information.",
        1,
    )
    .await;

    assert_eq!(StatusCode::FOUND, status_code);
    assert_eq!(
        Some(
            "/info_request?message=Thank+you,+Amanda+Valdez!+\
             We+will+email+you+when+we+have+more+information!"
                .to_string()
        ),
        location
    );

    // exactly one row, holding the submitted values
    let info_requests = sqlx::query_as::<_, InfoRequest>("SELECT * FROM info_request")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(1, info_requests.len());

    let info_request = &info_requests[0];
    assert_eq!("Amanda Valdez", info_request.name);
    assert_eq!("michellewatson@gmail.com", info_request.email);
    assert_eq!("Please send me more information.", info_request.notes);
    assert_eq!(1, info_request.cruise_id);
}

#[sqlx::test]
async fn test_create_info_request_with_unknown_cruise(pool: sqlx::PgPool) {
    let database = helper::setup_test_database(pool.clone()).await;
    helper::seed_sample_data(&database).await;

    let mut app = helper::setup_test_app(pool.clone()).await;

    // the foreign key is the source of truth, the violation surfaces as a
    // generic server error
    let (status_code, location) = helper::submit_info_request(
        &mut app,
        "Amanda Valdez",
        "michellewatson@gmail.com",
        "Please send me more information.",
        999,
    )
    .await;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert_eq!(None, location);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM info_request")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(0, count);
}
