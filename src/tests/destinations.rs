use axum::http::StatusCode;

use crate::tests::helper;

#[sqlx::test]
async fn test_destinations(pool: sqlx::PgPool) {
    let database = helper::setup_test_database(pool.clone()).await;
    helper::seed_sample_data(&database).await;

    let mut app = helper::setup_test_app(pool).await;

    let (status_code, body) = helper::get_page(&mut app, "/destinations").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("Destinations"));

    // every seeded destination is listed exactly once
    assert_eq!(1, body.matches("The Sun").count());
    assert_eq!(1, body.matches("Earth").count());
}

#[sqlx::test]
async fn test_destination_detail(pool: sqlx::PgPool) {
    let database = helper::setup_test_database(pool.clone()).await;
    helper::seed_sample_data(&database).await;

    let mut app = helper::setup_test_app(pool).await;

    let (status_code, body) = helper::get_page(&mut app, "/destination/1").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("The Sun"));

    // the cruises visiting the destination are linked
    assert!(body.contains("The Sun and Earth"));
    assert!(body.contains("/cruise/1"));
}

#[sqlx::test]
async fn test_destination_detail_not_found(pool: sqlx::PgPool) {
    let database = helper::setup_test_database(pool.clone()).await;
    helper::seed_sample_data(&database).await;

    let mut app = helper::setup_test_app(pool).await;

    let (status_code, body) = helper::get_page(&mut app, "/destination/999").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert!(body.contains("Destination not found"));
}

#[sqlx::test]
async fn test_destination_detail_with_invalid_id(pool: sqlx::PgPool) {
    let mut app = helper::setup_test_app(pool).await;

    let (status_code, _) = helper::get_page(&mut app, "/destination/not-a-number").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
}
