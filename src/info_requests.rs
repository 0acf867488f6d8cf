use chrono::naive::NaiveDateTime;
use sqlx::FromRow;

/// A customer's request for more information about a cruise
///
/// Created by the info request form, never updated or deleted
#[derive(Clone, Debug, FromRow)]
pub struct InfoRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub notes: String,
    pub cruise_id: i64,
    pub created_at: NaiveDateTime,
}
