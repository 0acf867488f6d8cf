use sqlx::FromRow;

/// A place cruises visit
#[derive(Clone, Debug, FromRow)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}
