use sqlx::FromRow;

/// A bookable trip visiting one or more destinations
#[derive(Clone, Debug, FromRow)]
pub struct Cruise {
    pub id: i64,
    pub name: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}
