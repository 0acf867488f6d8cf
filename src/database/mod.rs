//! All things related to the storage of destinations, cruises and info
//! requests

use core::fmt;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub use form_types::*;
pub use Config as DatabaseConfig;

use crate::cruises::Cruise;
use crate::destinations::Destination;
use crate::info_requests::InfoRequest;
use crate::utils::env_var_or_else;

mod form_types;

/// Migrator to run migrations on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Storage errors
#[derive(Debug)]
pub enum Error {
    /// A connection error with the storage
    Connection(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Connection(error) => write!(f, "Connection error: {error}"),
        }
    }
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Database configuration
pub enum Config {
    /// Detect configuration from environment
    DetectConfig,

    /// Use existing connection
    ExistingConnection(PgPool),
}

/// Postgres storage
#[derive(Clone)]
pub struct Database {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Database {
    /// Create a new Postgres storage
    pub async fn from_config(config: Config) -> Self {
        match config {
            Config::DetectConfig => Self::new().await,
            Config::ExistingConnection(pool) => Self::new_with_pool(pool).await,
        }
    }

    /// Create Postgres storage
    ///
    /// Uses the `DATABASE_URL` environment variable, or assembles a
    /// connection string from the `POSTGRES_*` variables
    ///
    /// Migrations will be run
    async fn new() -> Self {
        let database_connection_string = database_url();

        let connection_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_connection_string)
            .await
            .expect("Valid connection");

        Self::new_with_pool(connection_pool).await
    }

    /// Create Postgres storage with existing pool
    ///
    /// Migrations will be run
    async fn new_with_pool(connection_pool: PgPool) -> Self {
        let migration_result = MIGRATOR.run(&connection_pool).await;

        if let Err(err) = migration_result {
            panic!("Migrations could not run: {err}");
        }

        Self { connection_pool }
    }
}

impl Database {
    /// Find all destinations
    ///
    /// Ordered by id, which for seeded data is the input order
    pub async fn find_all_destinations(&self) -> Result<Vec<Destination>> {
        let destinations = sqlx::query_as::<_, Destination>(
            r"
            SELECT *
            FROM destination
            ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destinations)
    }

    /// Find a single destination by ID
    pub async fn find_single_destination_by_id(&self, id: i64) -> Result<Option<Destination>> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            SELECT *
            FROM destination
            WHERE id = $1
            LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    /// Find all cruises
    ///
    /// Ordered by id, which for seeded data is the input order
    pub async fn find_all_cruises(&self) -> Result<Vec<Cruise>> {
        let cruises = sqlx::query_as::<_, Cruise>(
            r"
            SELECT *
            FROM cruise
            ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(cruises)
    }

    /// Find a single cruise by ID
    pub async fn find_single_cruise_by_id(&self, id: i64) -> Result<Option<Cruise>> {
        let cruise = sqlx::query_as::<_, Cruise>(
            r"
            SELECT *
            FROM cruise
            WHERE id = $1
            LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(cruise)
    }

    /// Find all cruises visiting a destination
    ///
    /// Explicit join through the link table, related rows are never
    /// loaded implicitly
    pub async fn find_cruises_by_destination(
        &self,
        destination: &Destination,
    ) -> Result<Vec<Cruise>> {
        let cruises = sqlx::query_as::<_, Cruise>(
            r"
            SELECT cruise.*
            FROM cruise
            INNER JOIN cruise_destination_link
                ON cruise_destination_link.cruise_id = cruise.id
            WHERE cruise_destination_link.destination_id = $1
            ORDER BY cruise.id",
        )
        .bind(destination.id)
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(cruises)
    }

    /// Find all destinations a cruise visits
    ///
    /// Explicit join through the link table, related rows are never
    /// loaded implicitly
    pub async fn find_destinations_by_cruise(&self, cruise: &Cruise) -> Result<Vec<Destination>> {
        let destinations = sqlx::query_as::<_, Destination>(
            r"
            SELECT destination.*
            FROM destination
            INNER JOIN cruise_destination_link
                ON cruise_destination_link.destination_id = destination.id
            WHERE cruise_destination_link.cruise_id = $1
            ORDER BY destination.id",
        )
        .bind(cruise.id)
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destinations)
    }

    /// Create a destination with an explicit ID
    ///
    /// Committed on its own so records seeded later can reference it
    pub async fn create_destination(
        &self,
        values: &CreateDestinationValues<'_>,
    ) -> Result<Destination> {
        let destination = sqlx::query_as::<_, Destination>(
            r"
            INSERT INTO destination (id, name, subtitle, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *",
        )
        .bind(values.id)
        .bind(values.name)
        .bind(values.subtitle)
        .bind(values.description)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(destination)
    }

    /// Create a cruise with an explicit ID
    pub async fn create_cruise(&self, values: &CreateCruiseValues<'_>) -> Result<Cruise> {
        let cruise = sqlx::query_as::<_, Cruise>(
            r"
            INSERT INTO cruise (id, name, subtitle, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *",
        )
        .bind(values.id)
        .bind(values.name)
        .bind(values.subtitle)
        .bind(values.description)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(cruise)
    }

    /// Link a cruise to a destination it visits
    ///
    /// Both rows must already exist, the composite foreign key is the
    /// source of truth
    pub async fn link_cruise_to_destination(
        &self,
        cruise: &Cruise,
        destination: &Destination,
    ) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO cruise_destination_link (cruise_id, destination_id)
            VALUES ($1, $2)",
        )
        .bind(cruise.id)
        .bind(destination.id)
        .execute(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(())
    }

    /// Create an info request
    ///
    /// An unknown `cruise_id` violates the foreign key and surfaces as a
    /// storage error
    pub async fn create_info_request(
        &self,
        values: &CreateInfoRequestValues<'_>,
    ) -> Result<InfoRequest> {
        let info_request = sqlx::query_as::<_, InfoRequest>(
            r"
            INSERT INTO info_request (name, email, notes, cruise_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *",
        )
        .bind(values.name)
        .bind(values.email)
        .bind(values.notes)
        .bind(values.cruise_id)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(info_request)
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}

/// Resolve the database connection string
///
/// `DATABASE_URL` wins; without it the string is assembled from the
/// `POSTGRES_USERNAME`, `POSTGRES_PASSWORD`, `POSTGRES_HOST` and
/// `POSTGRES_DATABASE` variables
fn database_url() -> String {
    env_var_or_else("DATABASE_URL", || {
        let username = std::env::var("POSTGRES_USERNAME").expect("Valid POSTGRES_USERNAME");
        let password = std::env::var("POSTGRES_PASSWORD").expect("Valid POSTGRES_PASSWORD");
        let host = std::env::var("POSTGRES_HOST").expect("Valid POSTGRES_HOST");
        let database = std::env::var("POSTGRES_DATABASE").expect("Valid POSTGRES_DATABASE");

        format!("postgres://{username}:{password}@{host}/{database}")
    })
}
