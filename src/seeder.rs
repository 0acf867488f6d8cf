//! Seed loader
//!
//! One-time bulk importer populating destinations and cruises from a JSON
//! description, run out-of-band through the `seed` subcommand

use core::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::database;
use crate::database::CreateCruiseValues;
use crate::database::CreateDestinationValues;
use crate::database::Database;

/// Model discriminator for destination records
const MODEL_DESTINATION: &str = "relecloud.destination";

/// Model discriminator for cruise records
const MODEL_CRUISE: &str = "relecloud.cruise";

/// Seeding errors
#[derive(Debug)]
pub enum Error {
    /// The seed file could not be read or parsed
    InvalidSeedFile(String),

    /// A cruise references a destination that does not exist
    MissingDestination {
        /// Primary key of the cruise record being seeded
        cruise: i64,

        /// The referenced destination id that could not be found
        destination: i64,
    },

    /// A storage error
    Database(database::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSeedFile(error) => write!(f, "Invalid seed file: {error}"),
            Error::MissingDestination {
                cruise,
                destination,
            } => write!(
                f,
                "Destination with id {destination} not found, referenced by cruise {cruise}"
            ),
            Error::Database(error) => write!(f, "{error}"),
        }
    }
}

/// Result type for all seeding operations
pub type Result<T> = core::result::Result<T, Error>;

/// A single record of the seed data
#[derive(Debug, Deserialize)]
pub struct SeedRecord {
    /// Model discriminator, `relecloud.destination` or `relecloud.cruise`
    pub model: String,

    /// Explicit primary key
    pub pk: i64,

    /// Payload of fields
    pub fields: SeedFields,
}

/// Fields of a seed record
#[derive(Debug, Deserialize)]
pub struct SeedFields {
    /// Name of the destination or cruise
    pub name: String,

    /// An optional subtitle
    #[serde(default)]
    pub subtitle: Option<String>,

    /// An optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Destination ids a cruise visits
    ///
    /// Destination records leave this empty
    #[serde(default)]
    pub destinations: Vec<i64>,
}

/// Seed the database from a JSON file
pub async fn seed_from_file(database: &Database, filename: &Path) -> Result<()> {
    let contents =
        std::fs::read_to_string(filename).map_err(|err| Error::InvalidSeedFile(err.to_string()))?;

    let records = serde_json::from_str::<Vec<SeedRecord>>(&contents)
        .map_err(|err| Error::InvalidSeedFile(err.to_string()))?;

    seed_records(database, &records).await
}

/// Seed the database with a sequence of records
///
/// Records are processed in input order and committed one by one, so a
/// cruise can reference destinations seeded earlier in the same run.
/// Records with an existing primary key are skipped, repeated seeding
/// never updates existing rows.
///
/// A cruise referencing a destination that does not exist aborts the
/// whole run before that cruise is inserted.
pub async fn seed_records(database: &Database, records: &[SeedRecord]) -> Result<()> {
    for record in records {
        match record.model.as_str() {
            MODEL_DESTINATION => seed_destination(database, record).await?,
            MODEL_CRUISE => seed_cruise(database, record).await?,
            model => {
                tracing::warn!("Skipping record {} with unknown model: {model}", record.pk);
            }
        }
    }

    Ok(())
}

/// Seed a single destination record
async fn seed_destination(database: &Database, record: &SeedRecord) -> Result<()> {
    let existing = database
        .find_single_destination_by_id(record.pk)
        .await
        .map_err(Error::Database)?;

    if existing.is_some() {
        tracing::debug!("Destination {} already exists, skipping", record.pk);

        return Ok(());
    }

    let values = CreateDestinationValues {
        id: record.pk,
        name: &record.fields.name,
        subtitle: record.fields.subtitle.as_deref(),
        description: record.fields.description.as_deref(),
    };

    let destination = database
        .create_destination(&values)
        .await
        .map_err(Error::Database)?;

    tracing::debug!("Seeded destination {}: {}", destination.id, destination.name);

    Ok(())
}

/// Seed a single cruise record with its destination links
///
/// Every referenced destination is resolved before the cruise row is
/// inserted, a missing one fails the run fast
async fn seed_cruise(database: &Database, record: &SeedRecord) -> Result<()> {
    let existing = database
        .find_single_cruise_by_id(record.pk)
        .await
        .map_err(Error::Database)?;

    if existing.is_some() {
        tracing::debug!("Cruise {} already exists, skipping", record.pk);

        return Ok(());
    }

    let mut destinations = Vec::with_capacity(record.fields.destinations.len());

    for destination_id in &record.fields.destinations {
        let destination = database
            .find_single_destination_by_id(*destination_id)
            .await
            .map_err(Error::Database)?;

        match destination {
            Some(destination) => destinations.push(destination),
            None => {
                return Err(Error::MissingDestination {
                    cruise: record.pk,
                    destination: *destination_id,
                });
            }
        }
    }

    let values = CreateCruiseValues {
        id: record.pk,
        name: &record.fields.name,
        subtitle: record.fields.subtitle.as_deref(),
        description: record.fields.description.as_deref(),
    };

    let cruise = database
        .create_cruise(&values)
        .await
        .map_err(Error::Database)?;

    for destination in &destinations {
        database
            .link_cruise_to_destination(&cruise, destination)
            .await
            .map_err(Error::Database)?;
    }

    tracing::debug!(
        "Seeded cruise {}: {} ({} destinations)",
        cruise.id,
        cruise.name,
        destinations.len()
    );

    Ok(())
}
