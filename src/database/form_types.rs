//! Form types

/// Values to create a Destination
///
/// Destinations are only created by the seeder, which brings its own
/// primary key
pub struct CreateDestinationValues<'a> {
    /// Explicit primary key from the seed data
    pub id: i64,

    /// The name of the destination
    pub name: &'a str,

    /// An optional subtitle
    pub subtitle: Option<&'a str>,

    /// An optional longer description
    pub description: Option<&'a str>,
}

/// Values to create a Cruise
///
/// Cruises are only created by the seeder, which brings its own primary key
pub struct CreateCruiseValues<'a> {
    /// Explicit primary key from the seed data
    pub id: i64,

    /// The name of the cruise
    pub name: &'a str,

    /// An optional subtitle
    pub subtitle: Option<&'a str>,

    /// An optional longer description
    pub description: Option<&'a str>,
}

/// Values to create an InfoRequest
pub struct CreateInfoRequestValues<'a> {
    /// Name of the customer
    pub name: &'a str,

    /// Email address to send more information to
    pub email: &'a str,

    /// Free text notes from the customer
    ///
    /// Can be anything
    pub notes: &'a str,

    /// The cruise the customer wants to hear about
    ///
    /// Must reference an existing cruise, the foreign key is the source
    /// of truth
    pub cruise_id: i64,
}
