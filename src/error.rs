use thiserror::Error;

/// Input that cannot become an entity.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid departure time '{0}', expected YYYY-MM-DD HH:MM")]
    InvalidDateTime(String),
    #[error("aircraft capacity must be positive")]
    ZeroCapacity,
    #[error("flight duration must be positive")]
    ZeroDuration,
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database path {0} is not valid UTF-8")]
    InvalidPath(String),
    #[error("cannot open database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("schema migration failed: {0}")]
    Migration(String),
    #[error("corrupt {table} row '{key}': {source}")]
    CorruptRow {
        table: &'static str,
        key: String,
        source: ModelError,
    },
}

#[derive(Debug, Error)]
pub enum AirportError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("aircraft {0} already exists")]
    DuplicateAircraft(String),
    #[error("passenger with passport {0} already exists")]
    DuplicatePassenger(String),
    #[error("flight {0} already exists")]
    DuplicateFlight(String),
    #[error("aircraft {0} not found")]
    AircraftNotFound(String),
    #[error("aircraft {0} is not available")]
    AircraftUnavailable(String),
    #[error("passenger with passport {0} not found")]
    PassengerNotFound(String),
    #[error("flight {0} not found")]
    FlightNotFound(String),
    #[error("flight {0} is already cancelled")]
    FlightCancelled(String),
}
