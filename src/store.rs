use crate::aircraft::Aircraft;
use crate::error::{ModelError, StoreError};
use crate::flight::Flight;
use crate::passenger::Passenger;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use models::{AircraftRow, BookingRow, FlightRow, NewBooking, PassengerRow};
use schema::{aircrafts, bookings, flights, passengers};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info, warn};

pub mod models;
pub mod schema;


pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// The in-memory entity set rebuilt from the store.
#[derive(Debug, Default)]
pub struct Records {
    pub aircraft: Vec<Rc<Aircraft>>,
    pub passengers: Vec<Passenger>,
    pub flights: Vec<Flight>,
}

/// SQLite-backed persistence. Holds only the database location: every
/// operation opens its own connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Store {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<SqliteConnection, StoreError> {
        let url = self
            .path
            .to_str()
            .ok_or_else(|| StoreError::InvalidPath(self.path.display().to_string()))?;
        let mut conn = SqliteConnection::establish(url)?;
        // Foreign keys are declared in the schema but never enforced.
        diesel::sql_query("PRAGMA foreign_keys = OFF").execute(&mut conn)?;
        Ok(conn)
    }

    /// Creates the four tables if they do not exist yet.
    pub fn init(&self) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        if !applied.is_empty() {
            info!(path = %self.path.display(), migrations = applied.len(), "initialized schema");
        }
        Ok(())
    }

    pub fn upsert_aircraft(&self, aircraft: &Aircraft) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        diesel::replace_into(aircrafts::table)
            .values(&AircraftRow::from(aircraft))
            .execute(&mut conn)?;
        info!(registration = %aircraft.registration(), "saved aircraft");
        Ok(())
    }

    pub fn upsert_passenger(&self, passenger: &Passenger) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        diesel::replace_into(passengers::table)
            .values(&PassengerRow::from(passenger))
            .execute(&mut conn)?;
        info!(passport = %passenger.passport(), "saved passenger");
        Ok(())
    }

    pub fn upsert_flight(&self, flight: &Flight) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        diesel::replace_into(flights::table)
            .values(&FlightRow::from(flight))
            .execute(&mut conn)?;
        info!(flight = flight.number(), cancelled = flight.is_cancelled(), "saved flight");
        Ok(())
    }

    /// Appends a booking row. Bookings are never updated or deleted.
    pub fn insert_booking(
        &self,
        flight_number: &str,
        passport: &str,
        booking_time: &str,
    ) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        diesel::insert_into(bookings::table)
            .values(&NewBooking {
                flight_number,
                passenger_passport: passport,
                booking_time,
            })
            .execute(&mut conn)?;
        info!(flight = flight_number, passport, "saved booking");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn load_bookings(&self) -> Result<Vec<BookingRow>, StoreError> {
        let mut conn = self.connect()?;
        Ok(booking_rows(&mut conn)?)
    }

    /// Reads every table and rebuilds the linked entity set.
    ///
    /// Flights whose aircraft is missing and bookings whose flight or
    /// passenger is missing are skipped. On an active flight a booking extends
    /// the passenger's history only when the seat is taken again; on a
    /// cancelled flight it extends the history without re-seating.
    pub fn load_all(&self) -> Result<Records, StoreError> {
        let mut conn = self.connect()?;
        let aircraft_rows: Vec<AircraftRow> = aircrafts::table
            .select(AircraftRow::as_select())
            .load(&mut conn)?;
        let passenger_rows: Vec<PassengerRow> = passengers::table
            .select(PassengerRow::as_select())
            .load(&mut conn)?;
        let flight_rows: Vec<FlightRow> = flights::table
            .select(FlightRow::as_select())
            .load(&mut conn)?;
        let booking_rows = booking_rows(&mut conn)?;
        drop(conn);

        let mut records = Records::default();

        for row in aircraft_rows {
            let capacity = u32::try_from(row.capacity).unwrap_or(0);
            let aircraft = Aircraft::new(&row.model, capacity, &row.registration)
                .map_err(|source| corrupt("aircrafts", &row.registration, source))?;
            records.aircraft.push(Rc::new(aircraft));
        }

        for row in passenger_rows {
            let passenger = Passenger::new(
                &row.passport,
                &row.name,
                &row.surname,
                &row.patronymic,
                &row.date_of_birth,
            )
            .map_err(|source| corrupt("passengers", &row.passport, source))?;
            records.passengers.push(passenger);
        }

        for row in flight_rows {
            let Some(aircraft) = records
                .aircraft
                .iter()
                .find(|a| &**a.registration() == row.aircraft_registration)
            else {
                warn!(
                    flight = %row.flight_number,
                    registration = %row.aircraft_registration,
                    "skipping flight with unknown aircraft"
                );
                continue;
            };
            let duration = u32::try_from(row.duration_minutes).unwrap_or(0);
            let mut flight = Flight::new(
                &row.flight_number,
                &row.departure,
                &row.destination,
                &row.departure_time,
                aircraft.clone(),
                duration,
            )
            .map_err(|source| corrupt("flights", &row.flight_number, source))?;
            if row.is_cancelled != 0 {
                flight.cancel_flight();
            }
            records.flights.push(flight);
        }

        for row in booking_rows {
            let flight = records
                .flights
                .iter_mut()
                .find(|f| f.number() == row.flight_number);
            let passenger = records
                .passengers
                .iter_mut()
                .find(|p| &**p.passport() == row.passenger_passport);
            let (Some(flight), Some(passenger)) = (flight, passenger) else {
                warn!(
                    booking = row.id,
                    flight = %row.flight_number,
                    passport = %row.passenger_passport,
                    "skipping booking with unknown flight or passenger"
                );
                continue;
            };
            if flight.is_cancelled() {
                passenger.book_flight(flight.number());
            } else if !flight.add_passenger(passenger) {
                debug!(booking = row.id, flight = flight.number(), "booking not re-seated");
            }
        }

        info!(
            aircraft = records.aircraft.len(),
            passengers = records.passengers.len(),
            flights = records.flights.len(),
            "loaded records"
        );
        Ok(records)
    }
}

/// Bookings in insertion order.
fn booking_rows(conn: &mut SqliteConnection) -> QueryResult<Vec<BookingRow>> {
    bookings::table
        .order(bookings::id.asc())
        .select(BookingRow::as_select())
        .load(conn)
}

fn corrupt(table: &'static str, key: &str, source: ModelError) -> StoreError {
    StoreError::CorruptRow {
        table,
        key: key.to_string(),
        source,
    }
}
