use crate::aircraft::Aircraft;
use crate::flight::Flight;
use crate::passenger::Passenger;
use crate::store::schema::{aircrafts, bookings, flights, passengers};
use crate::time;
use diesel::prelude::*;

/// Diesel model for the aircrafts table
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = aircrafts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AircraftRow {
    pub registration: String,
    pub model: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = passengers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PassengerRow {
    pub passport: String,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    /// YYYY-MM-DD
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = flights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FlightRow {
    pub flight_number: String,
    pub departure: String,
    pub destination: String,
    /// YYYY-MM-DD HH:MM
    pub departure_time: String,
    pub aircraft_registration: String,
    pub duration_minutes: i32,
    /// 0 or 1
    pub is_cancelled: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingRow {
    pub id: i32,
    pub flight_number: String,
    pub passenger_passport: String,
    pub booking_time: String,
}

/// Insert model for bookings, the id is assigned by the database
#[derive(Debug, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking<'a> {
    pub flight_number: &'a str,
    pub passenger_passport: &'a str,
    pub booking_time: &'a str,
}

impl From<&Aircraft> for AircraftRow {
    fn from(aircraft: &Aircraft) -> Self {
        Self {
            registration: aircraft.registration().to_string(),
            model: aircraft.model().to_string(),
            capacity: i32::try_from(aircraft.capacity()).unwrap_or(i32::MAX),
        }
    }
}

impl From<&Passenger> for PassengerRow {
    fn from(passenger: &Passenger) -> Self {
        Self {
            passport: passenger.passport().to_string(),
            name: passenger.name().to_string(),
            surname: passenger.surname().to_string(),
            patronymic: passenger.patronymic().to_string(),
            date_of_birth: time::format_date(passenger.date_of_birth()),
        }
    }
}

impl From<&Flight> for FlightRow {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.number().to_string(),
            departure: flight.departure().to_string(),
            destination: flight.destination().to_string(),
            departure_time: time::format_departure(flight.departure_time()),
            aircraft_registration: flight.aircraft().registration().to_string(),
            duration_minutes: i32::try_from(flight.duration_min()).unwrap_or(i32::MAX),
            is_cancelled: i32::from(flight.is_cancelled()),
        }
    }
}
