use crate::aircraft::Aircraft;
use crate::error::{AirportError, ModelError};
use crate::flight::Flight;
use crate::passenger::Passenger;
use crate::store::{Records, Store};
use crate::time;
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;
use tracing::info;

mod seed;

pub use seed::{Scenario, SeedReport};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    FlightFull,
    AlreadyBooked,
    FlightCancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub aircraft: usize,
    pub passengers: usize,
    pub flights: usize,
    pub active_flights: usize,
    pub cancelled_flights: usize,
    /// Mean occupancy of active flights, `None` when there are none.
    pub average_occupancy: Option<f64>,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total aircraft: {}", self.aircraft)?;
        writeln!(f, "Total passengers: {}", self.passengers)?;
        writeln!(f, "Total flights: {}", self.flights)?;
        writeln!(f, "Active flights: {}", self.active_flights)?;
        write!(f, "Cancelled flights: {}", self.cancelled_flights)?;
        if let Some(avg) = self.average_occupancy {
            write!(f, "\nAverage occupancy: {avg:.1}%")?;
        }
        Ok(())
    }
}

/// A working session over the airport records.
///
/// The in-memory collections are authoritative while the session is open;
/// every mutating call saves the affected row before returning.
pub struct Airport {
    store: Store,
    records: Records,
}

impl Airport {
    pub fn open(store: Store) -> Result<Airport, AirportError> {
        store.init()?;
        let records = store.load_all()?;
        info!(path = %store.path().display(), "airport session opened");
        Ok(Airport { store, records })
    }

    pub fn close(self) {
        info!(path = %self.store.path().display(), "airport session closed");
    }

    pub fn aircraft(&self) -> &[Rc<Aircraft>] {
        &self.records.aircraft
    }

    pub fn available_aircraft(&self) -> Vec<&Rc<Aircraft>> {
        self.records
            .aircraft
            .iter()
            .filter(|a| a.is_available())
            .collect()
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.records.passengers
    }

    pub fn flights(&self) -> &[Flight] {
        &self.records.flights
    }

    pub fn active_flights(&self) -> Vec<&Flight> {
        self.records
            .flights
            .iter()
            .filter(|f| !f.is_cancelled())
            .collect()
    }

    pub fn find_aircraft(&self, registration: &str) -> Option<&Rc<Aircraft>> {
        self.records
            .aircraft
            .iter()
            .find(|a| &**a.registration() == registration)
    }

    pub fn find_passenger(&self, passport: &str) -> Option<&Passenger> {
        self.records
            .passengers
            .iter()
            .find(|p| &**p.passport() == passport)
    }

    pub fn find_flight(&self, number: &str) -> Option<&Flight> {
        self.records.flights.iter().find(|f| f.number() == number)
    }

    /// Passengers currently seated on the flight, in booking order.
    pub fn roster(&self, flight: &Flight) -> Vec<&Passenger> {
        flight
            .passengers()
            .iter()
            .filter_map(|passport| self.find_passenger(passport))
            .collect()
    }

    pub fn add_aircraft(
        &mut self,
        model: &str,
        capacity: u32,
        registration: &str,
    ) -> Result<Rc<Aircraft>, AirportError> {
        let aircraft = Rc::new(Aircraft::new(model, capacity, registration)?);
        if self.find_aircraft(aircraft.registration()).is_some() {
            return Err(AirportError::DuplicateAircraft(registration.to_string()));
        }
        self.store.upsert_aircraft(&aircraft)?;
        self.records.aircraft.push(aircraft.clone());
        Ok(aircraft)
    }

    pub fn add_passenger(
        &mut self,
        passport: &str,
        name: &str,
        surname: &str,
        patronymic: &str,
        date_of_birth: &str,
    ) -> Result<&Passenger, AirportError> {
        let passenger = Passenger::new(passport, name, surname, patronymic, date_of_birth)?;
        if self.find_passenger(passenger.passport()).is_some() {
            return Err(AirportError::DuplicatePassenger(passport.to_string()));
        }
        self.store.upsert_passenger(&passenger)?;
        self.records.passengers.push(passenger);
        Ok(&self.records.passengers[self.records.passengers.len() - 1])
    }

    pub fn create_flight(
        &mut self,
        number: &str,
        departure: &str,
        destination: &str,
        departure_time: &str,
        registration: &str,
        duration_min: u32,
    ) -> Result<&Flight, AirportError> {
        if departure.trim().is_empty() {
            return Err(ModelError::Empty("departure").into());
        }
        if destination.trim().is_empty() {
            return Err(ModelError::Empty("destination").into());
        }
        if self.find_flight(number.trim()).is_some() {
            return Err(AirportError::DuplicateFlight(number.trim().to_string()));
        }
        let aircraft = self
            .find_aircraft(registration)
            .ok_or_else(|| AirportError::AircraftNotFound(registration.to_string()))?;
        if !aircraft.is_available() {
            return Err(AirportError::AircraftUnavailable(registration.to_string()));
        }
        let flight = Flight::new(
            number,
            departure.trim(),
            destination.trim(),
            departure_time,
            aircraft.clone(),
            duration_min,
        )?;
        self.store.upsert_flight(&flight)?;
        self.records.flights.push(flight);
        Ok(&self.records.flights[self.records.flights.len() - 1])
    }

    pub fn cancel_flight(&mut self, number: &str) -> Result<(), AirportError> {
        let flight = self
            .records
            .flights
            .iter_mut()
            .find(|f| f.number() == number)
            .ok_or_else(|| AirportError::FlightNotFound(number.to_string()))?;
        if flight.is_cancelled() {
            return Err(AirportError::FlightCancelled(number.to_string()));
        }
        flight.cancel_flight();
        self.store.upsert_flight(flight)?;
        Ok(())
    }

    /// Books an existing passenger on an existing flight and records the
    /// booking row when a seat was taken.
    pub fn book_passenger(
        &mut self,
        number: &str,
        passport: &str,
    ) -> Result<BookingOutcome, AirportError> {
        let flight = self
            .records
            .flights
            .iter_mut()
            .find(|f| f.number() == number)
            .ok_or_else(|| AirportError::FlightNotFound(number.to_string()))?;
        let passenger = self
            .records
            .passengers
            .iter_mut()
            .find(|p| &**p.passport() == passport)
            .ok_or_else(|| AirportError::PassengerNotFound(passport.to_string()))?;

        if flight.is_cancelled() {
            return Ok(BookingOutcome::FlightCancelled);
        }
        if flight.contains(passport) {
            return Ok(BookingOutcome::AlreadyBooked);
        }
        if !flight.add_passenger(passenger) {
            return Ok(BookingOutcome::FlightFull);
        }
        self.store
            .insert_booking(flight.number(), passport, &time::booking_timestamp())?;
        Ok(BookingOutcome::Booked)
    }

    pub fn statistics(&self) -> Statistics {
        let active = self.active_flights();
        let average_occupancy = if active.is_empty() {
            None
        } else {
            let total: f64 = active.iter().map(|f| f.occupancy_rate()).sum();
            Some(total / active.len() as f64)
        };
        Statistics {
            aircraft: self.records.aircraft.len(),
            passengers: self.records.passengers.len(),
            flights: self.records.flights.len(),
            active_flights: active.len(),
            cancelled_flights: self.records.flights.len() - active.len(),
            average_occupancy,
        }
    }
}
