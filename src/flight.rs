use crate::aircraft::Aircraft;
use crate::error::ModelError;
use crate::passenger::{Passenger, Passport};
use crate::time;
use chrono::{Duration, NaiveDateTime};
use std::fmt;
use std::fmt::Formatter;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Scheduled,
    Cancelled,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Scheduled => write!(f, "Scheduled"),
            FlightStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug)]
pub struct Flight {
    number: String,
    departure: String,
    destination: String,
    departure_time: NaiveDateTime,
    aircraft: Rc<Aircraft>,
    duration_min: u32,
    passengers: Vec<Passport>,
    status: FlightStatus,
}

impl Flight {
    pub fn new(
        number: &str,
        departure: &str,
        destination: &str,
        departure_time: &str,
        aircraft: Rc<Aircraft>,
        duration_min: u32,
    ) -> Result<Flight, ModelError> {
        if number.trim().is_empty() {
            return Err(ModelError::Empty("flight number"));
        }
        if duration_min == 0 {
            return Err(ModelError::ZeroDuration);
        }
        Ok(Flight {
            number: number.trim().to_string(),
            departure: departure.to_string(),
            destination: destination.to_string(),
            departure_time: time::parse_departure(departure_time)?,
            aircraft,
            duration_min,
            passengers: Vec::new(),
            status: FlightStatus::Scheduled,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn departure(&self) -> &str {
        &self.departure
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> NaiveDateTime {
        self.departure_time + Duration::minutes(i64::from(self.duration_min))
    }

    pub fn aircraft(&self) -> &Rc<Aircraft> {
        &self.aircraft
    }

    pub fn duration_min(&self) -> u32 {
        self.duration_min
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == FlightStatus::Cancelled
    }

    pub fn passenger_count(&self) -> u32 {
        self.passengers.len() as u32
    }

    pub fn available_seats(&self) -> u32 {
        self.aircraft.capacity().saturating_sub(self.passenger_count())
    }

    pub fn occupancy_rate(&self) -> f64 {
        f64::from(self.passenger_count()) / f64::from(self.aircraft.capacity()) * 100.0
    }

    /// Roster in booking order.
    pub fn passengers(&self) -> &[Passport] {
        &self.passengers
    }

    pub fn contains(&self, passport: &str) -> bool {
        self.passengers.iter().any(|p| &**p == passport)
    }

    /// Seats the passenger and records the flight in their booking history.
    ///
    /// Returns `false` when the flight is full or the passenger already holds
    /// a seat. Cancellation is not checked here.
    pub fn add_passenger(&mut self, passenger: &mut Passenger) -> bool {
        if self.passenger_count() >= self.aircraft.capacity() {
            return false;
        }
        if self.contains(passenger.passport()) {
            return false;
        }
        self.passengers.push(passenger.passport().clone());
        passenger.book_flight(&self.number);
        true
    }

    pub fn remove_passenger(&mut self, passenger: &Passenger) {
        self.passengers.retain(|p| p != passenger.passport());
    }

    pub fn cancel_flight(&mut self) {
        self.status = FlightStatus::Cancelled;
        self.passengers.clear();
    }

    pub fn info(&self) -> String {
        format!(
            "Flight No. {}\n\
             From: {}, departs: {}\n\
             To: {}, arrives: {}\n\
             Duration (min): {}\n\
             Aircraft: {}\n\
             Passengers: {}/{}, {:.1}%\n\
             Status: {}",
            self.number,
            self.departure,
            time::format_departure(self.departure_time),
            self.destination,
            time::format_departure(self.arrival_time()),
            self.duration_min,
            self.aircraft.model(),
            self.passenger_count(),
            self.aircraft.capacity(),
            self.occupancy_rate(),
            self.status,
        )
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({})",
            self.number, self.departure, self.destination, self.status
        )
    }
}
