use crate::airport::{Airport, BookingOutcome};
use crate::error::AirportError;
use serde::Deserialize;
use std::io;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct SeedAircraft {
    pub model: String,
    pub capacity: u32,
    pub registration: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedPassenger {
    pub passport: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    pub date_of_birth: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedFlight {
    pub number: String,
    pub departure: String,
    pub destination: String,
    pub departure_time: String,
    pub aircraft: String,
    pub duration_min: u32,
    #[serde(default)]
    pub cancelled: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedBooking {
    pub flight: String,
    pub passport: String,
}

/// Records to import at startup, read from a JSON file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub aircraft: Vec<SeedAircraft>,
    pub passengers: Vec<SeedPassenger>,
    pub flights: Vec<SeedFlight>,
    pub bookings: Vec<SeedBooking>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub added: usize,
    pub skipped: usize,
}

impl Scenario {
    pub fn load_from_file(path: &Path) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl Airport {
    /// Applies a scenario through the regular operations, so every record is
    /// validated and saved like menu input. Records that already exist are
    /// skipped.
    pub fn apply_scenario(&mut self, scenario: &Scenario) -> Result<SeedReport, AirportError> {
        let mut report = SeedReport::default();

        for a in &scenario.aircraft {
            match self.add_aircraft(&a.model, a.capacity, &a.registration) {
                Ok(_) => report.added += 1,
                Err(AirportError::DuplicateAircraft(reg)) => {
                    debug!(registration = %reg, "aircraft already present");
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        for p in &scenario.passengers {
            match self.add_passenger(
                &p.passport,
                &p.name,
                &p.surname,
                &p.patronymic,
                &p.date_of_birth,
            ) {
                Ok(_) => report.added += 1,
                Err(AirportError::DuplicatePassenger(passport)) => {
                    debug!(passport = %passport, "passenger already present");
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        for f in &scenario.flights {
            match self.create_flight(
                &f.number,
                &f.departure,
                &f.destination,
                &f.departure_time,
                &f.aircraft,
                f.duration_min,
            ) {
                Ok(_) => report.added += 1,
                Err(AirportError::DuplicateFlight(number)) => {
                    debug!(flight = %number, "flight already present");
                    report.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            }
            if f.cancelled {
                self.cancel_flight(&f.number)?;
            }
        }

        for b in &scenario.bookings {
            match self.book_passenger(&b.flight, &b.passport)? {
                BookingOutcome::Booked => report.added += 1,
                outcome => {
                    debug!(
                        flight = %b.flight,
                        passport = %b.passport,
                        ?outcome,
                        "booking not applied"
                    );
                    report.skipped += 1;
                }
            }
        }

        info!(added = report.added, skipped = report.skipped, "applied scenario");
        Ok(report)
    }
}
