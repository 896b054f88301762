use crate::airport::Airport;
use crate::store::Store;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use tempfile::TempDir;

pub fn open_airport() -> (TempDir, Airport) {
    let dir = tempfile::tempdir().unwrap();
    let airport = Airport::open(Store::new(dir.path().join("airport.db"))).unwrap();
    (dir, airport)
}

pub fn reopen(dir: &TempDir) -> Airport {
    Airport::open(Store::new(dir.path().join("airport.db"))).unwrap()
}

pub fn add_aircraft(airport: &mut Airport, registration: &str, capacity: u32) {
    airport
        .add_aircraft("Boeing 737", capacity, registration)
        .unwrap();
}

pub fn add_passenger(airport: &mut Airport, passport: &str) {
    airport
        .add_passenger(passport, "Ivan", "Petrov", "Ivanovich", "1985-05-15")
        .unwrap();
}

pub fn add_flight(airport: &mut Airport, number: &str, registration: &str) {
    airport
        .create_flight(number, "Moscow", "SPB", "2025-01-20 08:00", registration, 90)
        .unwrap();
}

/// One aircraft of the given capacity with flight SU-1001 on it.
pub fn airport_with_flight(capacity: u32) -> (TempDir, Airport) {
    let (dir, mut airport) = open_airport();
    add_aircraft(&mut airport, "RA-73651", capacity);
    add_flight(&mut airport, "SU-1001", "RA-73651");
    (dir, airport)
}

pub fn arb_passport() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AB000001".to_string()),
        Just("AB000002".to_string()),
        Just("AB000003".to_string()),
        Just("AB000004".to_string()),
    ]
}
