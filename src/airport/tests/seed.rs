use crate::airport::{Scenario, SeedReport};
use crate::airport::tests::utils::{open_airport, reopen};
use std::io::Write;

const SCENARIO: &str = r#"{
    "aircraft": [
        {"model": "Boeing 737", "capacity": 2, "registration": "RA-73651"},
        {"model": "Airbus A320", "capacity": 150, "registration": "RA-32042"}
    ],
    "passengers": [
        {"passport": "AB123456", "name": "Ivan", "surname": "Petrov", "patronymic": "Ivanovich", "date_of_birth": "1985-05-15"},
        {"passport": "CD789012", "name": "Maria", "surname": "Ivanova", "date_of_birth": "1990-08-22"}
    ],
    "flights": [
        {"number": "SU-1001", "departure": "Moscow", "destination": "SPB", "departure_time": "2025-01-20 08:00", "aircraft": "RA-73651", "duration_min": 90},
        {"number": "SU-1002", "departure": "SPB", "destination": "Moscow", "departure_time": "2025-01-20 12:00", "aircraft": "RA-32042", "duration_min": 95, "cancelled": true}
    ],
    "bookings": [
        {"flight": "SU-1001", "passport": "AB123456"},
        {"flight": "SU-1001", "passport": "CD789012"},
        {"flight": "SU-1002", "passport": "AB123456"}
    ]
}"#;

fn scenario() -> Scenario {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();
    Scenario::load_from_file(file.path()).unwrap()
}

#[test]
fn test_apply_scenario() {
    let (dir, mut airport) = open_airport();
    let report = airport.apply_scenario(&scenario()).unwrap();
    assert_eq!(report, SeedReport { added: 8, skipped: 1 });
    airport.close();

    let airport = reopen(&dir);
    assert_eq!(airport.find_passenger("CD789012").unwrap().patronymic(), "");
    assert_eq!(airport.find_flight("SU-1001").unwrap().passenger_count(), 2);
    assert!(airport.find_flight("SU-1002").unwrap().is_cancelled());
}

#[test]
fn test_reapplying_scenario_skips_existing_records() {
    let (_dir, mut airport) = open_airport();
    let scenario = scenario();
    airport.apply_scenario(&scenario).unwrap();
    let report = airport.apply_scenario(&scenario).unwrap();
    assert_eq!(report, SeedReport { added: 0, skipped: 9 });
    assert_eq!(airport.find_flight("SU-1001").unwrap().passenger_count(), 2);
}

#[test]
fn test_malformed_scenario_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"aircraft\": [{\"model\": 1}]}").unwrap();
    assert!(Scenario::load_from_file(file.path()).is_err());
}
