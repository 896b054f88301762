use crate::airport::BookingOutcome::{AlreadyBooked, Booked, FlightCancelled, FlightFull};
use crate::airport::tests::utils::{add_passenger, airport_with_flight};
use crate::error::AirportError;

#[test]
fn test_end_to_end_capacity() {
    let (_dir, mut airport) = airport_with_flight(2);
    add_passenger(&mut airport, "AB123456");
    add_passenger(&mut airport, "CD789012");
    add_passenger(&mut airport, "EF345678");

    assert_eq!(airport.book_passenger("SU-1001", "AB123456").unwrap(), Booked);
    assert_eq!(airport.book_passenger("SU-1001", "CD789012").unwrap(), Booked);
    assert_eq!(airport.book_passenger("SU-1001", "EF345678").unwrap(), FlightFull);

    let flight = airport.find_flight("SU-1001").unwrap();
    assert_eq!(flight.available_seats(), 0);
    assert_eq!(flight.occupancy_rate(), 100.0);
    assert!(!flight.contains("EF345678"));
}

#[test]
fn test_duplicate_booking_is_refused() {
    let (_dir, mut airport) = airport_with_flight(3);
    add_passenger(&mut airport, "AB123456");

    assert_eq!(airport.book_passenger("SU-1001", "AB123456").unwrap(), Booked);
    assert_eq!(airport.book_passenger("SU-1001", "AB123456").unwrap(), AlreadyBooked);
    assert_eq!(airport.find_flight("SU-1001").unwrap().passenger_count(), 1);
    assert_eq!(
        airport.find_passenger("AB123456").unwrap().booked_flights(),
        vec!["SU-1001"]
    );
}

#[test]
fn test_cancelled_flight_refuses_bookings() {
    let (_dir, mut airport) = airport_with_flight(3);
    add_passenger(&mut airport, "AB123456");
    add_passenger(&mut airport, "CD789012");
    airport.book_passenger("SU-1001", "AB123456").unwrap();

    airport.cancel_flight("SU-1001").unwrap();
    assert_eq!(airport.book_passenger("SU-1001", "CD789012").unwrap(), FlightCancelled);

    let flight = airport.find_flight("SU-1001").unwrap();
    assert!(flight.is_cancelled());
    assert_eq!(flight.passenger_count(), 0);
    assert_eq!(
        airport.find_passenger("AB123456").unwrap().booked_flights(),
        vec!["SU-1001"]
    );
}

#[test]
fn test_unknown_flight_or_passenger() {
    let (_dir, mut airport) = airport_with_flight(3);
    add_passenger(&mut airport, "AB123456");

    assert!(matches!(
        airport.book_passenger("SU-404", "AB123456"),
        Err(AirportError::FlightNotFound(n)) if n == "SU-404"
    ));
    assert!(matches!(
        airport.book_passenger("SU-1001", "ZZ000000"),
        Err(AirportError::PassengerNotFound(p)) if p == "ZZ000000"
    ));
}

#[test]
fn test_roster_resolves_passengers_in_booking_order() {
    let (_dir, mut airport) = airport_with_flight(3);
    add_passenger(&mut airport, "CD789012");
    add_passenger(&mut airport, "AB123456");
    airport.book_passenger("SU-1001", "AB123456").unwrap();
    airport.book_passenger("SU-1001", "CD789012").unwrap();

    let flight = airport.find_flight("SU-1001").unwrap();
    let roster: Vec<&str> = airport.roster(flight).iter().map(|p| &**p.passport()).collect();
    assert_eq!(roster, vec!["AB123456", "CD789012"]);
}
